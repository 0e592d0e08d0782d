//! Fixed slide catalog and index-addressed lookup.

mod catalog;
mod instance;
mod view;

use core::fmt;

use crate::stats::StatsSnapshot;

pub use catalog::CATALOG;
pub use instance::{LineScroller, SlideInstance, SnapScroller};
pub use view::{Coupon, RatioShare, SlideView, SummarySection, TimelineEntry};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlideKey {
    Intro,
    Total,
    Media,
    Recap,
    Chatterbox,
    Ratio,
    Time,
    Chaos,
    Emojis,
    Words,
    Gallery,
    Interactive,
    Letter,
    SummaryScroll,
    Outro,
}

impl SlideKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Total => "total",
            Self::Media => "media",
            Self::Recap => "recap",
            Self::Chatterbox => "chatterbox",
            Self::Ratio => "ratio",
            Self::Time => "time",
            Self::Chaos => "chaos",
            Self::Emojis => "emojis",
            Self::Words => "words",
            Self::Gallery => "gallery",
            Self::Interactive => "interactive",
            Self::Letter => "letter",
            Self::SummaryScroll => "summary_scroll",
            Self::Outro => "outro",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Background token: base fill plus the accent used for decoration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Backdrop {
    pub base: Rgb,
    pub accent: Rgb,
}

impl Backdrop {
    pub const fn new(base: Rgb, accent: Rgb) -> Self {
        Self { base, accent }
    }
}

/// Copy that belongs to the people in the chat rather than to the statistics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Personalization<'a> {
    pub year: &'a str,
    pub recipient: &'a str,
    pub signature: &'a str,
    /// Paragraphs separated by blank lines.
    pub letter: &'a str,
}

impl Personalization<'static> {
    pub const DEFAULT: Self = Self {
        year: "2025",
        recipient: "you",
        signature: "me",
        letter: DEFAULT_LETTER,
    };
}

impl Default for Personalization<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const DEFAULT_LETTER: &str = "I honestly don't know where to start. All those messages add up to \
more words than most novels, and somehow most of them are inside jokes.\n\n\
Thank you for the late nights, the terrible memes, and every reply that made a bad day better.\n\n\
Here's to another year of yapping.";

/// Shared read-only input to every slide producer.
#[derive(Clone, Copy, Debug)]
pub struct SlideContext<'a> {
    pub stats: &'a StatsSnapshot,
    pub personalization: &'a Personalization<'a>,
}

impl<'a> SlideContext<'a> {
    pub const fn new(stats: &'a StatsSnapshot, personalization: &'a Personalization<'a>) -> Self {
        Self {
            stats,
            personalization,
        }
    }
}

type Producer = for<'a> fn(&SlideContext<'a>) -> Option<SlideView<'a>>;

pub struct SlideDefinition {
    pub key: SlideKey,
    pub backdrop: Backdrop,
    produce: Producer,
}

impl SlideDefinition {
    pub const fn new(key: SlideKey, backdrop: Backdrop, produce: Producer) -> Self {
        Self {
            key,
            backdrop,
            produce,
        }
    }

    pub fn produce<'a>(&self, ctx: &SlideContext<'a>) -> Option<SlideView<'a>> {
        (self.produce)(ctx)
    }

    /// Fresh slide-local state for a new mount.
    pub fn mount(&self) -> SlideInstance {
        SlideInstance::for_key(self.key)
    }
}

impl fmt::Debug for SlideDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideDefinition")
            .field("key", &self.key)
            .field("backdrop", &self.backdrop)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryError {
    OutOfRange { index: usize, count: usize },
    Empty,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, count } => {
                write!(f, "slide index {} out of range 0..{}", index, count)
            }
            Self::Empty => f.write_str("slide catalog is empty"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SlideRegistry {
    slides: &'static [SlideDefinition],
}

impl SlideRegistry {
    pub const fn standard() -> Self {
        Self { slides: &CATALOG }
    }

    pub const fn from_definitions(
        slides: &'static [SlideDefinition],
    ) -> Result<Self, RegistryError> {
        if slides.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(Self { slides })
    }

    pub const fn count(&self) -> usize {
        self.slides.len()
    }

    pub fn definition(&self, index: usize) -> Result<&'static SlideDefinition, RegistryError> {
        self.slides.get(index).ok_or(RegistryError::OutOfRange {
            index,
            count: self.count(),
        })
    }

    pub fn position(&self, key: SlideKey) -> Option<usize> {
        self.slides.iter().position(|slide| slide.key == key)
    }

    /// `Ok(None)` when the slide declines to render for this data.
    pub fn render<'a>(
        &self,
        index: usize,
        ctx: &SlideContext<'a>,
    ) -> Result<Option<SlideView<'a>>, RegistryError> {
        Ok(self.definition(index)?.produce(ctx))
    }
}

impl Default for SlideRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
