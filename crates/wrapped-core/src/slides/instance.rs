//! Slide-local state that lives exactly as long as one mount.

use crate::{
    input::{PointerTarget, ScrollDirection},
    meter::{LoveMeter, MeterChange},
};

use super::{SlideKey, view::SummarySection};

/// Section cursor with mandatory snapping: one gesture moves one section.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SnapScroller {
    section: u8,
    sections: u8,
}

impl SnapScroller {
    pub const fn new(sections: u8) -> Self {
        Self {
            section: 0,
            sections: if sections == 0 { 1 } else { sections },
        }
    }

    pub const fn section(&self) -> u8 {
        self.section
    }

    pub const fn sections(&self) -> u8 {
        self.sections
    }

    pub fn scroll(&mut self, direction: ScrollDirection) -> bool {
        let next = match direction {
            ScrollDirection::Down => self.section.saturating_add(1).min(self.sections - 1),
            ScrollDirection::Up => self.section.saturating_sub(1),
        };
        let moved = next != self.section;
        self.section = next;
        moved
    }
}

/// Line offset into text taller than its box.
///
/// Only the host knows how the text wraps, so it reports the furthest offset
/// after each frame; until then the offset is unbounded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LineScroller {
    offset: u16,
    limit: Option<u16>,
}

impl LineScroller {
    pub const fn new() -> Self {
        Self {
            offset: 0,
            limit: None,
        }
    }

    pub const fn offset(&self) -> u16 {
        self.offset
    }

    pub fn scroll(&mut self, direction: ScrollDirection) -> bool {
        let next = match direction {
            ScrollDirection::Down => {
                let next = self.offset.saturating_add(1);
                self.limit.map_or(next, |limit| next.min(limit))
            }
            ScrollDirection::Up => self.offset.saturating_sub(1),
        };
        let moved = next != self.offset;
        self.offset = next;
        moved
    }

    /// Records the furthest useful offset; returns `true` if the offset moved back.
    pub fn set_limit(&mut self, limit: u16) -> bool {
        self.limit = Some(limit);
        let clamped = self.offset.min(limit);
        let moved = clamped != self.offset;
        self.offset = clamped;
        moved
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlideInstance {
    Static,
    Meter(LoveMeter),
    Deck(SnapScroller),
    Text(LineScroller),
}

impl SlideInstance {
    pub fn for_key(key: SlideKey) -> Self {
        match key {
            SlideKey::Interactive => Self::Meter(LoveMeter::new()),
            SlideKey::SummaryScroll => Self::Deck(SnapScroller::new(SummarySection::COUNT)),
            SlideKey::Letter => Self::Text(LineScroller::new()),
            _ => Self::Static,
        }
    }

    /// Feeds a range-control value to the instance, if it owns one.
    pub fn apply_control(&mut self, value: u8) -> MeterChange {
        match self {
            Self::Meter(meter) => meter.set_value(value),
            Self::Static | Self::Deck(_) | Self::Text(_) => MeterChange::Unchanged,
        }
    }

    /// The deck only pages under the pointer; text scrolls from anywhere on
    /// the slide and leaves taps to navigation.
    pub fn accepts_scroll(&self, target: PointerTarget) -> bool {
        match self {
            Self::Deck(_) => matches!(target, PointerTarget::SelfScrolling),
            Self::Text(_) => true,
            Self::Static | Self::Meter(_) => false,
        }
    }

    pub fn apply_scroll(&mut self, direction: ScrollDirection) -> bool {
        match self {
            Self::Deck(scroller) => scroller.scroll(direction),
            Self::Text(scroller) => scroller.scroll(direction),
            Self::Static | Self::Meter(_) => false,
        }
    }

    pub fn text_offset(&self) -> Option<u16> {
        match self {
            Self::Text(scroller) => Some(scroller.offset()),
            _ => None,
        }
    }

    pub fn limit_text_scroll(&mut self, limit: u16) -> bool {
        match self {
            Self::Text(scroller) => scroller.set_limit(limit),
            _ => false,
        }
    }

    pub fn meter(&self) -> Option<&LoveMeter> {
        match self {
            Self::Meter(meter) => Some(meter),
            _ => None,
        }
    }

    pub fn deck_section(&self) -> Option<SummarySection> {
        match self {
            Self::Deck(scroller) => Some(SummarySection::from_index(scroller.section())),
            _ => None,
        }
    }
}
