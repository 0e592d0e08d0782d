//! Per-slide view models.

use crate::stats::{AuthorCount, WordCount};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimelineEntry {
    pub date: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RatioShare<'a> {
    pub name: &'a str,
    pub percent: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Coupon {
    pub headline: &'static str,
    pub intro: &'static str,
    pub title: &'static str,
    pub terms: &'static str,
    pub footer: &'static str,
}

/// Sections of the self-scrolling summary deck, top to bottom.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SummarySection {
    Cover,
    Messages,
    Clock,
    Photo,
    Numbers,
    Finale,
}

impl SummarySection {
    pub const COUNT: u8 = 6;

    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Cover,
            1 => Self::Messages,
            2 => Self::Clock,
            3 => Self::Photo,
            4 => Self::Numbers,
            _ => Self::Finale,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlideView<'a> {
    Intro {
        year: &'a str,
        headline: &'static str,
        tagline: &'static str,
    },
    TotalMessages {
        heading: &'static str,
        total: u32,
        period: Option<(&'a str, &'a str)>,
        quip: &'static str,
    },
    Media {
        heading: &'static str,
        caption: &'static str,
        media_shared: u32,
    },
    Timeline {
        heading: &'static str,
        entries: &'static [TimelineEntry],
    },
    Chatterbox {
        heading: &'static str,
        winner: &'a str,
        total: u32,
        authors: &'a [AuthorCount],
    },
    Ratio {
        heading: &'static str,
        leader: RatioShare<'a>,
        runner_up: RatioShare<'a>,
    },
    PeakTime {
        heading: &'static str,
        lead_in: &'static str,
        label: &'a str,
    },
    VibeMeter {
        heading: &'static str,
        low_label: &'static str,
        high_label: &'static str,
        percent: u8,
        verdict: &'static str,
    },
    Moods {
        heading: &'static str,
        caption: &'static str,
        moods: &'static [&'static str],
    },
    WordCloud {
        heading: &'static str,
        words: &'a [WordCount],
    },
    Gallery {
        heading: &'static str,
        frames: &'static [&'static str],
        caption: &'static str,
    },
    LoveMeter {
        heading: &'static str,
        question: &'static str,
        low_label: &'static str,
        high_label: &'static str,
        reward: Coupon,
    },
    Letter {
        recipient: &'a str,
        body: &'a str,
        signoff: &'static str,
        signature: &'a str,
    },
    SummaryDeck {
        year: &'a str,
        total: u32,
        peak_time: &'a str,
        top_word: &'a str,
        media_shared: u32,
    },
    Outro {
        headline: &'static str,
        message: &'static str,
    },
}
