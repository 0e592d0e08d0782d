//! App-level view models and animation metadata.

use crate::slides::{Backdrop, SlideInstance, SlideKey, SlideView};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideLeft,
    SlideRight,
    Fade,
    Pulse,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// Entrance progress of an element that starts `delay_ms` after mount.
pub fn reveal_pct(elapsed_ms: u64, delay_ms: u64, duration_ms: u64) -> u8 {
    let Some(since) = elapsed_ms.checked_sub(delay_ms) else {
        return 0;
    };
    let duration = duration_ms.max(1);
    ((since.min(duration) * 100) / duration) as u8
}

/// Triangle wave 0..=100..=0 over `period_ms`, for looping decoration.
pub fn pulse_pct(elapsed_ms: u64, period_ms: u64) -> u8 {
    let period = period_ms.max(2);
    let half = period / 2;
    let phase = elapsed_ms % period;
    let rising = if phase < half { phase } else { period - phase };
    ((rising * 100) / half).min(100) as u8
}

/// Slides reached so far.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Progress {
    pub current: usize,
    pub count: usize,
}

impl Progress {
    pub fn flags(self) -> impl Iterator<Item = bool> {
        progress_indicator(self.current, self.count)
    }
}

/// `count` flags where flag `i` is set iff `i <= current`.
pub fn progress_indicator(current: usize, count: usize) -> impl Iterator<Item = bool> {
    (0..count).map(move |idx| idx <= current)
}

/// Everything the host needs to draw the active slide.
pub struct SlideFrame<'a> {
    pub key: SlideKey,
    pub backdrop: Backdrop,
    /// `None` when the slide declined to render for this data.
    pub view: Option<SlideView<'a>>,
    pub instance: &'a SlideInstance,
    pub progress: Progress,
    pub elapsed_ms: u64,
    pub animation: Option<AnimationFrame>,
}

/// App-level view model consumed by the host renderer.
pub enum Screen<'a> {
    Loading {
        message: &'a str,
        detail: Option<&'a str>,
        elapsed_ms: u64,
    },
    Slide(SlideFrame<'a>),
}
