//! Input abstraction layer.

pub mod mock;
mod routing;

pub use routing::{PointerRoute, route_pointer};

/// What sits under the pointer when an event fires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerTarget {
    /// Plain slide surface.
    Surface,
    /// A range control. `value` is the position the pointer maps to, 0..=100.
    RangeInput { value: u8 },
    /// A sub-view that pages its own content vertically.
    SelfScrolling,
}

/// Primary pointer press at column `client_x` of a viewport `viewport_width` wide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PointerEvent {
    pub target: PointerTarget,
    pub client_x: u16,
    pub viewport_width: u16,
}

impl PointerEvent {
    pub const fn new(target: PointerTarget, client_x: u16, viewport_width: u16) -> Self {
        Self {
            target,
            client_x,
            viewport_width,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Logical actions consumed by the presentation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Scroll {
        target: PointerTarget,
        direction: ScrollDirection,
    },
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
