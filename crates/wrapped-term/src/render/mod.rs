pub mod slides;

use ratatui::Frame;
use wrapped_core::render::Screen;

use crate::input::pointer::HitMap;

pub use slides::SlideRenderer;

pub trait FrameRenderer {
    /// Draws `screen` into the frame and reports which regions own pointer input.
    fn render(&mut self, screen: Screen<'_>, frame: &mut Frame<'_>) -> HitMap;
}
