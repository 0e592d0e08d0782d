use std::{cell::Cell, io, rc::Rc, time::Duration};

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::debug;
use ratatui::layout::Rect;

use wrapped_core::{
    input::{InputEvent, InputProvider, PointerEvent, PointerTarget, ScrollDirection},
    meter::METER_MAX,
};

/// Screen regions the last frame drew that own their own pointer handling.
///
/// Every event polled in one tick resolves against the map of the frame drawn
/// before that tick, so a click that lands right after a slide change still
/// sees the previous slide's regions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HitMap {
    pub viewport: Rect,
    pub slider: Option<Rect>,
    pub scroll_region: Option<Rect>,
    /// Furthest line offset of scrollable text on screen.
    pub text_scroll_limit: Option<u16>,
}

impl HitMap {
    pub const fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            slider: None,
            scroll_region: None,
            text_scroll_limit: None,
        }
    }

    /// Innermost target first: the slider sits above any region.
    pub fn target_at(&self, column: u16, row: u16) -> PointerTarget {
        if let Some(slider) = self.slider.filter(|rect| contains(*rect, column, row)) {
            return PointerTarget::RangeInput {
                value: slider_value(slider, column),
            };
        }
        if self
            .scroll_region
            .is_some_and(|rect| contains(rect, column, row))
        {
            return PointerTarget::SelfScrolling;
        }
        PointerTarget::Surface
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Maps a column on the slider track to 0..=100; the last column is the maximum.
pub fn slider_value(track: Rect, column: u16) -> u8 {
    let span = track.width.saturating_sub(1) as u32;
    if span == 0 {
        return METER_MAX;
    }
    let offset = column.saturating_sub(track.x).min(track.width - 1) as u32;
    ((offset * METER_MAX as u32 + span / 2) / span) as u8
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TerminalSignal {
    Input(InputEvent),
    Quit,
    Resize,
}

/// Turns a raw terminal event into something the presentation or host acts on.
pub fn translate(event: &Event, hits: &HitMap) -> Option<TerminalSignal> {
    match event {
        Event::Mouse(mouse) => {
            let target = hits.target_at(mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(TerminalSignal::Input(InputEvent::Pointer(PointerEvent::new(
                        target,
                        mouse.column,
                        hits.viewport.width,
                    ))))
                }
                MouseEventKind::Drag(MouseButton::Left)
                    if matches!(target, PointerTarget::RangeInput { .. }) =>
                {
                    Some(TerminalSignal::Input(InputEvent::Pointer(PointerEvent::new(
                        target,
                        mouse.column,
                        hits.viewport.width,
                    ))))
                }
                MouseEventKind::ScrollDown => Some(TerminalSignal::Input(InputEvent::Scroll {
                    target,
                    direction: ScrollDirection::Down,
                })),
                MouseEventKind::ScrollUp => Some(TerminalSignal::Input(InputEvent::Scroll {
                    target,
                    direction: ScrollDirection::Up,
                })),
                _ => None,
            }
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(TerminalSignal::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(TerminalSignal::Quit)
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TerminalSignal::Resize),
        _ => None,
    }
}

/// Crossterm-backed input provider.
///
/// The renderer publishes the hit map of each drawn frame through the shared
/// cell; events are resolved against the most recent one.
#[derive(Debug)]
pub struct TerminalInput {
    hits: Rc<Cell<HitMap>>,
    quit_requested: bool,
    resized: bool,
}

impl TerminalInput {
    pub fn new(hits: Rc<Cell<HitMap>>) -> Self {
        Self {
            hits,
            quit_requested: false,
            resized: false,
        }
    }

    /// Blocks until an event is pending or `timeout` passes.
    pub fn wait(&self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn take_resized(&mut self) -> bool {
        core::mem::take(&mut self.resized)
    }
}

impl InputProvider for TerminalInput {
    type Error = io::Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        while !self.quit_requested && event::poll(Duration::ZERO)? {
            let raw = event::read()?;
            match translate(&raw, &self.hits.get()) {
                Some(TerminalSignal::Input(input)) => return Ok(Some(input)),
                Some(TerminalSignal::Quit) => {
                    debug!("input: quit requested");
                    self.quit_requested = true;
                }
                Some(TerminalSignal::Resize) => self.resized = true,
                None => {}
            }
        }
        Ok(None)
    }
}
