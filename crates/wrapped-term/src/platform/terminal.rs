use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};

/// Full-screen terminal with mouse reporting, restored on drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).inspect_err(|_| {
            teardown_terminal();
        })?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
            teardown_terminal();
        })?;
        terminal.clear().inspect_err(|_| {
            teardown_terminal();
        })?;
        terminal.hide_cursor().inspect_err(|_| {
            teardown_terminal();
        })?;

        debug!("terminal: session entered");
        Ok(Self { terminal })
    }

    /// Draws one frame and hands back whatever the draw closure produced.
    pub fn draw<T>(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>) -> T) -> io::Result<T> {
        let mut produced = None;
        self.terminal.draw(|frame| produced = Some(draw_fn(frame)))?;
        produced.ok_or_else(|| io::Error::other("frame was not drawn"))
    }

    pub fn size(&self) -> io::Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    /// Forces a full repaint on the next draw, e.g. after a resize.
    pub fn invalidate(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
        debug!("terminal: session restored");
    }
}

fn teardown_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!("terminal: raw mode not disabled: {}", err);
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!("terminal: screen not restored: {}", err);
    }
}
