use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use wrapped_core::{
    app::{PresentationApp, TickResult},
    slides::SlideRegistry,
    stats::StatsProvider,
};
use wrapped_term::{
    input::pointer::{HitMap, TerminalInput},
    platform::TerminalSession,
    render::{FrameRenderer, SlideRenderer},
    storage::JsonStatsFile,
};

use cli::Cli;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/logging.rs"]
mod logging;

const FRAME_INTERVAL_MS: u64 = 33;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.verbose)?;

    let letter = cli.read_letter()?;
    let personalization = cli.personalization(letter.as_deref());
    let stats = JsonStatsFile::new(&cli.stats);
    info!(
        "boot: stats={} year={} decorations={}",
        stats.path().display(),
        personalization.year,
        !cli.plain
    );

    let hits = Rc::new(Cell::new(HitMap::default()));
    let mut app = PresentationApp::new(
        SlideRegistry::standard(),
        TerminalInput::new(Rc::clone(&hits)),
        stats,
        personalization,
    );
    let mut renderer = SlideRenderer::new(!cli.plain);

    let mut session = TerminalSession::enter().context("cannot prepare the terminal")?;
    run(&mut session, &mut app, &mut renderer, &hits)?;
    drop(session);

    info!("exit: closed on slide {}", app.current() + 1);
    Ok(())
}

fn run<SP: StatsProvider>(
    session: &mut TerminalSession,
    app: &mut PresentationApp<'_, TerminalInput, SP>,
    renderer: &mut SlideRenderer,
    hits: &Rc<Cell<HitMap>>,
) -> Result<()> {
    let started = Instant::now();
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut draw_fault_logged = false;

    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        let app_requests_render = app.tick(now_ms) == TickResult::RenderRequested;
        if app.input().quit_requested() {
            debug!("ui: quit at {}ms", now_ms);
            return Ok(());
        }

        let resized = app.input_mut().take_resized();
        if resized {
            session.invalidate().context("cannot repaint after resize")?;
        }

        if app_requests_render || resized {
            let drawn = session.draw(|frame| {
                let mut drawn = HitMap::new(frame.area());
                app.with_screen(now_ms, |screen| drawn = renderer.render(screen, frame));
                drawn
            });
            match drawn {
                Ok(drawn) => {
                    if let Some(limit) = drawn.text_scroll_limit {
                        app.limit_text_scroll(limit);
                    }
                    hits.set(drawn);
                }
                Err(err) if !draw_fault_logged => {
                    warn!("ui: draw failed: {}", err);
                    draw_fault_logged = true;
                }
                Err(_) => {}
            }
        }

        // Sleep until the next frame unless input arrives first.
        let spent = started.elapsed().saturating_sub(Duration::from_millis(now_ms));
        let timeout = frame_interval.saturating_sub(spent);
        app.input()
            .wait(timeout)
            .context("terminal input failed")?;
    }
}
