use super::*;

const LOADING_BASE: Rgb = Rgb(0x00, 0x00, 0x00);
const LOADING_ACCENT: Rgb = Rgb(0xff, 0x00, 0x55);
const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
const SPINNER_FRAME_MS: u64 = 120;
const DOT_PERIOD_MS: u64 = 1_200;

pub(super) fn draw_loading(
    buf: &mut Buffer,
    area: Rect,
    message: &str,
    detail: Option<&str>,
    elapsed_ms: u64,
) {
    let theme = Theme::new(Backdrop::new(LOADING_BASE, LOADING_ACCENT), None);
    layout::fill(buf, area, theme.base);

    let mut stage = Stage {
        buf,
        area,
        theme,
        elapsed_ms,
    };
    let top = stage.top_for(4);

    let spinner = SPINNER_FRAMES[((elapsed_ms / SPINNER_FRAME_MS) as usize) % SPINNER_FRAMES.len()];
    stage.centered(top, spinner, theme.accent());
    stage.centered(top + 1, message, theme.heading());

    // Breathing underline under the message.
    let width = layout::text_width(message) * pulse_pct(elapsed_ms, DOT_PERIOD_MS) as u16 / 100;
    let underline = stage.row_rect(top + 2, width);
    stage.bar(underline, 100, theme.accent(), theme.muted());

    if let Some(detail) = detail {
        stage.centered(top + 3, detail, theme.muted());
    }
}
