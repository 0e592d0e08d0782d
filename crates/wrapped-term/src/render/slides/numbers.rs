use super::*;

const COUNT_UP_STEP: u64 = 1;
const BOB_PERIOD_MS: u64 = 3_000;
const VIBE_FILL_DELAY_MS: u64 = 500;
const VIBE_FILL_MS: u64 = 1_500;
const GAUGE_WIDTH: u16 = 40;
const PERIOD_FALLBACK: &str = "From Jan 1 to Today";

fn stat_box(stage: &mut Stage<'_>, row: u16, value: &str) {
    let padded = format!("  {}  ", value);
    let style = stage.theme.badge();
    stage.centered(row, &padded, style);
}

pub(super) fn draw_total(
    stage: &mut Stage<'_>,
    heading: &str,
    total: u32,
    period: Option<(&str, &str)>,
    quip: &str,
) {
    let top = stage.top_for(7);
    let theme = stage.theme;
    stage.centered(top, heading, theme.heading());

    let mut digits = [0u8; GROUPED_NUMBER_BYTES];
    let shown = layout::counted(total, stage.reveal(COUNT_UP_STEP), &mut digits);
    stat_box(stage, top + 2, &format!("💬 {}", shown));

    if stage.shown(3) {
        let period = match period {
            Some((start, end)) => format!("From {} to {}", start, end),
            None => PERIOD_FALLBACK.to_owned(),
        };
        stage.centered(top + 4, &period, theme.text);
        stage.centered(top + 6, &format!("\"{}\"", quip.to_uppercase()), theme.accent());
    }
}

pub(super) fn draw_media(stage: &mut Stage<'_>, heading: &str, caption: &str, media_shared: u32) {
    let top = stage.top_for(8);
    let theme = stage.theme;

    let bob = (pulse_pct(stage.elapsed_ms, BOB_PERIOD_MS) / 50) as u16;
    stage.centered(top + bob.min(1), "📸", theme.text);
    stage.centered(top + 2, heading, theme.heading());
    stage.centered(top + 4, caption, theme.muted());

    let mut digits = [0u8; GROUPED_NUMBER_BYTES];
    let shown = layout::counted(media_shared, stage.reveal(2), &mut digits);
    stat_box(stage, top + 6, shown);
}

pub(super) fn draw_peak_time(stage: &mut Stage<'_>, heading: &str, lead_in: &str, label: &str) {
    let top = stage.top_for(7);
    let theme = stage.theme;

    stage.centered(top, "🕛", theme.text);
    stage.centered(top + 2, heading, theme.heading());
    if stage.shown(2) {
        stage.centered(top + 4, lead_in, theme.text);
    }
    if stage.shown(3) {
        stat_box(stage, top + 6, label);
    }
}

pub(super) fn draw_vibe(
    stage: &mut Stage<'_>,
    heading: &str,
    (low_label, high_label): (&str, &str),
    percent: u8,
    verdict: &str,
) {
    let top = stage.top_for(7);
    let theme = stage.theme;
    stage.centered(top, heading, theme.heading());

    let gauge = stage.row_rect(top + 3, GAUGE_WIDTH);
    let labels = top + 2;
    let low_col = gauge.x.saturating_sub(stage.area.x);
    stage.text_at(low_col, labels, low_label, theme.muted());
    let high_col = gauge
        .right()
        .saturating_sub(stage.area.x)
        .saturating_sub(layout::text_width(high_label));
    stage.text_at(high_col, labels, high_label, theme.muted());

    let fill = reveal_pct(stage.elapsed_ms, VIBE_FILL_DELAY_MS, VIBE_FILL_MS);
    let filled = percent_of(percent as u64 * fill as u64, 100 * 100);
    stage.bar(gauge, filled, theme.accent(), theme.muted());

    if fill == 100 {
        stage.centered(top + 5, verdict, theme.accent());
    }
}
