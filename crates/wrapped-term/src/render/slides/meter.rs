use super::*;

const TRACK_MAX_WIDTH: u16 = 51;
const CARD_WIDTH: u16 = 40;
const PULSE_FLASH_PCT: u8 = 20;
const HEART_STEP: u8 = 25;
const CARD_INK: Color = Color::Black;
const CARD_PAPER: Color = Color::White;
const CARD_HEADLINE: Color = Color::Rgb(0xff, 0x00, 0x55);

#[derive(Clone, Copy, Debug)]
pub(super) struct MeterView<'a> {
    pub heading: &'a str,
    pub question: &'a str,
    pub low_label: &'a str,
    pub high_label: &'a str,
    pub reward: Coupon,
}

/// Draws the meter or, once unlocked, the coupon. Returns the slider track
/// while it is on screen.
pub(super) fn draw_love_meter(
    stage: &mut Stage<'_>,
    view: MeterView<'_>,
    meter: Option<&LoveMeter>,
    animation: Option<AnimationFrame>,
) -> Option<Rect> {
    let meter = meter.copied().unwrap_or(LoveMeter::new());
    if meter.is_unlocked() {
        draw_coupon(stage, view.reward, animation);
        return None;
    }

    let top = stage.top_for(10);
    let theme = stage.theme;
    stage.centered(top, view.heading, theme.heading());
    stage.centered(top + 1, view.question, theme.text);

    // The heart grows with the value.
    let hearts = 1 + (meter.value() / HEART_STEP) as usize;
    let heart = vec!["♥"; hearts].join(" ");
    let heart_style = if meter.value() == 0 {
        theme.text
    } else {
        theme.text.fg(Color::White).add_modifier(Modifier::BOLD)
    };
    stage.centered(top + 3, &heart, heart_style);

    let track = stage.row_rect(top + 5, TRACK_MAX_WIDTH);
    draw_track(stage, track, meter.value());

    let labels = top + 6;
    let low_col = track.x.saturating_sub(stage.area.x);
    stage.text_at(low_col, labels, view.low_label, theme.heading());
    let high_col = track
        .right()
        .saturating_sub(stage.area.x)
        .saturating_sub(layout::text_width(view.high_label));
    stage.text_at(high_col, labels, view.high_label, theme.heading());

    stage.centered(top + 8, &format!("{}%", meter.value()), theme.heading());

    (!track.is_empty()).then_some(track)
}

fn draw_track(stage: &mut Stage<'_>, track: Rect, value: u8) {
    if track.is_empty() {
        return;
    }
    let span = track.width.saturating_sub(1) as u32;
    let knob = (value as u32 * span + 50) / 100;
    let theme = stage.theme;

    for offset in 0..track.width {
        let (symbol, style) = match (offset as u32).cmp(&knob) {
            core::cmp::Ordering::Less => ("━", theme.text.fg(Color::White)),
            core::cmp::Ordering::Equal => (
                "●",
                theme.text.fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            core::cmp::Ordering::Greater => ("─", theme.muted()),
        };
        stage.put(track.x + offset, track.y, symbol, style);
    }
}

fn draw_coupon(stage: &mut Stage<'_>, coupon: Coupon, animation: Option<AnimationFrame>) {
    let card_height = 11;
    let top = stage.top_for(card_height);

    // Card pops in: it widens over the unlock pulse.
    let grow = match animation {
        Some(AnimationFrame {
            kind: AnimationKind::Pulse,
            progress_pct,
        }) => progress_pct.max(PULSE_FLASH_PCT),
        _ => 100,
    };
    let width = (CARD_WIDTH as u32 * grow as u32 / 100) as u16;
    let card = stage.row_rect(top, width.max(4));
    let card = Rect {
        height: card_height.min(stage.area.height.saturating_sub(top)),
        ..card
    };
    layout::fill(stage.buf, card.intersection(stage.area), CARD_PAPER);

    let paper = Style::new().fg(CARD_INK).bg(CARD_PAPER);
    let saved = stage.area;
    stage.area = card.intersection(saved);

    let headline = format!("{} 🎉", coupon.headline);
    stage.centered(1, &headline, paper.fg(CARD_HEADLINE).add_modifier(Modifier::BOLD));
    stage.centered(2, coupon.intro, paper.fg(Color::DarkGray));

    let dashed = "┄".repeat(card.width.saturating_sub(4) as usize);
    stage.centered(4, &dashed, paper);
    stage.centered(5, coupon.title, paper.add_modifier(Modifier::BOLD));
    stage.centered(6, coupon.terms, paper);
    stage.centered(7, &dashed, paper);
    stage.centered(9, coupon.footer, paper.fg(Color::DarkGray));

    stage.area = saved;
}
