use ratatui::widgets::{Block, BorderType};

use super::*;

const GUTTER_DIV: u16 = 6;
const MIN_GUTTER: u16 = 2;
const HINT_BOB_MS: u64 = 1_500;
const MESSAGES_INK: Color = Color::Rgb(0x4c, 0xc9, 0xf0);
const CLOCK_INK: Color = Color::Rgb(0x7b, 0x2c, 0xbf);
const PHOTO_INK: Color = Color::Rgb(0xff, 0x00, 0x55);
const NUMBERS_INK: Color = Color::Rgb(0xf7, 0x25, 0x85);

#[derive(Clone, Copy, Debug)]
pub(super) struct DeckView<'a> {
    pub year: &'a str,
    pub total: u32,
    pub peak_time: &'a str,
    pub top_word: &'a str,
    pub media_shared: u32,
}

/// Draws the framed deck and returns its rect, which pages on wheel input.
///
/// The deck stays clear of both edges so taps beside it still navigate.
pub(super) fn draw_summary_deck(
    stage: &mut Stage<'_>,
    view: DeckView<'_>,
    section: SummarySection,
) -> Rect {
    let outer = stage.area;
    let gutter = (outer.width / GUTTER_DIV).max(MIN_GUTTER).min(outer.width / 2);
    let region = Rect {
        x: outer.x + gutter,
        width: outer.width.saturating_sub(gutter * 2),
        ..outer
    };

    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(stage.theme.muted())
        .render(region, stage.buf);
    draw_section_dots(stage, region, section);

    stage.area = region.inner(Margin::new(2, 1));
    draw_section(stage, view, section);
    stage.area = outer;

    region
}

fn draw_section_dots(stage: &mut Stage<'_>, region: Rect, section: SummarySection) {
    if region.width < 3 || region.height < 2 {
        return;
    }
    let count = SummarySection::COUNT as u16;
    let x = region.right() - 2;
    let top = region.y + region.height.saturating_sub(count) / 2;
    for idx in 0..count {
        let (symbol, style) = if SummarySection::from_index(idx as u8) == section {
            ("●", stage.theme.accent())
        } else {
            ("·", stage.theme.muted())
        };
        stage.put(x, top + idx, symbol, style);
    }
}

fn draw_section(stage: &mut Stage<'_>, view: DeckView<'_>, section: SummarySection) {
    let theme = stage.theme;
    let mut digits = [0u8; GROUPED_NUMBER_BYTES];

    match section {
        SummarySection::Cover => {
            let top = stage.top_for(6);
            stage.centered(top, view.year, theme.heading());
            stage.centered(top + 1, "T H E   Y E A R   O F   U S", theme.muted());
            let bob = (pulse_pct(stage.elapsed_ms, HINT_BOB_MS) / 50) as u16;
            stage.centered(top + 4 + bob.min(1), "Scroll down ↓", theme.muted());
        }
        SummarySection::Messages => {
            let top = stage.top_for(5);
            let total = group_thousands(view.total as u64, &mut digits);
            stage.centered(top, "💬", theme.text);
            stage.centered(top + 1, total, theme.heading());
            stage.centered(top + 2, "Messages Sent", theme.text.fg(MESSAGES_INK));
            stage.centered(top + 4, "every one of them counted", theme.muted());
        }
        SummarySection::Clock => {
            let top = stage.top_for(5);
            stage.centered(top, "We talked until...", theme.text);
            let style = theme.text.fg(CLOCK_INK).add_modifier(Modifier::BOLD);
            stage.centered(top + 2, view.peak_time, style);
            stage.centered(top + 4, "(sleep schedules were harmed)", theme.muted());
        }
        SummarySection::Photo => {
            let top = stage.top_for(7);
            let frame = stage.row_rect(top, 16);
            for row in 0..5 {
                let rect = Rect { y: frame.y + row, ..frame };
                stage.bar(rect, 100, theme.text.fg(Color::White), theme.muted());
            }
            stage.centered(top + 6, "My favourite view.", theme.text.fg(PHOTO_INK));
        }
        SummarySection::Numbers => {
            let top = stage.top_for(5);
            let media = group_thousands(view.media_shared as u64, &mut digits);
            let style = theme.text.fg(NUMBERS_INK).add_modifier(Modifier::BOLD);
            stage.centered(top, media, style);
            stage.centered(top + 1, "Memories Shared", theme.muted());
            let word = format!("\"{}\"", view.top_word);
            let style = theme.text.fg(MESSAGES_INK).add_modifier(Modifier::BOLD);
            stage.centered(top + 3, &word, style);
            stage.centered(top + 4, "Top Word", theme.muted());
        }
        SummarySection::Finale => {
            let top = stage.top_for(5);
            stage.centered(top, "♥", theme.accent());
            stage.centered(top + 2, "You are my everything.", theme.heading());
            stage.centered(top + 4, "Tap the right side one last time.", theme.muted());
        }
    }
}
