use super::*;

const GALLERY_LOOP_MS: u64 = 20_000;
const GALLERY_TILE: u16 = 12;
const HEARTBEAT_MS: u64 = 1_000;
const NAME_COLUMN: u16 = 10;
const COUNT_COLUMN: u16 = 8;
const LEADER_BAR: Color = Color::Rgb(0xf7, 0x25, 0x85);
const OTHER_BAR: Color = Color::Rgb(0x43, 0x61, 0xee);
const WINNER: Color = Color::Rgb(0xff, 0xd7, 0x00);
const RUNNER_UP: Color = Color::Rgb(0x8d, 0x99, 0xae);
const GREETING: Color = Color::Rgb(0xff, 0x00, 0x55);
const SCROLL_HINT: &str = "(Scroll to read more)";

pub(super) fn draw_intro(stage: &mut Stage<'_>, year: &str, headline: &str, tagline: &str) {
    let top = stage.top_for(5);
    let theme = stage.theme;

    if stage.shown(0) {
        stage.centered(top, year, theme.accent());
        stage.centered(top + 1, headline, theme.heading());
    }
    if stage.shown(3) {
        let tagline = format!(" {} ", tagline);
        stage.centered(top + 4, &tagline, theme.text.fg(Color::Black).bg(Color::White));
    }
}

pub(super) fn draw_timeline(stage: &mut Stage<'_>, heading: &str, entries: &[TimelineEntry]) {
    let height = 2 + entries.len() as u16 * 2;
    let top = stage.top_for(height);
    let theme = stage.theme;
    stage.centered(top, heading, theme.heading());

    let width = entries
        .iter()
        .map(|entry| layout::text_width(entry.date) + 3 + layout::text_width(entry.text))
        .max()
        .unwrap_or(0);
    let left = stage.row_rect(0, width).x - stage.area.x;

    for (idx, entry) in entries.iter().enumerate() {
        if !stage.shown(idx as u64 + 1) {
            break;
        }
        let row = top + 2 + idx as u16 * 2;
        let col = stage.text_at(left, row, entry.date, theme.accent());
        stage.text_at(col + 1, row, "•", theme.muted());
        stage.text_at(col + 3, row, entry.text, theme.text);
    }
}

pub(super) fn draw_chatterbox(
    stage: &mut Stage<'_>,
    heading: &str,
    winner: &str,
    total: u32,
    authors: &[AuthorCount],
) {
    let height = 5 + authors.len() as u16;
    let top = stage.top_for(height);
    let theme = stage.theme;

    stage.centered(top, "🏆", theme.text);
    stage.centered(top + 1, heading, theme.heading());
    stage.centered(top + 2, winner, theme.text.fg(WINNER).add_modifier(Modifier::BOLD));

    let denominator = if total > 0 {
        total as u64
    } else {
        authors.iter().map(|author| author.count as u64).sum()
    };
    let chart = stage.row_rect(0, 56);
    let left = chart.x - stage.area.x;
    let bar_width = chart.width.saturating_sub(NAME_COLUMN + COUNT_COLUMN + 2);

    for (idx, author) in authors.iter().enumerate() {
        let grow = stage.reveal(2 + idx as u64);
        if grow == 0 {
            break;
        }
        let row = top + 4 + idx as u16;
        stage.text_at(left, row, first_name(author.name.as_str()), theme.text);

        let share = percent_of(author.count as u64, denominator);
        let fill = if idx == 0 { LEADER_BAR } else { OTHER_BAR };
        let rect = Rect::new(
            stage.area.x + left + NAME_COLUMN,
            stage.area.y + row,
            bar_width,
            1,
        );
        stage.bar(
            rect,
            (share as u16 * grow as u16 / 100) as u8,
            theme.text.fg(fill),
            theme.muted(),
        );

        let mut digits = [0u8; GROUPED_NUMBER_BYTES];
        let count = group_thousands(author.count as u64, &mut digits);
        stage.text_at(left + NAME_COLUMN + bar_width + 2, row, count, theme.text);
    }
}

pub(super) fn draw_ratio(
    stage: &mut Stage<'_>,
    heading: &str,
    leader: RatioShare<'_>,
    runner_up: RatioShare<'_>,
) {
    let top = stage.top_for(7);
    let theme = stage.theme;
    stage.centered(top, heading, theme.heading());

    // Split gauge: leader share in red from the left, the rest in grey.
    let gauge = stage.row_rect(top + 2, 40);
    let spin = stage.reveal(1);
    let split = percent_of(leader.percent as u64 * spin as u64, 100 * 100);
    for row in 0..3 {
        let rect = Rect { y: gauge.y + row, ..gauge };
        stage.bar(rect, split, theme.text.fg(theme.accent), theme.text.fg(RUNNER_UP));
    }

    if stage.shown(3) {
        let legend = format!(
            "{}: {}%   {}: {}%",
            first_name(leader.name),
            leader.percent,
            first_name(runner_up.name),
            runner_up.percent
        );
        stage.centered(top + 6, &legend, theme.heading());
    }
}

pub(super) fn draw_moods(stage: &mut Stage<'_>, heading: &str, caption: &str, moods: &[&str]) {
    let top = stage.top_for(6);
    let theme = stage.theme;
    stage.centered(top, heading, theme.accent());
    stage.centered(top + 2, caption, theme.text);

    let revealed = moods
        .iter()
        .enumerate()
        .take_while(|(idx, _)| stage.shown(2 + *idx as u64))
        .map(|(_, mood)| *mood)
        .collect::<Vec<_>>();
    stage.centered(top + 4, &revealed.join("   "), theme.text);
}

pub(super) fn draw_word_cloud(stage: &mut Stage<'_>, heading: &str, words: &[WordCount]) {
    let theme = stage.theme;
    let top = stage.top_for(2 + words.len().div_ceil(3) as u16 * 2);
    stage.centered(top, heading, theme.heading());

    let mut row = top + 2;
    let mut line = String::new();
    for (idx, word) in words.iter().enumerate() {
        if !stage.shown(1 + idx as u64) {
            break;
        }
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(&format!("[ {} {} ]", word.text.as_str(), word.value));
        if (idx + 1) % 3 == 0 {
            stage.centered(row, &line, theme.badge());
            line.clear();
            row += 2;
        }
    }
    if !line.is_empty() {
        stage.centered(row, &line, theme.badge());
    }
}

pub(super) fn draw_gallery(stage: &mut Stage<'_>, heading: &str, frames: &[&str], caption: &str) {
    let top = stage.top_for(9);
    let theme = stage.theme;
    stage.centered(top, heading, theme.heading());

    // The strip holds the frames twice and scrolls by half its length per loop.
    let strip = GALLERY_TILE * frames.len() as u16;
    if strip > 0 {
        let phase = stage.elapsed_ms % GALLERY_LOOP_MS;
        let offset = (phase * strip as u64 / GALLERY_LOOP_MS) as u16;
        let area = stage.area;
        for col in 0..area.width {
            let pos = (col + offset) % strip;
            let tile = (pos / GALLERY_TILE) as usize;
            let within = pos % GALLERY_TILE;
            for row in 0..5u16 {
                let y = area.y + top + 2 + row;
                let (symbol, style) = if within == GALLERY_TILE - 1 {
                    (" ", theme.text)
                } else if row == 2 && within == 1 {
                    ("▶", theme.text.fg(Color::Black).bg(Color::White))
                } else {
                    ("▒", theme.text.fg(Color::White))
                };
                stage.put(area.x + col, y, symbol, style);
            }
            if within >= 2 && within < GALLERY_TILE - 1 && tile < frames.len() {
                let label = frames[tile];
                let idx = (within - 2) as usize;
                if let Some(ch) = label.get(idx..idx + 1) {
                    stage.put(
                        area.x + col,
                        area.y + top + 4,
                        ch,
                        theme.text.fg(Color::Black).bg(Color::White),
                    );
                }
            }
        }
    }

    stage.centered(
        top + 8,
        caption,
        theme.muted().add_modifier(Modifier::ITALIC),
    );
}

/// Draws the letter from `offset` lines into its body and returns the furthest
/// offset that still fills the body box.
pub(super) fn draw_letter(
    stage: &mut Stage<'_>,
    recipient: &str,
    body: &str,
    signoff: &str,
    signature: &str,
    offset: u16,
) -> u16 {
    let theme = stage.theme;
    let card = stage.row_rect(0, 72);
    let saved = stage.area;
    stage.area = Rect {
        x: card.x,
        width: card.width,
        ..saved
    };

    if stage.shown(0) {
        let greeting = format!("Dear {},", recipient);
        let style = theme.text.fg(GREETING).add_modifier(Modifier::BOLD);
        stage.text_at(0, 0, &greeting, style);
    }

    let footer = 2;
    let body_rows = stage.area.height.saturating_sub(2 + footer + 1);
    let limit = stage.wrapped_rows(body).saturating_sub(body_rows);
    let offset = offset.min(limit);
    if stage.shown(1) {
        stage.scrolled_text(2, body_rows, body, theme.text, offset);
        if offset < limit {
            stage.text_at(0, 2 + body_rows, SCROLL_HINT, theme.muted());
        }
    }
    if stage.shown(2) {
        let row = stage.area.height.saturating_sub(footer);
        stage.text_at(0, row, signoff, theme.text);
        stage.text_at(0, row + 1, signature, theme.heading());
    }

    stage.area = saved;
    limit
}

pub(super) fn draw_outro(stage: &mut Stage<'_>, headline: &str, message: &str) {
    let top = stage.top_for(6);
    let theme = stage.theme;

    let heart = if pulse_pct(stage.elapsed_ms, HEARTBEAT_MS) > 50 {
        "♥  ♥  ♥"
    } else {
        " ♥   ♥ "
    };
    stage.centered(top, heart, theme.accent());
    stage.centered(top + 2, headline, theme.heading());
    if stage.shown(2) {
        stage.paragraph(top + 4, 2, message, theme.text, Alignment::Center);
    }
}
