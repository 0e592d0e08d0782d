use super::*;

const STAGE_DELAY_MS: u64 = 150;
const REVEAL_MS: u64 = 400;
const BLOB_PERIODS_MS: [u64; 2] = [5_000, 7_000];
const BLOB_TINT_PCT: u16 = 30;
const PROGRESS_ROWS: u16 = 1;
const TRANSITION_SHIFT_DIV: u16 = 4;

pub(super) const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn mix(from: Rgb, to: Rgb, pct: u16) -> Color {
    let channel = |a: u8, b: u8| -> u8 {
        let (a, b) = (a as u16, b as u16);
        ((a * (100 - pct) + b * pct) / 100) as u8
    };
    Color::Rgb(channel(from.0, to.0), channel(from.1, to.1), channel(from.2, to.2))
}

/// Colours and base text style of one slide.
#[derive(Clone, Copy, Debug)]
pub(super) struct Theme {
    pub base: Color,
    pub accent: Color,
    pub text: Style,
    backdrop: Backdrop,
}

impl Theme {
    pub(super) fn new(backdrop: Backdrop, animation: Option<AnimationFrame>) -> Self {
        let mut text = Style::new().fg(Color::White);
        if let Some(AnimationFrame {
            kind: AnimationKind::Fade,
            progress_pct,
        }) = animation
            && progress_pct < 50
        {
            text = text.add_modifier(Modifier::DIM);
        }

        // Accent equal to the base would vanish, so it falls back to plain white.
        let accent = if backdrop.accent == backdrop.base {
            Color::White
        } else {
            color(backdrop.accent)
        };

        Self {
            base: color(backdrop.base),
            accent,
            text,
            backdrop,
        }
    }

    pub(super) fn heading(&self) -> Style {
        self.text.add_modifier(Modifier::BOLD)
    }

    pub(super) fn accent(&self) -> Style {
        self.text.fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub(super) fn muted(&self) -> Style {
        self.text.fg(Color::Gray)
    }

    /// Inverted box in the accent colour.
    pub(super) fn badge(&self) -> Style {
        self.text
            .fg(self.base)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn blob(&self) -> Color {
        mix(self.backdrop.base, self.backdrop.accent, BLOB_TINT_PCT)
    }
}

pub(super) fn fill(buf: &mut Buffer, area: Rect, bg: Color) {
    buf.set_style(area, Style::new().bg(bg));
}

/// Two tinted ellipses drifting behind the content.
pub(super) fn draw_blobs(buf: &mut Buffer, area: Rect, theme: &Theme, elapsed_ms: u64) {
    if area.width < 8 || area.height < 4 {
        return;
    }
    let tint = theme.blob();
    let radius_x = (area.width / 6).max(2) as i32;
    let radius_y = (area.height / 4).max(1) as i32;

    for (idx, period) in BLOB_PERIODS_MS.into_iter().enumerate() {
        let drift = pulse_pct(elapsed_ms, period) as i32;
        let (cx, cy) = if idx == 0 {
            (
                area.x as i32 + area.width as i32 / 4 + drift * radius_x / 100,
                area.y as i32 + area.height as i32 / 3 - drift * radius_y / 200,
            )
        } else {
            (
                area.x as i32 + area.width as i32 * 3 / 4 - drift * radius_x / 100,
                area.y as i32 + area.height as i32 * 2 / 3 + drift * radius_y / 200,
            )
        };

        for dy in -radius_y..=radius_y {
            for dx in -radius_x..=radius_x {
                let inside = dx * dx * radius_y * radius_y + dy * dy * radius_x * radius_x
                    <= radius_x * radius_x * radius_y * radius_y;
                let (x, y) = (cx + dx, cy + dy);
                if !inside || x < 0 || y < 0 {
                    continue;
                }
                let position = Position::new(x as u16, y as u16);
                if area.contains(position)
                    && let Some(cell) = buf.cell_mut(position)
                {
                    cell.set_bg(tint);
                }
            }
        }
    }
}

pub(super) fn split_progress(area: Rect) -> (Rect, Rect) {
    let rows = PROGRESS_ROWS.min(area.height);
    let bar = Rect { height: rows, ..area };
    let body = Rect {
        y: area.y + rows,
        height: area.height - rows,
        ..area
    };
    (bar, body)
}

/// One segment per slide; reached segments are bright.
pub(super) fn draw_progress(buf: &mut Buffer, row: Rect, progress: Progress) {
    if row.is_empty() || progress.count == 0 {
        return;
    }
    let reached = Style::new().fg(Color::White);
    let pending = Style::new().fg(Color::DarkGray);
    let width = row.width as usize;

    for (idx, done) in progress.flags().enumerate() {
        let start = width * idx / progress.count;
        let end = width * (idx + 1) / progress.count;
        let gap = usize::from(end - start >= 2 && idx + 1 < progress.count);
        let style = if done { reached } else { pending };
        for x in start..end - gap {
            put(buf, row, row.x + x as u16, row.y, "━", style);
        }
    }
}

/// Content area shifted toward where a slide transition enters from.
pub(super) fn transition_area(area: Rect, animation: Option<AnimationFrame>) -> Rect {
    let Some(frame) = animation else {
        return area;
    };
    let remaining = 100 - frame.progress_pct.min(100) as u16;
    let shift = (area.width / TRANSITION_SHIFT_DIV) * remaining / 100;
    match frame.kind {
        AnimationKind::SlideLeft => Rect {
            x: area.x + shift,
            width: area.width - shift,
            ..area
        },
        AnimationKind::SlideRight => Rect {
            width: area.width - shift,
            ..area
        },
        AnimationKind::Fade | AnimationKind::Pulse => area,
    }
}

/// Writes one symbol if the cell lies inside `clip`.
pub(super) fn put(buf: &mut Buffer, clip: Rect, x: u16, y: u16, symbol: &str, style: Style) {
    let position = Position::new(x, y);
    if clip.contains(position)
        && let Some(cell) = buf.cell_mut(position)
    {
        cell.set_symbol(symbol).set_style(style);
    }
}

pub(super) fn text_width(text: &str) -> u16 {
    Line::from(text).width().min(u16::MAX as usize) as u16
}

/// Drawing surface for one slide body; rows are relative to `area.y`.
pub(super) struct Stage<'b> {
    pub buf: &'b mut Buffer,
    pub area: Rect,
    pub theme: Theme,
    pub elapsed_ms: u64,
}

impl Stage<'_> {
    /// Entrance progress of the `step`-th staggered element.
    pub fn reveal(&self, step: u64) -> u8 {
        reveal_pct(self.elapsed_ms, step * STAGE_DELAY_MS, REVEAL_MS)
    }

    pub fn shown(&self, step: u64) -> bool {
        self.reveal(step) > 0
    }

    /// First row of a block `height` rows tall centred in the area.
    pub fn top_for(&self, height: u16) -> u16 {
        self.area.height.saturating_sub(height) / 2
    }

    /// Rect `width` columns wide, horizontally centred on `row`.
    pub fn row_rect(&self, row: u16, width: u16) -> Rect {
        let width = width.min(self.area.width);
        let rect = Rect::new(
            self.area.x + (self.area.width - width) / 2,
            self.area.y.saturating_add(row),
            width,
            1,
        );
        rect.intersection(self.area)
    }

    pub fn centered(&mut self, row: u16, text: &str, style: Style) {
        if row >= self.area.height || self.area.width == 0 {
            return;
        }
        let width = text_width(text).min(self.area.width);
        let x = self.area.x + (self.area.width - width) / 2;
        let room = (self.area.right() - x) as usize;
        self.buf
            .set_stringn(x, self.area.y + row, text, room, style);
    }

    /// Writes `text` at column offset `col` of `row`, clipped to the area.
    pub fn text_at(&mut self, col: u16, row: u16, text: &str, style: Style) -> u16 {
        if row >= self.area.height || col >= self.area.width {
            return col;
        }
        let x = self.area.x + col;
        let room = (self.area.right() - x) as usize;
        let (end, _) = self
            .buf
            .set_stringn(x, self.area.y + row, text, room, style);
        end - self.area.x
    }

    /// Wrapped text block starting at `row`, at most `height` rows tall.
    pub fn paragraph(&mut self, row: u16, height: u16, text: &str, style: Style, alignment: Alignment) {
        if row >= self.area.height {
            return;
        }
        let rect = Rect {
            y: self.area.y + row,
            height: height.min(self.area.height - row),
            ..self.area
        };
        Paragraph::new(text)
            .style(style)
            .alignment(alignment)
            .wrap(Wrap { trim: true })
            .render(rect, self.buf);
    }

    /// Left-aligned wrapped text shown from line `offset` on.
    pub fn scrolled_text(&mut self, row: u16, height: u16, text: &str, style: Style, offset: u16) {
        if row >= self.area.height {
            return;
        }
        let rect = Rect {
            y: self.area.y + row,
            height: height.min(self.area.height - row),
            ..self.area
        };
        wrapped(text)
            .style(style)
            .scroll((offset, 0))
            .render(rect, self.buf);
    }

    /// Rows `text` takes once wrapped to the stage width.
    pub fn wrapped_rows(&self, text: &str) -> u16 {
        let rows = wrapped(text).line_count(self.area.width);
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    /// Horizontal gauge on a single row.
    pub fn bar(&mut self, rect: Rect, pct: u8, fill: Style, track: Style) {
        let filled = (rect.width as u32 * pct.min(100) as u32 / 100) as u16;
        for offset in 0..rect.width {
            let (symbol, style) = if offset < filled {
                ("█", fill)
            } else {
                ("░", track)
            };
            put(self.buf, self.area, rect.x + offset, rect.y, symbol, style);
        }
    }

    pub fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        put(self.buf, self.area, x, y, symbol, style);
    }
}

/// Thousands-grouped count, cut to what an entrance reveal has reached.
pub(super) fn counted(value: u32, pct: u8, out: &mut [u8; GROUPED_NUMBER_BYTES]) -> &str {
    let shown = value as u64 * pct.min(100) as u64 / 100;
    group_thousands(shown, out)
}

fn wrapped(text: &str) -> Paragraph<'_> {
    Paragraph::new(text).wrap(Wrap { trim: true })
}
