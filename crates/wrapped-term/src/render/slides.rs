use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};
use wrapped_core::{
    meter::LoveMeter,
    render::{AnimationFrame, AnimationKind, Progress, Screen, SlideFrame, pulse_pct, reveal_pct},
    slides::{Backdrop, Coupon, RatioShare, Rgb, SlideView, SummarySection, TimelineEntry},
    stats::{AuthorCount, WordCount},
    text_policy::{GROUPED_NUMBER_BYTES, first_name, group_thousands, percent_of},
};

use crate::input::pointer::HitMap;

use super::FrameRenderer;

mod layout;
mod loading;
mod meter;
mod numbers;
mod story;
mod summary;

use layout::{Stage, Theme};

/// Terminal renderer for the loading placeholder and every slide view.
#[derive(Debug, Clone, Copy)]
pub struct SlideRenderer {
    decorations: bool,
}

impl Default for SlideRenderer {
    fn default() -> Self {
        Self { decorations: true }
    }
}

impl SlideRenderer {
    pub const fn new(decorations: bool) -> Self {
        Self { decorations }
    }

    fn draw_slide(&self, buf: &mut Buffer, area: Rect, slide: SlideFrame<'_>, hits: &mut HitMap) {
        let theme = Theme::new(slide.backdrop, slide.animation);
        layout::fill(buf, area, theme.base);
        if self.decorations {
            layout::draw_blobs(buf, area, &theme, slide.elapsed_ms);
        }

        let (bar, body) = layout::split_progress(area);
        layout::draw_progress(buf, bar, slide.progress);

        let body = layout::transition_area(body.inner(Margin::new(2, 1)), slide.animation);
        let Some(view) = slide.view else {
            return;
        };

        let mut stage = Stage {
            buf,
            area: body,
            theme,
            elapsed_ms: slide.elapsed_ms,
        };
        match view {
            SlideView::Intro {
                year,
                headline,
                tagline,
            } => story::draw_intro(&mut stage, year, headline, tagline),
            SlideView::TotalMessages {
                heading,
                total,
                period,
                quip,
            } => numbers::draw_total(&mut stage, heading, total, period, quip),
            SlideView::Media {
                heading,
                caption,
                media_shared,
            } => numbers::draw_media(&mut stage, heading, caption, media_shared),
            SlideView::Timeline { heading, entries } => {
                story::draw_timeline(&mut stage, heading, entries)
            }
            SlideView::Chatterbox {
                heading,
                winner,
                total,
                authors,
            } => story::draw_chatterbox(&mut stage, heading, winner, total, authors),
            SlideView::Ratio {
                heading,
                leader,
                runner_up,
            } => story::draw_ratio(&mut stage, heading, leader, runner_up),
            SlideView::PeakTime {
                heading,
                lead_in,
                label,
            } => numbers::draw_peak_time(&mut stage, heading, lead_in, label),
            SlideView::VibeMeter {
                heading,
                low_label,
                high_label,
                percent,
                verdict,
            } => numbers::draw_vibe(&mut stage, heading, (low_label, high_label), percent, verdict),
            SlideView::Moods {
                heading,
                caption,
                moods,
            } => story::draw_moods(&mut stage, heading, caption, moods),
            SlideView::WordCloud { heading, words } => {
                story::draw_word_cloud(&mut stage, heading, words)
            }
            SlideView::Gallery {
                heading,
                frames,
                caption,
            } => story::draw_gallery(&mut stage, heading, frames, caption),
            SlideView::LoveMeter {
                heading,
                question,
                low_label,
                high_label,
                reward,
            } => {
                let view = meter::MeterView {
                    heading,
                    question,
                    low_label,
                    high_label,
                    reward,
                };
                hits.slider = meter::draw_love_meter(
                    &mut stage,
                    view,
                    slide.instance.meter(),
                    slide.animation,
                );
            }
            SlideView::Letter {
                recipient,
                body,
                signoff,
                signature,
            } => {
                let offset = slide.instance.text_offset().unwrap_or(0);
                hits.text_scroll_limit = Some(story::draw_letter(
                    &mut stage, recipient, body, signoff, signature, offset,
                ));
            }
            SlideView::SummaryDeck {
                year,
                total,
                peak_time,
                top_word,
                media_shared,
            } => {
                let view = summary::DeckView {
                    year,
                    total,
                    peak_time,
                    top_word,
                    media_shared,
                };
                let section = slide
                    .instance
                    .deck_section()
                    .unwrap_or(SummarySection::Cover);
                hits.scroll_region = Some(summary::draw_summary_deck(&mut stage, view, section));
            }
            SlideView::Outro { headline, message } => {
                story::draw_outro(&mut stage, headline, message)
            }
        }
    }
}

impl FrameRenderer for SlideRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut Frame<'_>) -> HitMap {
        let area = frame.area();
        let mut hits = HitMap::new(area);
        let buf = frame.buffer_mut();

        match screen {
            Screen::Loading {
                message,
                detail,
                elapsed_ms,
            } => loading::draw_loading(buf, area, message, detail, elapsed_ms),
            Screen::Slide(slide) => self.draw_slide(buf, area, slide, &mut hits),
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use wrapped_core::{
        input::{PointerTarget, ScrollDirection, mock::MockInput},
        render::Screen,
        slides::{Personalization, SlideKey, SlideRegistry},
        stats::{StaticStats, StatsSnapshot},
    };
    use wrapped_core::app::PresentationApp;

    fn sample_stats() -> StatsSnapshot {
        StatsSnapshot::default()
            .with_total(159_935)
            .with_media_shared(4_210)
            .with_author("Zed Ortega", 81_234)
            .with_author("Ana Lima", 78_701)
            .with_top_sender("Zed Ortega")
            .with_word("haha", 3_012)
            .with_peak_time("11 PM")
    }

    fn draw(screen_fn: impl FnOnce(&mut SlideRenderer, &mut Frame<'_>) -> HitMap) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut renderer = SlideRenderer::default();
        let mut hits = HitMap::default();
        terminal
            .draw(|frame| hits = screen_fn(&mut renderer, frame))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        (text, hits)
    }

    fn app_at(key: SlideKey) -> PresentationApp<'static, MockInput, StaticStats> {
        app_with(Personalization::DEFAULT, key)
    }

    fn app_with(
        personalization: Personalization<'static>,
        key: SlideKey,
    ) -> PresentationApp<'static, MockInput, StaticStats> {
        let mut app = PresentationApp::new(
            SlideRegistry::standard(),
            MockInput::new(),
            StaticStats::new(sample_stats()),
            personalization,
        );
        let _ = app.tick(0);
        let target = app.registry().position(key).unwrap();
        while app.current() < target {
            assert!(app.advance(0));
        }
        app
    }

    fn draw_app(app: &PresentationApp<'static, MockInput, StaticStats>, now_ms: u64) -> (String, HitMap) {
        draw(|renderer, frame| {
            let mut hits = HitMap::default();
            app.with_screen(now_ms, |screen| hits = renderer.render(screen, frame));
            hits
        })
    }

    #[test]
    fn loading_screen_shows_message_and_detail() {
        let (text, hits) = draw(|renderer, frame| {
            renderer.render(
                Screen::Loading {
                    message: "Loading Data...",
                    detail: Some("Statistics unreadable, retrying"),
                    elapsed_ms: 400,
                },
                frame,
            )
        });

        assert!(text.contains("Loading Data..."));
        assert!(text.contains("Statistics unreadable, retrying"));
        assert_eq!(hits.slider, None);
        assert_eq!(hits.scroll_region, None);
    }

    #[test]
    fn total_slide_counts_up_to_grouped_total() {
        let app = app_at(SlideKey::Total);
        let (text, _) = draw_app(&app, 10_000);

        assert!(text.contains("Total Messages"));
        assert!(text.contains("159,935"));
        assert!(text.contains("From Jan 1 to Today"));
    }

    #[test]
    fn chatterbox_uses_first_names() {
        let app = app_at(SlideKey::Chatterbox);
        let (text, _) = draw_app(&app, 10_000);

        assert!(text.contains("Zed Ortega"));
        assert!(text.contains("Ana "));
        assert!(!text.contains("Ana Lima"));
    }

    #[test]
    fn love_meter_publishes_slider_until_unlocked() {
        let mut app = app_at(SlideKey::Interactive);
        let (text, hits) = draw_app(&app, 10_000);

        let slider = hits.slider.unwrap();
        assert!(text.contains("How much do you love me?"));
        assert_eq!(
            hits.target_at(slider.right() - 1, slider.y),
            PointerTarget::RangeInput { value: 100 }
        );

        let tap = wrapped_core::input::PointerEvent::new(
            PointerTarget::RangeInput { value: 100 },
            slider.right() - 1,
            80,
        );
        let _ = app.handle_pointer_event(tap, 10_000);
        let (text, hits) = draw_app(&app, 20_000);

        assert!(text.contains("1 FREE DATE NIGHT"));
        assert_eq!(hits.slider, None);
    }

    #[test]
    fn summary_deck_leaves_tap_gutters() {
        let app = app_at(SlideKey::SummaryScroll);
        let (text, hits) = draw_app(&app, 10_000);

        let region = hits.scroll_region.unwrap();
        assert!(text.contains("2025"));
        assert!(region.x > 0);
        assert!(region.right() < 80);
        assert_eq!(hits.target_at(0, region.y), PointerTarget::Surface);
        assert_eq!(hits.target_at(region.x, region.y), PointerTarget::SelfScrolling);
    }

    #[test]
    fn long_letter_scrolls_to_its_last_line() {
        let mut paragraphs: Vec<String> = (0..30)
            .map(|idx| format!("Paragraph number {idx} of a rather long letter."))
            .collect();
        paragraphs.push("FINAL-LINE".to_string());
        let letter: &'static str = paragraphs.join("\n\n").leak();
        let mut app = app_with(
            Personalization {
                letter,
                ..Personalization::DEFAULT
            },
            SlideKey::Letter,
        );

        let (text, hits) = draw_app(&app, 10_000);
        let limit = hits.text_scroll_limit.unwrap();
        assert!(limit > 0);
        assert!(text.contains("Paragraph number 0"));
        assert!(text.contains("(Scroll to read more)"));
        assert!(!text.contains("FINAL-LINE"));
        assert_eq!(hits.scroll_region, None);
        assert_eq!(hits.target_at(40, 10), PointerTarget::Surface);

        app.limit_text_scroll(limit);
        for now_ms in 0..u64::from(limit) + 5 {
            let _ = app.handle_scroll(PointerTarget::Surface, ScrollDirection::Down, 10_000 + now_ms);
        }
        assert_eq!(app.mounted_instance().text_offset(), Some(limit));

        let (text, _) = draw_app(&app, 20_000);
        assert!(text.contains("FINAL-LINE"));
        assert!(text.contains("Paragraph number 29"));
        assert!(!text.contains("(Scroll to read more)"));
    }

    #[test]
    fn every_slide_draws_within_the_frame() {
        let mut app = app_at(SlideKey::Intro);
        for idx in 0..app.slide_count() {
            for now_ms in [0, 150, 700, 5_000] {
                let _ = draw_app(&app, now_ms);
            }
            if idx + 1 < app.slide_count() {
                assert!(app.advance(0));
            }
        }
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = app_at(SlideKey::Chatterbox);
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        let mut renderer = SlideRenderer::new(false);
        terminal
            .draw(|frame| app.with_screen(500, |screen| {
                let _ = renderer.render(screen, frame);
            }))
            .unwrap();
    }
}
