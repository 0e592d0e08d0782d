use super::*;
use crate::{
    input::{
        InputEvent, InputProvider, PointerEvent, PointerTarget, ScrollDirection,
        mock::{MockInput, ScriptedInput},
    },
    render::Screen,
    slides::{SlideKey, SlideView, SummarySection},
    stats::{StaticStats, StatsProvider, StatsSnapshot},
};
use proptest::prelude::*;

const WIDTH: u16 = 1000;

struct FlakyStats {
    failures_left: u8,
    snapshot: Option<StatsSnapshot>,
}

impl StatsProvider for FlakyStats {
    type Error = ();

    fn poll_snapshot(&mut self) -> Result<Option<StatsSnapshot>, Self::Error> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(());
        }
        Ok(self.snapshot.take())
    }
}

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

fn loaded_app() -> PresentationApp<'static, MockInput, StaticStats> {
    let mut app = PresentationApp::new(
        SlideRegistry::standard(),
        MockInput::new(),
        StaticStats::new(sample_stats()),
        Personalization::DEFAULT,
    );
    let _ = app.tick(0);
    assert!(app.has_stats());
    app
}

fn tap(x: u16) -> PointerEvent {
    PointerEvent::new(PointerTarget::Surface, x, WIDTH)
}

fn slider(value: u8, x: u16) -> PointerEvent {
    PointerEvent::new(PointerTarget::RangeInput { value }, x, WIDTH)
}

fn jump_to<IN: InputProvider, SP: StatsProvider>(
    app: &mut PresentationApp<'_, IN, SP>,
    key: SlideKey,
    now_ms: u64,
) {
    let target = app.registry().position(key).unwrap();
    while app.current() < target {
        assert!(app.advance(now_ms));
    }
}

#[test]
fn starts_at_first_slide() {
    let app = loaded_app();

    assert_eq!(app.current(), 0);
    assert_eq!(app.slide_count(), 15);
}

#[test]
fn right_half_advances_left_half_retreats() {
    let mut app = loaded_app();

    assert_eq!(app.handle_pointer_event(tap(900), 10), PointerOutcome::Advanced);
    assert_eq!(app.current(), 1);
    assert_eq!(app.handle_pointer_event(tap(100), 20), PointerOutcome::Retreated);
    assert_eq!(app.current(), 0);
}

#[test]
fn boundaries_clamp() {
    let mut app = loaded_app();

    assert_eq!(app.handle_pointer_event(tap(100), 10), PointerOutcome::Clamped);
    assert_eq!(app.current(), 0);

    for step in 0..40 {
        let _ = app.handle_pointer_event(tap(900), 20 + step);
    }
    assert_eq!(app.current(), app.slide_count() - 1);
    assert_eq!(app.handle_pointer_event(tap(999), 100), PointerOutcome::Clamped);
    assert_eq!(app.current(), app.slide_count() - 1);
}

#[test]
fn slider_event_never_navigates() {
    let mut app = loaded_app();

    for idx in 0..app.slide_count() {
        let before = app.current();
        for x in [0, 499, 500, 999] {
            assert_eq!(
                app.handle_pointer_event(slider(30, x), 10),
                PointerOutcome::Control
            );
            assert_eq!(app.current(), before);
        }
        if idx + 1 < app.slide_count() {
            assert!(app.advance(10));
        }
    }
}

#[test]
fn self_scrolling_region_never_navigates() {
    let mut app = loaded_app();
    jump_to(&mut app, SlideKey::SummaryScroll, 10);
    let before = app.current();

    for x in [0, 250, 750, 999] {
        let event = PointerEvent::new(PointerTarget::SelfScrolling, x, WIDTH);
        assert_eq!(
            app.handle_pointer_event(event, 20),
            PointerOutcome::ScrollRegion
        );
        assert_eq!(app.current(), before);
    }
}

#[test]
fn meter_resets_when_slide_is_remounted() {
    let mut app = loaded_app();
    jump_to(&mut app, SlideKey::Interactive, 10);

    assert_eq!(app.handle_pointer_event(slider(100, 400), 20), PointerOutcome::Control);
    let meter = *app.mounted_instance().meter().unwrap();
    assert_eq!((meter.value(), meter.is_unlocked()), (100, true));

    assert!(app.advance(30));
    assert!(app.mounted_instance().meter().is_none());
    assert!(app.retreat(40));

    let meter = *app.mounted_instance().meter().unwrap();
    assert_eq!((meter.value(), meter.is_unlocked()), (0, false));
}

#[test]
fn meter_unlock_starts_pulse() {
    let mut app = loaded_app();
    jump_to(&mut app, SlideKey::Interactive, 10);

    let _ = app.handle_pointer_event(slider(100, 400), 1_000);

    let mut animation = None;
    app.with_screen(1_100, |screen| {
        if let Screen::Slide(frame) = screen {
            animation = frame.animation;
        }
    });
    assert_eq!(animation.map(|frame| frame.kind), Some(AnimationKind::Pulse));
}

#[test]
fn deck_scrolls_only_inside_region_and_resets_on_remount() {
    let mut app = loaded_app();
    jump_to(&mut app, SlideKey::SummaryScroll, 10);

    assert!(!app.handle_scroll(PointerTarget::Surface, ScrollDirection::Down, 20));
    assert!(app.handle_scroll(PointerTarget::SelfScrolling, ScrollDirection::Down, 20));
    assert!(app.handle_scroll(PointerTarget::SelfScrolling, ScrollDirection::Down, 30));
    assert_eq!(
        app.mounted_instance().deck_section(),
        Some(SummarySection::Clock)
    );

    assert!(app.retreat(40));
    assert!(app.advance(50));
    assert_eq!(
        app.mounted_instance().deck_section(),
        Some(SummarySection::Cover)
    );
}

#[test]
fn letter_scrolls_without_guarding_taps_and_resets_on_remount() {
    let mut app = loaded_app();
    jump_to(&mut app, SlideKey::Letter, 10);

    assert!(!app.handle_scroll(PointerTarget::Surface, ScrollDirection::Up, 20));
    assert!(app.handle_scroll(PointerTarget::Surface, ScrollDirection::Down, 20));
    assert!(app.handle_scroll(PointerTarget::Surface, ScrollDirection::Down, 30));
    assert_eq!(app.mounted_instance().text_offset(), Some(2));

    app.limit_text_scroll(1);
    assert_eq!(app.mounted_instance().text_offset(), Some(1));
    assert!(!app.handle_scroll(PointerTarget::Surface, ScrollDirection::Down, 40));

    let letter = app.current();
    assert_eq!(app.handle_pointer_event(tap(900), 50), PointerOutcome::Advanced);
    assert_eq!(app.handle_pointer_event(tap(100), 60), PointerOutcome::Retreated);
    assert_eq!(app.current(), letter);
    assert_eq!(app.mounted_instance().text_offset(), Some(0));
}

#[test]
fn mount_restarts_entrance_clock() {
    let mut app = loaded_app();
    assert!(app.advance(5_000));

    let mut elapsed = None;
    app.with_screen(5_250, |screen| {
        if let Screen::Slide(frame) = screen {
            elapsed = Some(frame.elapsed_ms);
        }
    });
    assert_eq!(elapsed, Some(250));
}

#[test]
fn missing_stats_shows_only_loading_and_freezes_navigation() {
    let events = [
        InputEvent::Pointer(tap(900)),
        InputEvent::Pointer(tap(900)),
        InputEvent::Pointer(tap(100)),
    ];
    let mut app = PresentationApp::new(
        SlideRegistry::standard(),
        ScriptedInput::new(&events),
        StaticStats::absent(),
        Personalization::DEFAULT,
    );

    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.current(), 0);
    assert_eq!(app.handle_pointer_event(tap(900), 10), PointerOutcome::AwaitingData);
    assert!(!app.advance(10));
    assert_eq!(app.current(), 0);

    let mut message = None;
    app.with_screen(10, |screen| match screen {
        Screen::Loading {
            message: text,
            detail,
            ..
        } => message = Some((text.to_string(), detail.map(str::to_string))),
        Screen::Slide(_) => message = None,
    });
    assert_eq!(message, Some(("Loading Data...".to_string(), None)));
}

#[test]
fn provider_errors_keep_loading_until_data_arrives() {
    let mut app = PresentationApp::new(
        SlideRegistry::standard(),
        MockInput::new(),
        FlakyStats {
            failures_left: 2,
            snapshot: Some(sample_stats()),
        },
        Personalization::DEFAULT,
    );

    let _ = app.tick(0);
    assert!(!app.has_stats());
    let mut has_detail = false;
    app.with_screen(0, |screen| {
        if let Screen::Loading { detail, .. } = screen {
            has_detail = detail.is_some();
        }
    });
    assert!(has_detail);

    let _ = app.tick(100);
    let _ = app.tick(200);
    assert!(app.has_stats());

    let mut key = None;
    app.with_screen(300, |screen| {
        if let Screen::Slide(frame) = screen {
            key = Some(frame.key);
        }
    });
    assert_eq!(key, Some(SlideKey::Intro));
}

#[test]
fn scripted_taps_are_applied_on_tick() {
    let events = [
        InputEvent::Pointer(tap(900)),
        InputEvent::Pointer(tap(900)),
        InputEvent::Pointer(tap(100)),
        InputEvent::Scroll {
            target: PointerTarget::Surface,
            direction: ScrollDirection::Down,
        },
    ];
    let mut app = PresentationApp::new(
        SlideRegistry::standard(),
        ScriptedInput::new(&events),
        StaticStats::new(sample_stats()),
        Personalization::DEFAULT,
    );

    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.current(), 1);
}

#[test]
fn idle_tick_waits_for_next_ambient_slot() {
    let mut app = loaded_app();

    assert_eq!(app.tick(1_000), TickResult::RenderRequested);
    assert_eq!(app.tick(1_010), TickResult::NoRender);
    assert_eq!(app.tick(1_100), TickResult::RenderRequested);
}

#[test]
fn ratio_with_no_authors_renders_nothing_without_shifting_indices() {
    let mut app = PresentationApp::new(
        SlideRegistry::standard(),
        MockInput::new(),
        StaticStats::new(StatsSnapshot::default().with_total(10)),
        Personalization::DEFAULT,
    );
    let _ = app.tick(0);
    jump_to(&mut app, SlideKey::Ratio, 10);

    let mut seen = None;
    app.with_screen(20, |screen| {
        if let Screen::Slide(frame) = screen {
            seen = Some((frame.key, frame.view.is_none(), frame.progress.count));
        }
    });
    assert_eq!(seen, Some((SlideKey::Ratio, true, 15)));

    assert!(app.advance(30));
    let mut next = None;
    app.with_screen(40, |screen| {
        if let Screen::Slide(frame) = screen {
            next = Some(matches!(frame.view, Some(SlideView::PeakTime { .. })));
        }
    });
    assert_eq!(next, Some(true));
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Advance,
    Retreat,
    Tap(u16),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Advance),
        Just(Step::Retreat),
        (0u16..WIDTH).prop_map(Step::Tap),
    ]
}

proptest! {
    #[test]
    fn navigation_state_stays_in_range(count in 1usize..32, steps in prop::collection::vec(any::<bool>(), 0..200)) {
        let mut nav = NavigationState::new(count);
        for forward in steps {
            let before = nav.current();
            let moved = if forward { nav.advance() } else { nav.retreat() };

            prop_assert!(nav.current() < count);
            if !moved {
                prop_assert_eq!(nav.current(), before);
                let at_edge = if forward { before == count - 1 } else { before == 0 };
                prop_assert!(at_edge);
            }
        }
    }

    #[test]
    fn app_index_stays_in_range(steps in prop::collection::vec(step_strategy(), 0..120)) {
        let mut app = loaded_app();
        for (idx, step) in steps.into_iter().enumerate() {
            let now = idx as u64 * 50;
            match step {
                Step::Advance => { let _ = app.advance(now); }
                Step::Retreat => { let _ = app.retreat(now); }
                Step::Tap(x) => { let _ = app.handle_pointer_event(tap(x), now); }
            }
            prop_assert!(app.current() < app.slide_count());
            prop_assert_eq!(app.progress().flags().filter(|flag| *flag).count(), app.current() + 1);
        }
    }
}
