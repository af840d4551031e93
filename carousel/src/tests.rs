use crate::*;

use alloc::string::ToString;
use alloc::vec::Vec;

fn three() -> TestimonialStore {
    TestimonialStore::default_testimonials()
}

fn controller() -> SlideController {
    SlideController::new(three(), CarouselOptions::default())
}

fn settle(c: &mut SlideController, start: TransitionStart) -> (usize, u32, &str) {
    let view = c.complete_swap(&start.swap).unwrap();
    (view.index, view.testimonial.id, view.name())
}

#[test]
fn default_store_has_three_ordered_records() {
    let s = three();
    assert_eq!(s.len().get(), 3);
    let ids: Vec<u32> = s.iter().map(|t| t.id).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(s.get(0).unwrap().name, "Elena M.");
    assert_eq!(s.get(1).unwrap().name, "Marcus Chen");
    assert_eq!(s.get(2).unwrap().name, "Sarah Jenkins");
    assert_eq!(s.get(3), None);
    assert_eq!(s.get_wrapped(4).id, 2);
    assert_eq!(s.index_of_id(3), Some(2));
}

#[test]
fn store_rejects_invalid_lists() {
    assert_eq!(TestimonialStore::new(Vec::new()), Err(StoreError::Empty));

    let zero = alloc::vec![Testimonial::new(0, "q", "n", "r")];
    assert_eq!(
        TestimonialStore::new(zero),
        Err(StoreError::ZeroId { index: 0 })
    );

    let dup = alloc::vec![
        Testimonial::new(4, "q", "n", "r"),
        Testimonial::new(5, "q", "n", "r"),
        Testimonial::new(4, "q", "n", "r"),
    ];
    assert_eq!(
        TestimonialStore::new(dup),
        Err(StoreError::DuplicateId {
            id: 4,
            first: 0,
            second: 2
        })
    );

    let blank = alloc::vec![
        Testimonial::new(1, "q", "n", "r"),
        Testimonial::new(2, "q", "  ", "r"),
    ];
    assert_eq!(
        TestimonialStore::new(blank),
        Err(StoreError::EmptyField {
            index: 1,
            field: Field::Name
        })
    );
}

#[test]
fn store_error_messages_name_the_problem() {
    let err = StoreError::EmptyField {
        index: 2,
        field: Field::Role,
    };
    assert_eq!(err.to_string(), "testimonial at index 2 has an empty role");
    assert_eq!(
        StoreError::DuplicateId {
            id: 7,
            first: 0,
            second: 1
        }
        .to_string(),
        "duplicate testimonial id 7 at indexes 0 and 1"
    );
}

#[test]
fn cursor_advance_and_retreat_wrap() {
    let len = core::num::NonZeroUsize::new(3).unwrap();
    for start in 0..3usize {
        for n in 0..10usize {
            let mut c = SlideCursor::new(len);
            c.go_to(start);
            for _ in 0..n {
                c.advance();
            }
            assert_eq!(c.index(), (start + n) % 3);

            let mut c = SlideCursor::new(len);
            c.go_to(start);
            for _ in 0..n {
                c.retreat();
            }
            assert_eq!(c.index(), (start + 3 * n - n) % 3);
        }
    }
}

#[test]
fn cursor_round_trips() {
    let len = core::num::NonZeroUsize::new(5).unwrap();
    for start in 0..5usize {
        let mut c = SlideCursor::new(len);
        c.go_to(start);
        c.advance();
        c.retreat();
        assert_eq!(c.index(), start);
        c.retreat();
        c.advance();
        assert_eq!(c.index(), start);
    }
}

#[test]
fn single_item_cursor_stays_at_zero() {
    let mut c = SlideCursor::new(core::num::NonZeroUsize::MIN);
    assert_eq!(c.advance(), 0);
    assert_eq!(c.retreat(), 0);
    assert_eq!(c.go_to(9), 0);
}

#[test]
fn retreat_from_zero_on_huge_length_does_not_overflow() {
    let len = core::num::NonZeroUsize::new(usize::MAX).unwrap();
    let mut c = SlideCursor::new(len);
    assert_eq!(c.retreat(), usize::MAX - 1);
    assert_eq!(c.advance(), 0);
}

#[test]
fn index_label_is_zero_padded_to_two_digits() {
    assert_eq!(format_index_label(2), "[02]");
    assert_eq!(format_index_label(12), "[12]");
    assert_eq!(format_index_label(123), "[123]");
    assert_eq!(IndexLabel(9).to_string(), "[09]");
}

#[test]
fn advance_cycles_through_all_testimonials() {
    let mut c = controller();
    assert_eq!(c.view().label().to_string(), "[01]");

    let t = c.advance(0);
    assert_eq!(settle(&mut c, t), (1, 2, "Marcus Chen"));
    let t = c.advance(1000);
    assert_eq!(settle(&mut c, t), (2, 3, "Sarah Jenkins"));
    let t = c.advance(2000);
    assert_eq!(settle(&mut c, t), (0, 1, "Elena M."));
    assert_eq!(c.view().label().to_string(), "[01]");
}

#[test]
fn retreat_from_first_wraps_to_last() {
    let mut c = controller();
    let t = c.retreat(0);
    assert_eq!(t.track_offset_percent, -200);
    assert_eq!(settle(&mut c, t), (2, 3, "Sarah Jenkins"));
    assert_eq!(c.view().label().to_string(), "[03]");
}

#[test]
fn transition_hides_immediately_and_shows_after_swap() {
    let mut c = controller();
    let t = c.advance(500);

    assert_eq!(c.visibility(), Visibility::Hidden);
    assert!(c.is_transitioning());
    assert_eq!(t.hidden_style, BlockStyle::hidden(DEFAULT_HIDDEN_OFFSET_PX));
    assert_eq!(t.track_offset_percent, -100);
    assert_eq!(c.track_offset_percent(), -100);
    assert_eq!(t.swap.due_ms, 500 + DEFAULT_TRANSITION_DELAY_MS);

    // Old content stays on screen until the swap.
    assert_eq!(c.index(), 1);
    assert_eq!(c.displayed_index(), 0);

    assert!(c.complete_swap(&t.swap).is_some());
    assert_eq!(c.visibility(), Visibility::Visible);
    assert_eq!(c.block_style(), BlockStyle::VISIBLE);
    assert_eq!(c.displayed_index(), 1);
}

#[test]
fn only_latest_overlapping_swap_applies() {
    let mut c = controller();
    let first = c.advance(0);
    let second = c.advance(100);
    let third = c.retreat(200);
    assert!(first.swap.generation < second.swap.generation);
    assert!(second.swap.generation < third.swap.generation);

    // Swaps fire in scheduling order; only the last one lands.
    assert!(c.complete_swap(&first.swap).is_none());
    assert_eq!(c.visibility(), Visibility::Hidden);
    assert_eq!(c.displayed_index(), 0);
    assert!(c.complete_swap(&second.swap).is_none());

    let view = c.complete_swap(&third.swap).unwrap();
    assert_eq!(view.index, 1);
    assert_eq!(view.name(), "Marcus Chen");
    assert_eq!(c.track_offset_percent(), -100);
}

#[test]
fn stale_swap_arriving_late_does_not_overwrite() {
    let mut c = controller();
    let old = c.advance(0);
    let new = c.advance(10);
    assert!(c.complete_swap(&new.swap).is_some());
    assert!(c.complete_swap(&old.swap).is_none());
    assert_eq!(c.displayed_index(), 2);
    assert_eq!(c.visibility(), Visibility::Visible);
}

#[test]
fn go_to_wraps_and_still_transitions_on_same_index() {
    let mut c = controller();
    let t = c.go_to(5, 0);
    assert_eq!(t.swap.index, 2);
    assert_eq!(settle(&mut c, t).2, "Sarah Jenkins");

    let before = c.generation();
    let t = c.go_to(2, 10);
    assert!(t.swap.generation > before);
    assert_eq!(c.visibility(), Visibility::Hidden);
    assert_eq!(settle(&mut c, t).0, 2);
}

#[test]
fn transition_delay_comes_from_options() {
    let opts = CarouselOptions::default()
        .with_transition_delay_ms(450)
        .with_hidden_offset_px(8);
    let mut c = SlideController::new(three(), opts);
    let t = c.advance(1000);
    assert_eq!(t.swap.due_ms, 1450);
    assert_eq!(t.hidden_style.offset_y_px, 8);
    assert_eq!(t.hidden_style.opacity, 0.0);
}

#[test]
fn state_snapshot_tracks_controller() {
    let mut c = controller();
    assert_eq!(c.state(), CarouselState::default());
    let t = c.retreat(0);
    let s = c.state();
    assert_eq!(s.index, 2);
    assert_eq!(s.displayed_index, 0);
    assert_eq!(s.visibility, Visibility::Hidden);
    assert_eq!(s.generation, t.swap.generation);
    assert_eq!(s.track_offset_percent, -200);
}

#[test]
fn counter_reaches_end_monotonically() {
    let mut a = CounterAnimator::animate(0, 100, 2000);
    assert_eq!(a.value(), 0);

    let first = a.frame(5_000);
    assert_eq!(
        first,
        CounterFrame {
            value: 0,
            done: false
        }
    );
    assert_eq!(a.started_at_ms(), Some(5_000));

    let mut last = 0;
    for step in 1..20u64 {
        let f = a.frame(5_000 + step * 100);
        assert!(!f.done);
        assert!(f.value > last, "value must increase while running");
        assert!(f.value <= 100);
        last = f.value;
    }

    let done = a.frame(7_000);
    assert_eq!(
        done,
        CounterFrame {
            value: 100,
            done: true
        }
    );
    assert!(a.is_finished());
    assert_eq!(a.frame(9_000).value, 100);
}

#[test]
fn counter_uses_floor_of_linear_progress() {
    let a = CounterAnimator::animate(0, 100, 2000);
    assert_eq!(a.sample(0), 0);
    assert_eq!(a.sample(19), 0);
    assert_eq!(a.sample(20), 1);
    assert_eq!(a.sample(1000), 50);
    assert_eq!(a.sample(1999), 99);
    assert_eq!(a.sample(2000), 100);
    assert_eq!(a.sample(u64::MAX), 100);

    let a = CounterAnimator::animate(10, 13, 4);
    assert_eq!(a.sample(1), 10);
    assert_eq!(a.sample(2), 11);
}

#[test]
fn counter_never_moves_backwards_on_clock_skew() {
    let mut a = CounterAnimator::animate(0, 100, 1000);
    a.frame(0);
    assert_eq!(a.frame(600).value, 60);
    assert_eq!(a.frame(300).value, 60);
    assert_eq!(a.frame(700).value, 70);
}

#[test]
fn counter_handles_extreme_bounds_without_overflow() {
    let a = CounterAnimator::animate(i64::MIN, i64::MAX, u64::MAX);
    assert_eq!(a.sample(0), i64::MIN);
    assert_eq!(a.sample(u64::MAX / 2), -1);
    assert_eq!(a.sample(u64::MAX - 1), i64::MAX - 1);
    assert_eq!(a.sample(u64::MAX), i64::MAX);

    let a = CounterAnimator::animate(i64::MAX, i64::MIN, 3);
    assert_eq!(a.sample(1), i64::MAX - 6_148_914_691_236_517_205);

    let mut a = CounterAnimator::animate(i64::MIN, i64::MAX, u64::MAX);
    a.frame(0);
    assert_eq!(a.frame(u64::MAX - 1).value, i64::MAX - 1);
    assert_eq!(a.frame(u64::MAX).value, i64::MAX);
    assert!(a.is_finished());
}

#[test]
fn counter_with_zero_duration_finishes_on_first_frame() {
    let mut a = CounterAnimator::animate(3, 42, 0);
    assert_eq!(
        a.frame(10),
        CounterFrame {
            value: 42,
            done: true
        }
    );
}

#[test]
fn counter_counts_down_when_end_is_below_start() {
    let mut a = CounterAnimator::animate(10, 0, 100);
    a.frame(0);
    let mid = a.frame(50).value;
    assert_eq!(mid, 5);
    assert_eq!(a.frame(40).value, 5);
    assert_eq!(a.frame(100).value, 0);
}

#[test]
fn eased_counters_stay_monotone_and_in_bounds() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        let mut a = CounterAnimator::from_options(
            &CounterOptions::new(0, 500, 1000).with_easing(easing),
        );
        let mut last = 0;
        for now in (0..=1100u64).step_by(16) {
            let f = a.frame(now);
            assert!(f.value >= last, "{easing:?} went backwards at {now}");
            assert!((0..=500).contains(&f.value));
            last = f.value;
        }
        assert_eq!(last, 500);
        assert!(a.is_finished());
    }
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
    assert_eq!(Easing::SmoothStep.sample(0.5), 0.5);
}

#[cfg(feature = "serde")]
#[test]
fn options_and_store_deserialize_from_static_config() {
    let opts: CarouselOptions =
        serde_json::from_str(r#"{ "transition_delay_ms": 250, "counter": { "end": 500 } }"#)
            .unwrap();
    assert_eq!(opts.transition_delay_ms, 250);
    assert_eq!(opts.hidden_offset_px, DEFAULT_HIDDEN_OFFSET_PX);
    assert_eq!(opts.counter.end, 500);
    assert_eq!(opts.counter.duration_ms, 2000);

    let store: TestimonialStore = serde_json::from_str(
        r#"[{ "id": 7, "quote": "Great.", "name": "Ana", "role": "CTO" }]"#,
    )
    .unwrap();
    assert_eq!(store.get(0).unwrap().label().to_string(), "[07]");

    let err = serde_json::from_str::<TestimonialStore>("[]").unwrap_err();
    assert!(err.to_string().contains("testimonial list is empty"));
}

#[cfg(feature = "serde")]
#[test]
fn cursor_deserialize_rejects_out_of_range_index() {
    let c: SlideCursor = serde_json::from_str(r#"{ "index": 2, "len": 3 }"#).unwrap();
    assert_eq!(c.index(), 2);
    assert_eq!(c.len().get(), 3);

    let err = serde_json::from_str::<SlideCursor>(r#"{ "index": 7, "len": 3 }"#).unwrap_err();
    assert!(err.to_string().contains("cursor index 7 out of range for length 3"));

    let json = alloc::format!(r#"{{ "index": {}, "len": 3 }}"#, usize::MAX);
    assert!(serde_json::from_str::<SlideCursor>(&json).is_err());
    assert!(serde_json::from_str::<SlideCursor>(r#"{ "index": 0, "len": 0 }"#).is_err());

    let round = serde_json::to_string(&c).unwrap();
    assert_eq!(serde_json::from_str::<SlideCursor>(&round).unwrap(), c);
}
