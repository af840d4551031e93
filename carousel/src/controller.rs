use crate::{
    BlockStyle, CarouselOptions, CarouselState, SlideCursor, SlideView, TestimonialStore,
    Visibility,
};

/// Identifies one transition. Strictly increasing per controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation(pub u64);

/// The immediate half of a transition: what the host must apply right away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionStart {
    /// Horizontal track offset in percent of one slide width (`-index * 100`).
    pub track_offset_percent: i64,
    /// Style for both content blocks while hidden.
    pub hidden_style: BlockStyle,
    /// The deferred half; the host schedules it for `swap.due_ms`.
    pub swap: PendingSwap,
}

/// A deferred content swap.
///
/// Hand it back to [`SlideController::complete_swap`] once `due_ms` has passed. Swaps from
/// superseded transitions are discarded there, so only the latest transition's content ever
/// lands on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingSwap {
    pub generation: Generation,
    pub index: usize,
    pub due_ms: u64,
}

/// Owns the slide cursor and sequences the hide → delay → swap → show transition.
///
/// This type does not hold any UI objects or timers. Hosts drive it by calling
/// `advance`/`retreat`/`go_to` on input, applying the returned [`TransitionStart`] immediately,
/// and calling `complete_swap` when the deferred swap fires.
#[derive(Clone, Debug)]
pub struct SlideController {
    store: TestimonialStore,
    options: CarouselOptions,
    cursor: SlideCursor,
    generation: Generation,
    displayed: usize,
    visibility: Visibility,
    track_offset_percent: i64,
}

impl SlideController {
    pub fn new(store: TestimonialStore, options: CarouselOptions) -> Self {
        cdebug!(
            len = store.len().get(),
            transition_delay_ms = options.transition_delay_ms,
            "SlideController::new"
        );
        Self {
            cursor: SlideCursor::new(store.len()),
            store,
            options,
            generation: Generation::default(),
            displayed: 0,
            visibility: Visibility::Visible,
            track_offset_percent: 0,
        }
    }

    pub fn store(&self) -> &TestimonialStore {
        &self.store
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.store.len().get()
    }

    /// The cursor position: the slide the latest transition targets.
    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    /// The slide whose content is currently rendered. Lags `index()` while a swap is pending.
    pub fn displayed_index(&self) -> usize {
        self.displayed
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn block_style(&self) -> BlockStyle {
        match self.visibility {
            Visibility::Visible => BlockStyle::VISIBLE,
            Visibility::Hidden => BlockStyle::hidden(self.options.hidden_offset_px),
        }
    }

    pub fn track_offset_percent(&self) -> i64 {
        self.track_offset_percent
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// `true` between a transition start and its (non-stale) swap.
    pub fn is_transitioning(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    /// The content currently rendered.
    pub fn view(&self) -> SlideView<'_> {
        SlideView {
            index: self.displayed,
            testimonial: self.store.get_wrapped(self.displayed),
        }
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.cursor.index(),
            displayed_index: self.displayed,
            generation: self.generation,
            visibility: self.visibility,
            track_offset_percent: self.track_offset_percent,
        }
    }

    pub fn advance(&mut self, now_ms: u64) -> TransitionStart {
        let index = self.cursor.advance();
        self.transition(index, now_ms)
    }

    pub fn retreat(&mut self, now_ms: u64) -> TransitionStart {
        let index = self.cursor.retreat();
        self.transition(index, now_ms)
    }

    /// Jumps to `index`, wrapping out-of-range values.
    pub fn go_to(&mut self, index: usize, now_ms: u64) -> TransitionStart {
        if index >= self.len() {
            cwarn!(index, len = self.len(), "SlideController::go_to: index wrapped");
        }
        let index = self.cursor.go_to(index);
        self.transition(index, now_ms)
    }

    fn transition(&mut self, index: usize, now_ms: u64) -> TransitionStart {
        self.generation = Generation(self.generation.0.wrapping_add(1));
        self.visibility = Visibility::Hidden;
        self.track_offset_percent = track_offset_percent(index);

        let swap = PendingSwap {
            generation: self.generation,
            index,
            due_ms: now_ms.saturating_add(self.options.transition_delay_ms),
        };
        cdebug!(
            index,
            generation = swap.generation.0,
            due_ms = swap.due_ms,
            "SlideController: transition"
        );

        TransitionStart {
            track_offset_percent: self.track_offset_percent,
            hidden_style: self.block_style(),
            swap,
        }
    }

    /// Applies a deferred swap.
    ///
    /// Returns the new content when `swap` belongs to the latest transition; returns `None` and
    /// leaves all state untouched when a newer transition has superseded it.
    pub fn complete_swap(&mut self, swap: &PendingSwap) -> Option<SlideView<'_>> {
        if swap.generation != self.generation {
            cdebug!(
                stale = swap.generation.0,
                latest = self.generation.0,
                "SlideController: discarding stale swap"
            );
            return None;
        }

        self.displayed = swap.index;
        self.visibility = Visibility::Visible;
        ctrace!(index = swap.index, "SlideController: swap applied");
        Some(self.view())
    }
}

/// Track offset for `index`: one full slide width per step, leftwards.
pub fn track_offset_percent(index: usize) -> i64 {
    -(index as i64).saturating_mul(100)
}
