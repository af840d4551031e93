use carousel::{
    Block, BlockStyle, CarouselOptions, CounterAnimator, CounterFrame, PendingSwap, SlideController,
    SlideView, TestimonialStore, TransitionStart,
};

use crate::{Input, Navigation, Surface, TimerQueue};

/// Lifecycle of the one-shot counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    /// Waiting for the page-loaded signal.
    Idle,
    Running(CounterAnimator),
    Finished(i64),
}

/// A framework-neutral page that wires the carousel engine to an output [`Surface`].
///
/// This type does not own a clock or real timers. Adapters drive it by calling:
/// - `dispatch(input, now_ms)` when a click, key press, or load event occurs
/// - `tick(now_ms)` from their refresh callback (fires due swaps and counter frames)
///
/// Hosts with native timers can use `next_deadline_ms()` to schedule the next `tick`.
#[derive(Debug)]
pub struct Page<S> {
    controller: SlideController,
    swaps: TimerQueue<PendingSwap>,
    counter: CounterPhase,
    surface: S,
}

impl<S: Surface> Page<S> {
    /// Builds the page and renders the first testimonial into `surface`.
    pub fn new(store: TestimonialStore, options: CarouselOptions, surface: S) -> Self {
        let mut page = Self {
            controller: SlideController::new(store, options),
            swaps: TimerQueue::new(),
            counter: CounterPhase::Idle,
            surface,
        };
        page.surface.set_track_offset(page.controller.track_offset_percent());
        render_view(&mut page.surface, page.controller.view());
        page
    }

    pub fn controller(&self) -> &SlideController {
        &self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn counter_phase(&self) -> CounterPhase {
        self.counter
    }

    /// Deferred swaps still queued, including ones that will be discarded as stale.
    pub fn pending_swaps(&self) -> usize {
        self.swaps.len()
    }

    /// `true` while `tick` has work to do now or later.
    pub fn needs_refresh(&self) -> bool {
        !self.swaps.is_empty() || matches!(self.counter, CounterPhase::Running(_))
    }

    /// The earliest time a queued swap becomes due.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.swaps.next_due_ms()
    }

    /// Handles one input signal.
    ///
    /// Returns `true` when the input changed state (started a transition or the counter).
    pub fn dispatch(&mut self, input: Input, now_ms: u64) -> bool {
        if input == Input::PageLoaded {
            return self.start_counter();
        }

        let Some(navigation) = input.navigation() else {
            atrace!(?input, "Page: ignored input");
            return false;
        };

        let start = match navigation {
            Navigation::Forward => self.controller.advance(now_ms),
            Navigation::Backward => self.controller.retreat(now_ms),
            Navigation::Jump(index) => self.controller.go_to(index, now_ms),
        };
        self.begin_transition(start);
        true
    }

    pub fn next(&mut self, now_ms: u64) {
        self.dispatch(Input::Next, now_ms);
    }

    pub fn previous(&mut self, now_ms: u64) {
        self.dispatch(Input::Previous, now_ms);
    }

    /// Runs one refresh: applies every swap due by `now_ms` (in scheduling order) and advances
    /// a running counter by one frame.
    ///
    /// Returns the counter frame when the counter is running.
    pub fn tick(&mut self, now_ms: u64) -> Option<CounterFrame> {
        while let Some(swap) = self.swaps.pop_due(now_ms) {
            if let Some(view) = self.controller.complete_swap(&swap) {
                render_view(&mut self.surface, view);
            }
        }

        let CounterPhase::Running(mut animator) = self.counter else {
            return None;
        };
        let frame = animator.frame(now_ms);
        self.surface.set_counter(frame.value);
        self.counter = if frame.done {
            CounterPhase::Finished(frame.value)
        } else {
            CounterPhase::Running(animator)
        };
        Some(frame)
    }

    fn begin_transition(&mut self, start: TransitionStart) {
        self.surface.set_track_offset(start.track_offset_percent);
        for block in Block::ALL {
            self.surface.set_block_style(block, start.hidden_style);
        }
        self.swaps.schedule(start.swap.due_ms, start.swap);
    }

    fn start_counter(&mut self) -> bool {
        if self.counter != CounterPhase::Idle {
            awarn!("Page: counter already started; ignoring repeated load signal");
            return false;
        }
        let animator = CounterAnimator::from_options(&self.controller.options().counter);
        self.surface.set_counter(animator.value());
        self.counter = CounterPhase::Running(animator);
        true
    }
}

fn render_view<S: Surface>(surface: &mut S, view: SlideView<'_>) {
    surface.set_quote(view.quote());
    surface.set_author(view.name(), view.role());
    surface.set_index_label(view.label());
    for block in Block::ALL {
        surface.set_block_style(block, BlockStyle::VISIBLE);
    }
}
