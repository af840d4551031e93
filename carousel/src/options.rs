use crate::Easing;

/// Default delay between hiding the old slide and swapping in the new content.
///
/// Hosts should use the same value for their visual fade duration so the swap happens while
/// the content is invisible.
pub const DEFAULT_TRANSITION_DELAY_MS: u64 = 300;

/// Default downward offset of a hidden content block.
pub const DEFAULT_HIDDEN_OFFSET_PX: u32 = 20;

/// Configuration for the one-shot counter animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CounterOptions {
    pub start: i64,
    pub end: i64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            start: 0,
            end: 100,
            duration_ms: 2000,
            easing: Easing::Linear,
        }
    }
}

impl CounterOptions {
    pub fn new(start: i64, end: i64, duration_ms: u64) -> Self {
        Self {
            start,
            end,
            duration_ms,
            ..Self::default()
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Configuration for [`crate::SlideController`] and the adapter built on top of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    /// Delay between the hide phase and the content swap of a transition.
    pub transition_delay_ms: u64,
    /// Downward offset applied to content blocks while hidden.
    pub hidden_offset_px: u32,
    pub counter: CounterOptions,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            transition_delay_ms: DEFAULT_TRANSITION_DELAY_MS,
            hidden_offset_px: DEFAULT_HIDDEN_OFFSET_PX,
            counter: CounterOptions::default(),
        }
    }
}

impl CarouselOptions {
    pub fn with_transition_delay_ms(mut self, delay_ms: u64) -> Self {
        self.transition_delay_ms = delay_ms;
        self
    }

    pub fn with_hidden_offset_px(mut self, offset_px: u32) -> Self {
        self.hidden_offset_px = offset_px;
        self
    }

    pub fn with_counter(mut self, counter: CounterOptions) -> Self {
        self.counter = counter;
        self
    }
}
