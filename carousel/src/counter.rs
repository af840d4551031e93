use crate::CounterOptions;

/// Easing curves for the counter animation. Every curve is monotone on `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// One refresh of the counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    /// `false` while another refresh callback is required.
    pub done: bool,
}

/// Interpolates a displayed integer from `start` to `end` over a fixed duration.
///
/// The clock starts at the first [`CounterAnimator::frame`] call, not at construction: hosts
/// create the animator when the trigger fires and call `frame` from their refresh callback.
/// The displayed value never moves backwards, even if the host reports a timestamp earlier than
/// a previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimator {
    start: i64,
    end: i64,
    duration_ms: u64,
    easing: Easing,
    started_at_ms: Option<u64>,
    value: i64,
    finished: bool,
}

impl CounterAnimator {
    pub fn animate(start: i64, end: i64, duration_ms: u64) -> Self {
        Self {
            start,
            end,
            duration_ms,
            easing: Easing::Linear,
            started_at_ms: None,
            value: start,
            finished: false,
        }
    }

    pub fn from_options(options: &CounterOptions) -> Self {
        Self::animate(options.start, options.end, options.duration_ms).with_easing(options.easing)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// The most recently displayed value (`start` before the first frame).
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn started_at_ms(&self) -> Option<u64> {
        self.started_at_ms
    }

    /// Runs one refresh at `now_ms`.
    pub fn frame(&mut self, now_ms: u64) -> CounterFrame {
        if self.finished {
            return CounterFrame {
                value: self.value,
                done: true,
            };
        }

        let started_at = match self.started_at_ms {
            Some(t) => t,
            None => {
                cdebug!(
                    start = self.start,
                    end = self.end,
                    duration_ms = self.duration_ms,
                    now_ms,
                    "CounterAnimator: start"
                );
                self.started_at_ms = Some(now_ms);
                now_ms
            }
        };
        let elapsed = now_ms.saturating_sub(started_at);
        let sampled = self.sample(elapsed);

        self.value = if self.end >= self.start {
            self.value.max(sampled)
        } else {
            self.value.min(sampled)
        };

        if elapsed >= self.duration_ms {
            self.value = self.end;
            self.finished = true;
            cdebug!(value = self.value, elapsed, "CounterAnimator: finished");
        }

        CounterFrame {
            value: self.value,
            done: self.finished,
        }
    }

    /// `floor(start + eased(progress) * (end - start))` for `elapsed_ms` since the first frame.
    pub fn sample(&self, elapsed_ms: u64) -> i64 {
        if elapsed_ms >= self.duration_ms {
            return self.end;
        }

        let delta = self.end as i128 - self.start as i128;
        let offset = match self.easing {
            Easing::Linear => linear_offset(delta, elapsed_ms, self.duration_ms),
            easing => {
                let t = (elapsed_ms as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
                floor_to_i128(delta as f64 * easing.sample(t))
            }
        };

        let (lo, hi) = if self.end >= self.start {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        (self.start as i128 + offset).clamp(lo as i128, hi as i128) as i64
    }
}

/// `floor(delta * elapsed / duration)` for `elapsed < duration`, without overflowing `i128`.
fn linear_offset(delta: i128, elapsed_ms: u64, duration_ms: u64) -> i128 {
    let d = duration_ms as i128;
    let quot = delta.div_euclid(d);
    // `rem < duration` and `elapsed < duration`, so the product fits in `u128`.
    let rem = delta.rem_euclid(d) as u128;
    quot * elapsed_ms as i128 + (rem * elapsed_ms as u128 / duration_ms as u128) as i128
}

// `f64::floor` is not available in `core`.
fn floor_to_i128(x: f64) -> i128 {
    let t = x as i128;
    if (t as f64) > x { t - 1 } else { t }
}
