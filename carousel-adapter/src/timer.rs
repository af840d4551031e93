use alloc::collections::BTreeMap;

/// A fixed-delay deferred callback queue, ordered by due time then by scheduling order.
///
/// Entries are never cancelled: every scheduled item eventually pops. Consumers that need
/// "latest wins" semantics must check staleness themselves.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: BTreeMap<(u64, u64), T>,
    seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn schedule(&mut self, due_ms: u64, item: T) {
        let seq = self.seq;
        self.seq = self.seq.wrapping_add(1);
        self.entries.insert((due_ms, seq), item);
    }

    /// The earliest due time, if anything is pending.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.entries.keys().next().map(|&(due, _)| due)
    }

    /// Pops the earliest entry whose due time is `<= now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<T> {
        let entry = self.entries.first_entry()?;
        if entry.key().0 > now_ms {
            return None;
        }
        Some(entry.remove())
    }
}
