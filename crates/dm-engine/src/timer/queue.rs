use std::collections::BTreeMap;

/// Identifies one scheduled timer so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle {
    deadline: u64,
    seq: u64,
}

impl TimerHandle {
    /// Clock time at which the timer fires.
    pub fn deadline(&self) -> u64 {
        self.deadline
    }
}

/// Schedules cancellable delayed events against a clock.
pub trait Scheduler<E> {
    /// Current clock time.
    fn now(&self) -> u64;

    /// Fire `event` after `delay` time units.
    fn schedule(&mut self, delay: u64, event: E) -> TimerHandle;

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

/// A deterministic single-threaded timer queue on a logical clock.
///
/// Time moves only when the owner advances it, which makes every schedule
/// reproducible under test. Events with equal deadlines fire in the order
/// they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<E> {
    now: u64,
    seq: u64,
    pending: BTreeMap<TimerHandle, E>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    /// An empty queue at time zero.
    pub fn new() -> Self {
        Self {
            now: 0,
            seq: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Pop the earliest event due at or before `until`, moving the clock to
    /// its deadline.
    pub fn pop_due(&mut self, until: u64) -> Option<E> {
        let (handle, _) = self.pending.first_key_value()?;
        if handle.deadline > until {
            return None;
        }
        let (handle, event) = self.pending.pop_first()?;
        self.now = self.now.max(handle.deadline);
        Some(event)
    }

    /// Move the clock forward to `time` without firing anything.
    ///
    /// Call after draining [`pop_due`](Self::pop_due) up to the same time.
    pub fn settle(&mut self, time: u64) {
        self.now = self.now.max(time);
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<E> Scheduler<E> for TimerQueue<E> {
    fn now(&self) -> u64 {
        self.now
    }

    fn schedule(&mut self, delay: u64, event: E) -> TimerHandle {
        self.seq += 1;
        let handle = TimerHandle {
            deadline: self.now.saturating_add(delay),
            seq: self.seq,
        };
        self.pending.insert(handle, event);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut TimerQueue<&'static str>, until: u64) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some(e) = queue.pop_due(until) {
            fired.push(e);
        }
        queue.settle(until);
        fired
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(30, "c");
        q.schedule(10, "a");
        q.schedule(20, "b");

        assert_eq!(drain(&mut q, 25), ["a", "b"]);
        assert_eq!(q.now(), 25);
        assert_eq!(drain(&mut q, 100), ["c"]);
        assert!(q.is_empty());
    }

    #[test]
    fn ties_fire_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(5, "first");
        q.schedule(5, "second");
        assert_eq!(drain(&mut q, 5), ["first", "second"]);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut q = TimerQueue::new();
        let h = q.schedule(10, "stale");
        q.schedule(10, "fresh");
        assert!(q.cancel(h));
        assert!(!q.cancel(h));
        assert_eq!(drain(&mut q, 10), ["fresh"]);
    }

    #[test]
    fn clock_advances_to_each_deadline() {
        let mut q = TimerQueue::new();
        q.schedule(10, "a");
        assert_eq!(q.pop_due(50), Some("a"));
        assert_eq!(q.now(), 10);
        let h = q.schedule(5, "b");
        assert_eq!(h.deadline(), 15);
    }
}
