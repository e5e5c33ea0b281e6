use super::TimerEvent;
use super::queue::{Scheduler, TimerHandle};

/// The transient jump-scare presentation flag.
///
/// Raising the flag schedules its own clear. Raising it again while it is
/// already up does nothing, so there is never more than one clear timer.
#[derive(Debug)]
pub struct ScareFlag {
    active: bool,
    duration: u64,
    clear: Option<TimerHandle>,
    pending: Option<TimerHandle>,
}

impl ScareFlag {
    /// A lowered flag that stays up for `duration` once raised.
    pub fn new(duration: u64) -> Self {
        Self {
            active: false,
            duration,
            clear: None,
            pending: None,
        }
    }

    /// Whether the flag is up.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Raise the flag now. Returns false if it was already up.
    pub fn trigger(&mut self, sched: &mut impl Scheduler<TimerEvent>) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.clear = Some(sched.schedule(self.duration, TimerEvent::ScareClear));
        true
    }

    /// Raise the flag after `delay`, unless a delayed raise is already pending.
    pub fn trigger_after(&mut self, delay: u64, sched: &mut impl Scheduler<TimerEvent>) {
        if self.pending.is_none() {
            self.pending = Some(sched.schedule(delay, TimerEvent::ScareTrigger));
        }
    }

    /// Handle a fired [`TimerEvent::ScareTrigger`].
    pub fn on_trigger(&mut self, sched: &mut impl Scheduler<TimerEvent>) -> bool {
        self.pending = None;
        self.trigger(sched)
    }

    /// Handle a fired [`TimerEvent::ScareClear`].
    pub fn on_clear(&mut self) {
        self.clear = None;
        self.active = false;
    }

    /// Drop a delayed raise that has not fired yet.
    pub fn cancel_pending(&mut self, sched: &mut impl Scheduler<TimerEvent>) {
        if let Some(handle) = self.pending.take() {
            sched.cancel(handle);
        }
    }

    /// Lower the flag and cancel every timer it owns.
    pub fn reset(&mut self, sched: &mut impl Scheduler<TimerEvent>) {
        self.cancel_pending(sched);
        if let Some(handle) = self.clear.take() {
            sched.cancel(handle);
        }
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerQueue;

    fn run(flag: &mut ScareFlag, q: &mut TimerQueue<TimerEvent>, until: u64) {
        while let Some(event) = q.pop_due(until) {
            match event {
                TimerEvent::ScareTrigger => {
                    flag.on_trigger(q);
                }
                TimerEvent::ScareClear => flag.on_clear(),
                TimerEvent::RevealTick => panic!("unexpected reveal tick"),
            }
        }
        q.settle(until);
    }

    #[test]
    fn clears_after_duration() {
        let mut q = TimerQueue::new();
        let mut flag = ScareFlag::new(1500);
        assert!(flag.trigger(&mut q));
        assert!(flag.is_active());

        run(&mut flag, &mut q, 1499);
        assert!(flag.is_active());
        run(&mut flag, &mut q, 1500);
        assert!(!flag.is_active());
    }

    #[test]
    fn retrigger_does_not_extend() {
        let mut q = TimerQueue::new();
        let mut flag = ScareFlag::new(1000);
        flag.trigger(&mut q);
        run(&mut flag, &mut q, 600);
        assert!(!flag.trigger(&mut q));
        assert_eq!(q.len(), 1);

        run(&mut flag, &mut q, 1000);
        assert!(!flag.is_active());
    }

    #[test]
    fn delayed_trigger() {
        let mut q = TimerQueue::new();
        let mut flag = ScareFlag::new(100);
        flag.trigger_after(50, &mut q);
        flag.trigger_after(10, &mut q);
        assert_eq!(q.len(), 1);

        run(&mut flag, &mut q, 49);
        assert!(!flag.is_active());
        run(&mut flag, &mut q, 50);
        assert!(flag.is_active());
        run(&mut flag, &mut q, 150);
        assert!(!flag.is_active());
    }

    #[test]
    fn reset_cancels_everything() {
        let mut q = TimerQueue::new();
        let mut flag = ScareFlag::new(100);
        flag.trigger(&mut q);
        flag.trigger_after(20, &mut q);
        flag.reset(&mut q);
        assert!(!flag.is_active());
        assert!(q.is_empty());
    }
}
