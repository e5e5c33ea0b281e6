use super::TimerEvent;
use super::queue::{Scheduler, TimerHandle};

/// What a reveal tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealProgress {
    /// One more character is visible; more remain.
    Advanced,
    /// The last character just became visible.
    Completed,
    /// Nothing was being revealed.
    Idle,
}

/// Incremental, one-character-at-a-time display of node text.
///
/// At most one reveal timer is in flight. Starting a new reveal cancels the
/// previous timer first, so two texts can never interleave.
#[derive(Debug, Default)]
pub struct TextReveal {
    text: String,
    shown_chars: usize,
    total_chars: usize,
    shown_bytes: usize,
    ms_per_char: u64,
    timer: Option<TimerHandle>,
}

impl TextReveal {
    /// An idle reveal with the given cadence.
    pub fn new(ms_per_char: u64) -> Self {
        Self {
            ms_per_char,
            ..Self::default()
        }
    }

    /// Begin revealing `text` from its first character.
    pub fn start(&mut self, text: &str, sched: &mut impl Scheduler<TimerEvent>) {
        self.cancel(sched);
        self.text = text.to_string();
        self.total_chars = text.chars().count();
        self.shown_chars = 0;
        self.shown_bytes = 0;
        if self.total_chars > 0 {
            self.timer = Some(sched.schedule(self.ms_per_char, TimerEvent::RevealTick));
        }
    }

    /// Show one more character and schedule the next tick if any remain.
    pub fn tick(&mut self, sched: &mut impl Scheduler<TimerEvent>) -> RevealProgress {
        if self.timer.take().is_none() || self.is_complete() {
            return RevealProgress::Idle;
        }

        let next_len = self.text[self.shown_bytes..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        self.shown_bytes += next_len;
        self.shown_chars += 1;

        if self.is_complete() {
            RevealProgress::Completed
        } else {
            self.timer = Some(sched.schedule(self.ms_per_char, TimerEvent::RevealTick));
            RevealProgress::Advanced
        }
    }

    /// Stop revealing and forget the text.
    pub fn cancel(&mut self, sched: &mut impl Scheduler<TimerEvent>) {
        if let Some(handle) = self.timer.take() {
            sched.cancel(handle);
        }
        self.text.clear();
        self.shown_chars = 0;
        self.total_chars = 0;
        self.shown_bytes = 0;
    }

    /// The portion of the text shown so far.
    pub fn displayed(&self) -> &str {
        &self.text[..self.shown_bytes]
    }

    /// Whether the whole text is visible.
    pub fn is_complete(&self) -> bool {
        self.shown_chars >= self.total_chars
    }

    /// Time until the last character is shown.
    pub fn remaining(&self, now: u64) -> u64 {
        match self.timer {
            Some(handle) => {
                let left = (self.total_chars - self.shown_chars - 1) as u64;
                handle.deadline().saturating_sub(now) + left * self.ms_per_char
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerQueue;

    fn run(reveal: &mut TextReveal, q: &mut TimerQueue<TimerEvent>, until: u64) -> Vec<RevealProgress> {
        let mut out = Vec::new();
        while let Some(event) = q.pop_due(until) {
            assert_eq!(event, TimerEvent::RevealTick);
            out.push(reveal.tick(q));
        }
        q.settle(until);
        out
    }

    #[test]
    fn reveals_one_char_per_cadence() {
        let mut q = TimerQueue::new();
        let mut r = TextReveal::new(50);
        r.start("Boo", &mut q);
        assert_eq!(r.displayed(), "");
        assert_eq!(r.remaining(q.now()), 150);

        run(&mut r, &mut q, 50);
        assert_eq!(r.displayed(), "B");
        run(&mut r, &mut q, 120);
        assert_eq!(r.displayed(), "Bo");
        assert_eq!(r.remaining(q.now()), 30);

        let progress = run(&mut r, &mut q, 150);
        assert_eq!(progress, [RevealProgress::Completed]);
        assert_eq!(r.displayed(), "Boo");
        assert!(r.is_complete());
        assert!(q.is_empty());
    }

    #[test]
    fn restart_cancels_previous_reveal() {
        let mut q = TimerQueue::new();
        let mut r = TextReveal::new(50);
        r.start("AAAA", &mut q);
        run(&mut r, &mut q, 100);
        assert_eq!(r.displayed(), "AA");

        r.start("BBB", &mut q);
        assert_eq!(q.len(), 1);
        run(&mut r, &mut q, 1000);
        assert_eq!(r.displayed(), "BBB");
    }

    #[test]
    fn empty_text_is_complete_immediately() {
        let mut q = TimerQueue::new();
        let mut r = TextReveal::new(50);
        r.start("", &mut q);
        assert!(r.is_complete());
        assert!(q.is_empty());
        assert_eq!(r.remaining(0), 0);
    }

    #[test]
    fn handles_multibyte_text() {
        let mut q = TimerQueue::new();
        let mut r = TextReveal::new(10);
        r.start("né", &mut q);
        run(&mut r, &mut q, 10);
        assert_eq!(r.displayed(), "n");
        run(&mut r, &mut q, 20);
        assert_eq!(r.displayed(), "né");
    }
}
