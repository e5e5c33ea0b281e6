//! Timer subsystem: a logical clock plus the two scheduled effects.
//!
//! Timers never call back into the engine directly. A fired timer yields a
//! [`TimerEvent`] which the dispatcher handles like any other command, so
//! timer work is serialized with player input.

mod queue;
mod reveal;
mod scare;

pub use queue::{Scheduler, TimerHandle, TimerQueue};
pub use reveal::{RevealProgress, TextReveal};
pub use scare::ScareFlag;

/// Work scheduled on the timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Reveal one more character of the current node's text.
    RevealTick,
    /// Raise the jump-scare flag.
    ScareTrigger,
    /// Lower the jump-scare flag.
    ScareClear,
}
