//! Player-state transition engine for Dreadmoor.
//!
//! Commands enter through the [`Dispatcher`], which routes them to the
//! story-mode ([`story`]) or grid-mode ([`grid`]) transition functions.
//! Transitions are pure: they take the current [`PlayerState`] and return a
//! new one along with notifications and an outcome. Text reveal and the
//! jump-scare flag run on a logical-clock timer queue ([`timer`]) that the
//! dispatcher drives, so all timing is deterministic.

/// Engine configuration.
pub mod config;
/// The command entry point.
pub mod dispatcher;
/// Grid-mode transitions.
pub mod grid;
/// Ordered, duplicate-free inventory.
pub mod inventory;
/// Player-facing notifications.
pub mod notification;
/// Player state and scenes.
pub mod player;
/// Clamped stats.
pub mod stat;
/// Story-mode transitions.
pub mod story;
/// Logical clock, text reveal, and scare flag.
pub mod timer;
/// Transition results.
pub mod transition;

pub use config::EngineConfig;
pub use dispatcher::{Command, DispatchOutput, Dispatcher, Snapshot};
pub use grid::{Direction, Movement};
pub use inventory::Inventory;
pub use notification::{Notification, Severity};
pub use player::{PlayerState, Position, Scene};
pub use stat::Stat;
pub use transition::{Outcome, Transition};
