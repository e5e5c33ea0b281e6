//! The shared result shape of both engine variants.

use serde::Serialize;

use crate::notification::Notification;
use crate::player::PlayerState;

/// What a command did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Rejected or ignored; the state is unchanged.
    NoOp,
    /// Accepted; play goes on.
    Continue,
    /// The player died.
    Death,
    /// The player won.
    Win,
}

/// A new state plus the notifications and outcome that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state after the command.
    pub state: PlayerState,
    /// Messages for the notifier, in order.
    pub notifications: Vec<Notification>,
    /// What happened.
    pub outcome: Outcome,
}

impl Transition {
    /// A NoOp that leaves `state` as it was.
    pub fn unchanged(state: &PlayerState) -> Self {
        Self {
            state: state.clone(),
            notifications: Vec::new(),
            outcome: Outcome::NoOp,
        }
    }

    /// A NoOp that leaves `state` as it was but tells the player why.
    pub fn rejected(state: &PlayerState, notification: Notification) -> Self {
        Self {
            state: state.clone(),
            notifications: vec![notification],
            outcome: Outcome::NoOp,
        }
    }
}
