//! Grid-mode transitions: moving around a [`Grid`] and picking things up.

use dm_core::{CellKind, Grid};
use tracing::debug;

use crate::notification::Notification;
use crate::player::{PlayerState, Position, Scene};
use crate::transition::{Outcome, Transition};

/// A unit cardinal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Direction {
    /// Map a `(dx, dy)` vector to a direction.
    ///
    /// Only the four unit cardinal vectors are accepted; zero and diagonal
    /// vectors return `None`.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Self::Up),
            (0, 1) => Some(Self::Down),
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            _ => None,
        }
    }

    /// The `(dx, dy)` vector for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Result of a move: the transition plus whether a scare cell was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    /// The state transition.
    pub transition: Transition,
    /// The player stepped onto a scare cell.
    pub scare_triggered: bool,
}

impl Movement {
    fn blocked(state: &PlayerState) -> Self {
        Self {
            transition: Transition::unchanged(state),
            scare_triggered: false,
        }
    }
}

/// Move one cell in `direction`.
///
/// Walls and the map edge block silently. Stepping onto the exit wins when
/// the player holds the grid's exit item; otherwise the player stands on the
/// exit and is told the door is locked.
pub fn move_player(state: &PlayerState, direction: Direction, grid: &Grid) -> Movement {
    if !state.accepts_play() {
        debug!(scene = %state.scene, "move ignored outside active play");
        return Movement::blocked(state);
    }
    let Some(from) = state.coord() else {
        debug!(position = ?state.position, "move ignored: not on the grid");
        return Movement::blocked(state);
    };

    let (dx, dy) = direction.delta();
    let Some(to) = grid.step(from, dx, dy) else {
        debug!(%from, ?direction, "move blocked: out of bounds");
        return Movement::blocked(state);
    };
    let Some(cell) = grid.cell(to).filter(|c| c.is_passable()) else {
        debug!(%from, %to, "move blocked: wall");
        return Movement::blocked(state);
    };

    let mut after = state.clone();
    after.position = Position::Cell(to);
    let mut notifications = Vec::new();
    let mut outcome = Outcome::Continue;

    if cell.kind == CellKind::Exit {
        if after.has_item(grid.exit_item()) {
            after.scene = Scene::Win;
            outcome = Outcome::Win;
        } else {
            notifications.push(Notification::MissingKey(grid.exit_item().clone()));
        }
    }

    Movement {
        transition: Transition {
            state: after,
            notifications,
            outcome,
        },
        scare_triggered: cell.kind == CellKind::Scare,
    }
}

/// Pick up the item under the player.
///
/// A collected cell becomes empty floor, so the same item can never be
/// grabbed twice.
pub fn grab(state: &PlayerState, grid: &mut Grid) -> Transition {
    if !state.accepts_play() {
        debug!(scene = %state.scene, "grab ignored outside active play");
        return Transition::unchanged(state);
    }
    let Some(at) = state.coord() else {
        debug!(position = ?state.position, "grab ignored: not on the grid");
        return Transition::unchanged(state);
    };

    let collectible = grid
        .cell(at)
        .filter(|c| c.kind == CellKind::Item)
        .and_then(|c| c.item.as_ref())
        .is_some_and(|item| !state.has_item(item));
    if !collectible {
        return Transition::rejected(state, Notification::NothingToGrab);
    }

    let Some(item) = grid.take_item(at) else {
        return Transition::rejected(state, Notification::NothingToGrab);
    };
    let mut after = state.clone();
    after.inventory.insert(item.clone());

    Transition {
        state: after,
        notifications: vec![Notification::ItemAcquired(item)],
        outcome: Outcome::Continue,
    }
}
