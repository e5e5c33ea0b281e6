//! Story-mode transitions: taking choices through a [`StoryGraph`].

use dm_core::{Choice, StoryGraph};
use tracing::{debug, warn};

use crate::notification::Notification;
use crate::player::{PlayerState, Position, Scene};
use crate::transition::{Outcome, Transition};

/// Take the choice at `index` on the player's current node.
///
/// An index past the end of the node's choices is ignored.
pub fn select_choice(state: &PlayerState, index: usize, graph: &StoryGraph) -> Transition {
    let Some(node) = state.node_id().and_then(|id| graph.node(id)) else {
        debug!(position = ?state.position, "choice ignored: not on a story node");
        return Transition::unchanged(state);
    };
    match node.choices.get(index) {
        Some(choice) => apply_choice(state, choice, graph),
        None => {
            debug!(node = node.id, index, "choice ignored: no such option");
            Transition::unchanged(state)
        }
    }
}

/// Apply `choice` to `state`.
///
/// A missing requirement rejects the choice outright. Otherwise the effect
/// is applied (stats clamped, item granted at most once) and the outcome is
/// decided: zero health is death wherever the choice leads, then the
/// destination's dead-end and win flags, else play continues there.
pub fn apply_choice(state: &PlayerState, choice: &Choice, graph: &StoryGraph) -> Transition {
    if !state.accepts_play() {
        debug!(scene = %state.scene, "choice ignored outside active play");
        return Transition::unchanged(state);
    }

    if let Some(required) = &choice.requirement
        && !state.has_item(required)
    {
        debug!(item = %required, "choice rejected: missing requirement");
        return Transition::rejected(state, Notification::MissingRequirement(required.clone()));
    }

    let Some(next) = graph.node(choice.next_id) else {
        warn!(next = choice.next_id, "choice leads to an unknown node");
        return Transition::unchanged(state);
    };

    let mut after = state.clone();
    let mut notifications = Vec::new();

    if let Some(effect) = &choice.effect {
        after.health = after.health.adjusted(effect.health.unwrap_or(0));
        after.sanity = after.sanity.adjusted(effect.sanity.unwrap_or(0));
        if let Some(item) = &effect.item
            && after.inventory.insert(item.clone())
        {
            notifications.push(Notification::ItemAcquired(item.clone()));
        }
    }

    let outcome = if after.health.is_depleted() {
        Outcome::Death
    } else {
        after.position = Position::Node(next.id);
        if next.is_dead_end {
            Outcome::Death
        } else if next.is_win {
            Outcome::Win
        } else {
            Outcome::Continue
        }
    };

    after.scene = match outcome {
        Outcome::Death => Scene::Death,
        Outcome::Win => Scene::Win,
        Outcome::Continue | Outcome::NoOp => Scene::Active,
    };

    Transition {
        state: after,
        notifications,
        outcome,
    }
}
