//! Player state: stats, inventory, position, and scene.

use std::fmt;

use dm_core::{Coord, ItemId, NodeId};
use serde::Serialize;

use crate::inventory::Inventory;
use crate::stat::Stat;

/// Which view the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    /// Title menu, before the first start.
    Menu,
    /// Play in progress.
    Active,
    /// The player died.
    Death,
    /// The player escaped.
    Win,
}

impl Scene {
    /// Death and Win accept only Reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Death | Self::Win)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Menu => write!(f, "menu"),
            Self::Active => write!(f, "active"),
            Self::Death => write!(f, "death"),
            Self::Win => write!(f, "win"),
        }
    }
}

/// Mode-specific position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Current story node.
    Node(NodeId),
    /// Current grid coordinate.
    Cell(Coord),
}

/// The player's mutable record.
///
/// Transitions never mutate a state in place; they return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    /// Health, 0 means death.
    pub health: Stat,
    /// Sanity.
    pub sanity: Stat,
    /// Carried items.
    pub inventory: Inventory,
    /// Where the player is.
    pub position: Position,
    /// Current scene.
    pub scene: Scene,
}

impl PlayerState {
    /// A fresh, active state at `position` with full stats.
    pub fn new(position: Position, max_stat: i32) -> Self {
        Self {
            health: Stat::full(max_stat),
            sanity: Stat::full(max_stat),
            inventory: Inventory::new(),
            position,
            scene: Scene::Active,
        }
    }

    /// The same state placed in a different scene.
    pub fn in_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Whether move, grab, and choice commands are accepted.
    pub fn accepts_play(&self) -> bool {
        self.scene == Scene::Active
    }

    /// Whether the player holds `item`.
    pub fn has_item(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// Current story node, in story mode.
    pub fn node_id(&self) -> Option<NodeId> {
        match self.position {
            Position::Node(id) => Some(id),
            Position::Cell(_) => None,
        }
    }

    /// Current grid coordinate, in grid mode.
    pub fn coord(&self) -> Option<Coord> {
        match self.position {
            Position::Cell(at) => Some(at),
            Position::Node(_) => None,
        }
    }
}
