//! Scenario data for Dreadmoor.
//!
//! Defines the immutable content a game is played against: the branching
//! [`StoryGraph`] used in story mode and the [`Grid`] map used in grid mode.
//! Scenarios are validated when constructed or loaded from JSON, so every
//! choice destination and start position is guaranteed to resolve.

/// Bundled demo scenarios.
pub mod demo;
/// Error types used throughout the crate.
pub mod error;
/// Grid maps, cells, and coordinates.
pub mod grid;
/// Item identifiers.
pub mod item;
/// The scenario wrapper and its mode tag.
pub mod scenario;
/// Story graphs, nodes, choices, and effects.
pub mod story;

/// Re-export error types.
pub use error::{ScenarioError, ScenarioResult};
/// Re-export grid types.
pub use grid::{CellKind, Coord, Grid, GridCell};
/// Re-export the item identifier.
pub use item::ItemId;
/// Re-export scenario types.
pub use scenario::{Mode, Scenario};
/// Re-export story types.
pub use story::{Choice, Effect, NodeId, StoryGraph, StoryNode};
