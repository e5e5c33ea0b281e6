//! The scenario wrapper: one story graph or one grid map.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScenarioResult;
use crate::grid::Grid;
use crate::story::StoryGraph;

/// Which engine variant a scenario is played with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Branching dialogue graph.
    Story,
    /// Spatial grid exploration.
    Grid,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Story => write!(f, "story"),
            Self::Grid => write!(f, "grid"),
        }
    }
}

/// Immutable content for one game, tagged with its mode.
///
/// In JSON the mode is an inline `"mode"` field:
/// `{"mode": "grid", "rows": [...], "start": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Scenario {
    /// A story graph.
    Story(StoryGraph),
    /// A grid map.
    Grid(Grid),
}

impl Scenario {
    /// The mode this scenario is played in.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Story(_) => Mode::Story,
            Self::Grid(_) => Mode::Grid,
        }
    }

    /// Decode and validate a scenario from JSON text.
    pub fn from_json(json: &str) -> ScenarioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> ScenarioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<StoryGraph> for Scenario {
    fn from(graph: StoryGraph) -> Self {
        Self::Story(graph)
    }
}

impl From<Grid> for Scenario {
    fn from(grid: Grid) -> Self {
        Self::Grid(grid)
    }
}
