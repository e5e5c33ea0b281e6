use crate::grid::Coord;
use crate::story::NodeId;

/// Alias for `Result<T, ScenarioError>`.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors raised while building or loading a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// Two story nodes share the same id.
    #[error("duplicate story node id: {0}")]
    DuplicateNode(NodeId),

    /// The configured start node does not exist.
    #[error("start node {0} does not exist")]
    MissingStartNode(NodeId),

    /// A choice points at a node that does not exist.
    #[error("choice \"{choice}\" on node {node} leads to missing node {next}")]
    DanglingChoice {
        /// The node holding the choice.
        node: NodeId,
        /// The choice text.
        choice: String,
        /// The unresolved destination.
        next: NodeId,
    },

    /// The grid has no cells.
    #[error("grid is empty")]
    EmptyGrid,

    /// A grid row differs in length from the first row.
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        /// Row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of this row.
        found: usize,
    },

    /// The start coordinate lies outside the grid.
    #[error("start position {0} is out of bounds")]
    StartOutOfBounds(Coord),

    /// The start coordinate is a wall.
    #[error("start position {0} is a wall")]
    StartOnWall(Coord),

    /// An item cell has no item to collect.
    #[error("item cell at {0} has no item")]
    MissingCellItem(Coord),

    /// A non-item cell carries an item.
    #[error("cell at {0} carries an item but is not an item cell")]
    StrayCellItem(Coord),

    /// A layout row used a character with no meaning.
    #[error("unknown layout glyph '{glyph}' at {at}")]
    UnknownGlyph {
        /// The offending character.
        glyph: char,
        /// Where it appeared.
        at: Coord,
    },

    /// A layout has no start marker.
    #[error("layout has no start marker '@'")]
    MissingStartMarker,

    /// The JSON document could not be decoded.
    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
}
