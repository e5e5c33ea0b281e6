//! Grid maps for exploration mode.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ScenarioError, ScenarioResult};
use crate::item::ItemId;

/// A (column, row) address into a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Coord {
    /// Create a coordinate.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset by a signed delta. Returns `None` below zero.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx as isize)?,
            y: self.y.checked_add_signed(dy as isize)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Open floor.
    #[default]
    Empty,
    /// Impassable.
    Wall,
    /// Floor holding a collectible item.
    Item,
    /// The way out.
    Exit,
    /// Floor that triggers a jump scare when entered.
    Scare,
}

/// One addressable unit of the map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridCell {
    /// Cell kind.
    pub kind: CellKind,
    /// Item lying here. Present only when `kind` is [`CellKind::Item`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemId>,
}

impl GridCell {
    /// An empty floor cell.
    pub fn empty() -> Self {
        Self::of(CellKind::Empty)
    }

    /// A wall cell.
    pub fn wall() -> Self {
        Self::of(CellKind::Wall)
    }

    /// An exit cell.
    pub fn exit() -> Self {
        Self::of(CellKind::Exit)
    }

    /// A scare cell.
    pub fn scare() -> Self {
        Self::of(CellKind::Scare)
    }

    /// An item cell holding `item`.
    pub fn item(item: impl Into<ItemId>) -> Self {
        Self {
            kind: CellKind::Item,
            item: Some(item.into()),
        }
    }

    fn of(kind: CellKind) -> Self {
        Self { kind, item: None }
    }

    /// Whether the player may stand here.
    pub fn is_passable(&self) -> bool {
        self.kind != CellKind::Wall
    }
}

fn default_exit_item() -> ItemId {
    ItemId::from("key")
}

/// Serialized form of a [`Grid`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GridDef {
    rows: Vec<Vec<GridCell>>,
    start: Coord,
    #[serde(default = "default_exit_item")]
    exit_item: ItemId,
}

/// A fixed-size, validated 2-D map addressed by (row, column).
///
/// The start position is always in bounds and never a wall. Cells change
/// only when an item is collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridDef", into = "GridDef")]
pub struct Grid {
    rows: Vec<Vec<GridCell>>,
    start: Coord,
    exit_item: ItemId,
}

impl Grid {
    /// Build a grid from rows of cells. The exit requires `"key"`.
    pub fn new(rows: Vec<Vec<GridCell>>, start: Coord) -> ScenarioResult<Self> {
        Self::with_exit_item(rows, start, default_exit_item())
    }

    /// Build a grid whose exit requires `exit_item`.
    pub fn with_exit_item(
        rows: Vec<Vec<GridCell>>,
        start: Coord,
        exit_item: impl Into<ItemId>,
    ) -> ScenarioResult<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(ScenarioError::EmptyGrid);
        }

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ScenarioError::RaggedGrid {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, cell) in row.iter().enumerate() {
                match (cell.kind, &cell.item) {
                    (CellKind::Item, None) => {
                        return Err(ScenarioError::MissingCellItem(Coord::new(x, y)));
                    }
                    (kind, Some(_)) if kind != CellKind::Item => {
                        return Err(ScenarioError::StrayCellItem(Coord::new(x, y)));
                    }
                    _ => {}
                }
            }
        }

        let grid = Self {
            rows,
            start,
            exit_item: exit_item.into(),
        };
        match grid.cell(start) {
            None => Err(ScenarioError::StartOutOfBounds(start)),
            Some(cell) if !cell.is_passable() => Err(ScenarioError::StartOnWall(start)),
            Some(_) => Ok(grid),
        }
    }

    /// Build a grid from text rows.
    ///
    /// Legend: `#` wall, `.` empty, `E` exit, `!` scare, `@` start (empty).
    /// Any other glyph must appear in `items`, mapping it to an item cell.
    pub fn from_layout(rows: &[&str], items: &[(char, &str)]) -> ScenarioResult<Self> {
        let mut start = None;
        let mut cells = Vec::with_capacity(rows.len());

        for (y, line) in rows.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, glyph) in line.chars().enumerate() {
                let cell = match glyph {
                    '#' => GridCell::wall(),
                    '.' => GridCell::empty(),
                    'E' => GridCell::exit(),
                    '!' => GridCell::scare(),
                    '@' => {
                        start = Some(Coord::new(x, y));
                        GridCell::empty()
                    }
                    other => match items.iter().find(|(g, _)| *g == other) {
                        Some((_, item)) => GridCell::item(*item),
                        None => {
                            return Err(ScenarioError::UnknownGlyph {
                                glyph: other,
                                at: Coord::new(x, y),
                            });
                        }
                    },
                };
                row.push(cell);
            }
            cells.push(row);
        }

        let start = start.ok_or(ScenarioError::MissingStartMarker)?;
        Self::new(cells, start)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Where a fresh game places the player.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The item needed to leave through an exit.
    pub fn exit_item(&self) -> &ItemId {
        &self.exit_item
    }

    /// The cell at `at`, or `None` when out of bounds.
    pub fn cell(&self, at: Coord) -> Option<&GridCell> {
        self.rows.get(at.y)?.get(at.x)
    }

    /// Offset `from` by a delta, returning the destination only if it is in bounds.
    pub fn step(&self, from: Coord, dx: i32, dy: i32) -> Option<Coord> {
        from.offset(dx, dy).filter(|to| self.cell(*to).is_some())
    }

    /// Remove the item at `at`, turning the cell into empty floor.
    ///
    /// Returns `None` if the cell is not an item cell.
    pub fn take_item(&mut self, at: Coord) -> Option<ItemId> {
        let cell = self.rows.get_mut(at.y)?.get_mut(at.x)?;
        if cell.kind != CellKind::Item {
            return None;
        }
        let item = cell.item.take();
        cell.kind = CellKind::Empty;
        item
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl TryFrom<GridDef> for Grid {
    type Error = ScenarioError;

    fn try_from(def: GridDef) -> ScenarioResult<Self> {
        Self::with_exit_item(def.rows, def.start, def.exit_item)
    }
}

impl From<Grid> for GridDef {
    fn from(grid: Grid) -> Self {
        Self {
            rows: grid.rows,
            start: grid.start,
            exit_item: grid.exit_item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        Grid::from_layout(&["#####", "#@k.#", "#####"], &[('k', "key")]).unwrap()
    }

    #[test]
    fn parses_layout() {
        let grid = corridor();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.start(), Coord::new(1, 1));
        assert_eq!(grid.cell(Coord::new(2, 1)), Some(&GridCell::item("key")));
        assert_eq!(grid.cell(Coord::new(0, 0)).unwrap().kind, CellKind::Wall);
        assert_eq!(grid.exit_item(), &ItemId::from("key"));
    }

    #[test]
    fn step_stays_in_bounds() {
        let grid = corridor();
        assert_eq!(grid.step(Coord::new(0, 0), -1, 0), None);
        assert_eq!(grid.step(Coord::new(4, 2), 1, 0), None);
        assert_eq!(grid.step(Coord::new(4, 2), 0, 1), None);
        assert_eq!(grid.step(Coord::new(1, 1), 1, 0), Some(Coord::new(2, 1)));
    }

    #[test]
    fn take_item_empties_cell() {
        let mut grid = corridor();
        let at = Coord::new(2, 1);
        assert_eq!(grid.take_item(at), Some(ItemId::from("key")));
        assert_eq!(grid.cell(at), Some(&GridCell::empty()));
        assert_eq!(grid.take_item(at), None);
    }

    #[test]
    fn rejects_bad_layouts() {
        assert!(matches!(
            Grid::from_layout(&["#.#"], &[]),
            Err(ScenarioError::MissingStartMarker)
        ));
        assert!(matches!(
            Grid::from_layout(&["@z"], &[]),
            Err(ScenarioError::UnknownGlyph { glyph: 'z', .. })
        ));
        assert!(matches!(
            Grid::from_layout(&["@..", ".."], &[]),
            Err(ScenarioError::RaggedGrid { row: 1, .. })
        ));
        assert!(matches!(
            Grid::new(Vec::new(), Coord::new(0, 0)),
            Err(ScenarioError::EmptyGrid)
        ));
    }

    #[test]
    fn rejects_bad_start() {
        let rows = vec![vec![GridCell::wall(), GridCell::empty()]];
        assert!(matches!(
            Grid::new(rows.clone(), Coord::new(0, 0)),
            Err(ScenarioError::StartOnWall(_))
        ));
        assert!(matches!(
            Grid::new(rows, Coord::new(5, 0)),
            Err(ScenarioError::StartOutOfBounds(_))
        ));
    }

    #[test]
    fn rejects_inconsistent_items() {
        let rows = vec![vec![GridCell::empty(), GridCell::of(CellKind::Item)]];
        assert!(matches!(
            Grid::new(rows, Coord::new(0, 0)),
            Err(ScenarioError::MissingCellItem(_))
        ));

        let stray = GridCell {
            kind: CellKind::Exit,
            item: Some(ItemId::from("key")),
        };
        let rows = vec![vec![GridCell::empty(), stray]];
        assert!(matches!(
            Grid::new(rows, Coord::new(0, 0)),
            Err(ScenarioError::StrayCellItem(_))
        ));
    }

    #[test]
    fn json_defaults_exit_item() {
        let json = r#"{"rows": [[{"kind": "empty"}, {"kind": "exit"}]], "start": {"x": 0, "y": 0}}"#;
        let grid: Grid = serde_json::from_str(json).unwrap();
        assert_eq!(grid.exit_item(), &ItemId::from("key"));
        assert_eq!(grid.cell(Coord::new(1, 0)).unwrap().kind, CellKind::Exit);
    }
}
