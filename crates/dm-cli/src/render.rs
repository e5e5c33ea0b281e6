//! Plain-text frames for the terminal.

use dm_core::{CellKind, Coord, Grid, GridCell, Mode};
use dm_engine::{DispatchOutput, Dispatcher, Position, Scene, Snapshot};

const TITLE: &str = "DREADMOOR\nType 'start' to begin, 'help' for commands.\n";

/// Render one frame: status, the story text or map, the scene banner and
/// any notifications.
pub fn frame(dispatcher: &Dispatcher, output: &DispatchOutput) -> String {
    let snapshot = &output.snapshot;
    let mut out = String::new();

    if snapshot.scene == Scene::Menu {
        out.push_str(TITLE);
    } else {
        out.push_str(&status(snapshot));
        out.push('\n');
        match (dispatcher.mode(), dispatcher.grid()) {
            (Mode::Grid, Some(grid)) => out.push_str(&map(grid, snapshot.position)),
            _ => out.push_str(&story(dispatcher, snapshot)),
        }
        match snapshot.scene {
            Scene::Death => out.push_str("\nYou are dead. Type 'reset' to try again.\n"),
            Scene::Win => out.push_str("\nYou escaped. Type 'reset' to play again.\n"),
            Scene::Menu | Scene::Active => {}
        }
    }

    for notification in &output.notifications {
        out.push_str(&format!(
            "[{}] {notification}\n",
            notification.severity().label()
        ));
    }
    out
}

fn status(snapshot: &Snapshot) -> String {
    let mut out = format!("Health {}  Sanity {}", snapshot.health, snapshot.sanity);
    if !snapshot.sound_enabled {
        out.push_str("  (muted)");
    }
    out.push('\n');
    if snapshot.scare_active {
        out.push_str("!! Something lunges out of the dark !!\n");
    }

    let items: Vec<&str> = snapshot.inventory.iter().map(|i| i.as_str()).collect();
    if items.is_empty() {
        out.push_str("Inventory: (empty)\n");
    } else {
        out.push_str(&format!("Inventory: {}\n", items.join(", ")));
    }
    out
}

fn story(dispatcher: &Dispatcher, snapshot: &Snapshot) -> String {
    let mut out = format!("{}\n", snapshot.displayed_text);
    if snapshot.choices_ready {
        out.push('\n');
        for (i, choice) in dispatcher.available_choices().iter().enumerate() {
            out.push_str(&format!("  {}. {}", i + 1, choice.text));
            if let Some(item) = &choice.requirement
                && !dispatcher.state().has_item(item)
            {
                out.push_str(&format!(" (needs {item})"));
            }
            out.push('\n');
        }
    } else if snapshot.scene == Scene::Active {
        out.push_str("...\n");
    }
    out
}

fn map(grid: &Grid, position: Position) -> String {
    let mut out = String::new();
    for (y, row) in grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if position == Position::Cell(Coord::new(x, y)) {
                out.push('@');
            } else {
                out.push(glyph(cell));
            }
        }
        out.push('\n');
    }
    out
}

/// Scare cells draw as floor so they stay a surprise.
fn glyph(cell: &GridCell) -> char {
    match cell.kind {
        CellKind::Wall => '#',
        CellKind::Exit => 'E',
        CellKind::Item => cell
            .item
            .as_ref()
            .and_then(|item| item.as_str().chars().next())
            .map_or('?', |c| c.to_ascii_lowercase()),
        CellKind::Empty | CellKind::Scare => '.',
    }
}
