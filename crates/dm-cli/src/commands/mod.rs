pub mod play;

use std::path::Path;

use dm_core::{Mode, Scenario, demo};

/// Load the scenario to play: the bundled one for `mode`, or a JSON file.
///
/// A file holding the other mode's scenario is an error.
pub fn load_scenario(mode: Mode, path: Option<&Path>) -> Result<Scenario, String> {
    let Some(path) = path else {
        return bundled(mode);
    };

    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let scenario =
        Scenario::from_json(&json).map_err(|e| format!("invalid scenario {}: {e}", path.display()))?;

    if scenario.mode() != mode {
        return Err(format!(
            "{} holds a {} scenario; use `dread {}`",
            path.display(),
            scenario.mode(),
            scenario.mode()
        ));
    }
    Ok(scenario)
}

fn bundled(mode: Mode) -> Result<Scenario, String> {
    let scenario = match mode {
        Mode::Story => demo::whispering_manor().map(Scenario::from),
        Mode::Grid => demo::haunted_house().map(Scenario::from),
    };
    scenario.map_err(|e| format!("bundled {mode} scenario is broken: {e}"))
}
