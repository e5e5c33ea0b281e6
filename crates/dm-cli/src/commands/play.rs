//! The interactive play loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use dm_core::Mode;
use dm_engine::{DispatchOutput, Dispatcher, EngineConfig};
use tracing::{info, warn};

use crate::input::{Input, help_text, parse_input};
use crate::render;

/// Logical time one command takes when the clock runs on its own.
pub const DEFAULT_TURN_MS: u64 = 600;

/// How the loop presents frames and drives the clock.
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    /// Emit one JSON object per frame instead of text.
    pub json: bool,
    /// Only advance time on `wait`.
    pub manual_clock: bool,
    /// Time that passes after each command once its text is revealed.
    pub turn_ms: u64,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            json: false,
            manual_clock: false,
            turn_ms: DEFAULT_TURN_MS,
        }
    }
}

/// Load a scenario and play it on stdin/stdout.
pub fn run(
    mode: Mode,
    scenario: Option<&Path>,
    config: EngineConfig,
    options: PlayOptions,
) -> Result<(), String> {
    let scenario = super::load_scenario(mode, scenario)?;
    info!(%mode, ?options, "starting session");
    let dispatcher = Dispatcher::new(scenario, config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session(dispatcher, options, stdin.lock(), stdout.lock())
}

/// Feed input lines to `dispatcher` until EOF or `quit`, writing a frame
/// after each one.
pub fn session<R: BufRead, W: Write>(
    mut dispatcher: Dispatcher,
    options: PlayOptions,
    input: R,
    mut out: W,
) -> Result<(), String> {
    let first = dispatcher.advance(0);
    emit(&dispatcher, &first, options, &mut out)?;

    for line in input.lines() {
        let line = line.map_err(|e| e.to_string())?;
        let output = match parse_input(&line) {
            Input::Quit => break,
            Input::Help => {
                if !options.json {
                    writeln!(out, "{}\n", help_text()).map_err(|e| e.to_string())?;
                }
                continue;
            }
            Input::Unknown(text) => {
                warn!(input = %text, "unrecognised input");
                if !options.json {
                    writeln!(out, "Unknown command '{text}'. Type 'help' for commands.\n")
                        .map_err(|e| e.to_string())?;
                }
                continue;
            }
            Input::Look => dispatcher.advance(0),
            Input::Wait(ms) => dispatcher.advance(ms),
            Input::Play(command) => {
                let output = dispatcher.dispatch(command);
                if options.manual_clock {
                    output
                } else {
                    pass_turn(&mut dispatcher, output, options.turn_ms)
                }
            }
        };
        emit(&dispatcher, &output, options, &mut out)?;
    }

    out.flush().map_err(|e| e.to_string())
}

/// Run the clock through the rest of the current text plus `turn_ms`, so
/// delayed scares raise and raised ones eventually clear. The command's own
/// outcome and notifications are kept.
///
/// Always advances, even by zero: zero-delay reveal ticks are still pending
/// until the clock is driven.
fn pass_turn(dispatcher: &mut Dispatcher, output: DispatchOutput, turn_ms: u64) -> DispatchOutput {
    let elapsed = dispatcher.reveal_remaining().saturating_add(turn_ms);
    let settled = dispatcher.advance(elapsed);
    DispatchOutput {
        notifications: output.notifications,
        outcome: output.outcome,
        ..settled
    }
}

fn emit<W: Write>(
    dispatcher: &Dispatcher,
    output: &DispatchOutput,
    options: PlayOptions,
    out: &mut W,
) -> Result<(), String> {
    if options.json {
        let line = serde_json::to_string(output).map_err(|e| e.to_string())?;
        writeln!(out, "{line}").map_err(|e| e.to_string())
    } else {
        writeln!(out, "{}", render::frame(dispatcher, output)).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dm_core::{Scenario, demo};

    fn play(scenario: Scenario, options: PlayOptions, script: &str) -> String {
        let dispatcher = Dispatcher::new(scenario, EngineConfig::default());
        let mut out = Vec::new();
        session(dispatcher, options, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn manor() -> Scenario {
        Scenario::from(demo::whispering_manor().unwrap())
    }

    #[test]
    fn auto_clock_reveals_choices_immediately() {
        let out = play(manor(), PlayOptions::default(), "start\n");
        assert!(out.contains("1. "));
    }

    #[test]
    fn manual_clock_needs_wait() {
        let options = PlayOptions {
            manual_clock: true,
            ..PlayOptions::default()
        };
        let out = play(manor(), options, "start\n1\n");
        assert!(!out.contains("1. "));

        let out = play(manor(), options, "start\nwait 60000\n");
        assert!(out.contains("1. "));
    }

    fn json_frames(scenario: Scenario, config: EngineConfig, script: &str) -> Vec<serde_json::Value> {
        let dispatcher = Dispatcher::new(scenario, config);
        let options = PlayOptions {
            json: true,
            ..PlayOptions::default()
        };
        let mut out = Vec::new();
        session(dispatcher, options, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn scare_up(frame: &serde_json::Value) -> bool {
        frame["snapshot"]["scare_active"].as_bool().unwrap()
    }

    #[test]
    fn grid_scare_raises_then_clears_over_turns() {
        let house = Scenario::from(demo::haunted_house().unwrap());
        // Frames: menu, start, d, d, d (onto the scare cell), a, a.
        let frames = json_frames(house, EngineConfig::default(), "start\nd\nd\nd\na\na\n");
        assert_eq!(frames.len(), 7);
        assert!(!scare_up(&frames[3]));
        assert!(scare_up(&frames[4]));
        assert!(scare_up(&frames[5]));
        assert!(!scare_up(&frames[6]));
    }

    #[test]
    fn jump_scare_node_raises_without_wait() {
        // Foyer -> study -> take the key, which leads to the jump-scare node.
        let frames = json_frames(manor(), EngineConfig::default(), "start\n1\n1\n");
        let last = frames.last().unwrap();
        assert_eq!(last["snapshot"]["position"]["node"], 3);
        assert!(scare_up(last));
    }

    #[test]
    fn zero_reveal_delay_still_shows_choices() {
        let config = EngineConfig::default().with_reveal_ms_per_char(0);
        let frames = json_frames(manor(), config, "start\n1\n");
        assert_eq!(frames[1]["snapshot"]["choices_ready"], true);
        assert_eq!(frames[2]["snapshot"]["position"]["node"], 1);
        assert_eq!(frames[2]["snapshot"]["choices_ready"], true);
    }

    #[test]
    fn quit_stops_reading() {
        let out = play(manor(), PlayOptions::default(), "quit\nstart\n");
        assert_eq!(out.matches("DREADMOOR").count(), 1);
        assert!(!out.contains("Health"));
    }

    #[test]
    fn unknown_input_is_reported_in_text_mode_only() {
        let out = play(manor(), PlayOptions::default(), "dance\n");
        assert!(out.contains("Unknown command 'dance'"));

        let json = PlayOptions {
            json: true,
            ..PlayOptions::default()
        };
        let out = play(manor(), json, "dance\n");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn json_lines_carry_notifications() {
        let json = PlayOptions {
            json: true,
            ..PlayOptions::default()
        };
        let out = play(manor(), json, "start\n2\n");
        let last: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
        assert_eq!(last["scene"], "active");
        assert_eq!(last["outcome"], "no_op");
        assert_eq!(last["notifications"][0]["kind"], "missing_requirement");
    }
}
