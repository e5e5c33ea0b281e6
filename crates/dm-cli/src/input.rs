//! Keyboard-style input parsing.

use dm_engine::Command;

/// One parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A command for the dispatcher.
    Play(Command),
    /// Let logical time pass.
    Wait(u64),
    /// Redraw the current frame.
    Look,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unknown(String),
}

const UP_VERBS: &[&str] = &["w", "up", "north"];
const DOWN_VERBS: &[&str] = &["s", "down", "south"];
const LEFT_VERBS: &[&str] = &["a", "left", "west"];
const RIGHT_VERBS: &[&str] = &["d", "right", "east"];
const GRAB_VERBS: &[&str] = &["g", "grab", "take", "pick", "space"];
const START_VERBS: &[&str] = &["start", "begin", "play"];
const RESET_VERBS: &[&str] = &["reset", "r", "restart"];
const SOUND_VERBS: &[&str] = &["sound", "m", "mute"];
const WAIT_VERBS: &[&str] = &["wait", "z"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const HELP_VERBS: &[&str] = &["help", "h", "?"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit"];

/// Milliseconds a bare `wait` lets pass.
pub const DEFAULT_WAIT_MS: u64 = 1000;

/// Parse one line of input.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    // A bare Enter grabs, like the Space/Enter keys on the board.
    if line.is_empty() {
        return Input::Play(Command::Grab);
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let verb = verb.as_str();

    if let Ok(n) = verb.parse::<usize>() {
        return match n.checked_sub(1) {
            Some(index) => Input::Play(Command::SelectChoice(index)),
            None => Input::Unknown(line.to_string()),
        };
    }

    let step = |dx, dy| Input::Play(Command::Move { dx, dy });
    if UP_VERBS.contains(&verb) {
        step(0, -1)
    } else if DOWN_VERBS.contains(&verb) {
        step(0, 1)
    } else if LEFT_VERBS.contains(&verb) {
        step(-1, 0)
    } else if RIGHT_VERBS.contains(&verb) {
        step(1, 0)
    } else if GRAB_VERBS.contains(&verb) {
        Input::Play(Command::Grab)
    } else if START_VERBS.contains(&verb) {
        Input::Play(Command::Start)
    } else if RESET_VERBS.contains(&verb) {
        Input::Play(Command::Reset)
    } else if SOUND_VERBS.contains(&verb) {
        Input::Play(Command::ToggleSound)
    } else if WAIT_VERBS.contains(&verb) {
        parse_wait(words.get(1).copied(), line)
    } else if LOOK_VERBS.contains(&verb) {
        Input::Look
    } else if HELP_VERBS.contains(&verb) {
        Input::Help
    } else if QUIT_VERBS.contains(&verb) {
        Input::Quit
    } else {
        Input::Unknown(line.to_string())
    }
}

fn parse_wait(amount: Option<&str>, line: &str) -> Input {
    match amount {
        None => Input::Wait(DEFAULT_WAIT_MS),
        Some(ms) => ms
            .parse()
            .map_or_else(|_| Input::Unknown(line.to_string()), Input::Wait),
    }
}

/// The help text.
pub fn help_text() -> &'static str {
    "Commands\n\
     start - leave the title screen\n\
     w/a/s/d (or up/left/down/right) - move\n\
     g, grab or an empty line (Enter) - pick up what is underfoot\n\
     1..9 - take a story choice\n\
     wait [ms] - let time pass\n\
     sound - toggle sound\n\
     look - redraw the screen\n\
     reset - start over\n\
     help - show this list\n\
     quit - leave"
}
