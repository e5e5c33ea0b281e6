//! The single entry point for player input and clock time.

use dm_core::{Choice, Grid, ItemId, Mode, Scenario, StoryGraph, StoryNode};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::grid::{self, Direction};
use crate::notification::Notification;
use crate::player::{PlayerState, Position, Scene};
use crate::story;
use crate::timer::{RevealProgress, ScareFlag, Scheduler, TextReveal, TimerEvent, TimerQueue};
use crate::transition::{Outcome, Transition};

/// A command from the external input collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the menu and begin play.
    Start,
    /// Step one cell; exactly one of `dx`, `dy` must be ±1.
    Move {
        /// Column delta.
        dx: i32,
        /// Row delta.
        dy: i32,
    },
    /// Pick up the item underfoot.
    Grab,
    /// Take a choice on the current node (0-based).
    SelectChoice(usize),
    /// Throw the game away and start fresh.
    Reset,
    /// Flip the stored sound preference.
    ToggleSound,
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Current health.
    pub health: i32,
    /// Current sanity.
    pub sanity: i32,
    /// Held items in acquisition order.
    pub inventory: Vec<ItemId>,
    /// Current scene.
    pub scene: Scene,
    /// Story node or grid cell.
    pub position: Position,
    /// The jump-scare flag.
    pub scare_active: bool,
    /// Node text revealed so far (empty in grid mode).
    pub displayed_text: String,
    /// Whether the current node's choices can be taken.
    pub choices_ready: bool,
    /// Stored sound preference.
    pub sound_enabled: bool,
}

/// The result of one dispatch or clock advance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchOutput {
    /// State after the command.
    pub snapshot: Snapshot,
    /// Messages for the notifier.
    pub notifications: Vec<Notification>,
    /// The scene the renderer should show.
    pub scene: Scene,
    /// What the command did.
    pub outcome: Outcome,
}

#[derive(Debug)]
enum Board {
    Story(StoryGraph),
    Grid { template: Grid, live: Grid },
}

/// Routes commands to the right engine variant and owns the timers.
///
/// The dispatcher is the only mutator of player state. Commands and fired
/// timers are handled one at a time to completion.
#[derive(Debug)]
pub struct Dispatcher {
    board: Board,
    config: EngineConfig,
    state: PlayerState,
    timers: TimerQueue<TimerEvent>,
    reveal: TextReveal,
    scare: ScareFlag,
    sound_enabled: bool,
}

impl Dispatcher {
    /// A dispatcher sitting at the menu for `scenario`.
    pub fn new(scenario: Scenario, config: EngineConfig) -> Self {
        let board = match scenario {
            Scenario::Story(graph) => Board::Story(graph),
            Scenario::Grid(grid) => Board::Grid {
                live: grid.clone(),
                template: grid,
            },
        };
        let state = fresh_state(&board, &config).in_scene(Scene::Menu);
        Self {
            reveal: TextReveal::new(config.reveal_ms_per_char),
            scare: ScareFlag::new(config.scare_duration_ms),
            board,
            config,
            state,
            timers: TimerQueue::new(),
            sound_enabled: true,
        }
    }

    /// Handle one command to completion.
    pub fn dispatch(&mut self, command: Command) -> DispatchOutput {
        let (outcome, notifications) = match command {
            Command::Start if self.state.scene == Scene::Menu => {
                self.begin();
                (Outcome::Continue, Vec::new())
            }
            Command::Start => {
                debug!(scene = %self.state.scene, "start ignored outside the menu");
                (Outcome::NoOp, Vec::new())
            }
            Command::Reset => {
                self.begin();
                (Outcome::Continue, Vec::new())
            }
            Command::ToggleSound => {
                self.sound_enabled = !self.sound_enabled;
                debug!(enabled = self.sound_enabled, "sound toggled");
                (Outcome::Continue, Vec::new())
            }
            Command::Move { .. } | Command::Grab | Command::SelectChoice(_)
                if !self.state.accepts_play() =>
            {
                debug!(scene = %self.state.scene, ?command, "command ignored outside active play");
                (Outcome::NoOp, Vec::new())
            }
            Command::Move { dx, dy } => self.handle_move(dx, dy),
            Command::Grab => self.handle_grab(),
            Command::SelectChoice(index) => self.handle_choice(index),
        };
        self.output(outcome, notifications)
    }

    /// Move the clock forward by `elapsed`, firing every timer that comes due.
    ///
    /// Each fired timer is handled like a command, in deadline order.
    pub fn advance(&mut self, elapsed: u64) -> DispatchOutput {
        let target = self.timers.now().saturating_add(elapsed);
        while let Some(event) = self.timers.pop_due(target) {
            self.handle_timer(event);
        }
        self.timers.settle(target);
        self.output(Outcome::NoOp, Vec::new())
    }

    /// The current state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// The mode of the loaded scenario.
    pub fn mode(&self) -> Mode {
        match self.board {
            Board::Story(_) => Mode::Story,
            Board::Grid { .. } => Mode::Grid,
        }
    }

    /// The story node the player is on, in story mode.
    pub fn current_node(&self) -> Option<&StoryNode> {
        match &self.board {
            Board::Story(graph) => graph.node(self.state.node_id()?),
            Board::Grid { .. } => None,
        }
    }

    /// Choices the player can see right now; empty while text is revealing.
    pub fn available_choices(&self) -> &[Choice] {
        match self.current_node() {
            Some(node) if self.choices_ready() => &node.choices,
            _ => &[],
        }
    }

    /// The live map, in grid mode.
    pub fn grid(&self) -> Option<&Grid> {
        match &self.board {
            Board::Grid { live, .. } => Some(live),
            Board::Story(_) => None,
        }
    }

    /// Current logical time.
    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    /// Time until the current node's text is fully shown.
    pub fn reveal_remaining(&self) -> u64 {
        self.reveal.remaining(self.timers.now())
    }

    /// A frame for the renderer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            health: self.state.health.value(),
            sanity: self.state.sanity.value(),
            inventory: self.state.inventory.items().to_vec(),
            scene: self.state.scene,
            position: self.state.position,
            scare_active: self.scare.is_active(),
            displayed_text: self.reveal.displayed().to_string(),
            choices_ready: self.choices_ready(),
            sound_enabled: self.sound_enabled,
        }
    }

    fn choices_ready(&self) -> bool {
        matches!(self.board, Board::Story(_))
            && self.state.accepts_play()
            && self.reveal.is_complete()
    }

    fn output(&self, outcome: Outcome, notifications: Vec<Notification>) -> DispatchOutput {
        DispatchOutput {
            snapshot: self.snapshot(),
            notifications,
            scene: self.state.scene,
            outcome,
        }
    }

    /// Discard everything and start a fresh, active game.
    fn begin(&mut self) {
        self.reveal.cancel(&mut self.timers);
        self.scare.reset(&mut self.timers);
        if let Board::Grid { template, live } = &mut self.board {
            live.clone_from(template);
        }
        let previous = self.state.scene;
        self.state = fresh_state(&self.board, &self.config);
        info!(from = %previous, to = %self.state.scene, "game started");
        self.enter_current_node();
    }

    fn handle_move(&mut self, dx: i32, dy: i32) -> (Outcome, Vec<Notification>) {
        let Some(direction) = Direction::from_delta(dx, dy) else {
            debug!(dx, dy, "move ignored: not a unit cardinal step");
            return (Outcome::NoOp, Vec::new());
        };
        let Board::Grid { live, .. } = &self.board else {
            debug!("move ignored: story mode");
            return (Outcome::NoOp, Vec::new());
        };

        let movement = grid::move_player(&self.state, direction, live);
        if movement.scare_triggered && self.scare.trigger(&mut self.timers) {
            trace!("scare raised by cell");
        }
        self.commit(movement.transition)
    }

    fn handle_grab(&mut self) -> (Outcome, Vec<Notification>) {
        let Board::Grid { live, .. } = &mut self.board else {
            debug!("grab ignored: story mode");
            return (Outcome::NoOp, Vec::new());
        };
        let transition = grid::grab(&self.state, live);
        self.commit(transition)
    }

    fn handle_choice(&mut self, index: usize) -> (Outcome, Vec<Notification>) {
        let Board::Story(graph) = &self.board else {
            debug!("choice ignored: grid mode");
            return (Outcome::NoOp, Vec::new());
        };
        if !self.reveal.is_complete() {
            debug!(index, "choice withheld until the text is revealed");
            return (Outcome::NoOp, Vec::new());
        }

        let before = self.state.node_id();
        let transition = story::select_choice(&self.state, index, graph);
        let result = self.commit(transition);
        if self.state.node_id() != before {
            self.enter_current_node();
        }
        result
    }

    fn commit(&mut self, transition: Transition) -> (Outcome, Vec<Notification>) {
        let Transition {
            state,
            notifications,
            outcome,
        } = transition;
        if state.scene != self.state.scene {
            info!(from = %self.state.scene, to = %state.scene, "scene changed");
        }
        self.state = state;
        (outcome, notifications)
    }

    /// Start revealing the current node's text, replacing any reveal in flight.
    fn enter_current_node(&mut self) {
        self.scare.cancel_pending(&mut self.timers);
        let text = match (&self.board, self.state.node_id()) {
            (Board::Story(graph), Some(id)) => graph.node(id).map_or("", |n| n.text.as_str()),
            _ => return,
        };
        self.reveal.start(text, &mut self.timers);
        if self.reveal.is_complete() {
            self.reveal_completed();
        }
    }

    fn reveal_completed(&mut self) {
        if self.current_node().is_some_and(|n| n.jump_scare) {
            self.scare
                .trigger_after(self.config.scare_delay_ms, &mut self.timers);
        }
    }

    fn handle_timer(&mut self, event: TimerEvent) {
        trace!(?event, now = self.timers.now(), "timer fired");
        match event {
            TimerEvent::RevealTick => {
                if self.reveal.tick(&mut self.timers) == RevealProgress::Completed {
                    self.reveal_completed();
                }
            }
            TimerEvent::ScareTrigger => {
                self.scare.on_trigger(&mut self.timers);
            }
            TimerEvent::ScareClear => self.scare.on_clear(),
        }
    }
}

fn fresh_state(board: &Board, config: &EngineConfig) -> PlayerState {
    let position = match board {
        Board::Story(graph) => Position::Node(graph.start()),
        Board::Grid { template, .. } => Position::Cell(template.start()),
    };
    PlayerState::new(position, config.max_stat)
}
