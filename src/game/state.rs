//! Mutable session state

use crate::core::types::ButtonSet;
use crate::tasks::catalog::TaskId;
use std::time::{Duration, Instant};

/// Global state of one game session
///
/// Only the event processor mutates it; renderers read it once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Set once the player asked to quit
    pub received_quit: bool,
    /// Task the player currently has to perform
    pub task: TaskId,
    /// When the current task should be announced again
    pub next_reminder: Option<Instant>,
    /// Currently pressed buttons
    pub active_buttons: ButtonSet,
    /// The current task's buttons have been matched
    pub accomplished: bool,
    /// When the accomplishment sound finishes playing
    pub accomplished_played: Option<Instant>,
    pub score: u32,
    pub game_start: Instant,
    pub game_end: Instant,
    /// Time elapsed since `game_start`, never beyond `game_end - game_start`
    pub game_time: Duration,
    /// The session time is up; the summary screen replaces the play field
    pub game_over: bool,
}

impl State {
    pub fn new(initial_task: TaskId, game_start: Instant, game_end: Instant) -> Self {
        debug_assert!(game_start <= game_end);
        Self {
            received_quit: false,
            task: initial_task,
            next_reminder: None,
            active_buttons: ButtonSet::EMPTY,
            accomplished: false,
            accomplished_played: None,
            score: 0,
            game_start,
            game_end,
            game_time: Duration::ZERO,
            game_over: false,
        }
    }

    /// Total length of the session
    pub fn session_length(&self) -> Duration {
        self.game_end.saturating_duration_since(self.game_start)
    }

    pub fn remaining(&self) -> Duration {
        self.session_length().saturating_sub(self.game_time)
    }
}
