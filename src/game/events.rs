//! Events consumed by the game state machine

use crate::core::types::ButtonSet;
use std::collections::VecDeque;
use std::fmt;

/// Everything that can happen to a session
///
/// Input translation produces `Tick`, `ReceivedQuit` and `ButtonsChanged`;
/// the processor itself produces the rest while handling earlier events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Heartbeat of the (irregular) frame clock
    Tick,
    /// The player asked to leave the game
    ReceivedQuit,
    /// The set of pressed buttons changed
    ButtonsChanged(ButtonSet),
    /// The current task's buttons were matched
    Accomplished,
    /// The task is finished including all its effects
    TaskDone,
    /// The current task has to be announced
    NeedToAnnounce,
    /// The session time is up
    GameOver,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Tick => f.write_str("Tick"),
            Event::ReceivedQuit => f.write_str("ReceivedQuit"),
            Event::ButtonsChanged(buttons) => write!(f, "ButtonsChanged({})", buttons),
            Event::Accomplished => f.write_str("Accomplished"),
            Event::TaskDone => f.write_str("TaskDone"),
            Event::NeedToAnnounce => f.write_str("NeedToAnnounce"),
            Event::GameOver => f.write_str("GameOver"),
        }
    }
}

/// FIFO work-list of pending events
///
/// Owned by the frame driver and lent to the processor, which pops from the
/// head and may push follow-up events to the tail.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: VecDeque::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, event: &Event) -> bool {
        self.events.contains(event)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}

impl Extend<Event> for EventQueue {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}
