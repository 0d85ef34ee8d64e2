//! Event processor - the game state machine
//!
//! `handle` pops one event from the queue, applies it to the state and may
//! push follow-up events. Drivers call `drain` once per frame, so a single
//! `Tick` can cascade through `Accomplished`, `TaskDone` and
//! `NeedToAnnounce` within the same frame.
//!
//! Side effects go through the injected collaborators: the clock is sampled
//! once per handled event, the random source picks the next technique, and
//! the sound player starts clips and reports their lengths.

use crate::audio::SoundPlayer;
use crate::core::clock::Clock;
use crate::game::events::{Event, EventQueue};
use crate::game::state::State;
use crate::tasks::catalog::{TaskDatabase, TaskId};
use rand::Rng;
use std::time::Instant;

/// Applies events to a `State`
pub struct EventProcessor<C, R, S> {
    clock: C,
    rng: R,
    sound: S,
}

impl<C: Clock, R: Rng, S: SoundPlayer> EventProcessor<C, R, S> {
    pub fn new(clock: C, rng: R, sound: S) -> Self {
        Self { clock, rng, sound }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut S {
        &mut self.sound
    }

    /// Draw a technique uniformly at random
    pub fn random_technique(&mut self, db: &TaskDatabase) -> TaskId {
        TaskId::Technique(self.rng.gen_range(0..db.tasks().len()))
    }

    /// Handle the event at the head of the queue
    ///
    /// Returns the consumed event, or `None` if the queue was empty.
    pub fn handle(
        &mut self,
        state: &mut State,
        queue: &mut EventQueue,
        db: &TaskDatabase,
    ) -> Option<Event> {
        let event = queue.pop()?;
        let now = self.clock.now();
        tracing::trace!("Handling {}", event);

        match event {
            Event::ReceivedQuit => {
                state.received_quit = true;
            }
            Event::NeedToAnnounce => {
                self.announce(state, db, now);
            }
            Event::ButtonsChanged(buttons) => {
                state.active_buttons = buttons;
            }
            Event::Accomplished => {
                if state.task.is_cool_down() {
                    queue.push(Event::TaskDone);
                } else {
                    let duration = self.sound.play_accomplishment(db.accomplishment());
                    state.accomplished_played = Some(now + duration);
                }
            }
            Event::TaskDone => {
                self.rotate_task(state, db);
                queue.push(Event::NeedToAnnounce);
            }
            Event::GameOver => {
                if !state.game_over {
                    tracing::info!("Game over with score {}", state.score);
                }
                state.game_over = true;
            }
            Event::Tick => {
                self.tick(state, queue, db, now);
            }
        }

        Some(event)
    }

    /// Handle events until the queue is empty or the player quit
    ///
    /// Returns the number of events handled.
    pub fn drain(&mut self, state: &mut State, queue: &mut EventQueue, db: &TaskDatabase) -> usize {
        let mut handled = 0;
        while !state.received_quit && self.handle(state, queue, db).is_some() {
            handled += 1;
        }
        handled
    }

    /// Play the announcement (unless cooling down) and schedule the reminder
    fn announce(&mut self, state: &mut State, db: &TaskDatabase, now: Instant) {
        let slack = db.reminder_slack();
        if state.task.is_cool_down() {
            state.next_reminder = Some(now + slack);
        } else {
            let task = db.get(state.task);
            let duration = self.sound.play_announcement(&task.announcement);
            state.next_reminder = Some(now + duration + slack);
        }
    }

    fn rotate_task(&mut self, state: &mut State, db: &TaskDatabase) {
        if state.task.is_cool_down() {
            state.task = self.random_technique(db);
        } else {
            let finished = db.get(state.task);
            state.score += finished.score_delta;
            tracing::debug!(
                "Finished {} (+{}), score is now {}",
                finished.name,
                finished.score_delta,
                state.score
            );
            state.task = TaskId::CoolDown;
        }
        tracing::debug!("Next task: {}", db.get(state.task).name);

        state.accomplished = false;
        state.next_reminder = None;
        state.accomplished_played = None;
    }

    fn tick(&mut self, state: &mut State, queue: &mut EventQueue, db: &TaskDatabase, now: Instant) {
        if now > state.game_end {
            queue.push(Event::GameOver);
            return;
        }

        state.game_time = now.saturating_duration_since(state.game_start);

        match (state.accomplished_played, state.next_reminder) {
            (Some(played), _) if now >= played => {
                queue.push(Event::TaskDone);
            }
            (_, Some(reminder)) if now >= reminder => {
                self.announce(state, db, now);
            }
            _ => {}
        }

        // Level-triggered: buttons held before the task was announced count too.
        if !state.accomplished && state.active_buttons == db.get(state.task).expected_buttons {
            state.accomplished = true;
            state.next_reminder = None;
            queue.push(Event::Accomplished);
        }
    }
}
