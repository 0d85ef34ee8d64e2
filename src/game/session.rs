//! Frame driver for one game session

use crate::audio::SoundPlayer;
use crate::core::clock::Clock;
use crate::game::events::{Event, EventQueue};
use crate::game::processor::EventProcessor;
use crate::game::state::State;
use crate::tasks::catalog::{Task, TaskDatabase};
use rand::Rng;
use std::time::Duration;

/// A running session: database, state, pending events and the processor
pub struct GameSession<C, R, S> {
    db: TaskDatabase,
    state: State,
    queue: EventQueue,
    processor: EventProcessor<C, R, S>,
}

impl<C: Clock, R: Rng, S: SoundPlayer> GameSession<C, R, S> {
    /// Start a session lasting `length` from now
    ///
    /// The first task is drawn at random from the techniques and the queue
    /// is seeded with one `NeedToAnnounce`.
    pub fn start(db: TaskDatabase, length: Duration, clock: C, rng: R, sound: S) -> Self {
        let mut processor = EventProcessor::new(clock, rng, sound);
        let initial = processor.random_technique(&db);
        let game_start = processor.clock().now();
        let state = State::new(initial, game_start, game_start + length);

        let mut queue = EventQueue::new();
        queue.push(Event::NeedToAnnounce);

        tracing::info!(
            "Session started: {} techniques, {}s, first task {}",
            db.tasks().len(),
            length.as_secs(),
            db.get(initial).name
        );

        Self {
            db,
            state,
            queue,
            processor,
        }
    }

    /// Run one frame: enqueue the input events and a `Tick`, then drain
    ///
    /// Does nothing once the player has quit. Returns the number of events
    /// handled.
    pub fn frame<I>(&mut self, inputs: I) -> usize
    where
        I: IntoIterator<Item = Event>,
    {
        if self.state.received_quit {
            return 0;
        }
        self.queue.extend(inputs);
        self.queue.push(Event::Tick);
        self.processor
            .drain(&mut self.state, &mut self.queue, &self.db)
    }

    /// Enqueue an event without draining
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Handle a single pending event
    pub fn step(&mut self) -> Option<Event> {
        self.processor
            .handle(&mut self.state, &mut self.queue, &self.db)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    pub fn database(&self) -> &TaskDatabase {
        &self.db
    }

    pub fn current_task(&self) -> &Task {
        self.db.get(self.state.task)
    }

    pub fn received_quit(&self) -> bool {
        self.state.received_quit
    }

    pub fn processor(&self) -> &EventProcessor<C, R, S> {
        &self.processor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::tasks::catalog::create_task_database;
    use crate::tasks::TaskId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::path::Path;

    struct FixedPlayer;

    impl SoundPlayer for FixedPlayer {
        fn play_announcement(&mut self, _asset: &Path) -> Duration {
            Duration::from_secs(2)
        }

        fn play_accomplishment(&mut self, _asset: &Path) -> Duration {
            Duration::from_secs(1)
        }
    }

    fn session() -> (GameSession<ManualClock, ChaCha8Rng, FixedPlayer>, ManualClock) {
        let clock = ManualClock::new();
        let session = GameSession::start(
            create_task_database(),
            Duration::from_secs(30),
            clock.clone(),
            ChaCha8Rng::seed_from_u64(42),
            FixedPlayer,
        );
        (session, clock)
    }

    #[test]
    fn test_start_seeds_announcement_and_technique() {
        let (session, clock) = session();
        assert!(matches!(session.state().task, TaskId::Technique(_)));
        assert_eq!(session.queue().iter().copied().collect::<Vec<_>>(), vec![Event::NeedToAnnounce]);
        assert_eq!(session.state().game_start, clock.now());
        assert_eq!(session.state().session_length(), Duration::from_secs(30));
    }

    #[test]
    fn test_frame_drains_queue() {
        let (mut session, _) = session();
        let handled = session.frame([]);
        // NeedToAnnounce + Tick
        assert_eq!(handled, 2);
        assert!(session.queue().is_empty());
        assert!(session.state().next_reminder.is_some());
    }

    #[test]
    fn test_frame_after_quit_does_nothing() {
        let (mut session, _) = session();
        session.frame([Event::ReceivedQuit]);
        assert!(session.received_quit());
        assert_eq!(session.frame([]), 0);
    }

    #[test]
    fn test_same_seed_same_first_task() {
        let (a, _) = session();
        let (b, _) = session();
        assert_eq!(a.state().task, b.state().task);
    }
}
