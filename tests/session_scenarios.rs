//! Game session integration tests
//!
//! Drive complete sessions through the public API with a manual clock and a
//! sound player that only reports fixed clip lengths.

use judo_dance::audio::SoundPlayer;
use judo_dance::core::clock::{Clock, ManualClock};
use judo_dance::core::types::{Button, ButtonSet};
use judo_dance::game::{Event, EventProcessor, EventQueue, GameSession, State};
use judo_dance::tasks::{create_task_database, Task, TaskDatabase, TaskId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};
use std::time::Duration;

const ANNOUNCEMENT: Duration = Duration::from_secs(2);
const JINGLE: Duration = Duration::from_secs(1);
const SLACK: Duration = Duration::from_secs(5);

#[derive(Default)]
struct CountingPlayer {
    announcements: Vec<PathBuf>,
    accomplishments: usize,
}

impl SoundPlayer for CountingPlayer {
    fn play_announcement(&mut self, asset: &Path) -> Duration {
        self.announcements.push(asset.to_path_buf());
        ANNOUNCEMENT
    }

    fn play_accomplishment(&mut self, _asset: &Path) -> Duration {
        self.accomplishments += 1;
        JINGLE
    }
}

type TestSession = GameSession<ManualClock, ChaCha8Rng, CountingPlayer>;

fn cross_up() -> ButtonSet {
    ButtonSet::from([Button::Cross, Button::Up])
}

fn single_task_db() -> TaskDatabase {
    let a = Task::from_slug("A", "a", cross_up(), 1);
    let cool_down = Task::from_slug("Cool down", "cool_down", ButtonSet::EMPTY, 0);
    TaskDatabase::new(vec![a], cool_down, PathBuf::from("accomplished.ogg"))
        .unwrap()
        .with_reminder_slack(SLACK)
}

fn start(db: TaskDatabase, length: Duration) -> (TestSession, ManualClock) {
    let clock = ManualClock::new();
    let session = GameSession::start(
        db,
        length,
        clock.clone(),
        ChaCha8Rng::seed_from_u64(1),
        CountingPlayer::default(),
    );
    (session, clock)
}

/// Pop events one by one until the queue is empty, collecting them
fn step_all(session: &mut TestSession) -> Vec<Event> {
    let mut handled = Vec::new();
    while let Some(event) = session.step() {
        handled.push(event);
    }
    handled
}

#[test]
fn test_accomplish_then_cool_down() {
    let (mut session, clock) = start(single_task_db(), Duration::from_secs(60));
    assert_eq!(session.state().task, TaskId::Technique(0));
    step_all(&mut session);

    session.push(Event::ButtonsChanged(cross_up()));
    session.push(Event::Tick);
    session.step();
    session.step();

    assert!(session.state().accomplished);
    assert!(session.state().next_reminder.is_none());
    assert!(session.queue().contains(&Event::Accomplished));

    session.step();
    assert_eq!(session.processor().sound().accomplishments, 1);
    assert_eq!(session.state().accomplished_played, Some(clock.now() + JINGLE));

    // Jingle still playing: nothing happens
    clock.advance(JINGLE / 2);
    session.frame([]);
    assert_eq!(session.state().task, TaskId::Technique(0));
    assert_eq!(session.state().score, 0);

    clock.advance(JINGLE / 2);
    session.push(Event::Tick);
    let handled = step_all(&mut session);
    assert_eq!(
        handled,
        vec![Event::Tick, Event::TaskDone, Event::NeedToAnnounce]
    );
    assert_eq!(session.state().task, TaskId::CoolDown);
    assert_eq!(session.state().score, 1);
    assert!(!session.state().accomplished);
    assert!(session.state().accomplished_played.is_none());
    assert_eq!(session.state().next_reminder, Some(clock.now() + SLACK));
}

#[test]
fn test_full_round_trip_back_to_technique() {
    let (mut session, _clock) = start(single_task_db(), Duration::from_secs(60));
    session.frame([Event::ButtonsChanged(cross_up())]);
    assert!(session.state().accomplished);

    session.frame([]);
    // The jingle has not finished yet
    assert_eq!(session.state().task, TaskId::Technique(0));

    let clock = session.processor().clock().clone();
    clock.advance(JINGLE);
    session.frame([]);
    assert_eq!(session.state().task, TaskId::CoolDown);
    // Still on the pad, so the cool-down is not done
    session.frame([]);
    assert_eq!(session.state().task, TaskId::CoolDown);

    // Stepping off finishes the cool-down in the same frame
    session.frame([Event::ButtonsChanged(ButtonSet::EMPTY)]);
    assert_eq!(session.state().task, TaskId::Technique(0));
    assert_eq!(session.state().score, 1);
    assert_eq!(session.processor().sound().announcements.len(), 2);
    assert_eq!(session.processor().sound().accomplishments, 1);
}

#[test]
fn test_game_over_freezes_score() {
    let (mut session, clock) = start(single_task_db(), Duration::from_secs(10));
    session.frame([]);

    clock.advance(Duration::from_secs(11));
    session.push(Event::Tick);
    let handled = step_all(&mut session);
    assert_eq!(handled, vec![Event::Tick, Event::GameOver]);
    assert!(session.state().game_over);
    assert!(session.state().game_time <= session.state().session_length());

    let task = session.state().task;
    session.frame([Event::ButtonsChanged(cross_up())]);
    clock.advance(Duration::from_secs(30));
    session.frame([]);

    assert!(session.state().game_over);
    assert_eq!(session.state().score, 0);
    assert_eq!(session.state().task, task);
    assert!(!session.state().accomplished);
}

#[test]
fn test_game_end_is_exclusive() {
    let (mut session, clock) = start(single_task_db(), Duration::from_secs(10));
    session.frame([]);

    clock.advance(Duration::from_secs(10));
    session.frame([]);
    assert!(!session.state().game_over);
    assert_eq!(session.state().game_time, Duration::from_secs(10));

    clock.advance(Duration::from_millis(1));
    session.frame([]);
    assert!(session.state().game_over);
}

#[test]
fn test_reminder_loop_repeats() {
    let (mut session, clock) = start(single_task_db(), Duration::from_secs(600));
    session.frame([]);
    assert_eq!(session.processor().sound().announcements.len(), 1);

    for round in 1..=4 {
        let due = session
            .state()
            .next_reminder
            .expect("reminder scheduled while the task is open");
        assert_eq!(due, clock.now() + ANNOUNCEMENT + SLACK);

        clock.advance(ANNOUNCEMENT + SLACK - Duration::from_millis(1));
        session.frame([]);
        assert_eq!(session.processor().sound().announcements.len(), round);

        clock.advance(Duration::from_millis(1));
        session.frame([]);
        assert_eq!(session.processor().sound().announcements.len(), round + 1);
    }

    let sound = session.processor().sound();
    assert!(sound
        .announcements
        .iter()
        .all(|path| path == &session.database().tasks()[0].announcement));
}

#[test]
fn test_cool_down_reminder_is_silent() {
    let (mut session, clock) = start(single_task_db(), Duration::from_secs(600));
    session.frame([Event::ButtonsChanged(cross_up())]);
    clock.advance(JINGLE);
    session.frame([]);
    assert_eq!(session.state().task, TaskId::CoolDown);
    let announced = session.processor().sound().announcements.len();

    clock.advance(SLACK);
    session.frame([]);
    assert_eq!(session.processor().sound().announcements.len(), announced);
    assert_eq!(session.state().next_reminder, Some(clock.now() + SLACK));
}

#[test]
fn test_buttons_held_before_first_tick() {
    let db = single_task_db();
    let clock = ManualClock::new();
    let now = clock.now();
    let mut processor = EventProcessor::new(
        clock,
        ChaCha8Rng::seed_from_u64(3),
        CountingPlayer::default(),
    );
    let mut state = State::new(TaskId::Technique(0), now, now + Duration::from_secs(60));
    let mut queue = EventQueue::new();

    queue.push(Event::ButtonsChanged(cross_up()));
    queue.push(Event::Tick);
    processor.handle(&mut state, &mut queue, &db);
    processor.handle(&mut state, &mut queue, &db);

    assert!(state.accomplished);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![Event::Accomplished]);
}

#[test]
fn test_extra_buttons_do_not_count() {
    let (mut session, _clock) = start(single_task_db(), Duration::from_secs(60));
    session.frame([Event::ButtonsChanged(cross_up().with(Button::Left))]);
    assert!(!session.state().accomplished);

    session.frame([Event::ButtonsChanged(cross_up())]);
    assert!(session.state().accomplished);
}

#[test]
fn test_quit_stops_processing() {
    let (mut session, _clock) = start(single_task_db(), Duration::from_secs(60));
    let handled = session.frame([Event::ReceivedQuit, Event::ButtonsChanged(cross_up())]);

    // NeedToAnnounce and ReceivedQuit only
    assert_eq!(handled, 2);
    assert!(session.received_quit());
    assert_eq!(session.state().active_buttons, ButtonSet::EMPTY);
    assert_eq!(session.frame([]), 0);
}

#[test]
fn test_builtin_catalog_session_scores_each_technique() {
    let (mut session, clock) = start(create_task_database(), Duration::from_secs(600));
    session.frame([]);

    for _ in 0..10 {
        let expected = session.current_task().expected_buttons;
        let delta = session.current_task().score_delta;
        let score = session.state().score;

        session.frame([Event::ButtonsChanged(expected)]);
        clock.advance(JINGLE);
        session.frame([]);
        assert_eq!(session.state().task, TaskId::CoolDown);
        assert_eq!(session.state().score, score + delta);

        session.frame([Event::ButtonsChanged(ButtonSet::EMPTY)]);
        assert!(matches!(session.state().task, TaskId::Technique(_)));
    }

    assert_eq!(session.state().score, 10);
}
