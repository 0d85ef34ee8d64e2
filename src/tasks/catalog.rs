//! Technique catalog
//!
//! Tasks are built once at startup and never mutated. Game state refers to
//! them through `TaskId`, so the database stays the single owner.

use crate::core::types::{Button, ButtonSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default pause between the end of an announcement and its reminder
pub const DEFAULT_REMINDER_SLACK: Duration = Duration::from_secs(5);

/// A technique (or the cool-down) the player has to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Human-readable name used in logs
    pub name: &'static str,
    /// Picture of the pad with the target fields highlighted
    pub expected_position: PathBuf,
    /// Audio clip naming the technique
    pub announcement: PathBuf,
    /// Buttons that must be held, and nothing else
    ///
    /// Empty means "back to the cool-down position".
    pub expected_buttons: ButtonSet,
    /// Picture illustrating the technique
    pub picture: PathBuf,
    /// Points awarded when the technique is completed
    pub score_delta: u32,
}

impl Task {
    /// Build a task whose media live under `tasks/<slug>/`
    pub fn from_slug(
        name: &'static str,
        slug: &str,
        expected_buttons: ButtonSet,
        score_delta: u32,
    ) -> Self {
        let dir = Path::new("tasks").join(slug);
        Self {
            name,
            expected_position: dir.join("keypad.png"),
            announcement: dir.join("announcement.ogg"),
            expected_buttons,
            picture: dir.join("picture.png"),
            score_delta,
        }
    }

    /// All media paths this task refers to
    pub fn assets(&self) -> [&Path; 3] {
        [
            self.expected_position.as_path(),
            self.announcement.as_path(),
            self.picture.as_path(),
        ]
    }
}

/// Reference to a task in a `TaskDatabase`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskId {
    /// The idle task between techniques
    CoolDown,
    /// Index into `TaskDatabase::tasks`
    Technique(usize),
}

impl TaskId {
    pub fn is_cool_down(&self) -> bool {
        matches!(self, TaskId::CoolDown)
    }
}

/// Immutable set of techniques plus the cool-down
#[derive(Debug, Clone)]
pub struct TaskDatabase {
    tasks: Vec<Task>,
    cool_down: Task,
    accomplishment: PathBuf,
    reminder_slack: Duration,
}

impl TaskDatabase {
    /// Assemble a database
    ///
    /// Returns an error if there are no techniques, if a technique has an
    /// empty button requirement (which is reserved for the cool-down), or if
    /// the cool-down requires any buttons.
    pub fn new(
        tasks: Vec<Task>,
        cool_down: Task,
        accomplishment: PathBuf,
    ) -> Result<Self, String> {
        if tasks.is_empty() {
            return Err("task database needs at least one technique".into());
        }
        if let Some(task) = tasks.iter().find(|t| t.expected_buttons.is_empty()) {
            return Err(format!(
                "technique {} has no expected buttons; only the cool-down may",
                task.name
            ));
        }
        if !cool_down.expected_buttons.is_empty() {
            return Err(format!(
                "cool-down must not require buttons, got {{{}}}",
                cool_down.expected_buttons
            ));
        }

        Ok(Self {
            tasks,
            cool_down,
            accomplishment,
            reminder_slack: DEFAULT_REMINDER_SLACK,
        })
    }

    pub fn with_reminder_slack(mut self, slack: Duration) -> Self {
        self.reminder_slack = slack;
        self
    }

    /// Techniques, excluding the cool-down
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn cool_down(&self) -> &Task {
        &self.cool_down
    }

    /// Sound played when a technique is accomplished
    pub fn accomplishment(&self) -> &Path {
        &self.accomplishment
    }

    pub fn reminder_slack(&self) -> Duration {
        self.reminder_slack
    }

    /// Resolve a task reference
    ///
    /// # Panics
    ///
    /// Panics if `id` is a technique index outside this database; such an id
    /// can only come from a broken state machine.
    pub fn get(&self, id: TaskId) -> &Task {
        match id {
            TaskId::CoolDown => &self.cool_down,
            TaskId::Technique(index) => &self.tasks[index],
        }
    }

    /// Ids of all techniques in catalog order
    pub fn technique_ids(&self) -> impl Iterator<Item = TaskId> {
        (0..self.tasks.len()).map(TaskId::Technique)
    }

    /// Every task, cool-down last
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().chain(std::iter::once(&self.cool_down))
    }
}

/// Build the built-in technique catalog
pub fn create_task_database() -> TaskDatabase {
    let tasks = vec![
        Task::from_slug(
            "Tai Otoshi",
            "tai_otoshi",
            ButtonSet::from([Button::Cross, Button::Circle]),
            1,
        ),
        Task::from_slug(
            "Uki Goshi (right)",
            "uki_goshi_rechts",
            ButtonSet::from([Button::Cross, Button::Up]),
            1,
        ),
        Task::from_slug(
            "Uki Goshi (left)",
            "uki_goshi_links",
            ButtonSet::from([Button::Up, Button::Circle]),
            1,
        ),
        Task::from_slug(
            "O-soto Otoshi (right)",
            "osoto_otoshi_rechts",
            ButtonSet::from([Button::Left, Button::Up]),
            1,
        ),
        Task::from_slug(
            "O-soto Otoshi (left)",
            "osoto_otoshi_links",
            ButtonSet::from([Button::Up, Button::Right]),
            1,
        ),
    ];

    let cool_down = Task::from_slug("Cool down", "cool_down", ButtonSet::EMPTY, 0);

    match TaskDatabase::new(tasks, cool_down, PathBuf::from("accomplished.ogg")) {
        Ok(db) => db,
        Err(msg) => unreachable!("built-in catalog is inconsistent: {}", msg),
    }
}
