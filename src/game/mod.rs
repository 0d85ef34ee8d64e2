//! Game state machine
//!
//! Input becomes `Event`s, the `EventProcessor` folds them into the `State`,
//! and `GameSession` drives one drain per frame.

pub mod events;
pub mod processor;
pub mod session;
pub mod state;
pub mod summary;

pub use events::{Event, EventQueue};
pub use processor::EventProcessor;
pub use session::GameSession;
pub use state::State;
pub use summary::{progress_stage, session_stage, Grade, PROGRESS_STAGES};
