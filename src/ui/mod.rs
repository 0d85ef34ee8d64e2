//! UI module - egui screens drawn from the session state

pub mod layout;
pub mod screen;

pub use screen::GameScreen;
