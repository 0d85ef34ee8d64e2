//! Judo Dance - practice judo techniques on a dance pad
//!
//! Announces a technique, waits for the player to step its position on the
//! pad, scores it, then asks for a cool-down before the next technique.

pub mod app;
pub mod audio;
pub mod core;
pub mod game;
pub mod input;
pub mod renderer;
pub mod tasks;
pub mod ui;
