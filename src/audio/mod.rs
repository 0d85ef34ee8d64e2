//! Sound playback
//!
//! The state machine only needs to start a clip and know how long it lasts;
//! `SoundPlayer` is that seam. `RodioPlayer` is the real implementation.

pub mod library;
pub mod player;

use std::path::Path;
use std::time::Duration;

pub use library::{SoundClip, SoundLibrary};
pub use player::RodioPlayer;

/// Plays media clips and reports their length
pub trait SoundPlayer {
    /// Start a task announcement, replacing any announcement still playing
    fn play_announcement(&mut self, asset: &Path) -> Duration;

    /// Start the accomplishment jingle
    fn play_accomplishment(&mut self, asset: &Path) -> Duration;
}
