//! rodio-backed sound player

use crate::audio::library::SoundLibrary;
use crate::audio::SoundPlayer;
use rodio::{OutputStream, OutputStreamHandle, Sink};
use std::path::Path;
use std::time::Duration;

/// Output stream plus the handle used to open sinks
struct Output {
    // The stream must stay alive for the handle to produce sound.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Plays clips from a `SoundLibrary`
///
/// Announcements share one sink, so a new announcement cuts off the previous
/// one. Without an audio device the player stays silent but still reports
/// clip durations, which keeps game timing intact.
pub struct RodioPlayer {
    library: SoundLibrary,
    output: Option<Output>,
    announcement: Option<Sink>,
    effect: Option<Sink>,
}

impl RodioPlayer {
    /// Open the default output device, falling back to silence
    pub fn new(library: SoundLibrary) -> Self {
        let output = match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Output {
                _stream: stream,
                handle,
            }),
            Err(e) => {
                tracing::warn!("No audio output available, playing silently: {}", e);
                None
            }
        };

        Self {
            library,
            output,
            announcement: None,
            effect: None,
        }
    }

    /// Player that never opens a device
    pub fn silent(library: SoundLibrary) -> Self {
        Self {
            library,
            output: None,
            announcement: None,
            effect: None,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.output.is_none()
    }

    /// Start `asset` on a fresh sink and return the sink with the clip length
    fn start(&self, asset: &Path) -> (Option<Sink>, Duration) {
        let Some(clip) = self.library.get(asset) else {
            tracing::warn!("Sound {} was not loaded", asset.display());
            return (None, Duration::ZERO);
        };
        let duration = clip.duration();

        let Some(output) = &self.output else {
            return (None, duration);
        };

        match Sink::try_new(&output.handle) {
            Ok(sink) => {
                sink.append(clip.source());
                (Some(sink), duration)
            }
            Err(e) => {
                tracing::warn!("Failed to open sink for {}: {}", asset.display(), e);
                (None, duration)
            }
        }
    }
}

impl SoundPlayer for RodioPlayer {
    fn play_announcement(&mut self, asset: &Path) -> Duration {
        // Dropping the previous sink stops it.
        self.announcement = None;
        let (sink, duration) = self.start(asset);
        self.announcement = sink;
        duration
    }

    fn play_accomplishment(&mut self, asset: &Path) -> Duration {
        let (sink, duration) = self.start(asset);
        self.effect = sink;
        duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::library::SoundClip;
    use std::path::PathBuf;

    #[test]
    fn test_silent_player_reports_durations() {
        let mut library = SoundLibrary::new();
        library.insert(
            PathBuf::from("tasks/x/announcement.ogg"),
            SoundClip::new(vec![0; 22_050], 1, 22_050),
        );
        library.insert(
            PathBuf::from("accomplished.ogg"),
            SoundClip::new(vec![0; 11_025], 1, 22_050),
        );

        let mut player = RodioPlayer::silent(library);
        assert!(player.is_silent());
        assert_eq!(
            player.play_announcement(Path::new("tasks/x/announcement.ogg")),
            Duration::from_secs(1)
        );
        assert_eq!(
            player.play_accomplishment(Path::new("accomplished.ogg")),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn test_unknown_clip_has_zero_duration() {
        let mut player = RodioPlayer::silent(SoundLibrary::new());
        assert_eq!(player.play_announcement(Path::new("nope.ogg")), Duration::ZERO);
    }
}
