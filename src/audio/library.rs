//! Decoded sound clips, loaded once at startup

use crate::core::error::{JudoError, Result};
use crate::tasks::catalog::TaskDatabase;
use ahash::AHashMap;
use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// PCM samples of one clip
#[derive(Debug, Clone)]
pub struct SoundClip {
    samples: Arc<[i16]>,
    channels: u16,
    sample_rate: u32,
}

impl SoundClip {
    pub fn new(samples: Vec<i16>, channels: u16, sample_rate: u32) -> Self {
        Self {
            samples: samples.into(),
            channels,
            sample_rate,
        }
    }

    /// Decode an audio file completely
    pub fn decode(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| JudoError::Audio(format!("{}: {}", path.display(), e)))?;
        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let samples: Vec<i16> = decoder.collect();
        Ok(Self::new(samples, channels, sample_rate))
    }

    pub fn duration(&self) -> Duration {
        if self.channels == 0 || self.sample_rate == 0 {
            return Duration::ZERO;
        }
        let frames = self.samples.len() as f64 / self.channels as f64;
        Duration::from_secs_f64(frames / self.sample_rate as f64)
    }

    /// Source ready to be appended to a sink
    pub fn source(&self) -> SamplesBuffer<i16> {
        SamplesBuffer::new(self.channels, self.sample_rate, self.samples.to_vec())
    }
}

/// Clips keyed by their path relative to the media directory
#[derive(Debug, Clone, Default)]
pub struct SoundLibrary {
    clips: AHashMap<PathBuf, SoundClip>,
}

impl SoundLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode every announcement plus the accomplishment sound
    pub fn load(db: &TaskDatabase, media_dir: &Path) -> Result<Self> {
        let mut library = Self::new();
        let sounds = db
            .all_tasks()
            .map(|task| task.announcement.as_path())
            .chain(std::iter::once(db.accomplishment()));

        for relative in sounds {
            let clip = SoundClip::decode(&media_dir.join(relative))?;
            tracing::debug!(
                "Decoded {} ({:.2}s)",
                relative.display(),
                clip.duration().as_secs_f32()
            );
            library.insert(relative.to_path_buf(), clip);
        }

        Ok(library)
    }

    pub fn insert(&mut self, path: PathBuf, clip: SoundClip) {
        self.clips.insert(path, clip);
    }

    pub fn get(&self, path: &Path) -> Option<&SoundClip> {
        self.clips.get(path)
    }

    pub fn duration(&self, path: &Path) -> Option<Duration> {
        self.get(path).map(SoundClip::duration)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
