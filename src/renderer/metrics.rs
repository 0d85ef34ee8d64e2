//! Frame timing metrics.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of frames the averages are computed over
const WINDOW: usize = 120;

/// Tracks frame times and how many events each frame handled.
pub struct RenderMetrics {
    frame_times: VecDeque<Duration>,
    last_frame_start: Instant,
    pub events_handled: usize,
    pub max_events_per_frame: usize,
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(WINDOW),
            last_frame_start: Instant::now(),
            events_handled: 0,
            max_events_per_frame: 0,
        }
    }

    /// Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.last_frame_start = Instant::now();
        self.events_handled = 0;
    }

    /// Call at the end of each frame.
    pub fn end_frame(&mut self) {
        let elapsed = self.last_frame_start.elapsed();
        self.frame_times.push_back(elapsed);
        if self.frame_times.len() > WINDOW {
            self.frame_times.pop_front();
        }
    }

    /// Record how many events the session drained this frame.
    pub fn record_events(&mut self, count: usize) {
        self.events_handled += count;
        self.max_events_per_frame = self.max_events_per_frame.max(self.events_handled);
    }

    /// Average frame time in milliseconds over the recent window.
    pub fn avg_frame_time_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let sum: Duration = self.frame_times.iter().sum();
        sum.as_secs_f32() * 1000.0 / self.frame_times.len() as f32
    }

    pub fn fps(&self) -> f32 {
        let ms = self.avg_frame_time_ms();
        if ms > 0.0 {
            1000.0 / ms
        } else {
            0.0
        }
    }

    pub fn max_frame_time_ms(&self) -> f32 {
        self.frame_times
            .iter()
            .max()
            .map(|d| d.as_secs_f32() * 1000.0)
            .unwrap_or(0.0)
    }

    pub fn last_frame_time_ms(&self) -> f32 {
        self.frame_times
            .back()
            .map(|d| d.as_secs_f32() * 1000.0)
            .unwrap_or(0.0)
    }
}
