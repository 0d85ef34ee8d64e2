//! Progress indicator and end-of-session grading

use crate::core::config::GradeThresholds;
use crate::game::state::State;
use std::path::PathBuf;
use std::time::Duration;

/// Number of hourglass images the remaining time is quantized into
pub const PROGRESS_STAGES: usize = 8;

/// Path of the hourglass image for a progress stage
pub fn hourglass_asset(stage: usize) -> PathBuf {
    PathBuf::from(format!("hourglass/{}.png", stage))
}

/// Quantize elapsed time into `0..stages`
///
/// Stage 0 is a full hourglass; the last stage is shown until the session ends.
pub fn progress_stage(elapsed: Duration, length: Duration, stages: usize) -> usize {
    if stages == 0 || length.is_zero() {
        return 0;
    }
    let fraction = elapsed.as_secs_f64() / length.as_secs_f64();
    let stage = (fraction * stages as f64).floor() as usize;
    stage.min(stages - 1)
}

/// Progress stage for the current state of a session
pub fn session_stage(state: &State) -> usize {
    progress_stage(state.game_time, state.session_length(), PROGRESS_STAGES)
}

/// Medal tiers on the summary screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    Bronze,
    Silver,
    Gold,
}

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::Bronze, Grade::Silver, Grade::Gold];

    /// Highest tier whose threshold the score reaches
    pub fn for_score(score: u32, thresholds: &GradeThresholds) -> Option<Grade> {
        if score >= thresholds.gold {
            Some(Grade::Gold)
        } else if score >= thresholds.silver {
            Some(Grade::Silver)
        } else if score >= thresholds.bronze {
            Some(Grade::Bronze)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Grade::Bronze => "Bronze",
            Grade::Silver => "Silver",
            Grade::Gold => "Gold",
        }
    }

    pub fn medal_asset(&self) -> PathBuf {
        PathBuf::from(format!("medals/{}.png", self.name().to_lowercase()))
    }
}
