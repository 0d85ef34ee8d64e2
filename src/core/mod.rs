pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GameConfig, GradeThresholds, PadLayout};
pub use error::{JudoError, Result};
pub use types::{Button, ButtonSet};
