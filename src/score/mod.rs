mod config;
mod roll;

pub use config::{MAX_TICKS_PER_SECOND, MIN_TICKS_PER_SECOND, ScoreConfig};
pub use roll::{ScoreEffects, ScoreRoll};
