//! Roll-up configuration for a score tracker.
//!
//! Values are set once at setup time. Anything out of range is clamped
//! rather than rejected, so a tracker can always be built.

use log::warn;
use serde::Deserialize;

/// Slowest allowed roll cadence (steps per second)
pub const MIN_TICKS_PER_SECOND: u32 = 1;
/// Fastest allowed roll cadence (steps per second)
pub const MAX_TICKS_PER_SECOND: u32 = 60;

/// Setup-time configuration for a score tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Animate the displayed score toward the target instead of jumping
    pub use_roll_animation: bool,
    /// Amount the displayed score moves per roll step
    pub step_size: i32,
    /// Number of roll steps per second
    pub ticks_per_second: u32,
    /// Score both displayed and target start at
    pub initial_score: i32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            use_roll_animation: true,
            step_size: 1,
            ticks_per_second: 10,
            initial_score: 0,
        }
    }
}

impl ScoreConfig {
    /// Config with roll-up disabled: every change shows up immediately
    pub fn instant() -> Self {
        Self {
            use_roll_animation: false,
            ..Self::default()
        }
    }

    pub fn with_step_size(mut self, step_size: i32) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_ticks_per_second(mut self, ticks_per_second: u32) -> Self {
        self.ticks_per_second = ticks_per_second;
        self
    }

    pub fn with_initial_score(mut self, initial_score: i32) -> Self {
        self.initial_score = initial_score;
        self
    }

    /// Parse a config from JSON. Missing fields fall back to defaults.
    ///
    /// The result is already sanitized.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: ScoreConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid score config: {}", e))?;
        Ok(config.sanitized())
    }

    /// Clamp every field into its valid range, warning about each change
    pub fn sanitized(self) -> Self {
        let mut config = self;

        if config.step_size < 1 {
            warn!("step_size {} is below 1, using 1", config.step_size);
            config.step_size = 1;
        }

        let tps = config
            .ticks_per_second
            .clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND);
        if tps != config.ticks_per_second {
            warn!(
                "ticks_per_second {} outside {}..={}, using {}",
                config.ticks_per_second, MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND, tps
            );
            config.ticks_per_second = tps;
        }

        if config.initial_score < 0 {
            warn!("initial_score {} is negative, using 0", config.initial_score);
            config.initial_score = 0;
        }

        config
    }

    /// Seconds that must pass between two roll steps
    pub fn step_interval(&self) -> f32 {
        1.0 / self.ticks_per_second as f32
    }
}
