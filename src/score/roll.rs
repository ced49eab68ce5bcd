//! Engine-free score roll-up state machine.
//!
//! `ScoreRoll` never touches labels or listeners itself. Each operation
//! returns a [`ScoreEffects`] describing what the host has to do next, so
//! the same logic runs inside Bevy systems and in plain unit tests.

use log::debug;

use super::config::ScoreConfig;

/// Side effects requested by a single `ScoreRoll` operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreEffects {
    /// Bound labels must be rewritten with the displayed score
    pub refresh_labels: bool,
    /// A roll-up animation was requested
    pub roll_started: bool,
    /// The displayed score changed to this value and listeners should hear it
    pub updated: Option<i32>,
}

impl ScoreEffects {
    /// Nothing to do
    pub fn none() -> Self {
        Self::default()
    }

    /// True when the operation asked for no side effects at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Displayed score, target score and the roll-up accumulator
#[derive(Debug, Clone)]
pub struct ScoreRoll {
    config: ScoreConfig,
    /// What the player sees (may lag behind `target` while rolling)
    displayed: i32,
    /// The real accumulated score
    target: i32,
    /// Seconds accumulated since the last roll step
    elapsed: f32,
}

impl Default for ScoreRoll {
    fn default() -> Self {
        Self::new(ScoreConfig::default())
    }
}

impl ScoreRoll {
    pub fn new(config: ScoreConfig) -> Self {
        let config = config.sanitized();
        Self {
            config,
            displayed: config.initial_score,
            target: config.initial_score,
            elapsed: 0.0,
        }
    }

    // === Queries ===

    pub fn displayed(&self) -> i32 {
        self.displayed
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Is the displayed score still catching up with the target?
    pub fn is_rolling(&self) -> bool {
        self.config.use_roll_animation && self.displayed != self.target
    }

    // === Mutations ===

    /// Set the target score outright.
    ///
    /// With `use_roll_up` (and roll animation enabled) the displayed score is
    /// left where it is and later ticks carry it over. Otherwise it jumps to
    /// `value` at once. Labels are always refreshed, even if that shows a
    /// stale value. Listeners only hear about the jump when roll animation
    /// is disabled. `value` is not clamped.
    pub fn set_score(&mut self, value: i32, use_roll_up: bool) -> ScoreEffects {
        self.target = value;

        if use_roll_up && self.config.use_roll_animation {
            debug!("score target set to {} (rolling from {})", value, self.displayed);
            return ScoreEffects {
                refresh_labels: true,
                ..ScoreEffects::none()
            };
        }

        self.displayed = value;
        debug!("score set to {}", value);
        ScoreEffects {
            refresh_labels: true,
            roll_started: false,
            updated: (!self.config.use_roll_animation).then_some(value),
        }
    }

    /// Add (or with a negative `delta`, remove) points. The target never
    /// drops below zero.
    pub fn add_points(&mut self, delta: i32) -> ScoreEffects {
        self.target = self.target.saturating_add(delta).max(0);

        if self.config.use_roll_animation {
            debug!("rolling toward {}", self.target);
            return ScoreEffects {
                roll_started: true,
                ..ScoreEffects::none()
            };
        }

        self.displayed = self.displayed.saturating_add(delta).max(0);
        ScoreEffects {
            refresh_labels: true,
            roll_started: false,
            updated: Some(self.displayed),
        }
    }

    /// Advance the roll-up by one frame.
    ///
    /// Moves at most one step per call, however large `delta_secs` is.
    /// The final step is clamped so the displayed score lands exactly on
    /// the target instead of overshooting it.
    pub fn tick(&mut self, delta_secs: f32) -> ScoreEffects {
        if !self.is_rolling() {
            return ScoreEffects::none();
        }

        self.elapsed += delta_secs;
        if self.elapsed <= self.config.step_interval() {
            return ScoreEffects::none();
        }
        self.elapsed = 0.0;

        let step = self.config.step_size;
        self.displayed = if self.displayed < self.target {
            self.displayed.saturating_add(step).min(self.target)
        } else {
            self.displayed.saturating_sub(step).max(self.target)
        };

        let settled = self.displayed == self.target;
        if settled {
            debug!("score roll settled at {}", self.displayed);
        }

        ScoreEffects {
            refresh_labels: true,
            roll_started: false,
            updated: settled.then_some(self.displayed),
        }
    }
}
