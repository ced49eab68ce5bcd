// game/score.rs

use bevy::prelude::*;

use crate::{
    score::{ScoreConfig, ScoreEffects, ScoreRoll},
    visual::ui::ScoreLabel,
};

/// Score tracker attached to a game entity.
///
/// Mutate it through [`ScoreWriter`](super::ScoreWriter) so labels and
/// listeners stay in sync; the component itself only exposes queries.
#[derive(Component, Debug, Clone, Default)]
pub struct GameScore {
    roll: ScoreRoll,
    /// Label bindings, refreshed in this order
    labels: Vec<ScoreLabel>,
}

impl GameScore {
    pub fn new(config: ScoreConfig) -> Self {
        Self {
            roll: ScoreRoll::new(config),
            labels: Vec::new(),
        }
    }

    /// Bind a text entity that will show `prefix` followed by the score
    pub fn with_label(mut self, prefix: impl Into<String>, text: Entity) -> Self {
        self.labels.push(ScoreLabel::new(prefix, text));
        self
    }

    /// Score currently shown to the player
    pub fn displayed(&self) -> i32 {
        self.roll.displayed()
    }

    /// Score the display is heading toward
    pub fn target(&self) -> i32 {
        self.roll.target()
    }

    pub fn is_rolling(&self) -> bool {
        self.roll.is_rolling()
    }

    pub fn config(&self) -> &ScoreConfig {
        self.roll.config()
    }

    pub fn labels(&self) -> &[ScoreLabel] {
        &self.labels
    }

    pub(crate) fn set_score(&mut self, value: i32, use_roll_up: bool) -> ScoreEffects {
        self.roll.set_score(value, use_roll_up)
    }

    pub(crate) fn add_points(&mut self, delta: i32) -> ScoreEffects {
        self.roll.add_points(delta)
    }

    pub(crate) fn tick(&mut self, delta_secs: f32) -> ScoreEffects {
        self.roll.tick(delta_secs)
    }
}
