//! Mutation entry points for [`GameScore`] trackers.

use bevy::{ecs::system::SystemParam, prelude::*};

use crate::{
    score::ScoreEffects,
    visual::ui::{ScoreLabel, write_labels},
};

use super::{
    messages::{ScoreRollStarted, ScoreUpdated},
    score::GameScore,
};

/// System param for changing scores from any system.
///
/// Labels are rewritten and messages sent before each call returns, so a
/// later system in the same frame already sees the new text.
#[derive(SystemParam)]
pub struct ScoreWriter<'w, 's> {
    scores: Query<'w, 's, (Entity, &'static mut GameScore)>,
    texts: Query<'w, 's, &'static mut Text>,
    roll_started: MessageWriter<'w, ScoreRollStarted>,
    updated: MessageWriter<'w, ScoreUpdated>,
}

impl ScoreWriter<'_, '_> {
    /// Read-only access to a tracker
    pub fn get(&self, entity: Entity) -> Option<&GameScore> {
        self.scores.get(entity).ok().map(|(_, score)| score)
    }

    /// Set the target score, optionally rolling the display up to it.
    ///
    /// Returns false if `entity` has no [`GameScore`].
    pub fn set_score(&mut self, entity: Entity, value: i32, use_roll_up: bool) -> bool {
        let Ok((_, mut score)) = self.scores.get_mut(entity) else {
            warn!("set_score on {:?} which has no GameScore", entity);
            return false;
        };

        let effects = score.set_score(value, use_roll_up);
        publish(
            entity,
            effects,
            score.displayed(),
            score.labels(),
            &mut self.texts,
            &mut self.roll_started,
            &mut self.updated,
        );
        true
    }

    /// Add points (negative to subtract). The target never goes below zero.
    ///
    /// Returns false if `entity` has no [`GameScore`].
    pub fn add_points(&mut self, entity: Entity, delta: i32) -> bool {
        let Ok((_, mut score)) = self.scores.get_mut(entity) else {
            warn!("add_points on {:?} which has no GameScore", entity);
            return false;
        };

        let effects = score.add_points(delta);
        publish(
            entity,
            effects,
            score.displayed(),
            score.labels(),
            &mut self.texts,
            &mut self.roll_started,
            &mut self.updated,
        );
        true
    }

    /// Advance every rolling tracker by one frame
    pub fn tick_all(&mut self, delta_secs: f32) {
        for (entity, mut score) in &mut self.scores {
            if !score.is_rolling() {
                continue;
            }

            let effects = score.tick(delta_secs);
            if let Some(settled) = effects.updated {
                debug!("Score {:?} settled at {}", entity, settled);
            }
            publish(
                entity,
                effects,
                score.displayed(),
                score.labels(),
                &mut self.texts,
                &mut self.roll_started,
                &mut self.updated,
            );
        }
    }
}

/// Carry out the effects of one tracker operation, labels first
fn publish(
    entity: Entity,
    effects: ScoreEffects,
    displayed: i32,
    labels: &[ScoreLabel],
    texts: &mut Query<&mut Text>,
    roll_started: &mut MessageWriter<ScoreRollStarted>,
    updated: &mut MessageWriter<ScoreUpdated>,
) {
    if effects.refresh_labels {
        write_labels(labels, displayed, texts);
    }
    if effects.roll_started {
        roll_started.write(ScoreRollStarted { entity });
    }
    if let Some(score) = effects.updated {
        updated.write(ScoreUpdated { entity, score });
    }
}
