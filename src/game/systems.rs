use bevy::prelude::*;

use crate::visual::ui::write_labels;

use super::{score::GameScore, writer::ScoreWriter};

/// System: Advance score roll-ups once per frame
pub fn roll_scores(time: Res<Time>, mut scores: ScoreWriter) {
    scores.tick_all(time.delta_secs());
}

/// System: Show the starting score on labels of newly added trackers
pub fn init_score_labels(
    added: Query<&GameScore, Added<GameScore>>,
    mut texts: Query<&mut Text>,
) {
    for score in &added {
        write_labels(score.labels(), score.displayed(), &mut texts);
    }
}
