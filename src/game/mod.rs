pub mod messages;
pub mod score;
pub mod systems;
pub mod writer;

pub use messages::{ScoreRollStarted, ScoreUpdated};
pub use score::GameScore;
pub use systems::{init_score_labels, roll_scores};
pub use writer::ScoreWriter;
