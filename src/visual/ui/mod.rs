mod labels;

pub use labels::{ScoreLabel, format_label, write_labels};
