//! Text labels that mirror a tracker's displayed score.
//!
//! A label is a `(prefix, Text entity)` pair. The tracker does not own the
//! text entity; it only overwrites its string.

use bevy::prelude::*;

/// Binds one text entity to a score tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLabel {
    /// Written in front of the number, e.g. `"Score: "`
    pub prefix: String,
    /// Entity carrying the `Text` to overwrite
    pub text: Entity,
}

impl ScoreLabel {
    pub fn new(prefix: impl Into<String>, text: Entity) -> Self {
        Self {
            prefix: prefix.into(),
            text,
        }
    }

    /// The exact string this label shows for `score`
    pub fn render(&self, score: i32) -> String {
        format_label(&self.prefix, score)
    }
}

/// Prefix followed by the plain decimal score (no padding, no separators)
pub fn format_label(prefix: &str, score: i32) -> String {
    format!("{}{}", prefix, score)
}

/// Write `score` into every bound text, in binding order
pub fn write_labels(labels: &[ScoreLabel], score: i32, texts: &mut Query<&mut Text>) {
    for label in labels {
        match texts.get_mut(label.text) {
            Ok(mut text) => text.0 = label.render(score),
            Err(_) => warn!("Score label {:?} has no Text to write into", label.text),
        }
    }
}
