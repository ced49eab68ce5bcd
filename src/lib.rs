//! Score tracking with optional roll-up animation for Bevy entities.
//!
//! Attach a [`GameScore`](game::GameScore) to an entity, bind any number of
//! `Text` entities to it, and change the score through
//! [`ScoreWriter`](game::ScoreWriter). [`ScorePlugin`] advances the
//! roll-up every frame and sends [`ScoreRollStarted`](game::ScoreRollStarted)
//! and [`ScoreUpdated`](game::ScoreUpdated) messages.

pub mod game;
pub mod plugin;
pub mod score;
pub mod visual;

pub use plugin::{ScorePlugin, ScoreSystems};
