use bevy::prelude::*;

/// A tracker started rolling its displayed score toward a new target
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRollStarted {
    pub entity: Entity,
}

/// A tracker's displayed score changed and settled on `score`
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdated {
    pub entity: Entity,
    pub score: i32,
}
