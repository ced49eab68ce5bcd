use bevy::prelude::*;
use game_score::game::ScoreWriter;
use rand::Rng;

/// Points awarded by a single hit
const HIT_POINTS: std::ops::RangeInclusive<i32> = 5..=50;

/// Score jumped to by the jackpot key
const JACKPOT: i32 = 1000;

pub struct DemoInputPlugin;
impl Plugin for DemoInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_score_keys);
    }
}

/// The demo's two tracker entities
#[derive(Resource, Debug, Clone, Copy)]
pub struct DemoScores {
    pub player: Entity,
    pub bonus: Entity,
}

/// Keyboard and mouse controls:
/// - Space / left click: random hit for the player
/// - Backspace: random penalty for the player
/// - Enter: roll the player score up to the jackpot
/// - R: reset the player score instantly
/// - B: bonus point (no roll-up)
fn handle_score_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    demo: Option<Res<DemoScores>>,
    mut scores: ScoreWriter,
) {
    let Some(demo) = demo else {
        return;
    };
    let mut rng = rand::rng();

    if keys.just_pressed(KeyCode::Space) || mouse_buttons.just_pressed(MouseButton::Left) {
        let points = rng.random_range(HIT_POINTS);
        scores.add_points(demo.player, points);
        info!("Hit for {} points", points);
    }
    if keys.just_pressed(KeyCode::Backspace) {
        let points = rng.random_range(HIT_POINTS);
        scores.add_points(demo.player, -points);
        info!("Penalty of {} points", points);
    }
    if keys.just_pressed(KeyCode::Enter) {
        scores.set_score(demo.player, JACKPOT, true);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        scores.set_score(demo.player, 0, false);
    }
    if keys.just_pressed(KeyCode::KeyB) {
        scores.add_points(demo.bonus, 1);
    }
}
