use bevy::prelude::*;

mod input;

use bevy::window::WindowResolution;
use game_score::{
    ScorePlugin,
    game::{GameScore, ScoreRollStarted, ScoreUpdated},
    score::ScoreConfig,
};
use input::{DemoInputPlugin, DemoScores};

const SCORE_JSON: &str = include_str!("../assets/score.json");

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Game Score".into(),
            resolution: WindowResolution::new(720, 480),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(ScorePlugin)
    .add_plugins(DemoInputPlugin)
    .add_systems(Startup, setup_scoreboard)
    .add_systems(Update, log_score_messages);

    app.run();
}

/// System: Spawn the camera, the label column and both trackers
fn setup_scoreboard(mut commands: Commands) {
    let config = match ScoreConfig::from_json(SCORE_JSON) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}, falling back to defaults", e);
            ScoreConfig::default()
        }
    };

    commands.spawn(Camera2d);

    let player_label = commands.spawn((Text::new(""), TextFont::from_font_size(48.0))).id();
    let player_total = commands.spawn((Text::new(""), TextFont::from_font_size(20.0))).id();
    let bonus_label = commands.spawn((Text::new(""), TextFont::from_font_size(32.0))).id();

    commands
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(12.0),
            padding: UiRect::all(Val::Px(24.0)),
            ..default()
        })
        .add_children(&[player_label, player_total, bonus_label]);

    let player = commands
        .spawn((
            GameScore::new(config)
                .with_label("Score: ", player_label)
                .with_label("Shown ", player_total),
            Name::new("Player Score"),
        ))
        .id();
    let bonus = commands
        .spawn((
            GameScore::new(ScoreConfig::instant()).with_label("Bonus: ", bonus_label),
            Name::new("Bonus Score"),
        ))
        .id();

    commands.insert_resource(DemoScores { player, bonus });

    info!("Scoreboard ready (roll-up: {})", config.use_roll_animation);
}

/// System: Log what score listeners would hear
fn log_score_messages(
    mut started: MessageReader<ScoreRollStarted>,
    mut updated: MessageReader<ScoreUpdated>,
    names: Query<&Name>,
) {
    for message in started.read() {
        let name = names.get(message.entity).map(Name::as_str).unwrap_or("?");
        info!("{} started rolling", name);
    }
    for message in updated.read() {
        let name = names.get(message.entity).map(Name::as_str).unwrap_or("?");
        info!("{} now shows {}", name, message.score);
    }
}
