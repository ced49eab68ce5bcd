use bevy::prelude::*;

use crate::game::{ScoreRollStarted, ScoreUpdated, init_score_labels, roll_scores};

/// System sets for ordering against score updates
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScoreSystems {
    /// Initial label text for new trackers
    Init,
    /// Per-frame roll-up step
    Roll,
}

/// Registers score messages and the roll-up systems
pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ScoreRollStarted>()
            .add_message::<ScoreUpdated>()
            .configure_sets(Update, (ScoreSystems::Init, ScoreSystems::Roll).chain())
            .add_systems(
                Update,
                (
                    init_score_labels.in_set(ScoreSystems::Init),
                    roll_scores.in_set(ScoreSystems::Roll),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::{
        game::{GameScore, ScoreWriter},
        score::ScoreConfig,
    };

    /// Everything listeners heard, in order
    #[derive(Resource, Default)]
    struct Heard {
        started: Vec<Entity>,
        updated: Vec<(Entity, i32)>,
    }

    fn listen(
        mut started: MessageReader<ScoreRollStarted>,
        mut updated: MessageReader<ScoreUpdated>,
        mut heard: ResMut<Heard>,
    ) {
        heard.started.extend(started.read().map(|m| m.entity));
        heard
            .updated
            .extend(updated.read().map(|m| (m.entity, m.score)));
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<Heard>()
            .add_plugins(ScorePlugin)
            .add_systems(PostUpdate, listen);
        app
    }

    /// Spawn a tracker bound to one "Score: " label and run the first frame
    fn spawn_tracker(app: &mut App, config: ScoreConfig) -> (Entity, Entity) {
        let world = app.world_mut();
        let label = world.spawn(Text::new("")).id();
        let score = world
            .spawn(GameScore::new(config).with_label("Score: ", label))
            .id();
        frame(app, 0.0);
        (score, label)
    }

    fn frame(app: &mut App, secs: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        app.update();
    }

    fn add_points(app: &mut App, entity: Entity, delta: i32) {
        app.world_mut()
            .run_system_once(move |mut scores: ScoreWriter| {
                assert!(scores.add_points(entity, delta));
            })
            .expect("add_points system should run");
    }

    fn set_score(app: &mut App, entity: Entity, value: i32, use_roll_up: bool) {
        app.world_mut()
            .run_system_once(move |mut scores: ScoreWriter| {
                assert!(scores.set_score(entity, value, use_roll_up));
            })
            .expect("set_score system should run");
    }

    fn displayed(app: &App, entity: Entity) -> i32 {
        app.world().get::<GameScore>(entity).unwrap().displayed()
    }

    fn target(app: &App, entity: Entity) -> i32 {
        app.world().get::<GameScore>(entity).unwrap().target()
    }

    fn label_text(app: &App, label: Entity) -> String {
        app.world().get::<Text>(label).unwrap().0.clone()
    }

    #[test]
    fn test_new_tracker_labels_show_initial_score() {
        let mut app = test_app();
        let (_, label) = spawn_tracker(&mut app, ScoreConfig::default().with_initial_score(15));
        assert_eq!(label_text(&app, label), "Score: 15");
    }

    #[test]
    fn test_roll_up_scenario() {
        let mut app = test_app();
        let (score, label) = spawn_tracker(&mut app, ScoreConfig::default());

        add_points(&mut app, score, 3);
        assert_eq!(target(&app, score), 3);
        assert_eq!(displayed(&app, score), 0);
        assert_eq!(label_text(&app, label), "Score: 0");

        let mut seen = Vec::new();
        for _ in 0..3 {
            frame(&mut app, 0.11);
            seen.push(displayed(&app, score));
            if seen.len() < 3 {
                assert!(app.world().resource::<Heard>().updated.is_empty());
            }
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(label_text(&app, label), "Score: 3");

        let heard = app.world().resource::<Heard>();
        assert_eq!(heard.started, vec![score]);
        assert_eq!(heard.updated, vec![(score, 3)]);
    }

    #[test]
    fn test_labels_follow_each_step() {
        let mut app = test_app();
        let (score, label) = spawn_tracker(&mut app, ScoreConfig::default());

        add_points(&mut app, score, 2);
        frame(&mut app, 0.11);
        assert_eq!(label_text(&app, label), "Score: 1");

        // Below the step interval: nothing moves
        frame(&mut app, 0.05);
        assert_eq!(label_text(&app, label), "Score: 1");
        frame(&mut app, 0.06);
        assert_eq!(label_text(&app, label), "Score: 2");
    }

    #[test]
    fn test_instant_tracker_clamps_and_notifies() {
        let mut app = test_app();
        let (score, label) = spawn_tracker(&mut app, ScoreConfig::instant());

        set_score(&mut app, score, 50, false);
        assert_eq!(label_text(&app, label), "Score: 50");

        add_points(&mut app, score, -80);
        assert_eq!(target(&app, score), 0);
        assert_eq!(displayed(&app, score), 0);
        assert_eq!(label_text(&app, label), "Score: 0");

        frame(&mut app, 0.0);
        let heard = app.world().resource::<Heard>();
        assert!(heard.started.is_empty());
        assert_eq!(heard.updated, vec![(score, 50), (score, 0)]);
    }

    #[test]
    fn test_set_score_roll_up_shows_stale_label() {
        let mut app = test_app();
        let (score, label) = spawn_tracker(&mut app, ScoreConfig::default());

        // Make the label text differ from what a refresh would write
        app.world_mut().get_mut::<Text>(label).unwrap().0 = "stale".into();

        set_score(&mut app, score, 10, true);
        assert_eq!(target(&app, score), 10);
        assert_eq!(displayed(&app, score), 0);
        assert_eq!(label_text(&app, label), "Score: 0");

        frame(&mut app, 0.11);
        assert_eq!(displayed(&app, score), 1);
        let heard = app.world().resource::<Heard>();
        assert!(heard.started.is_empty());
        assert!(heard.updated.is_empty());
    }

    #[test]
    fn test_animated_set_score_jumps_silently() {
        let mut app = test_app();
        let (score, label) = spawn_tracker(&mut app, ScoreConfig::default());

        set_score(&mut app, score, 7, false);
        assert_eq!(displayed(&app, score), 7);
        assert_eq!(label_text(&app, label), "Score: 7");

        frame(&mut app, 0.11);
        let heard = app.world().resource::<Heard>();
        assert!(heard.started.is_empty());
        assert!(heard.updated.is_empty());
    }

    #[test]
    fn test_every_label_gets_its_own_prefix() {
        let mut app = test_app();
        let world = app.world_mut();
        let hud = world.spawn(Text::new("")).id();
        let banner = world.spawn(Text::new("")).id();
        let score = world
            .spawn(
                GameScore::new(ScoreConfig::instant())
                    .with_label("Score: ", hud)
                    .with_label("", banner),
            )
            .id();
        frame(&mut app, 0.0);

        add_points(&mut app, score, 1250);
        assert_eq!(label_text(&app, hud), "Score: 1250");
        assert_eq!(label_text(&app, banner), "1250");
    }

    #[test]
    fn test_trackers_roll_independently() {
        let mut app = test_app();
        let (slow, _) = spawn_tracker(&mut app, ScoreConfig::default());
        let (fast, _) = spawn_tracker(&mut app, ScoreConfig::default().with_step_size(5));

        add_points(&mut app, slow, 5);
        add_points(&mut app, fast, 5);
        frame(&mut app, 0.11);

        assert_eq!(displayed(&app, slow), 1);
        assert_eq!(displayed(&app, fast), 5);
        let heard = app.world().resource::<Heard>();
        assert_eq!(heard.started.len(), 2);
        assert_eq!(heard.updated, vec![(fast, 5)]);
    }

    #[test]
    fn test_missing_tracker_is_reported() {
        let mut app = test_app();
        let stray = app.world_mut().spawn_empty().id();

        let handled = app
            .world_mut()
            .run_system_once(move |mut scores: ScoreWriter| {
                assert!(scores.get(stray).is_none());
                scores.add_points(stray, 1)
            })
            .expect("system should run");
        assert!(!handled);
    }

    #[test]
    fn test_missing_text_does_not_panic() {
        let mut app = test_app();
        let not_text = app.world_mut().spawn_empty().id();
        let score = app
            .world_mut()
            .spawn(GameScore::new(ScoreConfig::instant()).with_label("Score: ", not_text))
            .id();
        frame(&mut app, 0.0);

        add_points(&mut app, score, 4);
        assert_eq!(displayed(&app, score), 4);
    }
}
