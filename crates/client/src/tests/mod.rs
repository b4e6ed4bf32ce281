mod binding_tests;

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;

use player_control::weapons::Gun;
use player_control::MovementConfig;

use crate::control::tick_player_control;
use crate::entities::spawn_player;
use crate::inputs::input::collect_player_input;
use crate::{GameplayReset, GameplayStarted};

pub const FRAME: Duration = Duration::from_millis(100);

/// Headless app running the input and tick systems with a fixed 100ms frame.
pub fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TransformPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.add_message::<GameplayStarted>();
    app.add_message::<GameplayReset>();
    app.add_systems(Update, (collect_player_input, tick_player_control).chain());
    app
}

/// Spawn a player and run one warm-up frame, which has no elapsed time.
pub fn spawn_test_player(app: &mut App, config: MovementConfig) -> Entity {
    let player = {
        let mut commands = app.world_mut().commands();
        spawn_player(&mut commands, config, Gun::default(), Vec3::ZERO)
    };
    app.world_mut().flush();
    app.update();
    player
}
