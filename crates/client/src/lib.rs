pub mod adapters;
pub mod control;
pub mod entities;
pub mod ground;
pub mod inputs;
pub mod projectiles;

use bevy::prelude::{App, IntoScheduleConfigs, Message, Plugin, Update};
use leafwing_input_manager::prelude::InputManagerPlugin;

use player_control::PlayerAction;

use crate::control::tick_player_control;
use crate::ground::update_ground_detection;
use crate::inputs::input::collect_player_input;
use crate::projectiles::expire_projectiles;

/// Gameplay begins: player inputs get bound.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct GameplayStarted;

/// Every player returns to its spawn look and camera state.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct GameplayReset;

/// Drives every `PlayerControl` entity from leafwing input and avian physics.
pub struct PlayerControlPlugin;

impl Plugin for PlayerControlPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<PlayerAction>::default());
        app.add_message::<GameplayStarted>();
        app.add_message::<GameplayReset>();
        app.add_systems(
            Update,
            (
                update_ground_detection,
                collect_player_input,
                tick_player_control,
            )
                .chain(),
        );
        app.add_systems(Update, expire_projectiles);
    }
}

#[cfg(test)]
mod tests;
