use bevy::prelude::{Commands, GlobalTransform, Query};
use leafwing_input_manager::prelude::ActionState;

use player_control::collaborators::ActionHost;
use player_control::weapons::{ArmedGun, Gun};
use player_control::{ActivationEdge, InputEvent, PlayerAction, PlayerControl};

use crate::adapters::{AttachmentLookup, AttachmentSockets, CommandsSpawner};

/// Edge of a button action this frame, if it is active at all.
pub fn button_edge(
    action_state: &ActionState<PlayerAction>,
    action: PlayerAction,
) -> Option<ActivationEdge> {
    if action_state.just_pressed(&action) {
        Some(ActivationEdge::Pressed)
    } else if action_state.just_released(&action) {
        Some(ActivationEdge::Released)
    } else if action_state.pressed(&action) {
        Some(ActivationEdge::Held)
    } else {
        None
    }
}

/// Translate the current action state into discrete input events.
pub fn input_events(action_state: &ActionState<PlayerAction>) -> Vec<InputEvent> {
    let mut events: Vec<InputEvent> = PlayerAction::BUTTONS
        .into_iter()
        .filter_map(|action| {
            button_edge(action_state, action).map(|edge| InputEvent::button(action, edge))
        })
        .collect();

    for action in [PlayerAction::Yaw, PlayerAction::Pitch] {
        let value = action_state.value(&action);
        if value != 0.0 {
            events.push(InputEvent::axis(action, value));
        }
    }
    events
}

pub fn collect_player_input(
    mut commands: Commands,
    mut players: Query<(
        &ActionState<PlayerAction>,
        &mut PlayerControl,
        &Gun,
        Option<&AttachmentSockets>,
    )>,
    transforms: Query<&GlobalTransform>,
) {
    for (action_state, mut control, gun, sockets) in players.iter_mut() {
        if action_state.disabled() {
            control.release_held();
            continue;
        }

        let attachments = AttachmentLookup {
            sockets,
            transforms: &transforms,
        };
        let mut spawner = CommandsSpawner(&mut commands);
        let mut weapon = ArmedGun {
            gun,
            spawner: &mut spawner,
        };
        let mut host = ActionHost {
            attachments: &attachments,
            weapon: &mut weapon,
        };

        for event in input_events(action_state) {
            control.handle_input(event, &mut host);
        }
    }
}
