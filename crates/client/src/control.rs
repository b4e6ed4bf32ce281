use avian3d::prelude::{LinearVelocity, Rotation};
use bevy::prelude::{
    Children, Entity, MessageReader, Query, Res, Time, Transform, With, Without, debug, info,
};
use leafwing_input_manager::prelude::InputMap;

use player_control::collaborators::PlayerHost;
use player_control::{GameplayComponent, LifecycleEvent, PlayerAction, PlayerControl};

use crate::adapters::{AvianBody, CameraTransform, InputMapBindings};
use crate::entities::PlayerCamera;
use crate::ground::GroundState;
use crate::{GameplayReset, GameplayStarted};

type PlayerComponents<'a> = (
    Entity,
    &'a mut PlayerControl,
    &'a mut Rotation,
    &'a mut LinearVelocity,
    &'a GroundState,
    &'a mut InputMap<PlayerAction>,
    &'a Children,
);

/// Deliver lifecycle events to every player: gameplay start and reset
/// messages first, then one update tick.
pub fn tick_player_control(
    time: Res<Time>,
    mut started: MessageReader<GameplayStarted>,
    mut resets: MessageReader<GameplayReset>,
    mut players: Query<PlayerComponents, Without<PlayerCamera>>,
    mut cameras: Query<&mut Transform, With<PlayerCamera>>,
) {
    let mut events = Vec::new();
    if started.read().count() > 0 {
        info!("▶️ Gameplay started");
        events.push(LifecycleEvent::GameplayStarted);
    }
    if resets.read().count() > 0 {
        info!("🔄 Gameplay reset");
        events.push(LifecycleEvent::Reset);
    }
    events.push(LifecycleEvent::Update {
        delta_seconds: time.delta_secs(),
    });

    for (entity, mut control, mut rotation, mut velocity, ground, mut input_map, children) in
        players.iter_mut()
    {
        let Some(camera_entity) = children.iter().find(|child| cameras.contains(**child)) else {
            debug!("Player {:?} has no camera yet", entity);
            continue;
        };
        let Ok(mut camera_transform) = cameras.get_mut(*camera_entity) else {
            continue;
        };

        let mut body = AvianBody {
            rotation: &mut rotation,
            velocity: &mut velocity,
            ground,
        };
        let mut camera = CameraTransform(&mut camera_transform);
        let mut bindings = InputMapBindings::new(&mut input_map);
        let mut host = PlayerHost {
            body: &mut body,
            camera: &mut camera,
            bindings: &mut bindings,
        };

        for event in &events {
            if control.subscribed_events().contains(&event.kind()) {
                control.on_event(*event, &mut host);
            }
        }
    }
}
