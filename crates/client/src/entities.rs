use avian3d::prelude::{
    AngularDamping, Collider, Friction, LinearDamping, LinearVelocity, LockedAxes, Mass,
    Restitution, RigidBody, Rotation,
};
use bevy::prelude::{Bundle, ChildOf, Commands, Component, Entity, Name, Transform, Vec3};
use leafwing_input_manager::prelude::{ActionState, InputMap};

use player_control::weapons::Gun;
use player_control::{MovementConfig, PlayerAction, PlayerControl};

use crate::adapters::AttachmentSockets;
use crate::ground::GroundState;

pub const PLAYER_CAPSULE_RADIUS: f32 = 0.5;
pub const PLAYER_CAPSULE_HEIGHT: f32 = 1.0;
/// Muzzle socket relative to the camera: right, below and ahead of the eye.
pub const MUZZLE_OFFSET: Vec3 = Vec3::new(0.3, -0.25, -0.6);

/// Marks the first-person camera child of a player.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PlayerCamera;

#[derive(Bundle)]
pub struct PlayerPhysicsBundle {
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub mass: Mass,
    pub restitution: Restitution,
    pub friction: Friction,
    pub linear_damping: LinearDamping,
    pub angular_damping: AngularDamping,
    pub locked_axes: LockedAxes,
}

impl Default for PlayerPhysicsBundle {
    fn default() -> Self {
        Self {
            rigid_body: RigidBody::Dynamic,
            collider: Collider::capsule(PLAYER_CAPSULE_RADIUS, PLAYER_CAPSULE_HEIGHT),
            mass: Mass(80.0),
            restitution: Restitution::ZERO,
            friction: Friction::new(0.5),
            linear_damping: LinearDamping(0.5),
            angular_damping: AngularDamping(8.0),
            locked_axes: LockedAxes::ROTATION_LOCKED.unlock_rotation_y(),
        }
    }
}

/// Spawn a controllable player with its camera and muzzle socket.
///
/// The muzzle hangs off the camera so shots follow the pitch.
pub fn spawn_player(
    commands: &mut Commands,
    config: MovementConfig,
    gun: Gun,
    position: Vec3,
) -> Entity {
    let camera_offset = config.camera_default_offset;
    let muzzle_name = config.muzzle_attachment.clone();

    let mut action_state = ActionState::<PlayerAction>::default();
    action_state.enable();

    let player = commands
        .spawn((
            Name::new("Player"),
            PlayerControl::new(config),
            gun,
            GroundState::default(),
            InputMap::<PlayerAction>::default(),
            action_state,
            Transform::from_translation(position),
            Rotation::default(),
            LinearVelocity::default(),
            PlayerPhysicsBundle::default(),
        ))
        .id();

    let camera = commands
        .spawn((
            Name::new("PlayerCamera"),
            PlayerCamera,
            Transform::from_translation(camera_offset),
            ChildOf(player),
        ))
        .id();

    let muzzle = commands
        .spawn((
            Name::new("Muzzle"),
            Transform::from_translation(MUZZLE_OFFSET),
            ChildOf(camera),
        ))
        .id();

    commands
        .entity(player)
        .insert(AttachmentSockets::default().with(muzzle_name, muzzle));
    player
}
