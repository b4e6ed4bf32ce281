//! ECS-backed implementations of the player collaborator traits.
//!
//! Each adapter borrows the components of a single entity for the duration
//! of one call into `PlayerControl`.

use std::collections::{HashMap, HashSet};

use avian3d::prelude::{LinearVelocity, Rotation};
use bevy::prelude::{
    Commands, Component, Entity, GlobalTransform, KeyCode, MouseButton, Quat, Query, Transform,
    Vec3, debug, warn,
};
use leafwing_input_manager::prelude::{InputMap, MouseMoveAxis};

use player_control::PlayerAction;
use player_control::action::InputKey;
use player_control::collaborators::{
    AttachmentSource, CameraRig, InputBindings, PhysicalBody, Pose,
};
use player_control::weapons::{ProjectileSpawn, SpawnService};

use crate::ground::GroundState;
use crate::projectiles::projectile_bundle;

pub struct AvianBody<'a> {
    pub rotation: &'a mut Rotation,
    pub velocity: &'a mut LinearVelocity,
    pub ground: &'a GroundState,
}

impl PhysicalBody for AvianBody<'_> {
    fn is_grounded(&self) -> bool {
        self.ground.is_grounded
    }

    fn world_rotation(&self) -> Quat {
        self.rotation.0
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation.0 = rotation;
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.0.x = velocity.x;
        self.velocity.0.z = velocity.z;
    }

    fn add_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 += velocity;
    }

    fn add_impulse(&mut self, impulse: Vec3) {
        self.velocity.0 += impulse;
    }
}

pub struct CameraTransform<'a>(pub &'a mut Transform);

impl CameraRig for CameraTransform<'_> {
    fn transform(&self) -> Transform {
        *self.0
    }

    fn set_transform(&mut self, transform: Transform) {
        *self.0 = transform;
    }
}

/// Named sockets on the character, resolved through their global transforms.
#[derive(Component, Clone, Debug, Default)]
pub struct AttachmentSockets(pub HashMap<String, Entity>);

impl AttachmentSockets {
    pub fn with(mut self, name: impl Into<String>, socket: Entity) -> Self {
        self.0.insert(name.into(), socket);
        self
    }
}

pub struct AttachmentLookup<'a, 'w, 's, 't> {
    pub sockets: Option<&'a AttachmentSockets>,
    pub transforms: &'a Query<'w, 's, &'t GlobalTransform>,
}

impl AttachmentSource for AttachmentLookup<'_, '_, '_, '_> {
    fn attachment_world_pose(&self, name: &str) -> Option<Pose> {
        let socket = *self.sockets?.0.get(name)?;
        let global = self.transforms.get(socket).ok()?;
        Some(Pose::from(global.compute_transform()))
    }
}

/// Binding service over a leafwing `InputMap`.
pub struct InputMapBindings<'a> {
    input_map: &'a mut InputMap<PlayerAction>,
    registered: HashSet<(String, PlayerAction)>,
}

impl<'a> InputMapBindings<'a> {
    pub fn new(input_map: &'a mut InputMap<PlayerAction>) -> Self {
        Self {
            input_map,
            registered: HashSet::new(),
        }
    }
}

impl InputBindings for InputMapBindings<'_> {
    fn register_action(&mut self, context: &str, action: PlayerAction) {
        debug!("Registering action {}/{}", context, action.name());
        self.registered.insert((context.to_string(), action));
    }

    fn bind_action(&mut self, context: &str, action: PlayerAction, key: InputKey) {
        if !self.registered.contains(&(context.to_string(), action)) {
            warn!(
                "⚠️ Ignoring binding for unregistered action {}/{}",
                context,
                action.name()
            );
            return;
        }

        match key {
            InputKey::W => self.input_map.insert(action, KeyCode::KeyW),
            InputKey::A => self.input_map.insert(action, KeyCode::KeyA),
            InputKey::S => self.input_map.insert(action, KeyCode::KeyS),
            InputKey::D => self.input_map.insert(action, KeyCode::KeyD),
            InputKey::LeftShift => self.input_map.insert(action, KeyCode::ShiftLeft),
            InputKey::Space => self.input_map.insert(action, KeyCode::Space),
            InputKey::MouseLeft => self.input_map.insert(action, MouseButton::Left),
            InputKey::MouseX => self.input_map.insert_axis(action, MouseMoveAxis::X),
            InputKey::MouseY => self.input_map.insert_axis(action, MouseMoveAxis::Y),
        };
    }
}

/// Spawn service backed by `Commands`.
pub struct CommandsSpawner<'a, 'w, 's>(pub &'a mut Commands<'w, 's>);

impl SpawnService for CommandsSpawner<'_, '_, '_> {
    fn spawn_projectile(&mut self, projectile: ProjectileSpawn) {
        self.0.spawn(projectile_bundle(projectile));
    }
}
