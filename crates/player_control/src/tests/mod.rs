mod intent_tests;

use std::collections::HashMap;

use bevy::prelude::{Quat, Transform, Vec3};

use crate::action::{InputEvent, InputKey, PlayerAction};
use crate::collaborators::{
    ActionHost, AttachmentSource, CameraRig, InputBindings, PhysicalBody, Pose, Weapon,
};
use crate::intent::ActivationEdge;
use crate::player::PlayerControl;
use crate::weapons::{ProjectileSpawn, SpawnService};

pub const TOLERANCE: f32 = 1e-4;

#[derive(Default, Debug)]
pub struct MockBody {
    pub grounded: bool,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub impulses: Vec<Vec3>,
}

impl PhysicalBody for MockBody {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn world_rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.x = velocity.x;
        self.velocity.z = velocity.z;
    }

    fn add_velocity(&mut self, velocity: Vec3) {
        self.velocity += velocity;
    }

    fn add_impulse(&mut self, impulse: Vec3) {
        self.impulses.push(impulse);
        self.velocity += impulse;
    }
}

#[derive(Default, Debug)]
pub struct MockCamera {
    pub transform: Transform,
}

impl CameraRig for MockCamera {
    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }
}

#[derive(Default, Debug)]
pub struct RecordingBindings {
    pub registered: Vec<(String, PlayerAction)>,
    pub bound: Vec<(String, PlayerAction, InputKey)>,
}

impl InputBindings for RecordingBindings {
    fn register_action(&mut self, context: &str, action: PlayerAction) {
        self.registered.push((context.to_string(), action));
    }

    fn bind_action(&mut self, context: &str, action: PlayerAction, key: InputKey) {
        self.bound.push((context.to_string(), action, key));
    }
}

#[derive(Default, Debug)]
pub struct MockSockets(pub HashMap<String, Pose>);

impl MockSockets {
    pub fn with(name: &str, pose: Pose) -> Self {
        Self(HashMap::from([(name.to_string(), pose)]))
    }
}

impl AttachmentSource for MockSockets {
    fn attachment_world_pose(&self, name: &str) -> Option<Pose> {
        self.0.get(name).copied()
    }
}

#[derive(Default, Debug)]
pub struct RecordingWeapon {
    pub shots: Vec<Pose>,
}

impl Weapon for RecordingWeapon {
    fn fire(&mut self, muzzle: Pose) {
        self.shots.push(muzzle);
    }
}

#[derive(Default, Debug)]
pub struct RecordingSpawner {
    pub spawned: Vec<ProjectileSpawn>,
}

impl SpawnService for RecordingSpawner {
    fn spawn_projectile(&mut self, projectile: ProjectileSpawn) {
        self.spawned.push(projectile);
    }
}

/// Deliver one input event with no sockets and a recording weapon.
pub fn send(control: &mut PlayerControl, event: InputEvent) {
    let sockets = MockSockets::default();
    let mut weapon = RecordingWeapon::default();
    control.handle_input(
        event,
        &mut ActionHost {
            attachments: &sockets,
            weapon: &mut weapon,
        },
    );
}

pub fn send_button(control: &mut PlayerControl, action: PlayerAction, edge: ActivationEdge) {
    send(control, InputEvent::button(action, edge));
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < TOLERANCE
}
