//! Narrow interfaces to the engine pieces the player component drives.
//!
//! The host implements these over whatever owns the data (physics body,
//! camera transform, animation sockets, the entity spawner). The core only
//! ever talks to them through single setter/getter calls.

use bevy::prelude::{Quat, Reflect, Transform, Vec3};
use serde::{Deserialize, Serialize};

use crate::action::{InputKey, PlayerAction};

/// World-space position and orientation.
#[derive(Clone, Copy, PartialEq, Debug, Default, Reflect, Serialize, Deserialize)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Bevy forward (-Z) rotated into world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

impl From<Transform> for Pose {
    fn from(transform: Transform) -> Self {
        Self::new(transform.translation, transform.rotation)
    }
}

/// Character controller owned by the physics engine.
pub trait PhysicalBody {
    fn is_grounded(&self) -> bool;

    fn world_rotation(&self) -> Quat;

    fn set_rotation(&mut self, rotation: Quat);

    /// Replace the horizontal movement velocity. Vertical velocity stays with
    /// the solver.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Additive velocity change for host-driven effects (knockback, pads).
    /// Player control itself only replaces velocity and adds impulses.
    fn add_velocity(&mut self, velocity: Vec3);

    /// Mass-normalized impulse, i.e. an instantaneous velocity change.
    fn add_impulse(&mut self, impulse: Vec3);
}

/// Local transform of the first-person camera relative to its entity.
pub trait CameraRig {
    fn transform(&self) -> Transform;

    fn set_transform(&mut self, transform: Transform);
}

/// Named sockets on the animated character.
pub trait AttachmentSource {
    /// `None` while the character is not loaded yet.
    fn attachment_world_pose(&self, name: &str) -> Option<Pose>;
}

pub trait Weapon {
    fn fire(&mut self, muzzle: Pose);
}

/// Action registration and key binding.
pub trait InputBindings {
    fn register_action(&mut self, context: &str, action: PlayerAction);

    fn bind_action(&mut self, context: &str, action: PlayerAction, key: InputKey);
}

/// Everything a lifecycle event may touch on the owning entity.
pub struct PlayerHost<'a> {
    pub body: &'a mut dyn PhysicalBody,
    pub camera: &'a mut dyn CameraRig,
    pub bindings: &'a mut dyn InputBindings,
}

/// Collaborators needed to resolve a fire action.
pub struct ActionHost<'a> {
    pub attachments: &'a dyn AttachmentSource,
    pub weapon: &'a mut dyn Weapon,
}
