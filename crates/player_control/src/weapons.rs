use bevy::log::{debug, info};
use bevy::prelude::{Component, Quat, Reflect, Vec3};
use serde::{Deserialize, Serialize};

use crate::collaborators::{ActionHost, Pose, Weapon};
use crate::intent::ActivationEdge;

pub const PROJECTILE_SCALE: f32 = 0.05;

/// Weapon tunables carried by the player entity.
#[derive(Component, Clone, Debug, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct Gun {
    pub projectile_scale: f32,
    pub projectile_speed: f32,
    /// Seconds before a projectile is removed.
    pub projectile_lifetime: f32,
}

impl Default for Gun {
    fn default() -> Self {
        Self {
            projectile_scale: PROJECTILE_SCALE,
            projectile_speed: 40.0,
            projectile_lifetime: 3.0,
        }
    }
}

/// Data for spawning a projectile at a muzzle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSpawn {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
    pub velocity: Vec3,
    pub lifetime: f32,
}

/// World access for creating entities, handed to weapons explicitly.
pub trait SpawnService {
    fn spawn_projectile(&mut self, projectile: ProjectileSpawn);
}

impl Gun {
    pub fn projectile_at(&self, muzzle: Pose) -> ProjectileSpawn {
        ProjectileSpawn {
            position: muzzle.translation,
            rotation: muzzle.rotation,
            scale: self.projectile_scale,
            velocity: muzzle.forward() * self.projectile_speed,
            lifetime: self.projectile_lifetime,
        }
    }
}

/// A gun paired with the spawner it fires into.
pub struct ArmedGun<'a, S: SpawnService> {
    pub gun: &'a Gun,
    pub spawner: &'a mut S,
}

impl<S: SpawnService> Weapon for ArmedGun<'_, S> {
    fn fire(&mut self, muzzle: Pose) {
        let projectile = self.gun.projectile_at(muzzle);
        debug!("Spawning projectile at {:?}", projectile.position);
        self.spawner.spawn_projectile(projectile);
    }
}

/// Fire on a press edge from the named muzzle socket.
///
/// Returns whether the weapon fired. A missing socket is the normal state
/// while the character is still loading, so it is skipped without retry.
pub fn trigger_fire(edge: ActivationEdge, muzzle: &str, host: &mut ActionHost) -> bool {
    if edge != ActivationEdge::Pressed {
        return false;
    }

    let Some(pose) = host.attachments.attachment_world_pose(muzzle) else {
        debug!("Muzzle attachment '{muzzle}' not available, skipping shot");
        return false;
    };

    info!("🔫 Firing from '{muzzle}' at {:?}", pose.translation);
    host.weapon.fire(pose);
    true
}
