use avian3d::prelude::{Collider, LinearVelocity, RigidBody};
use bevy::prelude::{
    Bundle, Commands, Component, Entity, Name, Query, Res, Time, Timer, TimerMode, Transform, Vec3,
    debug,
};

use player_control::weapons::ProjectileSpawn;

// Unscaled radius; the spawn scale shrinks it.
pub const PROJECTILE_RADIUS: f32 = 0.5;

#[derive(Component, Debug)]
pub struct Projectile {
    pub lifetime: Timer,
}

pub fn projectile_bundle(spawn: ProjectileSpawn) -> impl Bundle {
    (
        Projectile {
            lifetime: Timer::from_seconds(spawn.lifetime, TimerMode::Once),
        },
        Name::new("Projectile"),
        Transform::from_translation(spawn.position)
            .with_rotation(spawn.rotation)
            .with_scale(Vec3::splat(spawn.scale)),
        RigidBody::Dynamic,
        Collider::sphere(PROJECTILE_RADIUS),
        LinearVelocity(spawn.velocity),
    )
}

pub fn expire_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut projectiles: Query<(Entity, &mut Projectile)>,
) {
    for (entity, mut projectile) in projectiles.iter_mut() {
        projectile.lifetime.tick(time.delta());
        if projectile.lifetime.is_finished() {
            debug!("Projectile {:?} expired", entity);
            commands.entity(entity).despawn();
        }
    }
}
