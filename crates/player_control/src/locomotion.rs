//! Locomotion resolver.
//!
//! Turns the intent flags of one tick into a body-local planar velocity and
//! an optional jump impulse. The output is in body-local space; the body
//! collaborator applies the entity's world yaw.

use bevy::prelude::{Reflect, Vec2, Vec3};

use crate::config::{DiagonalPolicy, MovementConfig};
use crate::intent::{InputIntentState, IntentFlag};

/// Result of one resolver pass.
#[derive(Clone, Copy, PartialEq, Debug, Default, Reflect)]
pub struct LocomotionCommand {
    /// `x` is right, `y` is forward.
    pub planar: Vec2,
    /// Upward velocity change requested this tick.
    pub jump_impulse: Option<f32>,
}

impl LocomotionCommand {
    /// Planar vector in bevy's body-local axes (+X right, -Z forward).
    pub fn local_velocity(&self) -> Vec3 {
        Vec3::new(self.planar.x, 0.0, -self.planar.y)
    }

    /// Jump impulse along world up.
    pub fn impulse(&self) -> Option<Vec3> {
        self.jump_impulse.map(|height| Vec3::Y * height)
    }
}

/// Unit-per-axis direction from the directional flags. Opposing flags
/// cancel.
pub fn planar_direction(intent: &InputIntentState) -> Vec2 {
    let axis = |positive: IntentFlag, negative: IntentFlag| {
        f32::from(u8::from(intent.is_set(positive))) - f32::from(u8::from(intent.is_set(negative)))
    };

    Vec2::new(
        axis(IntentFlag::MoveRight, IntentFlag::MoveLeft),
        axis(IntentFlag::MoveForward, IntentFlag::MoveBack),
    )
}

pub fn resolve(
    intent: &InputIntentState,
    config: &MovementConfig,
    delta_seconds: f32,
    is_grounded: bool,
) -> LocomotionCommand {
    let step = config.speed(intent.is_walking()) * delta_seconds;
    let direction = planar_direction(intent);

    let planar = match config.diagonal {
        DiagonalPolicy::Additive => direction * step,
        DiagonalPolicy::Normalized => direction.normalize_or_zero() * step,
    };

    let jump_impulse = (is_grounded && intent.is_jumping()).then_some(config.jump_height);

    LocomotionCommand {
        planar,
        jump_impulse,
    }
}
