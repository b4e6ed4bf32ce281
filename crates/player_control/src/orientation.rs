//! Look orientation integrator.
//!
//! Keeps the combined yaw+pitch head rotation and splits it into a yaw-only
//! body rotation and a pitch-only camera rotation.

use bevy::prelude::{EulerRot, Quat, Reflect};
use serde::{Deserialize, Serialize};

use crate::intent::LookDelta;

// ============================================================================
// COMPONENTS
// ============================================================================

/// Combined yaw+pitch of the head. Roll is always zero.
#[derive(Clone, Copy, PartialEq, Debug, Reflect, Serialize, Deserialize)]
pub struct LookOrientation(pub Quat);

impl Default for LookOrientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LookOrientation {
    pub const IDENTITY: Self = Self(Quat::IDENTITY);

    pub fn from_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        Self(compose(yaw, pitch))
    }

    /// `(yaw, pitch, roll)` in radians.
    pub fn angles(&self) -> (f32, f32, f32) {
        self.0.to_euler(EulerRot::YXZ)
    }

    pub fn yaw(&self) -> f32 {
        self.angles().0
    }

    pub fn pitch(&self) -> f32 {
        self.angles().1
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IntegratedLook {
    pub look: LookOrientation,
    pub body_yaw: Quat,
    pub camera_pitch: Quat,
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

fn compose(yaw: f32, pitch: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

/// Advance `look` by one tick of mouse motion.
pub fn integrate(
    look: LookOrientation,
    delta: LookDelta,
    rotation_speed: f32,
    pitch_min: f32,
    pitch_max: f32,
) -> IntegratedLook {
    let (yaw, pitch, _) = look.angles();

    let yaw = yaw + delta.yaw * rotation_speed;
    // Bounds ordered with min/max so reversed limits cannot panic.
    let pitch = (pitch + delta.pitch * rotation_speed)
        .max(pitch_min.min(pitch_max))
        .min(pitch_max.max(pitch_min));

    IntegratedLook {
        look: LookOrientation(compose(yaw, pitch)),
        body_yaw: compose(yaw, 0.0),
        camera_pitch: compose(0.0, pitch),
    }
}
