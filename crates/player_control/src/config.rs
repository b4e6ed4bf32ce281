use std::f32::consts::FRAC_PI_2;

use bevy::log::warn;
use bevy::prelude::{Reflect, Vec3};
use serde::{Deserialize, Serialize};

use crate::intent::ActivationMode;

pub const DEFAULT_PITCH_MIN: f32 = -0.85;
pub const DEFAULT_PITCH_MAX: f32 = 1.5;
pub const DEFAULT_JUMP_HEIGHT: f32 = 5.0;
pub const DEFAULT_MUZZLE_ATTACHMENT: &str = "barrel_out";
// Keeps the YXZ decomposition away from its singularity at +/- 90 degrees.
pub const PITCH_SAFETY_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// How the four directional flags combine into one planar vector.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Reflect, Serialize, Deserialize)]
pub enum DiagonalPolicy {
    /// Each active axis contributes `speed * dt` on its own, so diagonals
    /// are faster than straight lines.
    #[default]
    Additive,
    /// The combined direction is normalized before scaling.
    Normalized,
}

/// Per-session tunables for the player controller.
#[derive(Clone, Debug, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub movement_speed: f32,
    pub walk_speed: f32,
    /// Radians per unit of mouse motion.
    pub rotation_speed: f32,
    pub jump_height: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
    /// Camera translation relative to the player entity.
    pub camera_default_offset: Vec3,
    pub muzzle_attachment: String,
    pub walk_activation: ActivationMode,
    pub diagonal: DiagonalPolicy,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            movement_speed: 300.0,
            walk_speed: 120.0,
            rotation_speed: 0.002,
            jump_height: DEFAULT_JUMP_HEIGHT,
            pitch_min: DEFAULT_PITCH_MIN,
            pitch_max: DEFAULT_PITCH_MAX,
            camera_default_offset: Vec3::new(0.0, 1.6, 0.0),
            muzzle_attachment: DEFAULT_MUZZLE_ATTACHMENT.to_string(),
            walk_activation: ActivationMode::Hold,
            diagonal: DiagonalPolicy::Additive,
        }
    }
}

impl MovementConfig {
    /// Return a copy whose pitch limits are ordered and inside the safe
    /// decomposition range.
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();

        if !config.pitch_min.is_finite() {
            warn!("pitch_min {} is not finite, using {}", config.pitch_min, DEFAULT_PITCH_MIN);
            config.pitch_min = DEFAULT_PITCH_MIN;
        }
        if !config.pitch_max.is_finite() {
            warn!("pitch_max {} is not finite, using {}", config.pitch_max, DEFAULT_PITCH_MAX);
            config.pitch_max = DEFAULT_PITCH_MAX;
        }

        if config.pitch_min > config.pitch_max {
            warn!(
                "pitch_min {} is above pitch_max {}, swapping",
                config.pitch_min, config.pitch_max
            );
            std::mem::swap(&mut config.pitch_min, &mut config.pitch_max);
        }

        let min = config.pitch_min.clamp(-PITCH_SAFETY_LIMIT, PITCH_SAFETY_LIMIT);
        let max = config.pitch_max.clamp(-PITCH_SAFETY_LIMIT, PITCH_SAFETY_LIMIT);
        if min != config.pitch_min || max != config.pitch_max {
            warn!(
                "pitch limits [{}, {}] clamped to [{}, {}]",
                config.pitch_min, config.pitch_max, min, max
            );
        }
        config.pitch_min = min;
        config.pitch_max = max;
        config
    }

    pub fn speed(&self, walking: bool) -> f32 {
        if walking {
            self.walk_speed
        } else {
            self.movement_speed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = MovementConfig::default();
        assert_eq!(config.pitch_min, -0.85);
        assert_eq!(config.pitch_max, 1.5);
        assert_eq!(config.jump_height, 5.0);
        assert_eq!(config.muzzle_attachment, "barrel_out");
        assert_eq!(config.walk_activation, ActivationMode::Hold);
        assert_eq!(config.diagonal, DiagonalPolicy::Additive);
    }

    #[test]
    fn sanitized_keeps_valid_limits() {
        let config = MovementConfig::default();
        assert_eq!(config.sanitized(), config);
    }

    #[test]
    fn sanitized_swaps_and_clamps_limits() {
        let config = MovementConfig {
            pitch_min: 3.0,
            pitch_max: -0.5,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(config.pitch_min, -0.5);
        assert_eq!(config.pitch_max, PITCH_SAFETY_LIMIT);
    }

    #[test]
    fn sanitized_replaces_non_finite_limits() {
        let config = MovementConfig {
            pitch_min: f32::NAN,
            pitch_max: f32::INFINITY,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(config.pitch_min, DEFAULT_PITCH_MIN);
        assert_eq!(config.pitch_max, DEFAULT_PITCH_MAX);
    }

    #[test]
    fn walk_flag_selects_walk_speed() {
        let config = MovementConfig {
            movement_speed: 5.0,
            walk_speed: 2.0,
            ..Default::default()
        };
        assert_eq!(config.speed(false), 5.0);
        assert_eq!(config.speed(true), 2.0);
    }
}
