//! Input intent - what the player currently wants to do.
//!
//! Folds raw activation edges into a small bitset of movement/action flags
//! plus an accumulator for mouse look. Mutated only by input callbacks and
//! read once per tick by the resolver.

use bevy::prelude::Reflect;
use serde::{Deserialize, Serialize};

// ============================================================================
// TYPES
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Reflect, Serialize, Deserialize)]
pub enum IntentFlag {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Walk,
    Jump,
}

impl IntentFlag {
    pub const ALL: [Self; 6] = [
        Self::MoveForward,
        Self::MoveBack,
        Self::MoveLeft,
        Self::MoveRight,
        Self::Walk,
        Self::Jump,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// How an action's edges map onto its flag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Reflect, Serialize, Deserialize)]
pub enum ActivationMode {
    /// True while pressed or held, false on release.
    #[default]
    Hold,
    /// Flips on release only.
    Toggle,
    /// True on press, false on any other edge; cleared after one read.
    Tap,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Reflect, Serialize, Deserialize)]
pub enum ActivationEdge {
    Pressed,
    Held,
    Released,
}

/// Look delta in rotation units before scaling by rotation speed.
#[derive(Clone, Copy, PartialEq, Debug, Default, Reflect, Serialize, Deserialize)]
pub struct LookDelta {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookDelta {
    pub const ZERO: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
    };

    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    pub fn is_zero(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0
    }
}

#[derive(Clone, PartialEq, Debug, Default, Reflect, Serialize, Deserialize)]
pub struct InputIntentState {
    flags: u8,
    // Flags latched by a Tap press and not yet read.
    taps: u8,
    look: LookDelta,
}

// ============================================================================
// OPERATIONS
// ============================================================================

impl InputIntentState {
    pub fn is_set(&self, flag: IntentFlag) -> bool {
        self.flags & flag.bit() != 0
    }

    pub fn is_walking(&self) -> bool {
        self.is_set(IntentFlag::Walk)
    }

    pub fn is_jumping(&self) -> bool {
        self.is_set(IntentFlag::Jump)
    }

    pub fn is_empty(&self) -> bool {
        self.flags == 0 && self.look.is_zero()
    }

    /// Apply one raw input transition to `flag`.
    pub fn set_flag(&mut self, flag: IntentFlag, mode: ActivationMode, edge: ActivationEdge) {
        match mode {
            ActivationMode::Hold => {
                self.assign(flag, matches!(edge, ActivationEdge::Pressed | ActivationEdge::Held));
            }
            ActivationMode::Tap => {
                let pressed = edge == ActivationEdge::Pressed;
                self.assign(flag, pressed);
                if pressed {
                    self.taps |= flag.bit();
                } else {
                    self.taps &= !flag.bit();
                }
            }
            ActivationMode::Toggle => {
                if edge == ActivationEdge::Released {
                    self.flags ^= flag.bit();
                }
            }
        }
    }

    /// Clear every flag latched by a Tap press. Called right after the
    /// resolver has read the state so a tap is seen exactly once.
    pub fn consume_taps(&mut self) {
        self.flags &= !self.taps;
        self.taps = 0;
    }

    /// Add raw mouse motion. Both axes are inverted so that moving the mouse
    /// right turns right (negative yaw) and moving it up (negative `dy` in
    /// screen space) looks up.
    pub fn accumulate_look(&mut self, dx: f32, dy: f32) {
        self.look.yaw -= dx;
        self.look.pitch -= dy;
    }

    /// Return the accumulated look delta and zero it.
    pub fn consume_look(&mut self) -> LookDelta {
        std::mem::take(&mut self.look)
    }

    pub fn pending_look(&self) -> LookDelta {
        self.look
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn assign(&mut self, flag: IntentFlag, value: bool) {
        if value {
            self.flags |= flag.bit();
        } else {
            self.flags &= !flag.bit();
        }
    }
}
