use bevy::prelude::Reflect;
use leafwing_input_manager::Actionlike;
use serde::{Deserialize, Serialize};

use crate::intent::{ActivationEdge, IntentFlag};

/// Input context every player action is registered under.
pub const INPUT_CONTEXT: &str = "player";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Reflect, Serialize, Deserialize, Actionlike)]
pub enum PlayerAction {
    MoveForward,
    MoveBack,
    MoveRight,
    MoveLeft,
    Walk,
    Jump,

    #[actionlike(Axis)]
    Yaw,

    #[actionlike(Axis)]
    Pitch,

    Shoot,
}

impl PlayerAction {
    pub const ALL: [Self; 9] = [
        Self::MoveForward,
        Self::MoveBack,
        Self::MoveRight,
        Self::MoveLeft,
        Self::Walk,
        Self::Jump,
        Self::Yaw,
        Self::Pitch,
        Self::Shoot,
    ];

    /// Actions reported as press/hold/release edges rather than analog values.
    pub const BUTTONS: [Self; 7] = [
        Self::MoveForward,
        Self::MoveBack,
        Self::MoveRight,
        Self::MoveLeft,
        Self::Walk,
        Self::Jump,
        Self::Shoot,
    ];

    /// Registration name used with the binding service.
    pub fn name(self) -> &'static str {
        match self {
            Self::MoveForward => "moveforward",
            Self::MoveBack => "moveback",
            Self::MoveRight => "moveright",
            Self::MoveLeft => "moveleft",
            Self::Walk => "walk",
            Self::Jump => "jump",
            Self::Yaw => "yaw",
            Self::Pitch => "pitch",
            Self::Shoot => "shoot",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }

    /// The intent flag driven by this action, if any.
    pub fn intent_flag(self) -> Option<IntentFlag> {
        match self {
            Self::MoveForward => Some(IntentFlag::MoveForward),
            Self::MoveBack => Some(IntentFlag::MoveBack),
            Self::MoveRight => Some(IntentFlag::MoveRight),
            Self::MoveLeft => Some(IntentFlag::MoveLeft),
            Self::Walk => Some(IntentFlag::Walk),
            Self::Jump => Some(IntentFlag::Jump),
            Self::Yaw | Self::Pitch | Self::Shoot => None,
        }
    }

    pub fn is_axis(self) -> bool {
        matches!(self, Self::Yaw | Self::Pitch)
    }
}

/// Physical inputs the default bindings refer to. Mouse axes report raw
/// motion counts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Reflect, Serialize, Deserialize)]
pub enum InputKey {
    W,
    A,
    S,
    D,
    LeftShift,
    Space,
    MouseX,
    MouseY,
    MouseLeft,
}

impl InputKey {
    pub fn is_mouse_axis(self) -> bool {
        matches!(self, Self::MouseX | Self::MouseY)
    }
}

pub const DEFAULT_BINDINGS: [(PlayerAction, InputKey); 9] = [
    (PlayerAction::MoveForward, InputKey::W),
    (PlayerAction::MoveBack, InputKey::S),
    (PlayerAction::MoveRight, InputKey::D),
    (PlayerAction::MoveLeft, InputKey::A),
    (PlayerAction::Yaw, InputKey::MouseX),
    (PlayerAction::Pitch, InputKey::MouseY),
    (PlayerAction::Walk, InputKey::LeftShift),
    (PlayerAction::Jump, InputKey::Space),
    (PlayerAction::Shoot, InputKey::MouseLeft),
];

/// A single raw transition delivered by the binding service.
///
/// Button actions carry an edge; axis actions carry the motion in `value`
/// and their edge is ignored.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct InputEvent {
    pub action: PlayerAction,
    pub edge: ActivationEdge,
    pub value: f32,
}

impl InputEvent {
    pub fn button(action: PlayerAction, edge: ActivationEdge) -> Self {
        Self {
            action,
            edge,
            value: if edge == ActivationEdge::Released { 0.0 } else { 1.0 },
        }
    }

    pub fn axis(action: PlayerAction, value: f32) -> Self {
        Self {
            action,
            edge: ActivationEdge::Held,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_default_binding() {
        for action in PlayerAction::ALL {
            assert!(
                DEFAULT_BINDINGS.iter().any(|(bound, _)| *bound == action),
                "{} has no default binding",
                action.name()
            );
        }
    }

    #[test]
    fn names_round_trip() {
        for action in PlayerAction::ALL {
            assert_eq!(PlayerAction::from_name(action.name()), Some(action));
        }
        assert_eq!(PlayerAction::from_name("crouch"), None);
    }

    #[test]
    fn axis_actions_are_bound_to_mouse_axes() {
        for (action, key) in DEFAULT_BINDINGS {
            assert_eq!(action.is_axis(), key.is_mouse_axis(), "{}", action.name());
        }
    }
}
