pub mod action;
pub mod collaborators;
pub mod config;
pub mod intent;
pub mod locomotion;
pub mod orientation;
pub mod player;
pub mod weapons;

pub use action::{InputEvent, PlayerAction};
pub use collaborators::{ActionHost, PlayerHost, Pose};
pub use config::{DiagonalPolicy, MovementConfig};
pub use intent::{ActivationEdge, ActivationMode, InputIntentState, IntentFlag, LookDelta};
pub use orientation::LookOrientation;
pub use player::{EventKind, GameplayComponent, LifecycleEvent, PlayerControl};

#[cfg(test)]
mod tests;
