use bevy::log::{debug, info};
use bevy::prelude::{Component, Reflect, Transform};

use crate::action::{DEFAULT_BINDINGS, INPUT_CONTEXT, InputEvent, PlayerAction};
use crate::collaborators::{ActionHost, InputBindings, PlayerHost};
use crate::config::MovementConfig;
use crate::intent::{ActivationEdge, ActivationMode, InputIntentState, IntentFlag};
use crate::locomotion::{self, LocomotionCommand};
use crate::orientation::{self, LookOrientation};
use crate::weapons::trigger_fire;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    GameplayStarted,
    Update,
    Reset,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum LifecycleEvent {
    /// Gameplay begins; inputs get bound.
    GameplayStarted,
    /// One simulation tick.
    Update { delta_seconds: f32 },
    /// Back to the spawn state.
    Reset,
}

impl LifecycleEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::GameplayStarted => EventKind::GameplayStarted,
            Self::Update { .. } => EventKind::Update,
            Self::Reset => EventKind::Reset,
        }
    }
}

/// What the host needs to know to drive a gameplay component.
pub trait GameplayComponent {
    fn initialize(&mut self);

    fn subscribed_events(&self) -> &'static [EventKind];

    fn on_event(&mut self, event: LifecycleEvent, host: &mut PlayerHost);
}

/// First-person player control: intent, locomotion, look and fire.
#[derive(Component, Clone, Debug, Reflect)]
pub struct PlayerControl {
    config: MovementConfig,
    intent: InputIntentState,
    look: LookOrientation,
    inputs_bound: bool,
}

impl Default for PlayerControl {
    fn default() -> Self {
        Self::new(MovementConfig::default())
    }
}

impl PlayerControl {
    pub fn new(config: MovementConfig) -> Self {
        let mut control = Self {
            config,
            intent: InputIntentState::default(),
            look: LookOrientation::IDENTITY,
            inputs_bound: false,
        };
        control.initialize();
        control
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn intent(&self) -> &InputIntentState {
        &self.intent
    }

    pub fn look(&self) -> LookOrientation {
        self.look
    }

    pub fn inputs_bound(&self) -> bool {
        self.inputs_bound
    }

    fn activation_mode(&self, flag: IntentFlag) -> ActivationMode {
        match flag {
            IntentFlag::Jump => ActivationMode::Tap,
            IntentFlag::Walk => self.config.walk_activation,
            IntentFlag::MoveForward
            | IntentFlag::MoveBack
            | IntentFlag::MoveLeft
            | IntentFlag::MoveRight => ActivationMode::Hold,
        }
    }

    /// Fold one raw input transition into the intent state, or fire.
    pub fn handle_input(&mut self, event: InputEvent, host: &mut ActionHost) {
        match event.action {
            PlayerAction::Yaw => self.intent.accumulate_look(event.value, 0.0),
            PlayerAction::Pitch => self.intent.accumulate_look(0.0, event.value),
            PlayerAction::Shoot => {
                trigger_fire(event.edge, &self.config.muzzle_attachment, host);
            }
            action => {
                if let Some(flag) = action.intent_flag() {
                    let mode = self.activation_mode(flag);
                    self.intent.set_flag(flag, mode, event.edge);
                }
            }
        }
    }

    /// Drop every held intent and pending look, e.g. when input focus is
    /// lost. Toggled flags survive since they have no held key to release.
    pub fn release_held(&mut self) {
        for flag in IntentFlag::ALL {
            let mode = self.activation_mode(flag);
            if mode != ActivationMode::Toggle {
                self.intent.set_flag(flag, mode, ActivationEdge::Released);
            }
        }
        self.intent.consume_look();
    }

    fn bind_inputs(&mut self, bindings: &mut dyn InputBindings) {
        if self.inputs_bound {
            debug!("Player inputs already bound, skipping");
            return;
        }

        for (action, key) in DEFAULT_BINDINGS {
            bindings.register_action(INPUT_CONTEXT, action);
            bindings.bind_action(INPUT_CONTEXT, action, key);
        }
        self.inputs_bound = true;
        info!("🎮 Bound {} player actions", DEFAULT_BINDINGS.len());
    }

    /// Run locomotion then look for one tick.
    pub fn update(&mut self, delta_seconds: f32, host: &mut PlayerHost) -> LocomotionCommand {
        let command = locomotion::resolve(
            &self.intent,
            &self.config,
            delta_seconds,
            host.body.is_grounded(),
        );
        self.intent.consume_taps();

        let world_velocity = host.body.world_rotation() * command.local_velocity();
        host.body.set_velocity(world_velocity);
        if let Some(impulse) = command.impulse() {
            debug!("Jump impulse {:?}", impulse);
            host.body.add_impulse(impulse);
        }

        self.update_look(host);
        command
    }

    fn update_look(&mut self, host: &mut PlayerHost) {
        let delta = self.intent.consume_look();
        let integrated = orientation::integrate(
            self.look,
            delta,
            self.config.rotation_speed,
            self.config.pitch_min,
            self.config.pitch_max,
        );
        self.look = integrated.look;

        host.body.set_rotation(integrated.body_yaw);

        let mut camera = host.camera.transform();
        camera.rotation = integrated.camera_pitch;
        host.camera.set_transform(camera);
    }

    pub fn reset(&mut self, host: &mut PlayerHost) {
        self.intent.clear();
        self.look = LookOrientation::IDENTITY;

        host.camera.set_transform(
            Transform::from_translation(self.config.camera_default_offset)
                .with_rotation(host.body.world_rotation()),
        );
        debug!("Player control reset");
    }
}

impl GameplayComponent for PlayerControl {
    fn initialize(&mut self) {
        self.config = self.config.sanitized();
    }

    fn subscribed_events(&self) -> &'static [EventKind] {
        &[EventKind::GameplayStarted, EventKind::Update, EventKind::Reset]
    }

    fn on_event(&mut self, event: LifecycleEvent, host: &mut PlayerHost) {
        match event {
            LifecycleEvent::GameplayStarted => self.bind_inputs(host.bindings),
            LifecycleEvent::Update { delta_seconds } => {
                self.update(delta_seconds, host);
            }
            LifecycleEvent::Reset => self.reset(host),
        }
    }
}
