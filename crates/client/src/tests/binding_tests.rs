use leafwing_input_manager::prelude::InputMap;

use player_control::action::{INPUT_CONTEXT, InputKey};
use player_control::collaborators::InputBindings;
use player_control::PlayerAction;

use crate::adapters::InputMapBindings;

#[test]
fn test_registered_action_gets_bound() {
    let mut input_map = InputMap::<PlayerAction>::default();
    let mut bindings = InputMapBindings::new(&mut input_map);

    bindings.register_action(INPUT_CONTEXT, PlayerAction::Jump);
    bindings.bind_action(INPUT_CONTEXT, PlayerAction::Jump, InputKey::Space);
    bindings.register_action(INPUT_CONTEXT, PlayerAction::Yaw);
    bindings.bind_action(INPUT_CONTEXT, PlayerAction::Yaw, InputKey::MouseX);

    assert!(input_map.get_buttonlike(&PlayerAction::Jump).is_some());
    assert!(input_map.get_axislike(&PlayerAction::Yaw).is_some());
}

#[test]
fn test_bind_before_register_is_ignored() {
    let mut input_map = InputMap::<PlayerAction>::default();
    let mut bindings = InputMapBindings::new(&mut input_map);

    bindings.bind_action(INPUT_CONTEXT, PlayerAction::Shoot, InputKey::MouseLeft);

    assert!(input_map.get_buttonlike(&PlayerAction::Shoot).is_none());
}

#[test]
fn test_registration_is_per_context() {
    let mut input_map = InputMap::<PlayerAction>::default();
    let mut bindings = InputMapBindings::new(&mut input_map);

    bindings.register_action("vehicle", PlayerAction::Walk);
    bindings.bind_action(INPUT_CONTEXT, PlayerAction::Walk, InputKey::LeftShift);

    assert!(input_map.get_buttonlike(&PlayerAction::Walk).is_none());
}
