use bevy::prelude::{
    Add, ButtonInput, KeyCode, MessageReader, MouseButton, On, Query, Res, With, info,
};
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow, WindowFocused};
use leafwing_input_manager::prelude::ActionState;

use player_control::{PlayerAction, PlayerControl};

/// Release every button and zero the look axes so nothing stays stuck.
pub fn release_all(action_state: &mut ActionState<PlayerAction>) {
    for action in PlayerAction::BUTTONS {
        action_state.release(&action);
    }
    action_state.set_value(&PlayerAction::Yaw, 0.0);
    action_state.set_value(&PlayerAction::Pitch, 0.0);
}

fn set_cursor_locked(cursor_options: &mut CursorOptions, locked: bool) {
    cursor_options.grab_mode = if locked {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::None
    };
    cursor_options.visible = !locked;
}

pub fn toggle_cursor_grab(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut action_query: Query<&mut ActionState<PlayerAction>, With<PlayerControl>>,
    mut cursor_options_query: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let Ok(mut cursor_options) = cursor_options_query.single_mut() else {
        return;
    };

    let unlocked = cursor_options.grab_mode == CursorGrabMode::None;
    let lock = if keys.just_pressed(KeyCode::Escape) {
        unlocked
    } else if unlocked && mouse.just_pressed(MouseButton::Left) {
        // Re-lock on click without firing
        true
    } else {
        return;
    };

    set_cursor_locked(&mut cursor_options, lock);
    for mut action_state in action_query.iter_mut() {
        release_all(&mut action_state);
        if lock {
            action_state.enable();
        } else {
            action_state.disable();
        }
    }
    info!("🖱️ Cursor {}", if lock { "locked" } else { "released" });
}

pub fn handle_focus_change(
    mut focus_events: MessageReader<WindowFocused>,
    mut action_query: Query<&mut ActionState<PlayerAction>, With<PlayerControl>>,
    cursor_options_query: Query<&CursorOptions, With<PrimaryWindow>>,
) {
    let cursor_locked = cursor_options_query
        .single()
        .is_ok_and(|cursor_options| cursor_options.grab_mode == CursorGrabMode::Locked);

    for event in focus_events.read() {
        for mut action_state in action_query.iter_mut() {
            release_all(&mut action_state);

            // Input stays off while the cursor is released; Escape or a click re-locks it
            if event.focused && cursor_locked && action_state.disabled() {
                action_state.enable();
            }
        }
    }
}

pub fn grab_cursor(
    _trigger: On<Add, PlayerControl>,
    mut cursor_options_query: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if let Ok(mut cursor_options) = cursor_options_query.single_mut() {
        set_cursor_locked(&mut cursor_options, true);
    }
}
