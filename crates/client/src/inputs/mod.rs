pub mod input;
pub mod window;

use bevy::prelude::{App, IntoScheduleConfigs, Plugin, Update};

use crate::inputs::input::collect_player_input;
use crate::inputs::window::{grab_cursor, handle_focus_change, toggle_cursor_grab};

/// Cursor grab and focus handling; only meaningful with a window.
pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (toggle_cursor_grab, handle_focus_change).before(collect_player_input),
        );
        app.add_observer(grab_cursor);
    }
}
