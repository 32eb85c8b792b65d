//! Per-frame input snapshot.
use raylib::prelude::*;

pub const KEY_LEFT: KeyboardKey = KeyboardKey::KEY_A;
pub const KEY_RIGHT: KeyboardKey = KeyboardKey::KEY_D;
pub const KEY_UP: KeyboardKey = KeyboardKey::KEY_W;
pub const KEY_DOWN: KeyboardKey = KeyboardKey::KEY_S;
pub const KEY_INTERACT: KeyboardKey = KeyboardKey::KEY_E;

/// Everything the update step reads from the outside world in one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub interact: bool,
    pub wheel: f32,
}

impl Input {
    pub fn poll(window: &mut RaylibHandle) -> Self {
        Self {
            left: window.is_key_pressed(KEY_LEFT),
            right: window.is_key_pressed(KEY_RIGHT),
            up: window.is_key_pressed(KEY_UP),
            down: window.is_key_pressed(KEY_DOWN),
            interact: window.is_key_pressed(KEY_INTERACT),
            wheel: window.get_mouse_wheel_move(),
        }
    }

    pub fn any_move(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}
