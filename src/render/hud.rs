use raylib::prelude::*;

use crate::core::game::GameState;

const PANEL: (i32, i32, i32, i32) = (5, 5, 330, 120);
const FONT_SIZE: i32 = 14;

pub fn hud_lines(state: &GameState) -> [String; 6] {
    let cam = &state.camera;
    [
        format!("zoom: {:.6}", cam.zoom),
        format!("cam target: {:.6} {:.6}", cam.target.x, cam.target.y),
        format!("player health: {}", state.player.health),
        format!("player xp: {}", state.player.xp),
        format!("player money: {}", state.player.money),
        format!("orc health: {}", state.enemy.health),
    ]
}

/// Screen-space overlay, drawn after the camera pass.
pub fn draw_hud(d: &mut RaylibDrawHandle, state: &GameState) {
    let (x, y, w, h) = PANEL;
    d.draw_rectangle(x, y, w, h, Color::new(102, 191, 255, 128));
    d.draw_rectangle_lines(x, y, w, h, Color::BLUE);
    for (i, line) in hud_lines(state).iter().enumerate() {
        d.draw_text(line, 15, 10 + 20 * i as i32, FONT_SIZE, Color::YELLOW);
    }
}
