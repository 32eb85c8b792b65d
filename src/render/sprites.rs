//! Tile and entity drawing from the shared sprite sheet.
//!
//! Exposes:
//! - `sprite_plan`: the ordered list of sprites for one frame
//! - `draw_scene`: issue that list inside the follow camera
use raylib::prelude::*;

use crate::core::game::GameState;
use crate::render::textures::{TextureId, TextureManager};

pub const ENEMY_CELL: (u32, u32) = (11, 0);
pub const CHEST_CELL: (u32, u32) = (9, 3);
pub const GATE_CELL: (u32, u32) = (8, 9);
pub const PLAYER_CELL: (u32, u32) = (4, 0);

/// One sheet cell drawn at a world-space pixel position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpriteDraw {
    pub cell: (u32, u32),
    pub x: f32,
    pub y: f32,
}

/// Terrain first, then enemy, chest, gate, and the player on top.
pub fn sprite_plan(state: &GameState) -> Vec<SpriteDraw> {
    let grid = state.active_grid();
    let zone = state.active_zone();
    let mut plan = Vec::with_capacity(grid.width() * grid.height() + 4);

    for tile in grid.iter() {
        plan.push(SpriteDraw {
            cell: tile.terrain.sprite_cell(),
            x: tile.x as f32 * state.tile_w,
            y: tile.y as f32 * state.tile_h,
        });
    }

    let at = |cell, pos: Vector2| SpriteDraw { cell, x: pos.x, y: pos.y };
    if state.enemy.is_alive && state.enemy.shares_zone(zone) {
        plan.push(at(ENEMY_CELL, state.enemy.pos));
    }
    if state.chest.is_alive && state.chest.shares_zone(zone) {
        plan.push(at(CHEST_CELL, state.chest.pos));
    }
    plan.push(at(GATE_CELL, state.gate.pos));
    plan.push(at(PLAYER_CELL, state.player.pos));
    plan
}

pub fn draw_scene(d: &mut RaylibDrawHandle, state: &GameState, texman: &TextureManager) {
    let sheet = texman.get(TextureId::Tilemap);
    let (tw, th) = (state.tile_w, state.tile_h);
    let mut d2 = d.begin_mode2D(state.camera.to_camera2d());
    for sprite in sprite_plan(state) {
        let source = Rectangle::new(sprite.cell.0 as f32 * tw, sprite.cell.1 as f32 * th, tw, th);
        let dest = Rectangle::new(sprite.x, sprite.y, tw, th);
        d2.draw_texture_pro(sheet, source, dest, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
    }
}
