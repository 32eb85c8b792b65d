// main.rs
mod audio_manager;
mod config;
mod core;
mod render;

use anyhow::Result;
use raylib::prelude::*;

use crate::audio_manager::AudioManager;
use crate::config::{DEFAULT_CONFIG_PATH, GameConfig};
use crate::core::game::GameState;
use crate::core::input::Input;
use crate::render::hud::draw_hud;
use crate::render::sprites::draw_scene;
use crate::render::textures::TextureManager;

fn main() -> Result<()> {
    env_logger::init();

    // Config: first CLI argument, else tilekeep.json, else defaults
    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = GameConfig::load_or_default(&config_path);

    // Window: fixed size, no exit key, capped frame rate
    let (mut window, raylib_thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&config.window.title)
        .build();
    window.set_exit_key(None);
    window.set_target_fps(config.window.target_fps);
    log::info!("window open at {}x{}", config.window.width, config.window.height);

    // Assets drop before the window closes.
    let mut audio = AudioManager::new(&config.assets)?;
    let texman = TextureManager::new(&mut window, &raylib_thread, &config.assets)?;

    let mut state = GameState::new(&config);
    log::info!("world ready, entering frame loop");

    while !window.window_should_close() {
        // Input snapshot -> rules -> sound cues
        let input = Input::poll(&mut window);
        let cues = state.update(&input);
        audio.handle_cues(&cues);

        // Terrain and entities in camera space, HUD on top in screen space
        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::GRAY);
        draw_scene(&mut d, &state, &texman);
        draw_hud(&mut d, &state);
    }

    log::info!("shutting down");
    Ok(())
}
