//! Rendering on top of raylib.
//!
//! Re-exports:
//! - `textures`: Sprite sheet registry
//! - `sprites`: Terrain and entity drawing
//! - `hud`: Text overlay

pub mod textures;
pub mod sprites;
pub mod hud;
