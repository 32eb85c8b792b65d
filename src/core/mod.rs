//! Core game types and logic (data, input, rules).
//!
//! Re-exports:
//! - `tiles`: Terrain grids per zone
//! - `entity`: Zones and the shared entity record
//! - `camera`: Follow camera with clamped zoom
//! - `input`: Per-frame key/wheel snapshot
//! - `game`: Game state and the update step

pub mod tiles;
pub mod entity;
pub mod camera;
pub mod input;
pub mod game;
