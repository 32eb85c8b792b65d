//! Top-down follow camera with wheel zoom.
use raylib::prelude::*;

use crate::config::CameraConfig;

#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub target: Vector2,
    pub offset: Vector2,
    pub rotation: f32,
    pub zoom: f32,
    zoom_min: f32,
    zoom_max: f32,
    wheel_sensitivity: f32,
}

impl Camera {
    pub fn new(target: Vector2, screen_w: i32, screen_h: i32, cfg: &CameraConfig) -> Self {
        Self {
            target,
            offset: Vector2::new((screen_w / 2) as f32, (screen_h / 2) as f32),
            rotation: 0.0,
            zoom: cfg.zoom.clamp(cfg.zoom_min, cfg.zoom_max),
            zoom_min: cfg.zoom_min,
            zoom_max: cfg.zoom_max,
            wheel_sensitivity: cfg.wheel_sensitivity,
        }
    }

    /// Applies the wheel delta, clamps, and snaps onto `follow`.
    pub fn update(&mut self, wheel: f32, follow: Vector2) {
        self.zoom = (self.zoom + wheel * self.wheel_sensitivity).clamp(self.zoom_min, self.zoom_max);
        self.target = follow;
    }

    pub fn to_camera2d(&self) -> Camera2D {
        Camera2D {
            offset: self.offset,
            target: self.target,
            rotation: self.rotation,
            zoom: self.zoom,
        }
    }
}
