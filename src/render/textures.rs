//! GPU texture registry. Every slot must load or startup fails.
use anyhow::{Result, anyhow};
use raylib::prelude::*;

use crate::config::AssetPaths;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextureId {
    Tilemap,
}

impl TextureId {
    pub const ALL: [TextureId; 1] = [TextureId::Tilemap];

    fn path(self, paths: &AssetPaths) -> &str {
        match self {
            TextureId::Tilemap => &paths.tilemap,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

pub struct TextureManager {
    textures: Vec<Texture2D>,
}

impl TextureManager {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, paths: &AssetPaths) -> Result<Self> {
        let mut textures = Vec::with_capacity(TextureId::ALL.len());
        for id in TextureId::ALL {
            let path = id.path(paths);
            let img = Image::load_image(path)
                .map_err(|e| anyhow!("failed to load image '{path}': {e}"))?;
            let tex = rl
                .load_texture_from_image(thread, &img)
                .map_err(|e| anyhow!("failed to upload texture '{path}': {e}"))?;
            log::debug!("loaded texture {id:?} from '{path}' ({}x{})", img.width(), img.height());
            textures.push(tex);
        }
        Ok(Self { textures })
    }

    pub fn get(&self, id: TextureId) -> &Texture2D {
        &self.textures[id.index()]
    }
}

impl Drop for TextureManager {
    fn drop(&mut self) {
        log::debug!("unloading {} texture(s)", self.textures.len());
    }
}
