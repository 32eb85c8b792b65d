//! Sound effects and per-zone ambience on top of rodio.
use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::{fs, io::Cursor, sync::Arc};

use crate::config::AssetPaths;
use crate::core::entity::Zone;
use crate::core::game::Cue;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SoundId {
    FootGrass,
    FootStone,
    Attack,
    Death,
    Coins,
}

impl SoundId {
    pub const ALL: [SoundId; 5] = [
        SoundId::FootGrass,
        SoundId::FootStone,
        SoundId::Attack,
        SoundId::Death,
        SoundId::Coins,
    ];

    fn path(self, paths: &AssetPaths) -> &str {
        match self {
            SoundId::FootGrass => &paths.foot_grass,
            SoundId::FootStone => &paths.foot_stone,
            SoundId::Attack => &paths.attack,
            SoundId::Death => &paths.death,
            SoundId::Coins => &paths.coins,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MusicId {
    LightAmbience,
    DarkAmbience,
}

impl MusicId {
    pub const ALL: [MusicId; 2] = [MusicId::LightAmbience, MusicId::DarkAmbience];

    pub fn for_zone(zone: Zone) -> MusicId {
        match zone {
            Zone::Dungeon => MusicId::DarkAmbience,
            Zone::World | Zone::All => MusicId::LightAmbience,
        }
    }

    fn path(self, paths: &AssetPaths) -> &str {
        match self {
            MusicId::LightAmbience => &paths.music_light,
            MusicId::DarkAmbience => &paths.music_dark,
        }
    }
}

/// Which sound a gameplay cue plays. Ambience switches are not one-shots.
pub fn sound_for(cue: Cue) -> Option<SoundId> {
    match cue {
        Cue::FootGrass => Some(SoundId::FootGrass),
        Cue::FootStone => Some(SoundId::FootStone),
        Cue::Attack => Some(SoundId::Attack),
        Cue::Death => Some(SoundId::Death),
        Cue::Coins => Some(SoundId::Coins),
        Cue::Ambience(_) => None,
    }
}

/// Reads the file and checks it decodes, so a bad asset fails at startup.
fn load_clip(path: &str) -> Result<Arc<Vec<u8>>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read audio file '{path}'"))?;
    Decoder::new(Cursor::new(bytes.clone()))
        .with_context(|| format!("failed to decode audio file '{path}'"))?;
    Ok(Arc::new(bytes))
}

pub struct AudioManager {
    // Sinks go first so they stop before the stream closes.
    music_sinks: Vec<Sink>,
    sounds: Vec<Arc<Vec<u8>>>,
    current_music: MusicId,
    handle: OutputStreamHandle,
    _stream: OutputStream,
}

impl AudioManager {
    pub fn new(paths: &AssetPaths) -> Result<Self> {
        let (_stream, handle) =
            OutputStream::try_default().context("failed to open the default audio device")?;

        let mut sounds = Vec::with_capacity(SoundId::ALL.len());
        for id in SoundId::ALL {
            let path = id.path(paths);
            sounds.push(load_clip(path)?);
            log::debug!("loaded sound {id:?} from '{path}'");
        }

        let mut music_sinks = Vec::with_capacity(MusicId::ALL.len());
        for id in MusicId::ALL {
            let path = id.path(paths);
            let bytes = fs::read(path).with_context(|| format!("failed to read music file '{path}'"))?;
            let dec = Decoder::new_looped(Cursor::new(bytes))
                .with_context(|| format!("failed to decode music file '{path}'"))?;
            let sink = Sink::try_new(&handle)
                .with_context(|| format!("failed to create a sink for '{path}'"))?;
            sink.pause();
            sink.set_volume(0.35);
            sink.append(dec);
            music_sinks.push(sink);
            log::debug!("loaded music {id:?} from '{path}'");
        }

        let mut audio = Self {
            music_sinks,
            sounds,
            current_music: MusicId::LightAmbience,
            handle,
            _stream,
        };
        audio.play_music(MusicId::LightAmbience);
        Ok(audio)
    }

    /// Pauses the current loop and resumes `id` where it left off.
    pub fn play_music(&mut self, id: MusicId) {
        if self.current_music != id {
            self.music_sinks[self.current_music as usize].pause();
            self.current_music = id;
        }
        self.music_sinks[id as usize].play();
    }

    pub fn play_sound(&self, id: SoundId) {
        // Own sink per shot so overlapping cues in one frame all start immediately.
        let data = self.sounds[id as usize].as_ref().clone();
        match (Decoder::new(Cursor::new(data)), Sink::try_new(&self.handle)) {
            (Ok(dec), Ok(sink)) => {
                sink.append(dec);
                sink.detach();
            }
            (Err(err), _) => log::warn!("could not decode {id:?}: {err}"),
            (_, Err(err)) => log::warn!("could not play {id:?}: {err}"),
        }
    }

    pub fn handle_cues(&mut self, cues: &[Cue]) {
        for &cue in cues {
            match cue {
                Cue::Ambience(zone) => self.play_music(MusicId::for_zone(zone)),
                other => {
                    if let Some(id) = sound_for(other) {
                        self.play_sound(id);
                    }
                }
            }
        }
    }
}

impl Drop for AudioManager {
    fn drop(&mut self) {
        for sink in &self.music_sinks {
            sink.stop();
        }
        log::debug!(
            "released {} sound(s) and {} music stream(s)",
            self.sounds.len(),
            self.music_sinks.len()
        );
    }
}
