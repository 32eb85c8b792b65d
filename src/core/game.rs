//! Game state and the per-frame update step.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raylib::prelude::*;

use crate::config::{CombatConfig, GameConfig};
use crate::core::camera::Camera;
use crate::core::entity::{Entity, Zone};
use crate::core::input::Input;
use crate::core::tiles::Grid;

/// Fire-and-forget side effects of one update, handed to the audio layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    FootGrass,
    FootStone,
    Attack,
    Death,
    Coins,
    /// Switch the ambience loop to the given zone's track.
    Ambience(Zone),
}

pub struct GameState {
    pub world: Grid,
    pub dungeon: Grid,
    pub player: Entity,
    pub enemy: Entity,
    pub chest: Entity,
    pub gate: Entity,
    pub camera: Camera,
    pub tile_w: f32,
    pub tile_h: f32,
    combat: CombatConfig,
    rng: StdRng,
}

impl GameState {
    pub fn new(cfg: &GameConfig) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(cfg, rng)
    }

    pub fn with_rng(cfg: &GameConfig, mut rng: StdRng) -> Self {
        let tile_w = cfg.world.tile_width as f32;
        let tile_h = cfg.world.tile_height as f32;
        let at = |(tx, ty): (i32, i32)| (tx as f32 * tile_w, ty as f32 * tile_h);

        let world = Grid::generate(cfg.world.width, cfg.world.height, Zone::World, &mut rng);
        let dungeon = Grid::generate(cfg.world.width, cfg.world.height, Zone::Dungeon, &mut rng);

        let e = &cfg.entities;
        let (px, py) = at(e.player_tile);
        let player = Entity::new(px, py, Zone::World)
            .alive()
            .with_health(e.player_health)
            .with_money(e.player_money)
            .with_xp(e.player_xp);

        let (ex, ey) = at(e.enemy_tile);
        let enemy_zone = if e.enemy_in_dungeon { Zone::Dungeon } else { Zone::World };
        let enemy = Entity::new(ex, ey, enemy_zone)
            .alive()
            .with_health(e.enemy_health)
            .with_xp(e.enemy_xp_reward);

        let (gx, gy) = at(e.gate_tile);
        let gate = Entity::new(gx, gy, Zone::All).alive();
        let chest = Entity::new(0.0, 0.0, Zone::All);

        let camera = Camera::new(player.pos, cfg.window.width, cfg.window.height, &cfg.camera);

        Self {
            world,
            dungeon,
            player,
            enemy,
            chest,
            gate,
            camera,
            tile_w,
            tile_h,
            combat: cfg.combat.clone(),
            rng,
        }
    }

    pub fn active_zone(&self) -> Zone {
        self.player.zone
    }

    pub fn active_grid(&self) -> &Grid {
        match self.player.zone {
            Zone::World | Zone::All => &self.world,
            Zone::Dungeon => &self.dungeon,
        }
    }

    /// One simulation tick. Returns the audio cues it triggered, in order.
    pub fn update(&mut self, input: &Input) -> Vec<Cue> {
        let mut cues = Vec::new();

        let mut next = self.player.pos;
        if input.left { next.x -= self.tile_w; }
        if input.right { next.x += self.tile_w; }
        if input.up { next.y -= self.tile_h; }
        if input.down { next.y += self.tile_h; }

        if input.any_move() {
            cues.push(match self.player.zone {
                Zone::Dungeon => Cue::FootStone,
                Zone::World | Zone::All => Cue::FootGrass,
            });
        }

        if input.interact {
            if self.try_use_gate() {
                cues.push(Cue::Ambience(self.player.zone));
            }
            if self.try_loot() {
                cues.push(Cue::Coins);
            }
        }

        match self.try_attack(next) {
            Some(cue) => cues.push(cue),
            None => self.player.pos = next,
        }

        self.camera.update(input.wheel, self.player.pos);
        cues
    }

    fn try_use_gate(&mut self) -> bool {
        if !self.player.is_at(self.gate.pos) {
            return false;
        }
        self.player.zone = self.player.zone.toggled();
        log::debug!("player moved to {:?}", self.player.zone);
        true
    }

    fn try_loot(&mut self) -> bool {
        let chest = &mut self.chest;
        if !chest.is_alive || !chest.shares_zone(self.player.zone) || !chest.is_at(self.player.pos) {
            return false;
        }
        chest.is_alive = false;
        self.player.money += chest.money;
        log::debug!("looted {} money, player now has {}", chest.money, self.player.money);
        true
    }

    /// Resolves a bump into the enemy. `None` means the move is free.
    fn try_attack(&mut self, target: Vector2) -> Option<Cue> {
        if !self.enemy.is_alive || !self.enemy.shares_zone(self.player.zone) || !self.enemy.is_at(target) {
            return None;
        }

        let damage = self.rng.gen_range(self.combat.damage_min..=self.combat.damage_max);
        self.enemy.health -= damage;
        self.enemy.damage = damage;

        if self.enemy.health > 0 {
            log::debug!("hit enemy for {damage}, {} health left", self.enemy.health);
            return Some(Cue::Attack);
        }

        self.enemy.is_alive = false;
        self.player.xp += self.enemy.xp;
        self.chest = Entity::new(self.enemy.pos.x, self.enemy.pos.y, self.enemy.zone)
            .alive()
            .with_money(self.rng.gen_range(self.combat.loot_min..=self.combat.loot_max));
        log::debug!("enemy defeated, chest holds {}", self.chest.money);
        Some(Cue::Death)
    }
}
