//! Player, enemy, chest and gate records.
use raylib::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Zone-agnostic, visible and reachable from everywhere.
    All,
    World,
    Dungeon,
}

impl Zone {
    /// World <-> Dungeon. `All` has no counterpart and stays put.
    pub fn toggled(self) -> Zone {
        match self {
            Zone::World => Zone::Dungeon,
            Zone::Dungeon => Zone::World,
            Zone::All => Zone::All,
        }
    }

    pub fn contains(self, other: Zone) -> bool {
        self == other || self == Zone::All || other == Zone::All
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Entity {
    pub pos: Vector2,
    pub zone: Zone,
    pub health: i32,
    /// Damage taken from the most recent hit.
    pub damage: i32,
    pub is_alive: bool,
    pub money: i32,
    pub xp: i32,
}

impl Entity {
    pub fn new(x: f32, y: f32, zone: Zone) -> Self {
        Self {
            pos: Vector2::new(x, y),
            zone,
            health: 0,
            damage: 0,
            is_alive: false,
            money: 0,
            xp: 0,
        }
    }

    pub fn alive(mut self) -> Self {
        self.is_alive = true;
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_money(mut self, money: i32) -> Self {
        self.money = money;
        self
    }

    pub fn with_xp(mut self, xp: i32) -> Self {
        self.xp = xp;
        self
    }

    /// Exact tile match. Positions are always whole multiples of the tile size.
    pub fn is_at(&self, pos: Vector2) -> bool {
        self.pos.x == pos.x && self.pos.y == pos.y
    }

    pub fn shares_zone(&self, zone: Zone) -> bool {
        self.zone.contains(zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_swaps_world_and_dungeon() {
        assert_eq!(Zone::World.toggled(), Zone::Dungeon);
        assert_eq!(Zone::Dungeon.toggled(), Zone::World);
        assert_eq!(Zone::All.toggled(), Zone::All);
    }

    #[test]
    fn all_zone_overlaps_everything() {
        assert!(Zone::All.contains(Zone::World));
        assert!(Zone::Dungeon.contains(Zone::All));
        assert!(Zone::World.contains(Zone::World));
        assert!(!Zone::World.contains(Zone::Dungeon));
    }

    #[test]
    fn builder_sets_counters() {
        let e = Entity::new(8.0, 16.0, Zone::World)
            .alive()
            .with_health(100)
            .with_money(1000)
            .with_xp(50);
        assert!(e.is_alive);
        assert_eq!((e.health, e.money, e.xp, e.damage), (100, 1000, 50, 0));
        assert!(e.is_at(Vector2::new(8.0, 16.0)));
        assert!(!e.is_at(Vector2::new(8.0, 8.0)));
    }
}
