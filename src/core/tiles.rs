//! Tile grids, one per zone.
use rand::Rng;

use crate::core::entity::Zone;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    Dirt,
    Grass,
    Tree,
    /// Never rolled by the overworld generator.
    #[allow(dead_code)]
    Stone,
}

impl Terrain {
    /// Terrain the overworld roll can produce. Stone is defined but never rolled.
    pub const OVERWORLD: [Terrain; 3] = [Terrain::Dirt, Terrain::Grass, Terrain::Tree];

    /// Cell of this terrain inside the shared sprite sheet.
    pub fn sprite_cell(self) -> (u32, u32) {
        match self {
            Terrain::Dirt => (4, 4),
            Terrain::Grass => (5, 4),
            Terrain::Tree => (4, 5),
            Terrain::Stone => (6, 4),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub x: usize,
    pub y: usize,
    pub terrain: Terrain,
}

/// Fixed-size grid stored as columns, `cells[x][y]`.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, zone: Zone, rng: &mut R) -> Self {
        let mut cells = Vec::with_capacity(width);
        for x in 0..width {
            let mut column = Vec::with_capacity(height);
            for y in 0..height {
                let terrain = match zone {
                    Zone::World => Terrain::OVERWORLD[rng.gen_range(0..Terrain::OVERWORLD.len())],
                    Zone::Dungeon | Zone::All => Terrain::Dirt,
                };
                column.push(Tile { x, y, terrain });
            }
            cells.push(column);
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn get(&self, x: usize, y: usize) -> Option<&Tile> {
        self.cells.get(x).and_then(|col| col.get(y))
    }

    /// Column-major walk: x outer, y inner.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn overworld_never_rolls_stone() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = Grid::generate(20, 20, Zone::World, &mut rng);
            assert!(grid.iter().all(|t| Terrain::OVERWORLD.contains(&t.terrain)));
        }
    }

    #[test]
    fn overworld_uses_every_rollable_terrain() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::generate(20, 20, Zone::World, &mut rng);
        for terrain in Terrain::OVERWORLD {
            assert!(grid.iter().any(|t| t.terrain == terrain), "{terrain:?} missing");
        }
    }

    #[test]
    fn dungeon_is_all_dirt() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::generate(20, 20, Zone::Dungeon, &mut rng);
        assert_eq!(grid.iter().count(), 400);
        assert!(grid.iter().all(|t| t.terrain == Terrain::Dirt));
    }

    #[test]
    fn coordinates_match_indices() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = Grid::generate(7, 4, Zone::World, &mut rng);
        assert_eq!((grid.width(), grid.height()), (7, 4));
        for x in 0..7 {
            for y in 0..4 {
                let t = grid.get(x, y).unwrap();
                assert_eq!((t.x, t.y), (x, y));
            }
        }
        assert!(grid.get(7, 0).is_none());
        assert!(grid.get(0, 4).is_none());
    }

    #[test]
    fn iter_is_column_major() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = Grid::generate(2, 3, Zone::Dungeon, &mut rng);
        let order: Vec<_> = grid.iter().map(|t| (t.x, t.y)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }
}
