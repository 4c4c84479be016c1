//! The generated tile map and its read-only query surface.

use xxhash_rust::xxh3::xxh3_64;

use crate::rng::RandomSource;
use crate::types::{Pos, Tile};

/// A dense row-major tile buffer (`index = y * width + x`).
///
/// The pipeline builds a `Map` once per run and hands it out immutably;
/// consumers only get the bounds-checked query methods below. Reads outside
/// the grid yield `Wall`, which lets neighbour scans run without explicit
/// edge cases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Map {
    pub(crate) fn filled(width: usize, height: usize, tile: Tile) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height, tiles: vec![tile; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Tile at `(x, y)`; out-of-bounds reads report `Wall`.
    pub fn get(&self, x: i32, y: i32) -> Tile {
        if !self.is_valid_position(x, y) {
            return Tile::Wall;
        }
        self.tiles[self.index_of(x, y)]
    }

    /// Writes are pipeline-internal. Out-of-bounds writes are ignored.
    pub(crate) fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if !self.is_valid_position(x, y) {
            return;
        }
        let index = self.index_of(x, y);
        self.tiles[index] = tile;
    }

    /// Flat index of an in-bounds coordinate.
    pub fn index_of(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.is_valid_position(x, y));
        (y as usize) * self.width + (x as usize)
    }

    /// Inverse of [`Map::index_of`].
    pub fn position_of(&self, index: usize) -> Pos {
        debug_assert!(index < self.tiles.len());
        Pos { y: (index / self.width) as i32, x: (index % self.width) as i32 }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Every `Floor` coordinate in row-major order.
    pub fn floor_positions(&self) -> Vec<Pos> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == Tile::Floor)
            .map(|(index, _)| self.position_of(index))
            .collect()
    }

    /// Uniform pick among the floor cells, for spawn placement.
    /// Returns `None` when the map has no floor at all.
    pub fn random_floor_position(&self, rng: &mut dyn RandomSource) -> Option<Pos> {
        let positions = self.floor_positions();
        if positions.is_empty() {
            return None;
        }
        Some(positions[rng.next_below(positions.len() as u32) as usize])
    }

    /// `(floor, wall)` tile totals.
    pub fn tile_counts(&self) -> (usize, usize) {
        let floor = self.tiles.iter().filter(|tile| **tile == Tile::Floor).count();
        (floor, self.tiles.len() - floor)
    }

    /// Stable byte encoding of dimensions and tiles, used for determinism
    /// checks and fingerprinting.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile {
                Tile::Wall => 0,
                Tile::Floor => 1,
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
