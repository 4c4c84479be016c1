//! One smoothing generation of the cave cellular automaton.

use crate::map::Map;
use crate::types::Tile;

/// Number of `Wall` tiles among the eight Moore neighbours of `(x, y)`.
/// Out-of-bounds neighbours count as `Wall` via the map's bounds policy.
pub(crate) fn count_wall_neighbors(map: &Map, x: i32, y: i32) -> u32 {
    let mut walls = 0;
    for ny in (y - 1)..=(y + 1) {
        for nx in (x - 1)..=(x + 1) {
            if nx == x && ny == y {
                continue;
            }
            if map.get(nx, ny) == Tile::Wall {
                walls += 1;
            }
        }
    }
    walls
}

/// Applies one automaton generation, reading `map` and writing a fresh map.
/// The input is never mutated, so every transition sees a consistent
/// previous state.
pub(crate) fn step(map: &Map, birth_limit: u32, death_limit: u32) -> Map {
    let mut next = Map::filled(map.width(), map.height(), Tile::Wall);
    for y in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            let walls = count_wall_neighbors(map, x, y);
            let tile = match map.get(x, y) {
                Tile::Wall if walls < death_limit => Tile::Floor,
                Tile::Wall => Tile::Wall,
                Tile::Floor if walls > birth_limit => Tile::Wall,
                Tile::Floor => Tile::Floor,
            };
            next.set(x, y, tile);
        }
    }
    next
}
