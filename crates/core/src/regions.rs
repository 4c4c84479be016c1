//! Flood-fill region discovery, small-region pruning, and corridor carving.

use std::collections::VecDeque;

use crate::map::Map;
use crate::types::{Pos, Tile};

/// A maximal 4-connected set of `Floor` cells, in BFS discovery order with
/// the seed cell first. Regions only live inside the pipeline; the output
/// map never references them.
pub(crate) type Region = Vec<Pos>;

/// Partitions all `Floor` cells into regions, ordered by the row-major
/// position of each region's seed cell.
pub(crate) fn find_regions(map: &Map) -> Vec<Region> {
    let mut visited = vec![false; map.width() * map.height()];
    let mut regions = Vec::new();

    for y in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            if map.get(x, y) == Tile::Floor && !visited[map.index_of(x, y)] {
                regions.push(flood_fill(map, x, y, &mut visited));
            }
        }
    }
    regions
}

fn flood_fill(map: &Map, start_x: i32, start_y: i32, visited: &mut [bool]) -> Region {
    let mut region = Vec::new();
    let mut queue = VecDeque::new();

    visited[map.index_of(start_x, start_y)] = true;
    queue.push_back(Pos { y: start_y, x: start_x });

    while let Some(current) = queue.pop_front() {
        region.push(current);

        // 4-neighbourhood only; diagonal contact does not join regions.
        let neighbors = [
            Pos { y: current.y, x: current.x + 1 },
            Pos { y: current.y, x: current.x - 1 },
            Pos { y: current.y + 1, x: current.x },
            Pos { y: current.y - 1, x: current.x },
        ];
        for next in neighbors {
            if map.is_valid_position(next.x, next.y)
                && map.get(next.x, next.y) == Tile::Floor
                && !visited[map.index_of(next.x, next.y)]
            {
                visited[map.index_of(next.x, next.y)] = true;
                queue.push_back(next);
            }
        }
    }
    region
}

/// Index of the region with the most cells. Strictly-greater comparison
/// keeps the first-discovered region on ties.
pub(crate) fn largest_region(regions: &[Region]) -> Option<usize> {
    let mut largest = None;
    let mut max_size = 0;
    for (index, region) in regions.iter().enumerate() {
        if region.len() > max_size {
            max_size = region.len();
            largest = Some(index);
        }
    }
    largest
}

/// Fills every region smaller than `min_cave_size` back in with walls.
/// The largest region always survives, even below the threshold.
pub(crate) fn prune_small_regions(
    map: &mut Map,
    regions: &[Region],
    largest: Option<usize>,
    min_cave_size: usize,
) {
    for (index, region) in regions.iter().enumerate() {
        if Some(index) != largest && region.len() < min_cave_size {
            for pos in region {
                map.set(pos.x, pos.y, Tile::Wall);
            }
        }
    }
}

/// Re-derives the surviving regions and carves an L-shaped corridor between
/// each consecutive pair, using each region's seed cell as representative.
/// Consecutive list entries end up connected; with three or more regions
/// this does not promise full graph connectivity.
pub(crate) fn carve_corridors(map: &mut Map, min_cave_size: usize) {
    let surviving: Vec<Region> = find_regions(map)
        .into_iter()
        .filter(|region| region.len() >= min_cave_size)
        .collect();

    for pair in surviving.windows(2) {
        carve_corridor(map, pair[0][0], pair[1][0]);
    }
}

/// Walks horizontally toward `end.x`, then vertically toward `end.y`,
/// flooring every visited cell. The starting cell is already floor.
fn carve_corridor(map: &mut Map, start: Pos, end: Pos) {
    let mut current = start;

    while current.x != end.x {
        current.x += if end.x > current.x { 1 } else { -1 };
        map.set(current.x, current.y, Tile::Floor);
    }
    while current.y != end.y {
        current.y += if end.y > current.y { 1 } else { -1 };
        map.set(current.x, current.y, Tile::Floor);
    }
}
