// Shortest-path search on the annotated grid
//
// Plain breadth-first search: four-connected, unit edge cost, so the first
// time a cell is reached is along a shortest path. Neighbor expansion
// follows Direction::all() order, which keeps results deterministic among
// equal-length paths.

use std::collections::VecDeque;

use crate::types::{Coord, Direction};
use crate::world::Grid;

/// Shortest obstacle-avoiding path from `start` to `goal`, both inclusive.
///
/// The start cell is always expandable even though it normally holds the
/// searching snake's own head segment. A blocked-off goal yields `None`,
/// never a partial path.
pub fn shortest_path(grid: &Grid, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    if grid.is_out_of_bounds(start) || grid.is_out_of_bounds(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let width = grid.width();
    let area = (width * grid.height()) as usize;
    let index = |coord: Coord| (coord.y * width + coord.x) as usize;

    let mut parent: Vec<Option<Coord>> = vec![None; area];
    let mut visited = vec![false; area];
    let mut queue = VecDeque::new();

    visited[index(start)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for direction in Direction::all() {
            let next = direction.apply(&current);
            if grid.is_blocked(next) {
                continue;
            }

            let idx = index(next);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            parent[idx] = Some(current);

            if next == goal {
                return Some(reconstruct(&parent, width, start, goal));
            }
            queue.push_back(next);
        }
    }

    None
}

/// One shortest path per reachable food point, in food-list order.
/// Unreachable food is a normal outcome and is simply absent.
pub fn food_paths(grid: &Grid, head: Coord, food: &[Coord]) -> Vec<Vec<Coord>> {
    food.iter()
        .filter_map(|&target| shortest_path(grid, head, target))
        .collect()
}

fn reconstruct(parent: &[Option<Coord>], width: i32, start: Coord, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        match parent[(current.y * width + current.x) as usize] {
            Some(previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
