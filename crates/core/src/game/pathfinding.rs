//! Bounded 4-directional grid search.
//!
//! Pursuing opponents ask only for the next step toward the player, not the
//! whole path. Every query runs against a fresh [`ObstacleGrid`] snapshot, so
//! the search never observes mid-tick mutation.

use std::collections::BTreeMap;

use crate::state::GameState;
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Free,
    Obstacle,
}

/// Per-query occupancy snapshot: terrain plus every standing blocker that a
/// walking opponent cannot pass through.
#[derive(Clone)]
pub struct ObstacleGrid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl ObstacleGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![Cell::Free; width * height] }
    }

    pub fn cell(&self, pos: Pos) -> Cell {
        if !self.in_bounds(pos) {
            return Cell::Obstacle;
        }
        self.cells[self.index(pos)]
    }

    pub fn mark_obstacle(&mut self, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.cells[idx] = Cell::Obstacle;
    }

    fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

impl GameState {
    /// Snapshot of everything a walking opponent treats as solid: blocking
    /// terrain, path-blocking props, and both cells of every door.
    pub fn obstacle_snapshot(&self) -> ObstacleGrid {
        let mut grid = ObstacleGrid::new(self.map.width, self.map.height);
        for y in 0..self.map.height as i32 {
            for x in 0..self.map.width as i32 {
                let pos = Pos { y, x };
                if self.map.blocks(pos) {
                    grid.mark_obstacle(pos);
                }
            }
        }
        for prop in self.props.values() {
            if prop.blocks_path && !prop.erase {
                grid.mark_obstacle(prop.pos);
            }
        }
        for door in &self.doors {
            grid.mark_obstacle(door.anchor);
            grid.mark_obstacle(door.wing);
        }
        grid
    }
}

pub(crate) fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

const NEIGHBOR_DELTAS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Next cell on a shortest 4-connected path from `origin` toward `target`,
/// searching at most `max_dist` Manhattan units out. Returns `origin` when the
/// target is beyond range or no path exists.
///
/// Ties in estimated cost break by insertion order, which keeps the result
/// stable across runs.
pub fn next_step_toward(
    grid: &ObstacleGrid,
    origin: Pos,
    target: Pos,
    max_dist: i32,
) -> Pos {
    if manhattan(origin, target) > max_dist {
        return origin;
    }
    if origin == target {
        return origin;
    }

    let mut grid = grid.clone();
    // (f, insertion seq, g, pos); kept sorted descending so the node with the
    // lowest f sits at the back, ties going to the earliest insertion.
    let mut seq: u32 = 0;
    let mut open: Vec<(i32, u32, i32, Pos)> =
        vec![(manhattan(origin, target), seq, 0, origin)];
    let mut came_from: BTreeMap<Pos, Pos> = BTreeMap::new();
    grid.mark_obstacle(origin);

    while let Some((_, _, g, current)) = open.pop() {
        if current == target {
            return first_step(&came_from, origin, target);
        }
        for (dx, dy) in NEIGHBOR_DELTAS {
            let next = Pos { y: current.y + dy, x: current.x + dx };
            // The target itself may sit on a marked cell (e.g. a door
            // threshold); it is still enterable, once.
            if grid.cell(next) == Cell::Obstacle
                && (next != target || came_from.contains_key(&next))
            {
                continue;
            }
            if manhattan(origin, next) > max_dist {
                continue;
            }
            grid.mark_obstacle(next);
            came_from.insert(next, current);
            seq += 1;
            open.push((g + 1 + manhattan(next, target), seq, g + 1, next));
        }
        open.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
    }
    origin
}

fn first_step(came_from: &BTreeMap<Pos, Pos>, origin: Pos, target: Pos) -> Pos {
    let mut step = target;
    while let Some(&prev) = came_from.get(&step) {
        if prev == origin {
            return step;
        }
        step = prev;
    }
    origin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(width: usize, height: usize) -> ObstacleGrid {
        ObstacleGrid::new(width, height)
    }

    #[test]
    fn steps_straight_toward_the_target() {
        let grid = open_grid(8, 8);
        let step = next_step_toward(
            &grid,
            Pos { y: 0, x: 0 },
            Pos { y: 0, x: 3 },
            10,
        );
        assert_eq!(step, Pos { y: 0, x: 1 });
    }

    #[test]
    fn routes_around_a_wall() {
        let mut grid = open_grid(5, 5);
        // Vertical wall at x = 2 with a gap at the bottom.
        for y in 0..4 {
            grid.mark_obstacle(Pos { y, x: 2 });
        }
        let step = next_step_toward(
            &grid,
            Pos { y: 0, x: 1 },
            Pos { y: 0, x: 3 },
            20,
        );
        // Only way through is down toward the gap at y = 4.
        assert_eq!(step, Pos { y: 1, x: 1 });
    }

    #[test]
    fn out_of_range_target_yields_origin() {
        let grid = open_grid(40, 40);
        let origin = Pos { y: 0, x: 0 };
        let step = next_step_toward(&grid, origin, Pos { y: 30, x: 30 }, 20);
        assert_eq!(step, origin);
    }

    #[test]
    fn walled_off_target_yields_origin() {
        let mut grid = open_grid(5, 5);
        for y in 0..5 {
            grid.mark_obstacle(Pos { y, x: 2 });
        }
        let origin = Pos { y: 2, x: 0 };
        let step = next_step_toward(&grid, origin, Pos { y: 2, x: 4 }, 20);
        assert_eq!(step, origin);
    }

    #[test]
    fn already_there_yields_origin() {
        let grid = open_grid(3, 3);
        let origin = Pos { y: 1, x: 1 };
        assert_eq!(next_step_toward(&grid, origin, origin, 5), origin);
    }

    #[test]
    fn reaches_a_target_standing_on_an_obstacle() {
        // The player may stand on a cell the snapshot marks solid (e.g. on a
        // door threshold); the search must still reach it.
        let mut grid = open_grid(4, 4);
        grid.mark_obstacle(Pos { y: 0, x: 2 });
        let step = next_step_toward(
            &grid,
            Pos { y: 0, x: 0 },
            Pos { y: 0, x: 2 },
            10,
        );
        assert_eq!(step, Pos { y: 0, x: 1 });
    }
}
