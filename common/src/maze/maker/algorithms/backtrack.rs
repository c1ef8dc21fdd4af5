use log::trace;
use rand::{Rng, seq::SliceRandom};

use super::super::{Cell, GridBuilder};

/// Distance-2 steps: one hop over the connecting cell to the next room.
pub const STEPS: [(isize, isize); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

pub trait Backtrack {
    fn backtrack(&mut self);
}

// One entry of the explicit stack. The steps are shuffled when the frame is
// pushed, so the random source is consumed in the same order as a recursive
// carve entering each cell.
struct Frame {
    cell: Cell,
    steps: [(isize, isize); 4],
    tried: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(cell: Cell, rng: &mut R) -> Frame {
        let mut steps = STEPS;
        steps.shuffle(rng);
        Frame {
            cell,
            steps,
            tried: 0,
        }
    }

    fn next_step(&mut self) -> Option<(isize, isize)> {
        let step = self.steps.get(self.tried).copied()?;
        self.tried += 1;
        Some(step)
    }
}

impl<R: Rng> Backtrack for GridBuilder<R> {
    fn backtrack(&mut self) {
        let entry = Cell::new(0, 0);
        self.visit_cell(entry);

        let mut stack = vec![Frame::new(entry, &mut self.rng)];
        let mut deepest = stack.len();

        while let Some(frame) = stack.last_mut() {
            let Some((dx, dy)) = frame.next_step() else {
                stack.pop();
                continue;
            };
            let curr = frame.cell;

            let Some(next) = self.neighbor(curr, dx, dy) else {
                continue;
            };
            if self.is_visited(next) {
                continue;
            }

            self.remove_wall_between(curr, next);
            self.visit_cell(next);
            stack.push(Frame::new(next, &mut self.rng));
            deepest = deepest.max(stack.len());
        }

        trace!("backtracking finished, deepest stack was {} frames", deepest);
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::maze::maker::Tile;

    // The textbook recursive carve, kept here to check the explicit stack
    // against it.
    fn carve_recursively<R: Rng>(grid: &mut [Vec<Tile>], x: usize, y: usize, rng: &mut R) {
        let height = grid.len() as isize;
        let width = grid[0].len() as isize;

        let mut steps = STEPS;
        steps.shuffle(rng);

        for (dx, dy) in steps {
            let nx = x as isize + dx;
            let ny = y as isize + dy;

            if nx < 0 || ny < 0 || nx >= width || ny >= height {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if grid[ny][nx] != Tile::Wall {
                continue;
            }

            let wall_x = (x as isize + dx / 2) as usize;
            let wall_y = (y as isize + dy / 2) as usize;
            grid[wall_y][wall_x] = Tile::Passage;
            grid[ny][nx] = Tile::Passage;
            carve_recursively(grid, nx, ny, rng);
        }
    }

    fn recursive_grid(width: usize, height: usize, seed: u64) -> Vec<Vec<Tile>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = vec![vec![Tile::Wall; width]; height];
        grid[0][0] = Tile::Passage;
        carve_recursively(&mut grid, 0, 0, &mut rng);
        grid
    }

    #[test]
    fn explicit_stack_matches_recursive_carve() {
        for (width, height) in [(1, 1), (2, 1), (5, 5), (9, 4), (4, 9), (21, 13), (30, 30)] {
            for seed in 0..8 {
                let builder = GridBuilder::with_rng(
                    width as i64,
                    height as i64,
                    StdRng::seed_from_u64(seed),
                )
                .unwrap();

                assert_eq!(
                    builder.grid(),
                    recursive_grid(width, height, seed).as_slice(),
                    "{width} x {height} with seed {seed}"
                );
            }
        }
    }

    #[test]
    fn frame_yields_each_step_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut frame = Frame::new(Cell::new(0, 0), &mut rng);

        let mut seen = Vec::new();
        while let Some(step) = frame.next_step() {
            seen.push(step);
        }
        seen.sort();

        let mut expected = STEPS.to_vec();
        expected.sort();
        assert_eq!(seen, expected);
        assert_eq!(frame.next_step(), None);
    }

    #[test]
    fn shuffle_reaches_every_order() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut orders = std::collections::HashSet::new();

        for _ in 0..2000 {
            orders.insert(Frame::new(Cell::new(0, 0), &mut rng).steps);
        }

        assert_eq!(orders.len(), 24);
    }

    #[test]
    fn large_grid_does_not_overflow_the_call_stack() {
        let builder = GridBuilder::with_rng(1001, 1001, StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(builder.grid()[1000][1000], Tile::Passage);
    }
}
