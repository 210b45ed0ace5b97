use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

// Rejection sampling is cheap while the board is mostly empty; after
// this many misses we pick from the explicit set of free cells instead,
// which always terminates.
const MAX_ROLL_ATTEMPTS: u32 = 64;

pub struct Apple {
    cell: Cell,
}

impl Apple {
    /// Places a fresh apple on a random free cell, if any is left.
    pub fn spawn<R: Rng>(grid: &Grid, snake: &Snake, rng: &mut R) -> Option<Apple> {
        random_free_cell(grid, snake, rng).map(|cell| Apple { cell })
    }

    pub fn position(&self) -> Cell {
        self.cell
    }

    /// Moves the apple to a random cell that is neither on the border
    /// ring nor under the snake. Returns false when the snake has
    /// filled the whole playing field.
    pub fn relocate<R: Rng>(&mut self, grid: &Grid, snake: &Snake, rng: &mut R) -> bool {
        match random_free_cell(grid, snake, rng) {
            Some(cell) => {
                self.cell = cell;
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn at(cell: Cell) -> Apple {
        Apple { cell }
    }
}

fn random_free_cell<R: Rng>(grid: &Grid, snake: &Snake, rng: &mut R) -> Option<Cell> {
    for _ in 0..MAX_ROLL_ATTEMPTS {
        let cell = Cell::new(
            rng.gen_range(1..grid.width() - 1),
            rng.gen_range(1..grid.height() - 1),
        );

        if !snake.occupies(cell) {
            return Some(cell);
        }
    }

    let free: Vec<Cell> = grid.inner_cells().filter(|c| !snake.occupies(*c)).collect();
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn apples_avoid_the_border_and_the_snake() {
        let grid = Grid::new(12, 10);
        let snake = Snake::new(Cell::new(7, 5), 3, Right);
        let mut rng = StdRng::seed_from_u64(17);

        let mut apple = Apple::spawn(&grid, &snake, &mut rng).unwrap();

        for _ in 0..500 {
            assert!(apple.relocate(&grid, &snake, &mut rng));
            let pos = apple.position();
            assert!(!grid.is_border(pos));
            assert!(!snake.occupies(pos));
        }
    }

    #[test]
    fn full_board_leaves_nowhere_to_spawn() {
        // A single playable row, completely covered by the snake
        let grid = Grid::new(6, 3);
        let snake = Snake::new(Cell::new(4, 1), 4, Right);
        let mut rng = StdRng::seed_from_u64(17);

        assert!(Apple::spawn(&grid, &snake, &mut rng).is_none());

        let mut apple = Apple::at(Cell::new(1, 1));
        assert!(!apple.relocate(&grid, &snake, &mut rng));
    }
}
