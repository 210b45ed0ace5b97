use std::cmp::max;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple::Apple;
use crate::grid::{Cell, Grid};
use crate::snake::{Direction, MoveResult, Snake};

pub const INITIAL_SNAKE_LENGTH: u16 = 3;
pub const INITIAL_TICK_MS: u64 = 100;
pub const MIN_TICK_MS: u64 = 1;

const TICK_SPEEDUP_MS: u64 = 1;
const SNAKE_START: Cell = Cell { col: 7, row: 5 };

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over,
}

/// One game's worth of state. Everything a game touches lives here, so
/// several sessions can run side by side without interfering.
pub struct GameSession {
    grid: Grid,
    snake: Snake,
    apple: Apple,
    score: u32,
    tick_ms: u64,
    status: GameStatus,
    rng: StdRng,
}

impl GameSession {
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_entropy())
    }

    /// Seeded constructor, for replaying a game deterministically.
    #[cfg(test)]
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, mut rng: StdRng) -> Self {
        assert!(
            grid.width() >= 10 && grid.height() >= 8,
            "grid too small for the initial snake"
        );

        let snake = Snake::new(SNAKE_START, INITIAL_SNAKE_LENGTH, Direction::Right);
        let apple = Apple::spawn(&grid, &snake, &mut rng).unwrap(); // fresh board, can't be full

        GameSession {
            grid,
            snake,
            apple,
            score: 0,
            tick_ms: INITIAL_TICK_MS,
            status: GameStatus::Running,
            rng,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn is_won(&self) -> bool {
        self.snake.len() == self.grid.inner_cell_count()
    }

    /// The single entry point for the input collaborator. Unrecognized
    /// keys never get here; reversals are dropped by the snake itself.
    pub fn request_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// Runs one time step. Does nothing once the game is over.
    pub fn tick(&mut self) -> GameStatus {
        if self.status == GameStatus::Over {
            return self.status;
        }

        match self.snake.advance(&self.grid, self.apple.position()) {
            MoveResult::Crashed => {
                self.status = GameStatus::Over;
            }
            MoveResult::Ate => {
                self.score += 1;
                self.tick_ms = max(self.tick_ms - TICK_SPEEDUP_MS, MIN_TICK_MS);

                if !self.apple.relocate(&self.grid, &self.snake, &mut self.rng) {
                    // Nowhere left to put an apple: the board is full
                    self.status = GameStatus::Over;
                }
            }
            MoveResult::Moved => {}
        }

        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;

    fn cells(session: &GameSession) -> Vec<Cell> {
        session.snake().segments().iter().copied().collect()
    }

    fn session() -> GameSession {
        let mut s = GameSession::with_seed(Grid::standard(), 17);
        // Park the apple well away from the start so tests place it
        s.apple = Apple::at(Cell::new(30, 15));
        s
    }

    #[test]
    fn a_plain_tick_translates_the_snake() {
        let mut s = session();

        assert_eq!(s.tick(), GameStatus::Running);

        assert_eq!(cells(&s), vec![Cell::new(8, 5), Cell::new(7, 5), Cell::new(6, 5)]);
        assert_eq!(s.score(), 0);
        assert_eq!(s.apple().position(), Cell::new(30, 15));
        assert_eq!(s.tick_ms(), INITIAL_TICK_MS);
    }

    #[test]
    fn eating_grows_scores_and_relocates_the_apple() {
        let mut s = session();
        s.apple = Apple::at(Cell::new(8, 5));

        assert_eq!(s.tick(), GameStatus::Running);

        assert_eq!(
            cells(&s),
            vec![Cell::new(8, 5), Cell::new(7, 5), Cell::new(6, 5), Cell::new(5, 5)]
        );
        assert_eq!(s.score(), 1);
        assert_eq!(s.tick_ms(), INITIAL_TICK_MS - 1);

        let apple = s.apple().position();
        assert!(!Grid::standard().is_border(apple));
        assert!(!s.snake().occupies(apple));
    }

    #[test]
    fn the_interval_never_drops_below_the_minimum() {
        let mut s = session();
        s.tick_ms = 3;

        let mut previous = s.tick_ms();
        for _ in 0..5 {
            // The snake keeps heading right, so feed it along the way
            s.apple = Apple::at(s.snake().head().step(Right));
            s.tick();

            assert!(s.tick_ms() <= previous);
            assert!(s.tick_ms() >= MIN_TICK_MS);
            previous = s.tick_ms();
        }

        assert_eq!(s.score(), 5);
        assert_eq!(s.tick_ms(), MIN_TICK_MS);
    }

    #[test]
    fn hitting_the_wall_ends_the_game_for_good() {
        let mut s = session();
        s.request_direction(Up);

        // Rows 4, 3, 2, 1 are fine; row 0 is the wall
        for _ in 0..4 {
            assert_eq!(s.tick(), GameStatus::Running);
        }
        let before = cells(&s);
        assert_eq!(s.tick(), GameStatus::Over);
        assert_eq!(cells(&s), before);

        // Over is terminal: further ticks change nothing
        assert_eq!(s.tick(), GameStatus::Over);
        assert_eq!(cells(&s), before);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn biting_the_body_ends_the_game() {
        let mut s = session();
        s.apple = Apple::at(Cell::new(8, 5));
        s.tick(); // grow to 4 segments
        s.apple = Apple::at(Cell::new(30, 15));

        s.request_direction(Down);
        s.tick();
        s.request_direction(Left);
        s.tick();
        s.request_direction(Up);

        assert_eq!(s.tick(), GameStatus::Over);
    }
}
