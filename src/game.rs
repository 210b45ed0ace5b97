use std::{process::exit, thread::sleep, time::Duration};

use crate::grid::Grid;
use crate::session::{GameSession, GameStatus};
use crate::snake::Direction::*;
use crate::term::TermManager;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const SNAKE_BODY_CHAR: char = '█';
const APPLE_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';

pub struct SnakeGame {
    grid: Grid,
    term: TermManager,
}

impl SnakeGame {
    pub fn new() -> Self {
        SnakeGame { grid: Grid::standard(), term: TermManager::new() }
    }

    pub fn initialize(&mut self) {
        self.term.setup();

        // One extra row under the field for the score line
        let (w, h) = self.term.size();
        if w < self.grid.width() || h < self.grid.height() + 1 {
            self.term.restore();
            eprintln!(
                "This terminal is too small, {}x{} characters are needed.",
                self.grid.width(),
                self.grid.height() + 1
            );
            exit(1);
        }
    }

    pub fn show_intro(&mut self) {
        let lines = &[
            "Arrow keys or WASD to move",
            "CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines);

        if is_ctrl_c(&self.term.read_key_blocking()) {
            self.clean_exit()
        }
    }

    pub fn play(&mut self) {
        self.term.clear();
        self.term.draw_border(&self.grid);

        let mut session = GameSession::new(self.grid);
        self.draw_frame(&session);

        loop {
            // Single-shot re-arm: always the session's *current* interval,
            // so a speed-up applies from the very next scheduled tick
            sleep(Duration::from_millis(session.tick_ms()));

            for key_ev in self.term.read_key_events_queue() {
                match &key_ev {
                    ev if is_ctrl_c(ev) => self.clean_exit(),
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') | KeyCode::Up => session.request_direction(Up),
                        KeyCode::Char('a') | KeyCode::Left => session.request_direction(Left),
                        KeyCode::Char('s') | KeyCode::Down => session.request_direction(Down),
                        KeyCode::Char('d') | KeyCode::Right => session.request_direction(Right),
                        _ => {}
                    }
                }
            }

            if session.tick() == GameStatus::Over {
                self.game_over(&session);
                break;
            }

            self.draw_frame(&session);
        }

        // Quit if the user CTRL+C's after the game
        if is_ctrl_c(&self.term.read_key_blocking()) {
            self.clean_exit()
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn clean_exit(&mut self) {
        self.term.restore();
        exit(0);
    }

    fn draw_frame(&mut self, session: &GameSession) {
        let grid = self.grid;
        let snake = session.snake();
        let apple = session.apple().position();

        for cell in grid.inner_cells() {
            let ch = if cell == snake.head() {
                snake.head_char()
            } else if snake.occupies(cell) {
                SNAKE_BODY_CHAR
            } else if cell == apple {
                APPLE_CHAR
            } else {
                ' '
            };

            self.term.print_at(grid.screen_position(cell), ch);
        }

        self.term.print_text((0, grid.height()), &format!("Score: {}", session.score()));
        self.term.flush();
    }

    fn game_over(&mut self, session: &GameSession) {
        let won = session.is_won();

        if !won {
            for cell in session.snake().segments() {
                self.term.print_at(self.grid.screen_position(*cell), DEAD_SNAKE_CHAR);
            }
        }

        self.term.show_message(&[
            if won { "You won!" } else { "Game over!" },
            &*format!("Score: {}", session.score()),
            "",
            "Press any key to play again,",
            "or CTRL+C to quit."
        ]);
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
