use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use Direction::*;
use MoveResult::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    Ate,
    Crashed,
}

pub struct Snake {
    segments: VecDeque<Cell>, // head first
    direction: Direction,
    next_direction: Direction,
}

impl Snake {
    pub fn new(head: Cell, size: u16, direction: Direction) -> Self {
        let back = direction.opposite();
        let mut segments = VecDeque::with_capacity(size as usize);
        let mut cell = head;

        for _ in 0..size {
            segments.push_back(cell);
            cell = cell.step(back);
        }

        Snake { segments, direction, next_direction: direction }
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Buffers a direction change to be committed by the next move.
    /// Reversing straight into the body is ignored, anything else
    /// overwrites a previously buffered request.
    pub fn set_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.next_direction = requested;
        }
    }

    /// Advances one cell in the buffered direction. Hitting the border
    /// ring or any current segment crashes without mutating anything;
    /// landing on the apple keeps the tail in place so the snake grows.
    pub fn advance(&mut self, grid: &Grid, apple: Cell) -> MoveResult {
        self.direction = self.next_direction;
        let new_head = self.head().step(self.direction);

        if grid.is_border(new_head) || self.segments.contains(&new_head) {
            return Crashed;
        }

        self.segments.push_front(new_head);

        if new_head == apple {
            Ate
        } else {
            self.segments.pop_back();
            Moved
        }
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}
