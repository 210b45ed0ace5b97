use crate::snake::Direction::{self, *};
use crate::{Coords, TermInt};

pub const WIDTH_IN_BLOCKS: TermInt = 40;
pub const HEIGHT_IN_BLOCKS: TermInt = 22;

/// One grid unit, addressed by column and row.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub col: TermInt,
    pub row: TermInt,
}

impl Cell {
    pub fn new(col: TermInt, row: TermInt) -> Self {
        Cell { col, row }
    }

    /// The adjacent cell one step away in the given direction.
    pub fn step(self, direction: Direction) -> Cell {
        match direction {
            Up => Cell::new(self.col, self.row - 1),
            Down => Cell::new(self.col, self.row + 1),
            Left => Cell::new(self.col - 1, self.row),
            Right => Cell::new(self.col + 1, self.row),
        }
    }
}

/// The playable coordinate space. The outermost ring of cells is the
/// border: it is drawn as a wall and the snake dies on touching it.
#[derive(Debug, Copy, Clone)]
pub struct Grid {
    width: TermInt,
    height: TermInt,
}

impl Grid {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        Grid { width, height }
    }

    pub fn standard() -> Self {
        Grid::new(WIDTH_IN_BLOCKS, HEIGHT_IN_BLOCKS)
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn is_border(&self, cell: Cell) -> bool {
        cell.col == 0 || cell.row == 0 || cell.col == self.width - 1 || cell.row == self.height - 1
    }

    /// All cells strictly inside the border ring, row by row.
    pub fn inner_cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height) = (self.width, self.height);
        (1..height - 1).flat_map(move |row| (1..width - 1).map(move |col| Cell::new(col, row)))
    }

    pub fn inner_cell_count(&self) -> usize {
        (self.width - 2) as usize * (self.height - 2) as usize
    }

    /// Terminal position of the character a cell is drawn as.
    pub fn screen_position(&self, cell: Cell) -> Coords {
        (cell.col, cell.row)
    }
}
