use super::dimensions::Dimensions;
use super::player::PlayerColor;
use super::state::Outcome;

/// Number of disks in a line needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerColor),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} does not exist (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),
}

/// A unit step across the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Direction {
    d_row: isize,
    d_col: isize,
}

impl Direction {
    const fn new(d_row: isize, d_col: isize) -> Self {
        Direction { d_row, d_col }
    }

    fn opposite(self) -> Self {
        Direction::new(-self.d_row, -self.d_col)
    }
}

/// One direction per axis; each axis is scanned both ways.
const AXES: [Direction; 4] = [
    Direction::new(0, 1),  // horizontal
    Direction::new(1, 0),  // vertical
    Direction::new(1, 1),  // diagonal, rising to the right
    Direction::new(-1, 1), // diagonal, falling to the right
];

/// A rows x cols grid of cells with gravity.
///
/// Row 0 is the bottom of the board. Within every column the occupied cells
/// form a contiguous run starting at row 0, so a column is described fully by
/// its height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    heights: Vec<usize>,
    filled: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new(dimensions: Dimensions) -> Self {
        let (rows, cols) = (dimensions.rows(), dimensions.cols());
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            heights: vec![0; cols],
            filled: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Number of disks in a column
    pub fn column_height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Check if a column is full. Columns that don't exist count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.cols || self.heights[col] == self.rows
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.filled == self.rows * self.cols
    }

    /// Drop a disk in a column, returns the row where it landed
    pub fn apply_move(&mut self, col: usize, color: PlayerColor) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let row = self.heights[col];
        self.cells[row * self.cols + col] = Cell::Occupied(color);
        self.heights[col] += 1;
        self.filled += 1;

        tracing::trace!(row, col, color = color.name(), "disk placed");
        Ok(row)
    }

    /// Reset every cell to empty, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.heights.fill(0);
        self.filled = 0;
    }

    /// Decide the result of the move that just landed at (row, col).
    pub fn resolve_outcome(&self, row: usize, col: usize, color: PlayerColor) -> Outcome {
        if self.longest_run(row, col, color) >= CONNECT {
            Outcome::Win
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Continue
        }
    }

    /// Length of the longest same-color line through (row, col) over all four axes.
    pub fn longest_run(&self, row: usize, col: usize, color: PlayerColor) -> usize {
        AXES.iter()
            .map(|&dir| {
                let (r1, c1) = self.border(row, col, dir, color);
                let (r2, c2) = self.border(row, col, dir.opposite(), color);
                r1.abs_diff(r2).max(c1.abs_diff(c2)) + 1
            })
            .max()
            .unwrap_or(1)
    }

    /// Walk from (row, col) while the next cell is on the board and holds `color`;
    /// returns the last cell reached.
    fn border(&self, row: usize, col: usize, dir: Direction, color: PlayerColor) -> (usize, usize) {
        let (mut row, mut col) = (row, col);
        while let Some((next_row, next_col)) = self.step(row, col, dir) {
            if self.get(next_row, next_col) != Cell::Occupied(color) {
                break;
            }
            row = next_row;
            col = next_col;
        }
        (row, col)
    }

    fn step(&self, row: usize, col: usize, dir: Direction) -> Option<(usize, usize)> {
        let next_row = row.checked_add_signed(dir.d_row).filter(|&r| r < self.rows)?;
        let next_col = col.checked_add_signed(dir.d_col).filter(|&c| c < self.cols)?;
        Some((next_row, next_col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}
