use std::fmt;

use crossterm::style::Stylize;

use crate::game::{Board, Cell, PlayerColor};

/// Text rendering of a board: column numbers on top, `║` separators and a
/// box-drawing bottom border. Row 0 is printed last.
pub struct BoardView<'a> {
    board: &'a Board,
    color: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board) -> Self {
        BoardView {
            board,
            color: false,
        }
    }

    /// Style disks with their color.
    pub fn colored(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn write_cell(&self, f: &mut fmt::Formatter<'_>, cell: Cell) -> fmt::Result {
        match cell {
            Cell::Empty => write!(f, " "),
            Cell::Occupied(player) if self.color => {
                let symbol = player.symbol();
                match player {
                    PlayerColor::Red => write!(f, "{}", symbol.red()),
                    PlayerColor::Yellow => write!(f, "{}", symbol.yellow()),
                }
            }
            Cell::Occupied(player) => write!(f, "{}", player.symbol()),
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = (self.board.rows(), self.board.cols());

        for col in 1..=cols {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for row in (0..rows).rev() {
            write!(f, "║")?;
            for col in 0..cols {
                self.write_cell(f, self.board.get(row, col))?;
                write!(f, "║")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "╚{}═╝", "═╩".repeat(cols - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Dimensions;

    #[test]
    fn test_empty_default_board() {
        let board = Board::default();
        let expected = concat!(
            " 1 2 3 4 5 6 7\n",
            "║ ║ ║ ║ ║ ║ ║ ║\n",
            "║ ║ ║ ║ ║ ║ ║ ║\n",
            "║ ║ ║ ║ ║ ║ ║ ║\n",
            "║ ║ ║ ║ ║ ║ ║ ║\n",
            "║ ║ ║ ║ ║ ║ ║ ║\n",
            "║ ║ ║ ║ ║ ║ ║ ║\n",
            "╚═╩═╩═╩═╩═╩═╩═╝\n",
        );
        assert_eq!(BoardView::new(&board).to_string(), expected);
    }

    #[test]
    fn test_bottom_row_printed_last() {
        let mut board = Board::new(Dimensions::new(5, 5).unwrap());
        board.apply_move(0, PlayerColor::Red).unwrap();
        board.apply_move(0, PlayerColor::Yellow).unwrap();
        board.apply_move(4, PlayerColor::Yellow).unwrap();

        let expected = concat!(
            " 1 2 3 4 5\n",
            "║ ║ ║ ║ ║ ║\n",
            "║ ║ ║ ║ ║ ║\n",
            "║ ║ ║ ║ ║ ║\n",
            "║*║ ║ ║ ║ ║\n",
            "║o║ ║ ║ ║*║\n",
            "╚═╩═╩═╩═╩═╝\n",
        );
        assert_eq!(BoardView::new(&board).to_string(), expected);
    }

    #[test]
    fn test_colored_output_wraps_disks_only() {
        let mut board = Board::new(Dimensions::new(5, 5).unwrap());
        board.apply_move(2, PlayerColor::Red).unwrap();

        let plain = BoardView::new(&board).to_string();
        let colored = BoardView::new(&board).colored(true).to_string();
        assert!(colored.contains('o'));
        // crossterm drops escapes when NO_COLOR is set
        if std::env::var_os("NO_COLOR").is_none() {
            assert_ne!(plain, colored);
            assert!(colored.contains('\u{1b}'));
        }
        // Empty boards render identically either way
        let empty = Board::new(Dimensions::new(5, 5).unwrap());
        assert_eq!(
            BoardView::new(&empty).to_string(),
            BoardView::new(&empty).colored(true).to_string()
        );
    }
}
