//! Classification of raw turn input and the game-count answer.
//!
//! Both functions are pure: they read the board but never change it.

use std::fmt;

use tracing::instrument;

use super::board::Board;

/// Text that ends the current game, compared case-insensitively.
pub const EXIT_KEYWORD: &str = "end";

/// What a line of turn input means for the current board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnChoice {
    /// Zero-based column that can take a disk.
    Valid(usize),
    NotANumber,
    /// The number was outside `1..=max`.
    OutOfRange { max: usize },
    /// The column has no room left; holds the input as typed.
    ColumnFull(String),
    ExitRequested,
}

impl fmt::Display for ColumnChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnChoice::Valid(col) => write!(f, "Column {}", col + 1),
            ColumnChoice::NotANumber => write!(f, "Incorrect column number"),
            ColumnChoice::OutOfRange { max } => {
                write!(f, "The column number is out of range (1 - {max})")
            }
            ColumnChoice::ColumnFull(input) => write!(f, "Column {input} is full"),
            ColumnChoice::ExitRequested => write!(f, "Exit requested"),
        }
    }
}

/// Classify a line of turn input against the board.
#[instrument(level = "debug", skip(board), ret)]
pub fn classify_column(input: &str, board: &Board) -> ColumnChoice {
    if input.eq_ignore_ascii_case(EXIT_KEYWORD) {
        return ColumnChoice::ExitRequested;
    }

    let Ok(number) = input.parse::<i32>() else {
        return ColumnChoice::NotANumber;
    };

    let cols = board.cols();
    let column = match usize::try_from(number) {
        Ok(n) if (1..=cols).contains(&n) => n - 1,
        _ => return ColumnChoice::OutOfRange { max: cols },
    };

    if board.is_column_full(column) {
        ColumnChoice::ColumnFull(input.to_string())
    } else {
        ColumnChoice::Valid(column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameCountError {
    #[error("Invalid input")]
    Invalid,
}

/// Parse how many games to play. Empty input means a single game.
#[instrument(level = "debug", ret)]
pub fn parse_game_count(input: &str) -> Result<u32, GameCountError> {
    if input.is_empty() {
        return Ok(1);
    }
    match input.parse::<u32>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(GameCountError::Invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Dimensions, PlayerColor};

    #[test]
    fn test_exit_any_case() {
        let board = Board::default();
        for input in ["end", "END", "End", "eNd"] {
            assert_eq!(classify_column(input, &board), ColumnChoice::ExitRequested);
        }
        assert_eq!(classify_column(" end", &board), ColumnChoice::NotANumber);
    }

    #[test]
    fn test_not_a_number() {
        let board = Board::default();
        for input in ["abc", "", "3.0", "one", "99999999999"] {
            assert_eq!(classify_column(input, &board), ColumnChoice::NotANumber, "input {input:?}");
        }
    }

    #[test]
    fn test_out_of_range() {
        let board = Board::default();
        for input in ["0", "8", "99", "-1"] {
            assert_eq!(
                classify_column(input, &board),
                ColumnChoice::OutOfRange { max: 7 },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_valid_column_is_zero_based() {
        let board = Board::default();
        assert_eq!(classify_column("1", &board), ColumnChoice::Valid(0));
        assert_eq!(classify_column("7", &board), ColumnChoice::Valid(6));
    }

    #[test]
    fn test_full_column() {
        let mut board = Board::new(Dimensions::new(5, 5).unwrap());
        for _ in 0..5 {
            board.apply_move(2, PlayerColor::Red).unwrap();
        }
        assert_eq!(
            classify_column("3", &board),
            ColumnChoice::ColumnFull("3".to_string())
        );
        assert_eq!(classify_column("4", &board), ColumnChoice::Valid(3));
    }

    #[test]
    fn test_full_column_message_echoes_input() {
        let mut board = Board::new(Dimensions::new(5, 5).unwrap());
        for _ in 0..5 {
            board.apply_move(2, PlayerColor::Yellow).unwrap();
        }
        let choice = classify_column("+3", &board);
        assert_eq!(choice, ColumnChoice::ColumnFull("+3".to_string()));
        assert_eq!(choice.to_string(), "Column +3 is full");
    }

    #[test]
    fn test_classification_is_repeatable() {
        let board = Board::default();
        for input in ["end", "abc", "99", "4"] {
            assert_eq!(classify_column(input, &board), classify_column(input, &board));
        }
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(ColumnChoice::NotANumber.to_string(), "Incorrect column number");
        assert_eq!(
            ColumnChoice::OutOfRange { max: 9 }.to_string(),
            "The column number is out of range (1 - 9)"
        );
        assert_eq!(ColumnChoice::ColumnFull("4".to_string()).to_string(), "Column 4 is full");
    }

    #[test]
    fn test_game_count() {
        assert_eq!(parse_game_count(""), Ok(1));
        assert_eq!(parse_game_count("1"), Ok(1));
        assert_eq!(parse_game_count("3"), Ok(3));
        for input in ["0", "-2", "two", " 3", "2.5"] {
            assert_eq!(parse_game_count(input), Err(GameCountError::Invalid), "input {input:?}");
        }
    }
}
