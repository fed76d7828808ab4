//! Core Connect Four logic: board engine with win/draw resolution, players,
//! per-game status, and pure classifiers for raw console input.

mod board;
mod dimensions;
mod input;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, CONNECT};
pub use dimensions::{
    parse_dimensions, DimensionError, Dimensions, DEFAULT_COLS, DEFAULT_ROWS, SIDE_RANGE,
};
pub use input::{classify_column, parse_game_count, ColumnChoice, GameCountError, EXIT_KEYWORD};
pub use player::{Player, PlayerColor, DRAW_POINTS, WIN_POINTS};
pub use state::{GameStatus, Outcome};
