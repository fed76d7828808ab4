use super::player::PlayerColor;

/// Result of resolving a single move on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Continue,
}

/// Lifecycle of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerColor),
    Draw,
    Aborted,
}

impl GameStatus {
    /// Advance an in-progress game with the outcome of a move by `mover`.
    /// Finished games ignore further outcomes.
    pub fn after_move(self, outcome: Outcome, mover: PlayerColor) -> GameStatus {
        match (self, outcome) {
            (GameStatus::InProgress, Outcome::Win) => GameStatus::Won(mover),
            (GameStatus::InProgress, Outcome::Draw) => GameStatus::Draw,
            (status, _) => status,
        }
    }

    /// Abort an in-progress game. Finished games stay as they are.
    pub fn abort(self) -> GameStatus {
        match self {
            GameStatus::InProgress => GameStatus::Aborted,
            status => status,
        }
    }

    /// Check if game is over
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}
