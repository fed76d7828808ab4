/// Points awarded to the winner of a game.
pub const WIN_POINTS: u32 = 2;
/// Points awarded to each player when a game ends in a draw.
pub const DRAW_POINTS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Red,
    Yellow,
}

impl PlayerColor {
    /// Get the other color
    pub fn other(self) -> PlayerColor {
        match self {
            PlayerColor::Red => PlayerColor::Yellow,
            PlayerColor::Yellow => PlayerColor::Red,
        }
    }

    /// Symbol used when printing the board
    pub fn symbol(self) -> char {
        match self {
            PlayerColor::Red => 'o',
            PlayerColor::Yellow => '*',
        }
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "Red",
            PlayerColor::Yellow => "Yellow",
        }
    }
}

/// A named participant in a session. The score carries over between games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: PlayerColor,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Player {
            name: name.into(),
            color,
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> PlayerColor {
        self.color
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn award(&mut self, points: u32) {
        self.score += points;
    }
}
