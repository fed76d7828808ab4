use std::io::{BufRead, Write};

use crate::config::AppConfig;
use crate::error::{ConfigError, SessionError};
use crate::game::{
    classify_column, parse_dimensions, parse_game_count, Board, ColumnChoice, Dimensions,
    GameStatus, Outcome, Player, PlayerColor, DRAW_POINTS, WIN_POINTS,
};

use super::board_view::BoardView;

/// What a finished session looked like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub players: Vec<Player>,
    pub dimensions: Dimensions,
    /// One entry per game that was started, in order.
    pub results: Vec<GameStatus>,
}

/// Console turn controller: prompts for the session setup, runs each game and
/// keeps the scores.
pub struct App<R, W> {
    input: R,
    output: W,
    default_dimensions: Dimensions,
    color: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W) -> Self {
        App {
            input,
            output,
            default_dimensions: Dimensions::default(),
            color: false,
        }
    }

    pub fn from_config(input: R, output: W, config: &AppConfig) -> Result<Self, ConfigError> {
        let mut app = App::new(input, output);
        app.default_dimensions = config.board.default_dimensions()?;
        app.color = config.display.color;
        Ok(app)
    }

    /// Run a whole session until every game is played or one is aborted.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        writeln!(self.output, "Connect Four")?;
        writeln!(self.output, "First player's name:")?;
        let first = self.read_line("the first player's name")?;
        writeln!(self.output, "Second player's name:")?;
        let second = self.read_line("the second player's name")?;
        let mut players = vec![
            Player::new(first, PlayerColor::Red),
            Player::new(second, PlayerColor::Yellow),
        ];

        let dimensions = self.read_dimensions()?;
        let games = self.read_game_count()?;
        tracing::info!(
            rows = dimensions.rows(),
            cols = dimensions.cols(),
            games,
            "session configured"
        );

        let names: Vec<&str> = players.iter().map(Player::name).collect();
        writeln!(self.output, "{}", names.join(" VS "))?;
        writeln!(self.output, "{} X {} board", dimensions.rows(), dimensions.cols())?;
        if games == 1 {
            writeln!(self.output, "Single game")?;
        } else {
            writeln!(self.output, "Total {games} games")?;
            writeln!(self.output, "Game #1")?;
        }

        let mut board = Board::new(dimensions);
        let mut results = Vec::new();
        for game in 1..=games {
            board.clear();
            if game > 1 {
                writeln!(self.output, "Game #{game}")?;
            }
            writeln!(self.output, "{}", BoardView::new(&board).colored(self.color))?;

            let starter = (game as usize - 1) % players.len();
            let status = self.play_game(&mut board, &mut players, starter)?;
            results.push(status);
            if status == GameStatus::Aborted {
                tracing::info!(game, "game aborted, ending session");
                break;
            }

            writeln!(self.output, "Score")?;
            let scores: Vec<String> = players
                .iter()
                .map(|p| format!("{}: {}", p.name(), p.score()))
                .collect();
            writeln!(self.output, "{}", scores.join(" "))?;
        }
        writeln!(self.output, "Game over!")?;

        Ok(SessionSummary {
            players,
            dimensions,
            results,
        })
    }

    /// Play one game on a cleared board. Scores are awarded in place.
    fn play_game(
        &mut self,
        board: &mut Board,
        players: &mut [Player],
        starter: usize,
    ) -> Result<GameStatus, SessionError> {
        let mut active = starter;
        let mut status = GameStatus::InProgress;

        while !status.is_terminal() {
            writeln!(self.output, "{}'s turn:", players[active].name())?;
            let line = self.read_line("a column number")?;

            match classify_column(&line, board) {
                ColumnChoice::Valid(col) => {
                    let color = players[active].color();
                    let row = board.apply_move(col, color)?;
                    writeln!(self.output, "{}", BoardView::new(board).colored(self.color))?;

                    let outcome = board.resolve_outcome(row, col, color);
                    status = status.after_move(outcome, color);
                    match outcome {
                        Outcome::Win => {
                            players[active].award(WIN_POINTS);
                            tracing::info!(winner = players[active].name(), "game won");
                            writeln!(self.output, "Player {} won", players[active].name())?;
                        }
                        Outcome::Draw => {
                            for player in players.iter_mut() {
                                player.award(DRAW_POINTS);
                            }
                            tracing::info!("game drawn");
                            writeln!(self.output, "It is a draw")?;
                        }
                        Outcome::Continue => active = (active + 1) % players.len(),
                    }
                }
                ColumnChoice::ExitRequested => status = status.abort(),
                rejected => {
                    tracing::debug!(input = %line, %rejected, "turn input rejected");
                    writeln!(self.output, "{rejected}")?;
                }
            }
        }

        Ok(status)
    }

    fn read_dimensions(&mut self) -> Result<Dimensions, SessionError> {
        loop {
            writeln!(self.output, "Set the board dimensions (Rows x Columns)")?;
            writeln!(
                self.output,
                "Press Enter for default ({} x {})",
                self.default_dimensions.rows(),
                self.default_dimensions.cols()
            )?;
            let line = self.read_line("the board dimensions")?;
            match parse_dimensions(&line, self.default_dimensions) {
                Ok(dimensions) => return Ok(dimensions),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn read_game_count(&mut self) -> Result<u32, SessionError> {
        loop {
            writeln!(self.output, "Do you want to play single or multiple games?")?;
            writeln!(self.output, "For a single game, input 1 or press Enter")?;
            writeln!(self.output, "Input a number of games:")?;
            let line = self.read_line("the number of games")?;
            match parse_game_count(&line) {
                Ok(count) => return Ok(count),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Read one line without its terminator.
    fn read_line(&mut self, waiting_for: &'static str) -> Result<String, SessionError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed(waiting_for));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
