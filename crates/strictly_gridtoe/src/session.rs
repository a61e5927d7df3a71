//! Game session: turn order, game-over state, and scoring.
//!
//! A [`GameSession`] owns the board, both players, and the optional opponent
//! engine. Callers drive it one move at a time and read back a
//! [`GameSnapshot`]; the session never renders or persists anything itself.

use crate::action::Move;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::opponent::OpponentEngine;
use crate::player::Player;
use crate::rules::{Outcome, evaluate};
use crate::types::{Cell, Mark, Square};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// The seat the opponent engine plays in human-vs-opponent mode.
pub const ENGINE_MARK: Mark = Mark::Second;

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning seat.
        winner: Mark,
        /// Cells of the winning run, row-major.
        cells: Vec<Cell>,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// The winning seat, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Cells of the winning run; empty unless the game was won.
    pub fn winning_cells(&self) -> &[Cell] {
        match self {
            GameStatus::Won { cells, .. } => cells,
            _ => &[],
        }
    }
}

/// A player as shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct PlayerView {
    /// The seat.
    mark: Mark,
    /// Display symbol for the seat.
    symbol: String,
    /// Display name.
    name: String,
    /// Games won.
    score: u32,
    /// Games finished.
    games_played: u32,
    /// True when the opponent engine plays this seat.
    engine: bool,
}

/// Read-only view of a session, sufficient for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameSnapshot {
    /// Board side length.
    size: usize,
    /// Run length needed to win.
    win_condition: usize,
    /// Symbols by row then column; `None` for empty cells.
    cells: Vec<Vec<Option<String>>>,
    /// Seat to move next (or that moved last once the game is over).
    current: Mark,
    /// Game status, including the winning run.
    status: GameStatus,
    /// Both players, first seat first.
    players: [PlayerView; 2],
    /// Number of moves played in this game.
    moves_played: usize,
}

impl GameSnapshot {
    /// The player whose turn it is.
    pub fn current_player(&self) -> &PlayerView {
        &self.players[self.current.index()]
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<&PlayerView> {
        self.status.winner().map(|mark| &self.players[mark.index()])
    }

    /// Symbol at `cell`, if occupied.
    pub fn symbol_at(&self, cell: Cell) -> Option<&str> {
        self.cells.get(cell.row)?.get(cell.col)?.as_deref()
    }
}

/// An owned game: board, players, status, and optional opponent.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    current: Mark,
    status: GameStatus,
    players: [Player; 2],
    history: Vec<Move>,
    engine: Option<OpponentEngine>,
    engine_seed: Option<u64>,
}

impl GameSession {
    /// Creates a session with default player names and zero scores.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if `config` is invalid.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::restore(
            config,
            [Player::for_mark(Mark::First), Player::for_mark(Mark::Second)],
        )
    }

    /// Creates a session with previously saved players.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if `config` is invalid.
    #[instrument(skip(players))]
    pub fn restore(config: GameConfig, players: [Player; 2]) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::new(*config.size())?;
        let engine = build_engine(&config, None);
        info!(
            size = config.size(),
            win_condition = config.win_condition(),
            mode = %config.mode(),
            "Session created"
        );
        Ok(Self {
            config,
            board,
            current: Mark::First,
            status: GameStatus::InProgress,
            players,
            history: Vec::new(),
            engine,
            engine_seed: None,
        })
    }

    /// Seeds the opponent engine, now and after every settings change.
    pub fn with_engine_seed(mut self, seed: u64) -> Self {
        self.engine_seed = Some(seed);
        self.engine = build_engine(&self.config, self.engine_seed);
        self
    }

    /// Plays the current player's mark at `cell`.
    ///
    /// In human-vs-opponent mode, a human move that leaves the game running
    /// is answered by the engine before this returns.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidMove`] if the game is over
    /// - [`GameError::OutOfBounds`] if `cell` is off the grid
    /// - [`GameError::CellOccupied`] if `cell` already holds a mark
    ///
    /// The session is unchanged on error.
    #[instrument(skip(self), fields(current = %self.current))]
    pub fn submit_move(&mut self, cell: Cell) -> Result<GameSnapshot, GameError> {
        if !self.status.is_in_progress() {
            warn!(%cell, "Move submitted after game end");
            return Err(GameError::InvalidMove(
                "the game is over; start a new game".to_string(),
            ));
        }

        self.play(cell, false).inspect_err(|e| {
            warn!(%cell, error = %e, "Move rejected");
        })?;
        self.answer_with_engine()?;
        Ok(self.snapshot())
    }

    /// Lets the engine move if it is the engine's turn.
    ///
    /// Returns the move made, or `None` when there is no engine, the game is
    /// over, or a human is to move.
    #[instrument(skip(self))]
    pub fn engine_move(&mut self) -> Result<Option<Move>, GameError> {
        if !self.status.is_in_progress() || !self.engine_to_move() {
            return Ok(None);
        }
        let Some(engine) = self.engine.as_mut() else {
            return Ok(None);
        };
        let Some(cell) = engine.decide(&self.board, self.current, *self.config.win_condition())
        else {
            return Ok(None);
        };
        let mark = self.current;
        self.play(cell, true)?;
        Ok(Some(Move::new(mark, cell, true)))
    }

    /// Starts a new game with the same settings. Scores are kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> GameSnapshot {
        self.board.clear_all();
        self.current = Mark::First;
        self.status = GameStatus::InProgress;
        self.history.clear();
        info!("New game started");
        self.snapshot()
    }

    /// Validates and commits new settings, then starts a new game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] and keeps the old settings
    /// and the game in progress if `config` is invalid.
    #[instrument(skip(self))]
    pub fn apply_settings(&mut self, config: GameConfig) -> Result<GameSnapshot, GameError> {
        config.validate().inspect_err(|e| {
            warn!(error = %e, "Settings rejected");
        })?;
        self.board.reset(*config.size())?;
        self.engine = build_engine(&config, self.engine_seed);
        self.config = config;
        info!(
            size = self.config.size(),
            win_condition = self.config.win_condition(),
            mode = %self.config.mode(),
            difficulty = %self.config.difficulty(),
            "Settings applied"
        );
        Ok(self.new_game())
    }

    /// Zeroes both players' scores and games played.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.clear_record();
        }
        info!("Scores reset");
    }

    /// Renames the player in `mark`'s seat.
    pub fn rename_player(&mut self, mark: Mark, name: impl Into<String>) {
        self.players[mark.index()].rename(name);
    }

    /// Builds a read-only view of the session.
    pub fn snapshot(&self) -> GameSnapshot {
        let symbols = self.config.symbols();
        let cells: Vec<Vec<Option<String>>> = self
            .board
            .rows()
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Square::Empty => None,
                        Square::Occupied(mark) => Some(symbols.symbol(*mark).to_string()),
                    })
                    .collect()
            })
            .collect();
        let view = |mark: Mark| {
            let player = &self.players[mark.index()];
            PlayerView {
                mark,
                symbol: symbols.symbol(mark).to_string(),
                name: player.name().clone(),
                score: *player.score(),
                games_played: *player.games_played(),
                engine: self.config.has_opponent() && mark == ENGINE_MARK,
            }
        };

        GameSnapshot {
            size: self.board.size(),
            win_condition: *self.config.win_condition(),
            cells,
            current: self.current,
            status: self.status.clone(),
            players: [view(Mark::First), view(Mark::Second)],
            moves_played: self.history.len(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The seat to move.
    pub fn current_player(&self) -> Mark {
        self.current
    }

    /// The game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Both players, first seat first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Moves of the current game in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    fn engine_to_move(&self) -> bool {
        self.config.has_opponent() && self.current == ENGINE_MARK
    }

    /// Places the current mark and advances the state machine.
    fn play(&mut self, cell: Cell, by_engine: bool) -> Result<(), GameError> {
        let mark = self.current;
        self.board.place(cell, mark)?;
        self.history.push(Move::new(mark, cell, by_engine));
        debug!(%mark, %cell, by_engine, "Mark placed");

        match evaluate(&self.board, cell, *self.config.win_condition()) {
            Outcome::Won(line) => {
                self.players[mark.index()].record_win();
                self.players[mark.opponent().index()].record_game();
                info!(
                    winner = %mark,
                    direction = %line.direction,
                    moves = self.history.len(),
                    "Game won"
                );
                self.status = GameStatus::Won {
                    winner: mark,
                    cells: line.cells,
                };
            }
            Outcome::Draw => {
                for player in &mut self.players {
                    player.record_game();
                }
                info!(moves = self.history.len(), "Game drawn");
                self.status = GameStatus::Draw;
            }
            Outcome::InProgress => {
                self.current = mark.opponent();
            }
        }
        Ok(())
    }

    /// Lets the engine reply until a human is to move or the game ends.
    fn answer_with_engine(&mut self) -> Result<(), GameError> {
        while self.engine_move()?.is_some() {}
        Ok(())
    }
}

fn build_engine(config: &GameConfig, seed: Option<u64>) -> Option<OpponentEngine> {
    if !config.has_opponent() {
        return None;
    }
    let engine = match seed {
        Some(seed) => OpponentEngine::seeded(*config.difficulty(), seed),
        None => OpponentEngine::new(*config.difficulty()),
    };
    Some(match *config.search_depth() {
        Some(depth) => engine.with_search_depth(depth),
        None => engine,
    })
}
