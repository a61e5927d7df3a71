//! Strictly Gridtoe - configurable tic-tac-toe game logic
//!
//! Pure game logic for N-by-N tic-tac-toe with a configurable winning run
//! length and scripted opponents. Nothing here renders, sleeps, or touches
//! storage; a front end drives a [`GameSession`] and renders the
//! [`GameSnapshot`] it returns.
//!
//! # Architecture
//!
//! - **Board**: square grid from 3x3 to 10x10, mutated only by placement
//! - **Rules**: win detection outward from the last placement, draw detection
//! - **Opponent**: random, heuristic, and minimax (alpha-beta) move selection
//! - **Session**: turn order, game-over state, and scoring
//!
//! # Example
//!
//! ```
//! use strictly_gridtoe::{Cell, GameConfig, GameSession, Mark};
//!
//! # fn example() -> Result<(), strictly_gridtoe::GameError> {
//! let mut session = GameSession::new(GameConfig::default())?;
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     session.submit_move(Cell::new(row, col))?;
//! }
//! assert_eq!(session.status().winner(), Some(Mark::First));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod error;
mod player;
mod probe;
mod session;
mod types;

// Public module declarations
pub mod opponent;
pub mod rules;

// Crate-level exports - Board and types
pub use board::{Board, MAX_SIZE, MIN_SIZE};
pub use types::{Cell, Direction, Mark, Square, SymbolPair};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Configuration
pub use config::{GameConfig, MIN_WIN_CONDITION, Mode};

// Crate-level exports - Opponents
pub use opponent::{DEFAULT_SEARCH_DEPTH, Difficulty, OpponentEngine};

// Crate-level exports - Probing
pub use probe::{Probe, would_win};

// Crate-level exports - Session
pub use action::Move;
pub use player::Player;
pub use session::{ENGINE_MARK, GameSession, GameSnapshot, GameStatus, PlayerView};
