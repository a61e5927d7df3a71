//! Game rules for N-by-N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The session and every
//! opponent probe go through [`win::check_win`], so there is exactly one
//! definition of what a winning run is.

pub mod win;

pub use win::{Outcome, WinningLine, check_win, evaluate};
