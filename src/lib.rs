//! oxo - a perfect-play tic-tac-toe engine
//!
//! This crate provides:
//! - Square board states of any side length with cached outcome
//!   classification
//! - Minimax search with alpha-beta pruning for optimal play
//! - An interactive CLI driver and position analysis with JSON export

pub mod board;
pub mod cli;
pub mod error;
pub mod search;

pub use board::{BoardState, Cell, Outcome, Player};
pub use error::{Error, Result};
pub use search::{minimax, select_move};
