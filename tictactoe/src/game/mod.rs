//! Game engine - board evaluation and per-session turn arbitration.

pub mod board;
pub mod entities;
pub mod session;

pub use board::{Board, CELL_COUNT, CellIndex, Symbol, WINNING_LINES, evaluate_winner};
pub use entities::{ConnectionId, GameResult, Outcome, SessionId};
pub use session::{GameSession, MoveOutcome};
