//! WebSocket server for the tic-tac-toe session coordinator.
//!
//! Transport only: every game rule lives in the `tictactoe` crate. This
//! crate accepts connections, translates JSON to coordinator events, and
//! fans coordinator notifications back out.

pub mod api;
pub mod config;
pub mod hub;
pub mod logging;
pub mod metrics;
