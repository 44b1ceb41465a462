//! Single-round elimination tournaments.
//!
//! A tournament snapshots the idle players, shuffles them, and starts one
//! game per pair. Only the first round is materialized.

pub mod bracket;

pub use bracket::{Bracket, build_bracket, pair_sequential};

/// Fewest idle players a tournament can start with.
pub const MIN_TOURNAMENT_PLAYERS: usize = 2;
