//! Lobby state: who is connected, who is waiting for a match, and the
//! all-time standings.

pub mod leaderboard;
pub mod matchmaking;
pub mod registry;

pub use leaderboard::{DRAW_POINTS, Leaderboard, LeaderboardEntry, WIN_POINTS};
pub use matchmaking::{MatchDecision, MatchmakingQueue};
pub use registry::{Player, PlayerRegistry};
