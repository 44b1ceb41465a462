//! Read-only views of coordinator state sent outward for display.

use crate::{
    game::{Board, ConnectionId, GameSession, SessionId},
    lobby::LeaderboardEntry,
};
use serde::Serialize;

/// Lobby entry for one connected player
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyPlayer {
    pub name: String,
    pub in_game: bool,
}

/// Everything the lobby screen shows. Sent to every connection.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbySnapshot {
    pub players: Vec<LobbyPlayer>,
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Sessions still held, including finished ones awaiting removal
    pub active_game_count: usize,
}

/// Board state of one session. Sent identically to both participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateSnapshot {
    pub session_id: SessionId,
    pub board: Board,
    pub current_turn: ConnectionId,
    pub player1_name: String,
    pub player2_name: String,
}

impl From<&GameSession> for GameStateSnapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            session_id: session.id(),
            board: session.board().clone(),
            current_turn: session.current_turn(),
            player1_name: session.player1_name().to_string(),
            player2_name: session.player2_name().to_string(),
        }
    }
}
