//! Coordinator actor message types.

use super::{
    events::ClientEvent,
    snapshot::{GameStateSnapshot, LobbySnapshot},
};
use crate::game::{ConnectionId, SessionId};
use tokio::sync::oneshot;

/// Messages that can be sent to a CoordinatorActor
#[derive(Debug)]
pub enum CoordinatorMessage {
    /// Player intent from a connection
    Client {
        connection: ConnectionId,
        event: ClientEvent,
    },

    /// Internal: linger delay elapsed for a finished session
    FinalizeSession { session_id: SessionId },

    /// Get the current lobby view
    GetLobby {
        response: oneshot::Sender<LobbySnapshot>,
    },

    /// Get the board state of one session
    GetGameState {
        session_id: SessionId,
        response: oneshot::Sender<Option<GameStateSnapshot>>,
    },

    /// Stop the actor after draining pending notifications
    Close { response: oneshot::Sender<()> },
}
