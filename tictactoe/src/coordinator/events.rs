//! Inbound intents and outbound notifications exchanged with the transport.

use super::snapshot::{GameStateSnapshot, LobbySnapshot};
use crate::{
    game::{Board, CellIndex, ConnectionId, GameResult, SessionId, Symbol},
    tournament::Bracket,
};
use serde::Serialize;

/// Player intents delivered by the transport, one connection at a time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClientEvent {
    /// Claim a display name
    Join { name: String },
    /// Enter the matchmaking slot
    FindMatch,
    /// Leave the matchmaking slot
    CancelSearch,
    /// Place a symbol
    MakeMove {
        session_id: SessionId,
        cell: CellIndex,
    },
    /// Pair every idle player into first-round games
    StartTournament,
    /// Offer a rematch to the opponent of a session
    Rematch { session_id: SessionId },
    /// Accept a rematch offered by `requester`
    AcceptRematch { requester: ConnectionId },
    /// Lobby chat
    Chat { text: String },
    /// Connection closed
    Disconnect,
}

/// Notifications handed to the transport for delivery.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    Joined {
        name: String,
    },
    Error {
        message: String,
    },
    Waiting {
        message: String,
    },
    SearchCancelled,
    GameStart {
        session_id: SessionId,
        opponent_name: String,
        symbol: Symbol,
        your_turn: bool,
    },
    GameUpdate(GameStateSnapshot),
    GameEnd {
        session_id: SessionId,
        result: GameResult,
        board: Board,
    },
    OpponentDisconnected {
        session_id: SessionId,
    },
    RematchRequest {
        requester_id: ConnectionId,
        requester_name: String,
        session_id: SessionId,
    },
    TournamentStart {
        bracket: Bracket<String>,
    },
    LobbyUpdate(LobbySnapshot),
    ChatMessage {
        name: String,
        message: String,
        /// Milliseconds since the Unix epoch
        timestamp: i64,
    },
}

/// Who should receive an event
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Recipient {
    Connection(ConnectionId),
    Everyone,
}

/// An outbound event with its delivery scope
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Envelope {
    pub recipient: Recipient,
    pub event: ServerEvent,
}

impl Envelope {
    pub fn to(connection: ConnectionId, event: ServerEvent) -> Self {
        Self {
            recipient: Recipient::Connection(connection),
            event,
        }
    }

    pub fn everyone(event: ServerEvent) -> Self {
        Self {
            recipient: Recipient::Everyone,
            event,
        }
    }

    pub fn is_for(&self, connection: ConnectionId) -> bool {
        match self.recipient {
            Recipient::Connection(id) => id == connection,
            Recipient::Everyone => true,
        }
    }
}
