//! WebSocket handler carrying the game protocol.
//!
//! # Connection Flow
//!
//! 1. Client connects via `GET /ws` and is assigned a fresh connection id
//! 2. The connection registers with the hub and the server spawns a send
//!    task that serializes every `ServerEvent` queued for it
//! 3. The receive loop parses client messages, throttles them, and forwards
//!    them to the coordinator
//! 4. On close the coordinator is told the connection is gone
//!
//! # Client Messages
//!
//! JSON objects tagged by `type`, field names in camelCase:
//!
//! ```javascript
//! ws.send(JSON.stringify({ type: "join", name: "alice" }));
//! ws.send(JSON.stringify({ type: "findMatch" }));
//! ws.send(JSON.stringify({ type: "makeMove", sessionId: "…", cell: 4 }));
//! ws.send(JSON.stringify({ type: "acceptRematch", requesterId: "…" }));
//! ws.send(JSON.stringify({ type: "chatMessage", text: "gg" }));
//! ```

use super::{AppState, throttle::MessageThrottle};
use crate::{logging::log_connection_event, metrics};
use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use log::{debug, error, warn};
use serde::Deserialize;
use tictactoe::{ClientEvent, ConnectionId, ServerEvent, SessionId, game::CellIndex};
use tokio::sync::mpsc;

/// Client messages received via WebSocket
#[derive(Debug, Deserialize, PartialEq)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ClientMessage {
    Join { name: String },
    FindMatch,
    CancelSearch,
    MakeMove { session_id: SessionId, cell: CellIndex },
    StartTournament,
    Rematch { session_id: SessionId },
    AcceptRematch { requester_id: ConnectionId },
    ChatMessage { text: String },
}

impl From<ClientMessage> for ClientEvent {
    fn from(message: ClientMessage) -> Self {
        match message {
            ClientMessage::Join { name } => ClientEvent::Join { name },
            ClientMessage::FindMatch => ClientEvent::FindMatch,
            ClientMessage::CancelSearch => ClientEvent::CancelSearch,
            ClientMessage::MakeMove { session_id, cell } => {
                ClientEvent::MakeMove { session_id, cell }
            }
            ClientMessage::StartTournament => ClientEvent::StartTournament,
            ClientMessage::Rematch { session_id } => ClientEvent::Rematch { session_id },
            ClientMessage::AcceptRematch { requester_id } => ClientEvent::AcceptRematch {
                requester: requester_id,
            },
            ClientMessage::ChatMessage { text } => ClientEvent::Chat { text },
        }
    }
}

/// Upgrade HTTP connection to WebSocket.
pub async fn websocket_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an established WebSocket connection until either side closes it.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let connection = ConnectionId::new();
    let (mut sender, mut receiver) = socket.split();

    let mut events = state.hub.register(connection).await;
    metrics::websocket_connections_total();
    metrics::websocket_connections_active(state.hub.connection_count().await);
    log_connection_event("connected", connection, None);

    // Replies produced here rather than by the coordinator
    let (local_tx, mut local_rx) = mpsc::channel::<ServerEvent>(8);

    let send_task = tokio::spawn(async move {
        loop {
            let event = tokio::select! {
                Some(event) = events.recv() => event,
                Some(event) = local_rx.recv() => event,
                else => break,
            };

            let json = match serde_json::to_string(&event) {
                Ok(j) => j,
                Err(e) => {
                    error!("Failed to serialize event: {}", e);
                    continue;
                }
            };

            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
            metrics::websocket_messages_sent();
        }
    });

    let mut throttle = MessageThrottle::per_second(state.ws_burst_limit);
    let mut close_reason = None;

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                metrics::websocket_messages_received();

                if !throttle.allow() {
                    warn!("Rate limit exceeded for connection {}", connection);
                    metrics::rate_limit_hits_total("ws");
                    let _ = local_tx.try_send(ServerEvent::Error {
                        message: "Rate limit exceeded. Please slow down.".to_string(),
                    });
                    continue;
                }

                match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(message) => {
                        if let Err(e) = state.coordinator.dispatch(connection, message.into()).await
                        {
                            error!("Failed to reach coordinator: {}", e);
                            close_reason = Some("coordinator unavailable");
                            break;
                        }
                    }
                    Err(e) => {
                        debug!("Failed to parse client message from {}: {}", connection, e);
                        let _ = local_tx.try_send(ServerEvent::Error {
                            message: "Invalid message format".to_string(),
                        });
                    }
                }
            }
            Ok(Message::Close(_)) => break,
            Err(e) => {
                debug!("WebSocket error on {}: {}", connection, e);
                close_reason = Some("socket error");
                break;
            }
            _ => {}
        }
    }

    if state
        .coordinator
        .dispatch(connection, ClientEvent::Disconnect)
        .await
        .is_err()
    {
        debug!("Coordinator gone before disconnect of {}", connection);
    }
    state.hub.unregister(connection).await;
    send_task.abort();

    metrics::websocket_connections_active(state.hub.connection_count().await);
    log_connection_event("closed", connection, close_reason);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit_messages() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"findMatch"}"#).unwrap();
        assert_eq!(msg, ClientMessage::FindMatch);

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"startTournament"}"#).unwrap();
        assert_eq!(ClientEvent::from(msg), ClientEvent::StartTournament);
    }

    #[test]
    fn test_parse_make_move() {
        let session_id = SessionId::new();
        let raw = serde_json::json!({
            "type": "makeMove",
            "sessionId": session_id,
            "cell": 4,
        });

        let msg: ClientMessage = serde_json::from_value(raw).unwrap();
        assert_eq!(
            ClientEvent::from(msg),
            ClientEvent::MakeMove {
                session_id,
                cell: 4
            }
        );
    }

    #[test]
    fn test_parse_accept_rematch_maps_requester() {
        let requester = ConnectionId::new();
        let raw = serde_json::json!({ "type": "acceptRematch", "requesterId": requester });

        let msg: ClientMessage = serde_json::from_value(raw).unwrap();
        assert_eq!(
            ClientEvent::from(msg),
            ClientEvent::AcceptRematch { requester }
        );
    }

    #[test]
    fn test_reject_unknown_or_malformed() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"disconnect"}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"makeMove","cell":1}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>("not json").is_err());
    }
}
