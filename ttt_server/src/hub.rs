//! Fan-out of coordinator notifications to live WebSocket connections.
//!
//! Every connection owns a bounded queue of `ServerEvent`s drained by its
//! socket writer. The dispatcher task reads envelopes from the coordinator's
//! outbound channel and pushes them into those queues without waiting: a
//! connection whose queue is full misses the event, one whose queue is
//! closed is dropped from the hub.

use crate::metrics;
use std::{collections::HashMap, sync::Arc};
use tictactoe::{ConnectionId, Envelope, Recipient, ServerEvent};
use tokio::{
    sync::{RwLock, mpsc},
    task::JoinHandle,
};

/// Per-connection event buffer size
pub const CONNECTION_BUFFER: usize = 64;

#[derive(Debug, Default)]
pub struct ConnectionHub {
    connections: RwLock<HashMap<ConnectionId, mpsc::Sender<ServerEvent>>>,
}

impl ConnectionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection and return the queue its writer should drain
    pub async fn register(&self, connection: ConnectionId) -> mpsc::Receiver<ServerEvent> {
        let (tx, rx) = mpsc::channel(CONNECTION_BUFFER);
        self.connections.write().await.insert(connection, tx);
        rx
    }

    pub async fn unregister(&self, connection: ConnectionId) -> bool {
        self.connections.write().await.remove(&connection).is_some()
    }

    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Deliver one envelope. Returns the number of queues it reached.
    pub async fn deliver(&self, envelope: Envelope) -> usize {
        metrics::observe_event(&envelope.event);

        let mut closed = Vec::new();
        let mut delivered = 0;
        {
            let connections = self.connections.read().await;
            match envelope.recipient {
                Recipient::Connection(id) => {
                    if let Some(tx) = connections.get(&id) {
                        if push(id, tx, envelope.event, &mut closed) {
                            delivered += 1;
                        }
                    } else {
                        log::debug!("Dropping event for unknown connection {}", id);
                    }
                }
                Recipient::Everyone => {
                    for (id, tx) in connections.iter() {
                        if push(*id, tx, envelope.event.clone(), &mut closed) {
                            delivered += 1;
                        }
                    }
                }
            }
        }

        if !closed.is_empty() {
            let mut connections = self.connections.write().await;
            for id in closed {
                connections.remove(&id);
            }
        }

        delivered
    }
}

fn push(
    id: ConnectionId,
    tx: &mpsc::Sender<ServerEvent>,
    event: ServerEvent,
    closed: &mut Vec<ConnectionId>,
) -> bool {
    match tx.try_send(event) {
        Ok(()) => true,
        Err(mpsc::error::TrySendError::Full(_)) => {
            log::warn!("Connection {} is not keeping up; dropping event", id);
            false
        }
        Err(mpsc::error::TrySendError::Closed(_)) => {
            closed.push(id);
            false
        }
    }
}

/// Forward coordinator output to the hub until the coordinator goes away
pub fn spawn_dispatcher(
    hub: Arc<ConnectionHub>,
    mut outbound: mpsc::UnboundedReceiver<Envelope>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(envelope) = outbound.recv().await {
            hub.deliver(envelope).await;
        }
        log::info!("Dispatcher stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_direct_delivery_reaches_only_target() {
        let hub = ConnectionHub::new();
        let alice = ConnectionId::new();
        let bob = ConnectionId::new();
        let mut alice_rx = hub.register(alice).await;
        let mut bob_rx = hub.register(bob).await;

        let reached = hub
            .deliver(Envelope::to(alice, ServerEvent::SearchCancelled))
            .await;

        assert_eq!(reached, 1);
        assert_eq!(alice_rx.try_recv().unwrap(), ServerEvent::SearchCancelled);
        assert!(bob_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_broadcast_reaches_everyone() {
        let hub = ConnectionHub::new();
        let mut receivers = Vec::new();
        for _ in 0..3 {
            receivers.push(hub.register(ConnectionId::new()).await);
        }

        let reached = hub
            .deliver(Envelope::everyone(ServerEvent::SearchCancelled))
            .await;

        assert_eq!(reached, 3);
        for rx in &mut receivers {
            assert!(rx.try_recv().is_ok());
        }
    }

    #[tokio::test]
    async fn test_closed_connection_is_pruned() {
        let hub = ConnectionHub::new();
        let gone = ConnectionId::new();
        drop(hub.register(gone).await);
        let _alive = hub.register(ConnectionId::new()).await;

        hub.deliver(Envelope::everyone(ServerEvent::SearchCancelled))
            .await;

        assert_eq!(hub.connection_count().await, 1);
    }

    #[tokio::test]
    async fn test_full_queue_drops_event() {
        let hub = ConnectionHub::new();
        let slow = ConnectionId::new();
        let _rx = hub.register(slow).await;

        for _ in 0..CONNECTION_BUFFER {
            hub.deliver(Envelope::to(slow, ServerEvent::SearchCancelled))
                .await;
        }
        let reached = hub
            .deliver(Envelope::to(slow, ServerEvent::SearchCancelled))
            .await;

        assert_eq!(reached, 0);
        assert_eq!(hub.connection_count().await, 1);
    }
}
