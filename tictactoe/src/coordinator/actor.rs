//! Coordinator actor: serializes every event through one task.

use super::{
    config::CoordinatorConfig,
    events::{ClientEvent, Envelope},
    messages::CoordinatorMessage,
    snapshot::{GameStateSnapshot, LobbySnapshot},
    state::{Coordinator, TimerCommand},
};
use crate::game::{ConnectionId, SessionId};
use std::{collections::HashMap, time::Duration};
use tokio::{
    sync::{mpsc, oneshot},
    task::AbortHandle,
};

/// Cloneable front door to a running `CoordinatorActor`.
#[derive(Clone, Debug)]
pub struct CoordinatorHandle {
    sender: mpsc::Sender<CoordinatorMessage>,
}

impl CoordinatorHandle {
    pub fn new(sender: mpsc::Sender<CoordinatorMessage>) -> Self {
        Self { sender }
    }

    /// Send a message to the coordinator
    pub async fn send(&self, message: CoordinatorMessage) -> Result<(), String> {
        self.sender
            .send(message)
            .await
            .map_err(|_| "Coordinator is closed".to_string())
    }

    /// Forward one player intent
    pub async fn dispatch(&self, connection: ConnectionId, event: ClientEvent) -> Result<(), String> {
        self.send(CoordinatorMessage::Client { connection, event })
            .await
    }

    pub async fn lobby_snapshot(&self) -> Result<LobbySnapshot, String> {
        let (tx, rx) = oneshot::channel();
        self.send(CoordinatorMessage::GetLobby { response: tx })
            .await?;
        rx.await.map_err(|_| "Coordinator dropped the request".to_string())
    }

    pub async fn game_state(&self, session_id: SessionId) -> Result<Option<GameStateSnapshot>, String> {
        let (tx, rx) = oneshot::channel();
        self.send(CoordinatorMessage::GetGameState {
            session_id,
            response: tx,
        })
        .await?;
        rx.await.map_err(|_| "Coordinator dropped the request".to_string())
    }

    /// Stop the actor and wait until it has flushed its outbox
    pub async fn close(&self) -> Result<(), String> {
        let (tx, rx) = oneshot::channel();
        self.send(CoordinatorMessage::Close { response: tx }).await?;
        rx.await.map_err(|_| "Coordinator dropped the request".to_string())
    }
}

/// Owns a `Coordinator` and drives it from an mpsc inbox.
///
/// Outbound notifications go to an unbounded channel so the actor never
/// waits on a slow transport. Session removal timers are plain sleeping
/// tasks that post `FinalizeSession` back into the inbox; the actor keeps
/// their abort handles so a session torn down early cancels its timer.
pub struct CoordinatorActor {
    coordinator: Coordinator,

    /// Message inbox
    inbox: mpsc::Receiver<CoordinatorMessage>,

    /// Used by removal timers; weak so the actor stops once every handle is gone
    timer_sender: mpsc::WeakSender<CoordinatorMessage>,

    /// Delivery channel to the transport
    outbound: mpsc::UnboundedSender<Envelope>,

    removal_timers: HashMap<SessionId, AbortHandle>,

    linger: Duration,
}

impl CoordinatorActor {
    /// Create a new coordinator actor and a handle to it
    pub fn new(
        config: CoordinatorConfig,
        outbound: mpsc::UnboundedSender<Envelope>,
    ) -> (Self, CoordinatorHandle) {
        let (sender, inbox) = mpsc::channel(config.inbox_capacity.max(1));
        let linger = config.session_linger();

        let actor = Self {
            coordinator: Coordinator::new(config),
            inbox,
            timer_sender: sender.downgrade(),
            outbound,
            removal_timers: HashMap::new(),
            linger,
        };

        (actor, CoordinatorHandle::new(sender))
    }

    /// Run the actor until closed or every handle is dropped
    pub async fn run(mut self) {
        log::info!("Coordinator starting");

        while let Some(message) = self.inbox.recv().await {
            let closing = match message {
                CoordinatorMessage::Close { response } => Some(response),
                other => {
                    self.handle_message(other);
                    None
                }
            };

            self.flush();

            if let Some(response) = closing {
                let _ = response.send(());
                break;
            }
        }

        for (_, timer) in self.removal_timers.drain() {
            timer.abort();
        }

        log::info!("Coordinator stopped");
    }

    fn handle_message(&mut self, message: CoordinatorMessage) {
        match message {
            CoordinatorMessage::Client { connection, event } => {
                self.coordinator.handle(connection, event);
            }

            CoordinatorMessage::FinalizeSession { session_id } => {
                self.removal_timers.remove(&session_id);
                self.coordinator.finalize_session(session_id);
            }

            CoordinatorMessage::GetLobby { response } => {
                let _ = response.send(self.coordinator.lobby_snapshot());
            }

            CoordinatorMessage::GetGameState {
                session_id,
                response,
            } => {
                let _ = response.send(self.coordinator.game_state_snapshot(session_id));
            }

            CoordinatorMessage::Close { response } => {
                let _ = response.send(());
            }
        }
    }

    /// Hand queued notifications to the transport and apply timer requests
    fn flush(&mut self) {
        for envelope in self.coordinator.drain_outbox() {
            if self.outbound.send(envelope).is_err() {
                log::debug!("Outbound channel closed; dropping notification");
            }
        }

        for command in self.coordinator.drain_timer_commands() {
            match command {
                TimerCommand::ScheduleRemoval(session_id) => self.schedule_removal(session_id),
                TimerCommand::CancelRemoval(session_id) => {
                    if let Some(timer) = self.removal_timers.remove(&session_id) {
                        timer.abort();
                    }
                }
            }
        }
    }

    fn schedule_removal(&mut self, session_id: SessionId) {
        let sender = self.timer_sender.clone();
        let linger = self.linger;

        let task = tokio::spawn(async move {
            tokio::time::sleep(linger).await;
            if let Some(sender) = sender.upgrade() {
                let _ = sender
                    .send(CoordinatorMessage::FinalizeSession { session_id })
                    .await;
            }
        });

        if let Some(previous) = self
            .removal_timers
            .insert(session_id, task.abort_handle())
        {
            previous.abort();
        }
    }
}
