//! Single-slot matchmaking.
//!
//! At most one connection waits at a time. A new requester either pairs with
//! the waiting player or takes over the slot; it is not a general FIFO.

use crate::game::ConnectionId;

/// What a match request resolved to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchDecision {
    /// Start a game: `waiting` plays X, `requester` plays O.
    Paired {
        waiting: ConnectionId,
        requester: ConnectionId,
    },
    /// Requester now holds the slot.
    Waiting,
}

#[derive(Debug, Default)]
pub struct MatchmakingQueue {
    waiting: Option<ConnectionId>,
}

impl MatchmakingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waiting(&self) -> Option<ConnectionId> {
        self.waiting
    }

    /// Resolve a request from an idle `requester`. A waiting entry that
    /// `is_idle` rejects (busy or gone) is displaced rather than paired.
    pub fn request(
        &mut self,
        requester: ConnectionId,
        is_idle: impl Fn(ConnectionId) -> bool,
    ) -> MatchDecision {
        match self.waiting {
            Some(waiting) if waiting != requester && is_idle(waiting) => {
                self.waiting = None;
                MatchDecision::Paired { waiting, requester }
            }
            _ => {
                self.waiting = Some(requester);
                MatchDecision::Waiting
            }
        }
    }

    /// Clear the slot if `id` holds it. Returns whether it did.
    pub fn cancel(&mut self, id: ConnectionId) -> bool {
        if self.waiting == Some(id) {
            self.waiting = None;
            true
        } else {
            false
        }
    }
}
