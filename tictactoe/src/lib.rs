//! # Tictactoe
//!
//! Multiplayer tic-tac-toe session coordination: lobby registration,
//! head-to-head matchmaking, turn-arbitrated games, rematches, single-round
//! tournaments, lobby chat, and an all-time leaderboard.
//!
//! ## Core Modules
//!
//! - [`game`]: Board evaluation and per-session turn arbitration
//! - [`lobby`]: Player registry, matchmaking slot, and leaderboard
//! - [`tournament`]: Random first-round brackets
//! - [`coordinator`]: The state machine tying it together and its actor
//!
//! Transports talk to the coordinator only through
//! [`coordinator::ClientEvent`] in and [`coordinator::Envelope`] out.
//!
//! ## Example
//!
//! ```
//! use tictactoe::{Coordinator, ConnectionId, ServerEvent};
//!
//! let mut coordinator = Coordinator::default();
//! let alice = ConnectionId::new();
//! coordinator.join(alice, "alice").unwrap();
//!
//! let outbox = coordinator.drain_outbox();
//! assert!(matches!(outbox[0].event, ServerEvent::Joined { .. }));
//! ```

/// Session coordinator and its actor.
pub mod coordinator;
pub use coordinator::{
    ClientEvent, Coordinator, CoordinatorActor, CoordinatorConfig, CoordinatorHandle, Envelope,
    LobbySnapshot, Recipient, ServerEvent,
};

/// Coordinator errors.
pub mod errors;
pub use errors::{CoordinatorError, CoordinatorResult};

/// Board, identifiers, and game sessions.
pub mod game;
pub use game::{Board, ConnectionId, GameResult, SessionId, Symbol};

pub mod lobby;

pub mod tournament;
