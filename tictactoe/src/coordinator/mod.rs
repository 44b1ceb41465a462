//! Session coordinator: the single owner of lobby and game state.
//!
//! This module implements:
//! - Coordinator: synchronous state machine over registry, queue, sessions,
//!   leaderboard, and rematch offers
//! - CoordinatorActor: Tokio task feeding the coordinator from an mpsc inbox
//!   and running session removal timers
//! - Event types exchanged with the transport
//!
//! ## Example
//!
//! ```ignore
//! use tictactoe::coordinator::{ClientEvent, CoordinatorActor, CoordinatorConfig};
//! use tictactoe::game::ConnectionId;
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (outbound, mut notifications) = mpsc::unbounded_channel();
//!     let (actor, handle) = CoordinatorActor::new(CoordinatorConfig::default(), outbound);
//!     tokio::spawn(actor.run());
//!
//!     let alice = ConnectionId::new();
//!     handle
//!         .dispatch(alice, ClientEvent::Join { name: "alice".into() })
//!         .await
//!         .unwrap();
//!     let joined = notifications.recv().await;
//! }
//! ```

pub mod actor;
pub mod config;
pub mod events;
pub mod messages;
pub mod snapshot;
pub mod state;

pub use actor::{CoordinatorActor, CoordinatorHandle};
pub use config::CoordinatorConfig;
pub use events::{ClientEvent, Envelope, Recipient, ServerEvent};
pub use messages::CoordinatorMessage;
pub use snapshot::{GameStateSnapshot, LobbyPlayer, LobbySnapshot};
pub use state::{Coordinator, TimerCommand};
