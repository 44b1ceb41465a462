//! Session coordinator state.
//!
//! `Coordinator` owns the registry, the matchmaking slot, every live session,
//! and the leaderboard. It is synchronous: each call runs to completion and
//! leaves its notifications in an outbox plus any timer work in a command
//! list, both drained by whoever drives it (normally `CoordinatorActor`).

use super::{
    config::CoordinatorConfig,
    events::{ClientEvent, Envelope, ServerEvent},
    snapshot::{GameStateSnapshot, LobbyPlayer, LobbySnapshot},
};
use crate::{
    errors::{CoordinatorError, CoordinatorResult},
    game::{
        CellIndex, ConnectionId, GameResult, GameSession, MoveOutcome, Outcome, SessionId, Symbol,
    },
    lobby::{Leaderboard, MatchDecision, MatchmakingQueue, Player, PlayerRegistry},
    tournament::{Bracket, MIN_TOURNAMENT_PLAYERS, build_bracket},
};
use std::collections::HashMap;

const WAITING_MESSAGE: &str = "Searching for opponent...";

/// Deferred work requested by the coordinator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimerCommand {
    /// Remove this finished session after the linger delay
    ScheduleRemoval(SessionId),
    /// The session is already gone; drop any pending removal
    CancelRemoval(SessionId),
}

#[derive(Debug)]
pub struct Coordinator {
    config: CoordinatorConfig,
    registry: PlayerRegistry,
    queue: MatchmakingQueue,
    sessions: HashMap<SessionId, GameSession>,
    leaderboard: Leaderboard,

    /// Outstanding rematch offers as (requester, recipient) -> finished session.
    /// An offer lives only as long as that session is held.
    rematch_offers: HashMap<(ConnectionId, ConnectionId), SessionId>,

    outbox: Vec<Envelope>,
    timer_commands: Vec<TimerCommand>,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(CoordinatorConfig::default())
    }
}

impl Coordinator {
    pub fn new(config: CoordinatorConfig) -> Self {
        let registry = PlayerRegistry::new(config.max_name_length);
        Self {
            config,
            registry,
            queue: MatchmakingQueue::new(),
            sessions: HashMap::new(),
            leaderboard: Leaderboard::new(),
            rematch_offers: HashMap::new(),
            outbox: Vec::new(),
            timer_commands: Vec::new(),
        }
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Route one inbound intent.
    pub fn handle(&mut self, connection: ConnectionId, event: ClientEvent) {
        match event {
            ClientEvent::Join { name } => {
                let _ = self.join(connection, &name);
            }
            ClientEvent::FindMatch => self.request_match(connection),
            ClientEvent::CancelSearch => self.cancel_search(connection),
            ClientEvent::MakeMove { session_id, cell } => {
                self.apply_move(session_id, connection, cell)
            }
            ClientEvent::StartTournament => {
                let _ = self.start_tournament(Some(connection));
            }
            ClientEvent::Rematch { session_id } => {
                self.handle_rematch_request(session_id, connection)
            }
            ClientEvent::AcceptRematch { requester } => {
                self.handle_rematch_accept(connection, requester)
            }
            ClientEvent::Chat { text } => self.chat(connection, &text),
            ClientEvent::Disconnect => self.handle_disconnect(connection),
        }
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    /// Register `connection` under `name`. Failures are reported to the
    /// connection and change nothing.
    pub fn join(&mut self, connection: ConnectionId, name: &str) -> CoordinatorResult<()> {
        match self.registry.register(connection, name) {
            Ok(player) => {
                let name = player.name.clone();
                self.leaderboard.ensure_entry(&name);
                log::info!("{} joined as {}", connection, name);
                self.outbox
                    .push(Envelope::to(connection, ServerEvent::Joined { name }));
                self.broadcast_lobby();
                Ok(())
            }
            Err(e) => {
                log::debug!("Join rejected for {}: {}", connection, e);
                self.send_error(connection, &e);
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // Matchmaking
    // ------------------------------------------------------------------

    pub fn request_match(&mut self, connection: ConnectionId) {
        if !self.registry.is_idle(connection) {
            log::debug!("Ignoring match request from busy or unknown {}", connection);
            return;
        }

        let registry = &self.registry;
        match self.queue.request(connection, |id| registry.is_idle(id)) {
            MatchDecision::Paired { waiting, requester } => {
                self.start_session(waiting, requester);
            }
            MatchDecision::Waiting => {
                self.outbox.push(Envelope::to(
                    connection,
                    ServerEvent::Waiting {
                        message: WAITING_MESSAGE.to_string(),
                    },
                ));
            }
        }
    }

    pub fn cancel_search(&mut self, connection: ConnectionId) {
        self.queue.cancel(connection);
        self.outbox
            .push(Envelope::to(connection, ServerEvent::SearchCancelled));
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    /// Start a game with `player1` as X moving first. Both players must be
    /// connected, idle, and distinct.
    pub fn start_session(
        &mut self,
        player1: ConnectionId,
        player2: ConnectionId,
    ) -> Option<SessionId> {
        if player1 == player2
            || !self.registry.is_idle(player1)
            || !self.registry.is_idle(player2)
        {
            log::warn!(
                "Refusing to start session between {} and {}",
                player1,
                player2
            );
            return None;
        }
        let name1 = self.registry.name_of(player1)?.to_string();
        let name2 = self.registry.name_of(player2)?.to_string();

        let session = GameSession::new(player1, name1.clone(), player2, name2.clone());
        let session_id = session.id();

        self.registry.set_in_game(player1, true);
        self.registry.set_in_game(player2, true);
        self.drop_rematch_offers(|from, to| {
            from == player1 || to == player1 || from == player2 || to == player2
        });
        if !self.queue.cancel(player1) {
            self.queue.cancel(player2);
        }
        self.sessions.insert(session_id, session);

        self.outbox.push(Envelope::to(
            player1,
            ServerEvent::GameStart {
                session_id,
                opponent_name: name2.clone(),
                symbol: Symbol::X,
                your_turn: true,
            },
        ));
        self.outbox.push(Envelope::to(
            player2,
            ServerEvent::GameStart {
                session_id,
                opponent_name: name1.clone(),
                symbol: Symbol::O,
                your_turn: false,
            },
        ));
        self.broadcast_game_state(session_id);
        self.broadcast_lobby();

        log::info!("Game {} started: {} vs {}", session_id, name1, name2);
        Some(session_id)
    }

    /// Apply a move. Stale, duplicate, or illegal moves are dropped silently.
    pub fn apply_move(&mut self, session_id: SessionId, connection: ConnectionId, cell: CellIndex) {
        let Some(session) = self.sessions.get_mut(&session_id) else {
            log::debug!("Move from {} for unknown game {}", connection, session_id);
            return;
        };

        match session.apply_move(connection, cell) {
            MoveOutcome::Ignored => {
                log::debug!(
                    "Ignoring move from {} on cell {} in game {}",
                    connection,
                    cell,
                    session_id
                );
            }
            MoveOutcome::Continue => self.broadcast_game_state(session_id),
            MoveOutcome::Finished(outcome) => self.end_session(session_id, outcome),
        }
    }

    /// Finish a session, score it, and schedule its removal. No-op if the
    /// session is gone or already finished.
    pub fn end_session(&mut self, session_id: SessionId, outcome: Outcome) {
        let Some(session) = self.sessions.get_mut(&session_id) else {
            return;
        };
        if !session.finish() {
            return;
        }

        let (player1, player2) = (session.player1(), session.player2());
        let (name1, name2) = (
            session.player1_name().to_string(),
            session.player2_name().to_string(),
        );
        let board = session.board().clone();

        self.registry.set_in_game(player1, false);
        self.registry.set_in_game(player2, false);

        let results = match outcome {
            Outcome::Win { winner } => {
                let (loser, winner_name, loser_name) = if winner == player1 {
                    (player2, &name1, &name2)
                } else {
                    (player1, &name2, &name1)
                };
                self.leaderboard.record_win(winner_name, loser_name);
                log::info!("Game {} won by {}", session_id, winner_name);
                [(winner, GameResult::Win), (loser, GameResult::Loss)]
            }
            Outcome::Draw => {
                self.leaderboard.record_draw(&name1, &name2);
                log::info!("Game {} drawn between {} and {}", session_id, name1, name2);
                [(player1, GameResult::Draw), (player2, GameResult::Draw)]
            }
        };

        for (connection, result) in results {
            self.outbox.push(Envelope::to(
                connection,
                ServerEvent::GameEnd {
                    session_id,
                    result,
                    board: board.clone(),
                },
            ));
        }

        self.timer_commands
            .push(TimerCommand::ScheduleRemoval(session_id));
        self.broadcast_lobby();
    }

    /// Remove a finished session once its linger delay has elapsed.
    /// Returns whether anything was removed.
    pub fn finalize_session(&mut self, session_id: SessionId) -> bool {
        match self.sessions.get(&session_id) {
            Some(session) if session.is_finished() => {
                self.sessions.remove(&session_id);
                self.rematch_offers.retain(|_, offered_in| *offered_in != session_id);
                log::debug!("Game {} removed", session_id);
                self.broadcast_lobby();
                true
            }
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Rematches
    // ------------------------------------------------------------------

    /// Forward a rematch offer to the requester's opponent in `session_id`.
    pub fn handle_rematch_request(&mut self, session_id: SessionId, requester: ConnectionId) {
        let Some(opponent) = self
            .sessions
            .get(&session_id)
            .and_then(|session| session.opponent_of(requester))
        else {
            log::debug!("Ignoring rematch request from {} for {}", requester, session_id);
            return;
        };
        let Some(requester_name) = self.registry.name_of(requester) else {
            return;
        };
        if !self.registry.contains(opponent) {
            return;
        }

        let requester_name = requester_name.to_string();
        self.rematch_offers.insert((requester, opponent), session_id);
        self.outbox.push(Envelope::to(
            opponent,
            ServerEvent::RematchRequest {
                requester_id: requester,
                requester_name,
                session_id,
            },
        ));
    }

    /// Start a rematch if `requester` offered one to `accepter` and the game
    /// it was offered from is still held. The accepter plays X.
    pub fn handle_rematch_accept(&mut self, accepter: ConnectionId, requester: ConnectionId) {
        let offer = (requester, accepter);
        let Some(&offered_in) = self.rematch_offers.get(&offer) else {
            log::debug!(
                "Ignoring rematch accept from {}: no offer from {}",
                accepter,
                requester
            );
            return;
        };
        if !self.sessions.contains_key(&offered_in) {
            self.rematch_offers.remove(&offer);
            log::debug!("Ignoring rematch accept from {}: game {} is gone", accepter, offered_in);
            return;
        }
        if !self.registry.is_idle(accepter) || !self.registry.is_idle(requester) {
            log::debug!("Ignoring rematch accept from {}: a player is busy", accepter);
            return;
        }

        self.rematch_offers.remove(&offer);
        self.start_session(accepter, requester);
    }

    // ------------------------------------------------------------------
    // Tournaments
    // ------------------------------------------------------------------

    /// Pair every idle player at random and start the first round. The odd
    /// player out, if any, stays idle.
    pub fn start_tournament(
        &mut self,
        requester: Option<ConnectionId>,
    ) -> CoordinatorResult<Bracket<ConnectionId>> {
        let idle: Vec<ConnectionId> = self.registry.list_idle().iter().map(|p| p.id).collect();
        if idle.len() < MIN_TOURNAMENT_PLAYERS {
            let err = CoordinatorError::InsufficientPlayers {
                needed: MIN_TOURNAMENT_PLAYERS,
                available: idle.len(),
            };
            if let Some(requester) = requester {
                self.send_error(requester, &err);
            }
            return Err(err);
        }

        let entrants = idle.len();
        let bracket = build_bracket(idle, &mut rand::rng());
        for &(player1, player2) in bracket.pairs() {
            self.start_session(player1, player2);
        }

        let names = bracket.map(|id| self.registry.name_of(*id).unwrap_or_default().to_string());
        self.outbox
            .push(Envelope::everyone(ServerEvent::TournamentStart { bracket: names }));

        log::info!(
            "Tournament started with {} players in {} games",
            entrants,
            bracket.len()
        );
        Ok(bracket)
    }

    // ------------------------------------------------------------------
    // Chat and disconnects
    // ------------------------------------------------------------------

    pub fn chat(&mut self, connection: ConnectionId, text: &str) {
        let Some(name) = self.registry.name_of(connection) else {
            return;
        };
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let message: String = text.chars().take(self.config.max_chat_length).collect();
        let name = name.to_string();
        self.outbox.push(Envelope::everyone(ServerEvent::ChatMessage {
            name,
            message,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }));
    }

    /// Tear down everything that references `connection`. Sessions are
    /// removed immediately and never scored.
    pub fn handle_disconnect(&mut self, connection: ConnectionId) {
        let affected: Vec<SessionId> = self
            .sessions
            .values()
            .filter(|session| session.involves(connection))
            .map(GameSession::id)
            .collect();

        for session_id in &affected {
            let Some(session) = self.sessions.remove(session_id) else {
                continue;
            };
            if let Some(opponent) = session.opponent_of(connection) {
                if !session.is_finished() {
                    self.registry.set_in_game(opponent, false);
                }
                self.outbox.push(Envelope::to(
                    opponent,
                    ServerEvent::OpponentDisconnected {
                        session_id: *session_id,
                    },
                ));
            }
            if session.is_finished() {
                self.timer_commands
                    .push(TimerCommand::CancelRemoval(*session_id));
            }
        }

        self.drop_rematch_offers(|from, to| from == connection || to == connection);
        self.queue.cancel(connection);

        let removed = self.registry.unregister(connection);
        if let Some(player) = &removed {
            log::info!("{} ({}) disconnected", player.name, connection);
        }
        if removed.is_some() || !affected.is_empty() {
            self.broadcast_lobby();
        }
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    pub fn lobby_snapshot(&self) -> LobbySnapshot {
        LobbySnapshot {
            players: self
                .registry
                .list()
                .map(|p| LobbyPlayer {
                    name: p.name.clone(),
                    in_game: p.in_game,
                })
                .collect(),
            leaderboard: self.leaderboard.top(self.config.leaderboard_size),
            active_game_count: self.sessions.len(),
        }
    }

    pub fn game_state_snapshot(&self, session_id: SessionId) -> Option<GameStateSnapshot> {
        self.sessions.get(&session_id).map(GameStateSnapshot::from)
    }

    /// Queue a lobby update, replacing any not yet drained so one inbound
    /// event yields at most one.
    fn broadcast_lobby(&mut self) {
        self.outbox
            .retain(|env| !matches!(env.event, ServerEvent::LobbyUpdate(_)));
        let snapshot = self.lobby_snapshot();
        self.outbox
            .push(Envelope::everyone(ServerEvent::LobbyUpdate(snapshot)));
    }

    fn broadcast_game_state(&mut self, session_id: SessionId) {
        let Some(session) = self.sessions.get(&session_id) else {
            return;
        };
        let snapshot = GameStateSnapshot::from(session);
        let (player1, player2) = (session.player1(), session.player2());
        self.outbox.push(Envelope::to(
            player1,
            ServerEvent::GameUpdate(snapshot.clone()),
        ));
        self.outbox
            .push(Envelope::to(player2, ServerEvent::GameUpdate(snapshot)));
    }

    fn drop_rematch_offers(&mut self, involves: impl Fn(ConnectionId, ConnectionId) -> bool) {
        self.rematch_offers.retain(|&(from, to), _| !involves(from, to));
    }

    fn send_error(&mut self, connection: ConnectionId, error: &CoordinatorError) {
        self.outbox.push(Envelope::to(
            connection,
            ServerEvent::Error {
                message: error.to_string(),
            },
        ));
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn player(&self, connection: ConnectionId) -> Option<&Player> {
        self.registry.get(connection)
    }

    pub fn player_count(&self) -> usize {
        self.registry.len()
    }

    pub fn idle_players(&self) -> Vec<&Player> {
        self.registry.list_idle()
    }

    pub fn session(&self, session_id: SessionId) -> Option<&GameSession> {
        self.sessions.get(&session_id)
    }

    pub fn sessions(&self) -> impl Iterator<Item = &GameSession> {
        self.sessions.values()
    }

    /// Sessions held, including finished ones that are still lingering.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn waiting_player(&self) -> Option<ConnectionId> {
        self.queue.waiting()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Offers still awaiting an answer.
    pub fn pending_rematch_count(&self) -> usize {
        self.rematch_offers.len()
    }

    /// Take every notification produced since the last drain.
    pub fn drain_outbox(&mut self) -> Vec<Envelope> {
        std::mem::take(&mut self.outbox)
    }

    /// Take every timer request produced since the last drain.
    pub fn drain_timer_commands(&mut self) -> Vec<TimerCommand> {
        std::mem::take(&mut self.timer_commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::Recipient;

    fn joined(coordinator: &mut Coordinator, name: &str) -> ConnectionId {
        let id = ConnectionId::new();
        coordinator.join(id, name).unwrap();
        id
    }

    fn events_for(outbox: &[Envelope], connection: ConnectionId) -> Vec<&ServerEvent> {
        outbox
            .iter()
            .filter(|env| env.is_for(connection))
            .map(|env| &env.event)
            .collect()
    }

    #[test]
    fn test_join_emits_joined_and_lobby() {
        let mut coordinator = Coordinator::default();
        let alice = joined(&mut coordinator, "alice");
        let outbox = coordinator.drain_outbox();

        assert_eq!(
            outbox[0],
            Envelope::to(
                alice,
                ServerEvent::Joined {
                    name: "alice".to_string()
                }
            )
        );
        assert!(matches!(outbox[1].event, ServerEvent::LobbyUpdate(_)));
        assert!(coordinator.leaderboard().get("alice").is_some());
    }

    #[test]
    fn test_failed_join_reports_error_only() {
        let mut coordinator = Coordinator::default();
        joined(&mut coordinator, "alice");
        coordinator.drain_outbox();

        let bob = ConnectionId::new();
        assert_eq!(
            coordinator.join(bob, "alice"),
            Err(CoordinatorError::NameTaken)
        );
        let outbox = coordinator.drain_outbox();
        assert_eq!(
            outbox,
            vec![Envelope::to(
                bob,
                ServerEvent::Error {
                    message: "Username already taken".to_string()
                }
            )]
        );
        assert_eq!(coordinator.player_count(), 1);
    }

    #[test]
    fn test_start_session_marks_players_and_clears_queue() {
        let mut coordinator = Coordinator::default();
        let alice = joined(&mut coordinator, "alice");
        let bob = joined(&mut coordinator, "bob");
        coordinator.request_match(alice);

        let session_id = coordinator.start_session(bob, alice).unwrap();
        assert!(coordinator.player(alice).unwrap().in_game);
        assert!(coordinator.player(bob).unwrap().in_game);
        assert_eq!(coordinator.waiting_player(), None);
        assert_eq!(coordinator.session(session_id).unwrap().player1(), bob);
    }

    #[test]
    fn test_start_session_refuses_busy_players() {
        let mut coordinator = Coordinator::default();
        let alice = joined(&mut coordinator, "alice");
        let bob = joined(&mut coordinator, "bob");
        let carol = joined(&mut coordinator, "carol");
        coordinator.start_session(alice, bob).unwrap();

        assert_eq!(coordinator.start_session(carol, alice), None);
        assert_eq!(coordinator.start_session(carol, carol), None);
        assert_eq!(coordinator.session_count(), 1);
    }

    #[test]
    fn test_end_session_is_idempotent() {
        let mut coordinator = Coordinator::default();
        let alice = joined(&mut coordinator, "alice");
        let bob = joined(&mut coordinator, "bob");
        let session_id = coordinator.start_session(alice, bob).unwrap();

        coordinator.end_session(session_id, Outcome::Win { winner: alice });
        coordinator.end_session(session_id, Outcome::Win { winner: alice });
        coordinator.end_session(session_id, Outcome::Draw);

        let entry = coordinator.leaderboard().get("alice").unwrap();
        assert_eq!((entry.wins, entry.draws, entry.points), (1, 0, 3));
        assert_eq!(
            coordinator.drain_timer_commands(),
            vec![TimerCommand::ScheduleRemoval(session_id)]
        );
    }

    #[test]
    fn test_finalize_only_removes_finished_sessions() {
        let mut coordinator = Coordinator::default();
        let alice = joined(&mut coordinator, "alice");
        let bob = joined(&mut coordinator, "bob");
        let session_id = coordinator.start_session(alice, bob).unwrap();

        assert!(!coordinator.finalize_session(session_id));
        coordinator.end_session(session_id, Outcome::Draw);
        assert_eq!(coordinator.session_count(), 1);
        assert!(coordinator.finalize_session(session_id));
        assert!(!coordinator.finalize_session(session_id));
        assert_eq!(coordinator.session_count(), 0);
    }

    #[test]
    fn test_disconnect_releases_opponent_without_scoring() {
        let mut coordinator = Coordinator::default();
        let alice = joined(&mut coordinator, "alice");
        let bob = joined(&mut coordinator, "bob");
        let session_id = coordinator.start_session(alice, bob).unwrap();
        coordinator.drain_outbox();

        coordinator.handle_disconnect(alice);

        assert!(coordinator.session(session_id).is_none());
        assert!(!coordinator.player(bob).unwrap().in_game);
        assert!(coordinator.player(alice).is_none());
        let bob_entry = coordinator.leaderboard().get("bob").unwrap();
        assert_eq!(bob_entry.games_played(), 0);

        let outbox = coordinator.drain_outbox();
        assert!(
            events_for(&outbox, bob)
                .contains(&&ServerEvent::OpponentDisconnected { session_id })
        );
        assert!(coordinator.drain_timer_commands().is_empty());
    }

    #[test]
    fn test_disconnect_during_linger_cancels_removal() {
        let mut coordinator = Coordinator::default();
        let alice = joined(&mut coordinator, "alice");
        let bob = joined(&mut coordinator, "bob");
        let session_id = coordinator.start_session(alice, bob).unwrap();
        coordinator.end_session(session_id, Outcome::Draw);
        coordinator.drain_timer_commands();

        coordinator.handle_disconnect(bob);
        assert_eq!(
            coordinator.drain_timer_commands(),
            vec![TimerCommand::CancelRemoval(session_id)]
        );
        assert!(!coordinator.finalize_session(session_id));
    }

    #[test]
    fn test_chat_is_trimmed_truncated_and_broadcast() {
        let mut coordinator = Coordinator::new(CoordinatorConfig {
            max_chat_length: 5,
            ..Default::default()
        });
        let alice = joined(&mut coordinator, "alice");
        coordinator.drain_outbox();

        coordinator.chat(alice, "   ");
        coordinator.chat(ConnectionId::new(), "hello");
        assert!(coordinator.drain_outbox().is_empty());

        coordinator.chat(alice, "  hello world ");
        let outbox = coordinator.drain_outbox();
        assert_eq!(outbox.len(), 1);
        match &outbox[0] {
            Envelope {
                recipient: Recipient::Everyone,
                event: ServerEvent::ChatMessage { name, message, .. },
            } => {
                assert_eq!(name, "alice");
                assert_eq!(message, "hello");
            }
            other => panic!("unexpected envelope {other:?}"),
        }
    }

    #[test]
    fn test_lobby_snapshot_contents() {
        let mut coordinator = Coordinator::default();
        let alice = joined(&mut coordinator, "alice");
        let bob = joined(&mut coordinator, "bob");
        joined(&mut coordinator, "carol");
        coordinator.start_session(alice, bob).unwrap();

        let snapshot = coordinator.lobby_snapshot();
        let players: Vec<(&str, bool)> = snapshot
            .players
            .iter()
            .map(|p| (p.name.as_str(), p.in_game))
            .collect();
        assert_eq!(
            players,
            vec![("alice", true), ("bob", true), ("carol", false)]
        );
        assert_eq!(snapshot.active_game_count, 1);
        assert_eq!(snapshot.leaderboard.len(), 3);
    }
}
