//! A single two-player game as a turn-based state machine.

use super::{
    board::{Board, CELL_COUNT, CellIndex, Symbol},
    entities::{ConnectionId, Outcome, SessionId},
};

/// Result of feeding a move into a session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveOutcome {
    /// Move rejected; nothing changed.
    Ignored,
    /// Move applied and the turn passed to the other player.
    Continue,
    /// Move applied and the game is over.
    Finished(Outcome),
}

/// One active game. `player1` always plays X and moves first.
#[derive(Clone, Debug)]
pub struct GameSession {
    id: SessionId,
    player1: ConnectionId,
    player2: ConnectionId,
    player1_name: String,
    player2_name: String,
    board: Board,
    current_turn: ConnectionId,
    move_count: usize,
    finished: bool,
}

impl GameSession {
    pub fn new(
        player1: ConnectionId,
        player1_name: String,
        player2: ConnectionId,
        player2_name: String,
    ) -> Self {
        Self {
            id: SessionId::new(),
            player1,
            player2,
            player1_name,
            player2_name,
            board: Board::new(),
            current_turn: player1,
            move_count: 0,
            finished: false,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn player1(&self) -> ConnectionId {
        self.player1
    }

    pub fn player2(&self) -> ConnectionId {
        self.player2
    }

    pub fn player1_name(&self) -> &str {
        &self.player1_name
    }

    pub fn player2_name(&self) -> &str {
        &self.player2_name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> ConnectionId {
        self.current_turn
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn involves(&self, connection: ConnectionId) -> bool {
        self.player1 == connection || self.player2 == connection
    }

    /// Symbol assigned to a participant.
    pub fn symbol_of(&self, connection: ConnectionId) -> Option<Symbol> {
        if connection == self.player1 {
            Some(Symbol::X)
        } else if connection == self.player2 {
            Some(Symbol::O)
        } else {
            None
        }
    }

    pub fn opponent_of(&self, connection: ConnectionId) -> Option<ConnectionId> {
        if connection == self.player1 {
            Some(self.player2)
        } else if connection == self.player2 {
            Some(self.player1)
        } else {
            None
        }
    }

    pub fn participant_with(&self, symbol: Symbol) -> ConnectionId {
        match symbol {
            Symbol::X => self.player1,
            Symbol::O => self.player2,
        }
    }

    /// Apply a move from `mover`. Stale, out-of-turn, or illegal moves are
    /// ignored without touching state.
    pub fn apply_move(&mut self, mover: ConnectionId, cell: CellIndex) -> MoveOutcome {
        if self.finished || self.current_turn != mover {
            return MoveOutcome::Ignored;
        }
        let Some(symbol) = self.symbol_of(mover) else {
            return MoveOutcome::Ignored;
        };
        if self.board.place(cell, symbol).is_err() {
            return MoveOutcome::Ignored;
        }
        self.move_count += 1;

        if let Some(winner) = self.board.winner() {
            return MoveOutcome::Finished(Outcome::Win {
                winner: self.participant_with(winner),
            });
        }
        if self.move_count == CELL_COUNT {
            return MoveOutcome::Finished(Outcome::Draw);
        }

        self.current_turn = if mover == self.player1 {
            self.player2
        } else {
            self.player1
        };
        MoveOutcome::Continue
    }

    /// Mark the session finished. Returns `false` if it already was.
    pub fn finish(&mut self) -> bool {
        !std::mem::replace(&mut self.finished, true)
    }
}
