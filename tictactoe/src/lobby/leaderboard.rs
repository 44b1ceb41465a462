//! Cumulative rankings keyed by display name.

use serde::Serialize;
use std::collections::HashMap;

/// Points awarded for a win.
pub const WIN_POINTS: u32 = 3;

/// Points awarded to each player for a draw.
pub const DRAW_POINTS: u32 = 1;

/// Stats for one display name. Survives disconnects and reconnects under the
/// same name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points: u32,

    /// Order in which the name first registered; breaks ties on points.
    #[serde(skip)]
    pub registered_seq: u64,
}

impl LeaderboardEntry {
    fn new(name: String, registered_seq: u64) -> Self {
        Self {
            name,
            wins: 0,
            losses: 0,
            draws: 0,
            points: 0,
            registered_seq,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

#[derive(Debug, Default)]
pub struct Leaderboard {
    entries: HashMap<String, LeaderboardEntry>,
    next_seq: u64,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry for `name` unless one exists. Existing stats are
    /// never reset.
    pub fn ensure_entry(&mut self, name: &str) {
        if !self.entries.contains_key(name) {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.entries
                .insert(name.to_string(), LeaderboardEntry::new(name.to_string(), seq));
        }
    }

    pub fn get(&self, name: &str) -> Option<&LeaderboardEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record_win(&mut self, winner: &str, loser: &str) {
        self.ensure_entry(winner);
        self.ensure_entry(loser);
        if let Some(entry) = self.entries.get_mut(winner) {
            entry.wins += 1;
            entry.points += WIN_POINTS;
        }
        if let Some(entry) = self.entries.get_mut(loser) {
            entry.losses += 1;
        }
    }

    pub fn record_draw(&mut self, first: &str, second: &str) {
        for name in [first, second] {
            self.ensure_entry(name);
            if let Some(entry) = self.entries.get_mut(name) {
                entry.draws += 1;
                entry.points += DRAW_POINTS;
            }
        }
    }

    /// Top `limit` entries by points descending, earliest registration first
    /// among equal points.
    pub fn top(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut ranked: Vec<&LeaderboardEntry> = self.entries.values().collect();
        ranked.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(a.registered_seq.cmp(&b.registered_seq))
        });
        ranked.into_iter().take(limit).cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_entry_is_idempotent() {
        let mut board = Leaderboard::new();
        board.ensure_entry("alice");
        board.record_win("alice", "bob");
        board.ensure_entry("alice");
        let alice = board.get("alice").unwrap();
        assert_eq!(alice.wins, 1);
        assert_eq!(alice.points, 3);
    }

    #[test]
    fn test_win_and_draw_scoring() {
        let mut board = Leaderboard::new();
        board.record_win("alice", "bob");
        board.record_draw("alice", "bob");

        let alice = board.get("alice").unwrap();
        assert_eq!((alice.wins, alice.losses, alice.draws, alice.points), (1, 0, 1, 4));
        let bob = board.get("bob").unwrap();
        assert_eq!((bob.wins, bob.losses, bob.draws, bob.points), (0, 1, 1, 1));
        assert_eq!(bob.games_played(), 2);
    }

    #[test]
    fn test_top_breaks_ties_by_registration_order() {
        let mut board = Leaderboard::new();
        for name in ["carol", "alice", "bob"] {
            board.ensure_entry(name);
        }
        board.record_draw("bob", "alice");

        let names: Vec<String> = board.top(10).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_top_truncates() {
        let mut board = Leaderboard::new();
        for i in 0..15 {
            board.ensure_entry(&format!("player{i}"));
        }
        assert_eq!(board.top(10).len(), 10);
        assert_eq!(board.len(), 15);
    }
}
