//! Registry of connected players.

use crate::{
    errors::{CoordinatorError, CoordinatorResult},
    game::ConnectionId,
};
use std::collections::HashMap;

/// A connected, named player.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    pub id: ConnectionId,
    pub name: String,
    pub in_game: bool,
}

impl Player {
    pub fn is_idle(&self) -> bool {
        !self.in_game
    }
}

/// Owns every live `Player`. Listing order is join order.
#[derive(Debug)]
pub struct PlayerRegistry {
    players: HashMap<ConnectionId, Player>,
    join_order: Vec<ConnectionId>,
    max_name_length: usize,
}

impl PlayerRegistry {
    pub fn new(max_name_length: usize) -> Self {
        Self {
            players: HashMap::new(),
            join_order: Vec::new(),
            max_name_length,
        }
    }

    /// Add a player under `name`.
    ///
    /// Names are compared exactly (case-sensitive) against live players only,
    /// so a name frees up as soon as its holder disconnects.
    pub fn register(&mut self, id: ConnectionId, name: &str) -> CoordinatorResult<&Player> {
        if name.trim().is_empty() || name.chars().count() > self.max_name_length {
            return Err(CoordinatorError::InvalidName);
        }
        if let Some(existing) = self.players.get(&id) {
            return Err(CoordinatorError::AlreadyJoined(existing.name.clone()));
        }
        if self.players.values().any(|p| p.name == name) {
            return Err(CoordinatorError::NameTaken);
        }

        self.join_order.push(id);
        let player = self.players.entry(id).or_insert(Player {
            id,
            name: name.to_string(),
            in_game: false,
        });
        Ok(player)
    }

    pub fn unregister(&mut self, id: ConnectionId) -> Option<Player> {
        let player = self.players.remove(&id)?;
        self.join_order.retain(|other| *other != id);
        Some(player)
    }

    pub fn get(&self, id: ConnectionId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn contains(&self, id: ConnectionId) -> bool {
        self.players.contains_key(&id)
    }

    pub fn name_of(&self, id: ConnectionId) -> Option<&str> {
        self.players.get(&id).map(|p| p.name.as_str())
    }

    pub fn is_idle(&self, id: ConnectionId) -> bool {
        self.players.get(&id).is_some_and(Player::is_idle)
    }

    pub fn set_in_game(&mut self, id: ConnectionId, in_game: bool) {
        if let Some(player) = self.players.get_mut(&id) {
            player.in_game = in_game;
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn list(&self) -> impl Iterator<Item = &Player> {
        self.join_order.iter().filter_map(|id| self.players.get(id))
    }

    pub fn list_idle(&self) -> Vec<&Player> {
        self.list().filter(|p| p.is_idle()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_blank_names() {
        let mut registry = PlayerRegistry::new(32);
        for name in ["", "   ", "\t\n"] {
            assert_eq!(
                registry.register(ConnectionId::new(), name),
                Err(CoordinatorError::InvalidName)
            );
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_overlong_names() {
        let mut registry = PlayerRegistry::new(4);
        assert_eq!(
            registry.register(ConnectionId::new(), "alice"),
            Err(CoordinatorError::InvalidName)
        );
        assert!(registry.register(ConnectionId::new(), "bob").is_ok());
    }

    #[test]
    fn test_names_are_unique_and_case_sensitive() {
        let mut registry = PlayerRegistry::new(32);
        let first = ConnectionId::new();
        registry.register(first, "alice").unwrap();
        assert_eq!(
            registry.register(ConnectionId::new(), "alice"),
            Err(CoordinatorError::NameTaken)
        );
        assert!(registry.register(ConnectionId::new(), "Alice").is_ok());

        registry.unregister(first);
        assert!(registry.register(ConnectionId::new(), "alice").is_ok());
    }

    #[test]
    fn test_same_connection_cannot_join_twice() {
        let mut registry = PlayerRegistry::new(32);
        let id = ConnectionId::new();
        registry.register(id, "alice").unwrap();
        assert_eq!(
            registry.register(id, "bob"),
            Err(CoordinatorError::AlreadyJoined("alice".to_string()))
        );
    }

    #[test]
    fn test_list_idle_keeps_join_order() {
        let mut registry = PlayerRegistry::new(32);
        let ids: Vec<ConnectionId> = (0..4).map(|_| ConnectionId::new()).collect();
        for (i, id) in ids.iter().enumerate() {
            registry.register(*id, &format!("p{i}")).unwrap();
        }
        registry.set_in_game(ids[1], true);
        registry.unregister(ids[2]);

        let idle: Vec<&str> = registry.list_idle().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(idle, vec!["p0", "p3"]);
        assert_eq!(registry.list().count(), 3);
    }
}
