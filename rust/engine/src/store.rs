use std::collections::HashMap;

use crate::game::{Game, PlayerId};

/// Durable home for game state, keyed by game identifier.
///
/// The engine only needs get/set with read-your-writes within a game; every
/// save replaces the whole entity, one write per phase transition, which
/// matches the coarse granularity a persistence backend naturally offers.
pub trait GameStore<P: PlayerId> {
    fn load(&self, game_id: &str) -> Option<Game<P>>;
    fn save(&mut self, game_id: &str, game: Game<P>);
}

/// In-process store. The reference implementation and test double.
#[derive(Debug, Clone)]
pub struct MemoryStore<P: PlayerId> {
    games: HashMap<String, Game<P>>,
}

impl<P: PlayerId> MemoryStore<P> {
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl<P: PlayerId> Default for MemoryStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PlayerId> GameStore<P> for MemoryStore<P> {
    fn load(&self, game_id: &str) -> Option<Game<P>> {
        self.games.get(game_id).cloned()
    }

    fn save(&mut self, game_id: &str, game: Game<P>) {
        self.games.insert(game_id.to_string(), game);
    }
}
