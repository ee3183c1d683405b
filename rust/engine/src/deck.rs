use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::entropy::EntropySource;
use crate::errors::EngineError;

/// An ordered deck of cards, consumed from the top while dealing.
///
/// A deck starts in the canonical 52-card order and is permuted in place by
/// [`Deck::shuffle`]. Cards leave via [`Deck::pop`] and never come back; a
/// game that needs a fresh deck starts a fresh game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The canonical (unshuffled) 52-card deck.
    pub fn standard() -> Self {
        Self { cards: full_deck() }
    }

    /// Fisher-Yates permutation driven by the supplied entropy source:
    /// walk `i` from `len - 1` down to `1`, draw `j` uniformly from
    /// `[0, i]`, swap. Every one of the 52! orderings is reachable when the
    /// source is uniform.
    ///
    /// Runs against a scratch copy so the deck is untouched if the entropy
    /// source gives out partway through.
    pub fn shuffle(&mut self, entropy: &mut dyn EntropySource) -> Result<(), EngineError> {
        let mut scratch = self.cards.clone();
        for i in (1..scratch.len()).rev() {
            let j = entropy.draw(i as u64)? as usize;
            scratch.swap(i, j);
        }
        self.cards = scratch;
        Ok(())
    }

    /// Remove and return the top card, or `None` on an empty deck.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Discard whatever is left. Dealing empties the deck on success so a
    /// consumed game instance cannot deal twice from the same cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The current ordering, top of the deck last.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}
