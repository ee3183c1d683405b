use sha2::{Digest, Sha256};

use crate::cards::Card;

/// Collision-resistant identity value of a card.
pub type CardDigest = [u8; 32];

/// Commitment scheme giving each (suit, rank) pair a stable, unguessable
/// identity. Equal cards must commit to equal digests and no two distinct
/// cards may collide; the digest is what gets written to an external ledger.
pub trait CardCommitment {
    fn commit(&self, card: Card) -> CardDigest;
}

// Domain separation keeps card digests disjoint from any other Sha256 use.
const DOMAIN_TAG: &[u8] = b"showdown/card/v1";

/// Default scheme: domain-separated SHA-256 over (suit index, rank value).
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Commitment;

impl CardCommitment for Sha256Commitment {
    fn commit(&self, card: Card) -> CardDigest {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_TAG);
        hasher.update([card.suit.index(), card.rank.value()]);
        hasher.finalize().into()
    }
}

/// Printable form of a digest, for logs and records.
pub fn hex_digest(digest: &CardDigest) -> String {
    hex::encode(digest)
}

/// Commit every card of a sequence in order.
pub fn commit_all<C: CardCommitment>(scheme: &C, cards: &[Card]) -> Vec<CardDigest> {
    cards.iter().map(|&c| scheme.commit(c)).collect()
}
