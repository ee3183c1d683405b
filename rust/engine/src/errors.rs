use thiserror::Error;

use crate::cards::Card;
use crate::game::Phase;

/// Failures an engine operation can report. Every variant names the
/// operation that rejected the call and why, and every failure leaves the
/// game in its pre-call state, so callers can retry or abort as they see fit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("entropy source exhausted drawing a value in [0, {upper}]")]
    EntropyExhausted { upper: u64 },
    #[error("deck holds {remaining} cards, {needed} needed for {players} players plus the board")]
    InsufficientCards {
        remaining: usize,
        needed: usize,
        players: usize,
    },
    #[error("invalid player count {count}: expected 1 to {max} distinct players")]
    InvalidPlayerCount { count: usize, max: usize },
    #[error("hand evaluation takes exactly 7 cards, got {count}")]
    InvalidHandSize { count: usize },
    #[error("duplicate card {card} in evaluated hand")]
    DuplicateCard { card: Card },
    #[error("winner resolution requires at least one player")]
    EmptyPlayerSet,
    #[error("{op} is not valid in the {phase:?} phase")]
    InvalidPhaseTransition { op: &'static str, phase: Phase },
    #[error("player was already paid for this game")]
    AlreadyPaid,
}
