use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::entropy::EntropySource;
use crate::errors::EngineError;
use crate::hand::{evaluate_seven, HandRank, HAND_SIZE};
use crate::payout::{PayoutNotifier, PayoutOutcome, ValueTransfer};

/// Opaque player identifier. Anything cloneable, orderable, and hashable
/// works (seat indices, account names, public keys); the engine never looks
/// inside.
pub trait PlayerId: Clone + Ord + Eq + Hash + Debug {}
impl<T: Clone + Ord + Eq + Hash + Debug> PlayerId for T {}

/// Table cap: ten seats, two hole cards each, one shared board.
pub const MAX_PLAYERS: usize = 10;
/// Private cards per player.
pub const HOLE_CARDS: usize = 2;
/// Community cards on the board.
pub const BOARD_CARDS: usize = 5;

/// Phase of the single-use game state machine, strictly forward-only.
/// Each operation is valid only from the immediately preceding phase; there
/// is no reset, a new game means a new [`Game`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Initialized,
    Shuffled,
    Dealt,
    Evaluated,
    PaidOut,
}

/// One player's seat for the lifetime of a game: identity plus the two
/// private cards dealt to it. Immutable after the deal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Seat<P> {
    pub id: P,
    pub hole: [Card; HOLE_CARDS],
}

/// The state of one game instance, owned exclusively by whoever runs it.
///
/// Distinct games share nothing; within a game every operation takes
/// `&mut self`, so exclusive access is the rule and two phase operations
/// cannot overlap on one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game<P: PlayerId> {
    phase: Phase,
    deck: Deck,
    seats: Vec<Seat<P>>,
    board: Vec<Card>,
    ranks: BTreeMap<P, HandRank>,
    winners: BTreeSet<P>,
    paid: BTreeMap<P, u64>,
}

impl<P: PlayerId> Default for Game<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PlayerId> Game<P> {
    /// A fresh game in the `Initialized` phase holding the canonical deck.
    pub fn new() -> Self {
        Self {
            phase: Phase::Initialized,
            deck: Deck::standard(),
            seats: Vec::new(),
            board: Vec::new(),
            ranks: BTreeMap::new(),
            winners: BTreeSet::new(),
            paid: BTreeMap::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Seats in deal order. Empty before the `Dealt` phase.
    pub fn seats(&self) -> &[Seat<P>] {
        &self.seats
    }

    /// The community cards. Empty before the `Dealt` phase.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Evaluated hand ranks. Empty before the `Evaluated` phase.
    pub fn ranks(&self) -> &BTreeMap<P, HandRank> {
        &self.ranks
    }

    /// Players tied at the maximum rank. Empty before the `Evaluated` phase.
    pub fn winners(&self) -> &BTreeSet<P> {
        &self.winners
    }

    /// Successful payouts so far, at most one per winner.
    pub fn payouts(&self) -> &BTreeMap<P, u64> {
        &self.paid
    }

    fn expect_phase(&self, op: &'static str, want: Phase) -> Result<(), EngineError> {
        if self.phase == want {
            Ok(())
        } else {
            Err(EngineError::InvalidPhaseTransition {
                op,
                phase: self.phase,
            })
        }
    }

    /// Permute the deck with the supplied entropy source.
    ///
    /// Valid only in `Initialized`. On failure (wrong phase, entropy
    /// exhausted) the deck keeps its pre-call order and the phase does not
    /// advance.
    pub fn shuffle(&mut self, entropy: &mut dyn EntropySource) -> Result<(), EngineError> {
        self.expect_phase("shuffle", Phase::Initialized)?;
        self.deck.shuffle(entropy)?;
        self.phase = Phase::Shuffled;
        Ok(())
    }

    /// Deal two hole cards to each listed player in order, then the 5-card
    /// board, consuming from the top of the deck.
    ///
    /// Valid only in `Shuffled`. All-or-nothing: every failure leaves the
    /// deck exactly as it was. On success the deck is consumed entirely;
    /// this game cannot deal again.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidPlayerCount`] for zero players, more than
    /// [`MAX_PLAYERS`], or repeated ids; [`EngineError::InsufficientCards`]
    /// if the deck cannot cover `2n + 5`.
    pub fn deal(&mut self, ids: &[P]) -> Result<(), EngineError> {
        self.expect_phase("deal", Phase::Shuffled)?;
        let n = ids.len();
        if n == 0 || n > MAX_PLAYERS {
            return Err(EngineError::InvalidPlayerCount {
                count: n,
                max: MAX_PLAYERS,
            });
        }
        // a repeated id would merge two seats in any keyed map downstream
        let distinct: BTreeSet<&P> = ids.iter().collect();
        if distinct.len() != n {
            return Err(EngineError::InvalidPlayerCount {
                count: n,
                max: MAX_PLAYERS,
            });
        }
        let needed = HOLE_CARDS * n + BOARD_CARDS;
        let short = EngineError::InsufficientCards {
            remaining: self.deck.remaining(),
            needed,
            players: n,
        };
        if self.deck.remaining() < needed {
            return Err(short);
        }

        // deal from a scratch copy; commit only once everything is drawn
        let mut scratch = self.deck.clone();
        let mut seats = Vec::with_capacity(n);
        for id in ids {
            let first = scratch.pop().ok_or(short.clone())?;
            let second = scratch.pop().ok_or(short.clone())?;
            seats.push(Seat {
                id: id.clone(),
                hole: [first, second],
            });
        }
        let mut board = Vec::with_capacity(BOARD_CARDS);
        for _ in 0..BOARD_CARDS {
            board.push(scratch.pop().ok_or(short.clone())?);
        }

        scratch.clear();
        self.deck = scratch;
        self.seats = seats;
        self.board = board;
        self.phase = Phase::Dealt;
        Ok(())
    }

    /// Evaluate every seat's best hand and resolve the winner set.
    ///
    /// Valid only in `Dealt`. Returns the winners: every player whose rank
    /// equals the maximum, so ties split the pot naturally.
    pub fn evaluate(&mut self) -> Result<&BTreeSet<P>, EngineError> {
        self.expect_phase("evaluate", Phase::Dealt)?;
        let mut ranks = BTreeMap::new();
        for seat in &self.seats {
            let mut seven = Vec::with_capacity(HAND_SIZE);
            seven.extend_from_slice(&seat.hole);
            seven.extend_from_slice(&self.board);
            ranks.insert(seat.id.clone(), evaluate_seven(&seven)?);
        }
        let winners = resolve_winners(&ranks)?;
        self.ranks = ranks;
        self.winners = winners;
        self.phase = Phase::Evaluated;
        Ok(&self.winners)
    }

    /// Decide a payout claim. Valid in `Evaluated` or `PaidOut`.
    ///
    /// A winner not yet paid gets `amount` through the transfer collaborator
    /// and is recorded so a repeat claim fails with
    /// [`EngineError::AlreadyPaid`]. A non-winner's claim succeeds with
    /// [`PayoutOutcome::NotAWinner`], moves no funds, and pings the
    /// notifier. Once every winner has been paid the game is `PaidOut`.
    ///
    /// The payout is recorded only after the transfer call returns, so no
    /// payout can end up recorded but unsent.
    pub fn payout(
        &mut self,
        claimant: &P,
        amount: u64,
        transfer: &mut dyn ValueTransfer<P>,
        notifier: &mut dyn PayoutNotifier<P>,
    ) -> Result<PayoutOutcome, EngineError> {
        match self.phase {
            Phase::Evaluated | Phase::PaidOut => {}
            phase => return Err(EngineError::InvalidPhaseTransition { op: "payout", phase }),
        }
        if !self.winners.contains(claimant) {
            notifier.payout_denied(claimant);
            return Ok(PayoutOutcome::NotAWinner);
        }
        if self.paid.contains_key(claimant) {
            return Err(EngineError::AlreadyPaid);
        }
        transfer.transfer(claimant, amount);
        self.paid.insert(claimant.clone(), amount);
        if self.paid.len() == self.winners.len() {
            self.phase = Phase::PaidOut;
        }
        Ok(PayoutOutcome::Paid { amount })
    }
}

/// The set of players whose rank equals the maximum.
///
/// `max` over a total order is commutative, so the result is independent of
/// iteration order.
///
/// # Errors
///
/// [`EngineError::EmptyPlayerSet`] for zero players; no rank comparison is
/// attempted in that case.
pub fn resolve_winners<P: PlayerId>(
    ranks: &BTreeMap<P, HandRank>,
) -> Result<BTreeSet<P>, EngineError> {
    let best = ranks.values().max().ok_or(EngineError::EmptyPlayerSet)?;
    Ok(ranks
        .iter()
        .filter(|(_, rank)| *rank == best)
        .map(|(id, _)| id.clone())
        .collect())
}
