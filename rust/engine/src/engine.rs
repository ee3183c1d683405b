use std::collections::BTreeSet;

use crate::entropy::EntropySource;
use crate::errors::EngineError;
use crate::game::{Game, Phase, PlayerId};
use crate::payout::{PayoutNotifier, PayoutOutcome, ValueTransfer};

/// One game wired to its collaborators: an entropy source for the shuffle,
/// a value-transfer backend for payouts, and a notifier for denied claims.
///
/// # Examples
///
/// ```
/// use showdown_engine::engine::Engine;
/// use showdown_engine::entropy::ChaChaEntropy;
/// use showdown_engine::payout::{MemoryLedger, NullNotifier};
///
/// let mut engine = Engine::new(ChaChaEntropy::seeded(42), MemoryLedger::new(), NullNotifier);
/// let winners = engine.run_to_showdown(&[0usize, 1, 2]).unwrap().clone();
/// for w in &winners {
///     engine.payout(w, 100).unwrap();
/// }
/// assert_eq!(engine.ledger().entries().len(), winners.len());
/// ```
#[derive(Debug)]
pub struct Engine<P: PlayerId, E, T, N> {
    game: Game<P>,
    entropy: E,
    transfer: T,
    notifier: N,
}

impl<P, E, T, N> Engine<P, E, T, N>
where
    P: PlayerId,
    E: EntropySource,
    T: ValueTransfer<P>,
    N: PayoutNotifier<P>,
{
    pub fn new(entropy: E, transfer: T, notifier: N) -> Self {
        Self {
            game: Game::new(),
            entropy,
            transfer,
            notifier,
        }
    }

    pub fn game(&self) -> &Game<P> {
        &self.game
    }

    /// The transfer backend, for ledger inspection after settlement.
    pub fn ledger(&self) -> &T {
        &self.transfer
    }

    pub fn shuffle(&mut self) -> Result<(), EngineError> {
        self.game.shuffle(&mut self.entropy)
    }

    pub fn deal(&mut self, ids: &[P]) -> Result<(), EngineError> {
        self.game.deal(ids)
    }

    pub fn evaluate(&mut self) -> Result<&BTreeSet<P>, EngineError> {
        self.game.evaluate()
    }

    pub fn payout(&mut self, claimant: &P, amount: u64) -> Result<PayoutOutcome, EngineError> {
        self.game
            .payout(claimant, amount, &mut self.transfer, &mut self.notifier)
    }

    /// Shuffle, deal to `ids`, and evaluate, in order. Returns the winners.
    pub fn run_to_showdown(&mut self, ids: &[P]) -> Result<&BTreeSet<P>, EngineError> {
        self.shuffle()?;
        self.deal(ids)?;
        self.evaluate()
    }

    /// Pay `amount` to every unpaid winner; drives the game to `PaidOut`.
    /// Returns the payouts made by this call in winner order.
    pub fn settle(&mut self, amount: u64) -> Result<Vec<(P, u64)>, EngineError> {
        match self.game.phase() {
            Phase::Evaluated | Phase::PaidOut => {}
            phase => {
                return Err(EngineError::InvalidPhaseTransition {
                    op: "settle",
                    phase,
                })
            }
        }
        let winners: Vec<P> = self.game.winners().iter().cloned().collect();
        let mut made = Vec::new();
        for w in winners {
            if self.game.payouts().contains_key(&w) {
                continue;
            }
            self.payout(&w, amount)?;
            made.push((w, amount));
        }
        Ok(made)
    }
}
