use serde::{Deserialize, Serialize};

/// What a payout claim decided.
///
/// `NotAWinner` is a normal outcome, not an error: the claim was heard and
/// denied, and no funds moved.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PayoutOutcome {
    /// The claimant is an unpaid winner; `amount` was authorized.
    Paid { amount: u64 },
    /// The claimant is not in the winner set; nothing was transferred.
    NotAWinner,
}

/// Moves funds to a recipient. The engine decides *whether* and *how much*;
/// this collaborator performs the actual transfer.
pub trait ValueTransfer<P> {
    fn transfer(&mut self, recipient: &P, amount: u64);
}

/// Receives "payout denied" signals for observability. Not required for
/// correctness; a denied claim is reported to the caller either way.
pub trait PayoutNotifier<P> {
    fn payout_denied(&mut self, claimant: &P);
}

/// Transfer backend that appends every authorized payout to an in-memory
/// ledger. The default backend for local play and tests.
#[derive(Debug, Clone)]
pub struct MemoryLedger<P> {
    entries: Vec<(P, u64)>,
}

impl<P> MemoryLedger<P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Every transfer performed, in order.
    pub fn entries(&self) -> &[(P, u64)] {
        &self.entries
    }
}

impl<P> Default for MemoryLedger<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> ValueTransfer<P> for MemoryLedger<P> {
    fn transfer(&mut self, recipient: &P, amount: u64) {
        self.entries.push((recipient.clone(), amount));
    }
}

/// Notifier that drops every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl<P> PayoutNotifier<P> for NullNotifier {
    fn payout_denied(&mut self, _claimant: &P) {}
}
