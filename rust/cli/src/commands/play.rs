//! Play command handler: one complete game from shuffle to payout.

use crate::error::CliError;
use showdown_engine::engine::Engine;
use showdown_engine::entropy::ChaChaEntropy;
use showdown_engine::payout::{MemoryLedger, NullNotifier};
use std::io::Write;

/// Handle the play command.
///
/// Runs a whole game lifecycle: shuffle, deal to `players` seats, evaluate
/// every hand, resolve the winner set, and pay each winner `amount`. Prints
/// the holes, board, ranks, winners, and the resulting transfer ledger.
pub fn handle_play_command(
    players: usize,
    seed: Option<u64>,
    amount: u64,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let ids: Vec<usize> = (0..players).collect();

    let mut eng = Engine::new(
        ChaChaEntropy::seeded(base_seed),
        MemoryLedger::new(),
        NullNotifier,
    );
    let winners = eng.run_to_showdown(&ids)?.clone();

    writeln!(out, "Seed: {}", base_seed)?;
    for seat in eng.game().seats() {
        writeln!(out, "Hole P{}: {} {}", seat.id, seat.hole[0], seat.hole[1])?;
    }
    let b = eng.game().board();
    writeln!(out, "Board: {} {} {} {} {}", b[0], b[1], b[2], b[3], b[4])?;
    for (id, rank) in eng.game().ranks() {
        writeln!(out, "Rank P{}: {:?} {:?}", id, rank.category, rank.tiebreakers)?;
    }
    writeln!(out, "Winners: {:?}", winners)?;

    let paid = eng.settle(amount)?;
    for (id, amt) in &paid {
        writeln!(out, "Paid P{}: {}", id, amt)?;
    }
    writeln!(out, "Phase: {:?}", eng.game().phase())?;
    Ok(())
}
