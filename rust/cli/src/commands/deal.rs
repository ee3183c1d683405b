//! Deal command handler for single-game dealing and display.
//!
//! Shuffles a fresh deck and deals hole cards to every player plus the
//! five-card board, with optional seeding for deterministic dealing.

use crate::error::CliError;
use showdown_engine::engine::Engine;
use showdown_engine::entropy::ChaChaEntropy;
use showdown_engine::payout::{MemoryLedger, NullNotifier};
use std::io::Write;

/// Handle the deal command.
///
/// Deals one game and prints each player's hole cards and the complete
/// board. The seed is printed so any deal can be reproduced.
///
/// # Errors
///
/// Returns `CliError` on I/O failure or when the engine rejects the roster
/// (zero players, more than ten).
pub fn handle_deal_command(
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let ids: Vec<usize> = (0..players).collect();

    let mut eng = Engine::new(
        ChaChaEntropy::seeded(base_seed),
        MemoryLedger::new(),
        NullNotifier,
    );
    eng.shuffle()?;
    eng.deal(&ids)?;

    writeln!(out, "Seed: {}", base_seed)?;
    for seat in eng.game().seats() {
        writeln!(out, "Hole P{}: {} {}", seat.id, seat.hole[0], seat.hole[1])?;
    }
    let b = eng.game().board();
    writeln!(out, "Board: {} {} {} {} {}", b[0], b[1], b[2], b[3], b[4])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_is_deterministic_with_seed() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(4, Some(42), &mut a).expect("deal ok");
        handle_deal_command(4, Some(42), &mut b).expect("deal ok");
        assert_eq!(a, b);

        let output = String::from_utf8(a).unwrap();
        assert!(output.contains("Hole P0"));
        assert!(output.contains("Hole P3"));
        assert!(output.contains("Board:"));
    }

    #[test]
    fn test_deal_command_rejects_zero_players() {
        let mut out = Vec::new();
        let result = handle_deal_command(0, Some(1), &mut out);
        assert!(matches!(result, Err(CliError::Engine(_))));
    }
}
