//! Entropy source verification command.
//!
//! The `rng` command samples the ChaCha20 entropy source that drives the
//! shuffle, for inspecting determinism and distribution by eye.

use crate::error::CliError;
use showdown_engine::entropy::{ChaChaEntropy, EntropySource};
use std::io::Write;

/// Handle the rng command - sample the shuffle entropy source.
///
/// Draws five values from a ChaCha20 source with the given seed (random
/// seed if omitted) and prints them.
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut entropy = ChaChaEntropy::seeded(s);
    let mut vals = vec![];
    for _ in 0..5 {
        vals.push(entropy.draw(u64::MAX)?);
    }
    writeln!(out, "Entropy sample (seed {}): {:?}", s, vals)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_command_with_explicit_seed() {
        let mut out = Vec::new();

        let result = handle_rng_command(Some(12345), &mut out);

        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Entropy sample"));
    }

    #[test]
    fn test_rng_command_produces_deterministic_output() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_rng_command(Some(5), &mut a).unwrap();
        handle_rng_command(Some(5), &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rng_command_without_seed() {
        let mut out = Vec::new();
        let result = handle_rng_command(None, &mut out);
        assert!(result.is_ok());
    }
}
