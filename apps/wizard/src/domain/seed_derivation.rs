//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Derives unique-but-deterministic seeds for different game contexts
//! (round shuffles, computer player RNGs) from a single game seed.

/// Seed for shuffling the deck of a round.
pub fn derive_dealing_seed(game_seed: u64, round_no: u8) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // keeps dealing seeds apart from strategy seeds
}

/// Seed for a computer player's own RNG.
pub fn derive_strategy_seed(game_seed: u64, seat: usize) -> u64 {
    game_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
