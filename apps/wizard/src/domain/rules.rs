use std::ops::RangeInclusive;

use crate::domain::game_context::Seat;
use crate::errors::domain::DomainError;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

/// Awarded for hitting the bid exactly, before the per-trick bonus.
pub const BASELINE_SCORE: i32 = 20;
/// Per trick bid, when the bid is hit exactly.
pub const HIT_SCORE: i32 = 10;
/// Per trick of difference, when the bid is missed.
pub const MISS_SCORE: i32 = -10;

/// Number of rounds in a game: ⌊deck size / player count⌋.
pub fn round_count(deck_size: usize, player_count: usize) -> Result<u8, DomainError> {
    if player_count == 0 {
        return Err(DomainError::invalid_argument("a game needs at least one player"));
    }
    let rounds = deck_size / player_count;
    if rounds == 0 {
        return Err(DomainError::invalid_argument(format!(
            "deck of {deck_size} cards cannot deal a round to {player_count} players"
        )));
    }
    u8::try_from(rounds).map_err(|_| {
        DomainError::invalid_argument(format!("{rounds} rounds exceeds the supported maximum"))
    })
}

pub fn valid_bid_range(round_no: u8) -> RangeInclusive<u8> {
    0..=round_no
}

/// Seat `delta` places clockwise from `seat`, wrapping around the table.
#[inline]
pub fn seat_offset(seat: Seat, delta: usize, player_count: usize) -> Seat {
    (seat + delta) % player_count
}

#[inline]
pub fn next_seat(seat: Seat, player_count: usize) -> Seat {
    seat_offset(seat, 1, player_count)
}

/// Seat 0 deals round 1; afterwards the deal passes one seat clockwise.
#[inline]
pub fn dealer_for_round(previous_dealer: Option<Seat>, player_count: usize) -> Seat {
    previous_dealer.map_or(0, |d| next_seat(d, player_count))
}

/// Fixed turn order rotated so that `leader` plays first.
pub fn play_order(leader: Seat, player_count: usize) -> Vec<Seat> {
    (0..player_count)
        .map(|n| seat_offset(leader, n, player_count))
        .collect()
}
