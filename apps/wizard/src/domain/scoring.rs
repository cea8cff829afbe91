use crate::domain::game_context::GameContext;
use crate::domain::rules::{BASELINE_SCORE, HIT_SCORE, MISS_SCORE};
use crate::errors::domain::DomainError;

/// Exact bid: 20 plus 10 per trick. Miss: -10 per trick of difference.
pub fn score_delta(bid: u8, tricks_won: u8) -> i32 {
    let diff = (bid as i32 - tricks_won as i32).abs();
    if diff == 0 {
        BASELINE_SCORE + bid as i32 * HIT_SCORE
    } else {
        diff * MISS_SCORE
    }
}

/// Score the current round into the cumulative totals; returns the deltas by seat.
pub fn apply_round_scoring(ctx: &mut GameContext) -> Result<Vec<i32>, DomainError> {
    let player_count = ctx.player_count();
    let round = ctx.current_round_mut()?;
    let mut deltas = Vec::with_capacity(player_count);
    for seat in 0..player_count {
        let bid = round.bid(seat).ok_or_else(|| {
            DomainError::internal(format!(
                "seat {seat} has no bid in round {}",
                round.round_no()
            ))
        })?;
        let delta = score_delta(bid, round.tricks_won(seat));
        round.record_score_delta(seat, delta)?;
        deltas.push(delta);
    }
    for (seat, &delta) in deltas.iter().enumerate() {
        ctx.add_score(seat, delta)?;
    }
    Ok(deltas)
}
