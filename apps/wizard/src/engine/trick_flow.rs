use tracing::debug;

use super::phase::Phase;
use super::{seat_info, Table, WizardEngine};
use crate::domain::rules::{next_seat, play_order};
use crate::domain::{RoundContext, Seat, TrickContext};
use crate::error::EngineError;
use crate::errors::domain::DomainError;

/// The seat left of the dealer leads the first trick; each winner leads the next.
pub(super) fn next_leader(round: &RoundContext, player_count: usize) -> Seat {
    round
        .current_trick()
        .and_then(|t| t.winner())
        .unwrap_or_else(|| next_seat(round.dealer(), player_count))
}

impl WizardEngine {
    pub(super) async fn play_tricks(&self, table: &mut Table, round_no: u8) -> Result<(), EngineError> {
        for trick_no in 1..=round_no {
            self.play_trick(table, trick_no).await?;
        }
        Ok(())
    }

    async fn play_trick(&self, table: &mut Table, trick_no: u8) -> Result<(), EngineError> {
        self.set_phase(Phase::TrickPlay);
        let player_count = table.player_count();

        let round = table.context.current_round_mut()?;
        let leader = next_leader(round, player_count);
        round.start_trick(TrickContext::new(trick_no, leader));
        self.frontend.display_start_trick(trick_no).await?;

        for seat in play_order(leader, player_count) {
            let card = table.players[seat].make_turn(seat, &table.context).await?;
            table
                .context
                .current_round_mut()?
                .current_trick_mut()?
                .record_play(seat, card);
            debug!(trick = trick_no, seat, %card, "Card played");
            self.frontend
                .display_turn_taken(card, seat_info(&table.context, seat)?)
                .await?;
        }

        self.set_phase(Phase::TrickResolution);
        let round = table.context.current_round_mut()?;
        let trump = round.trump_suit();
        let winning = round.current_trick_mut()?.resolve(trump)?;
        round.award_trick(winning.seat)?;
        if round.tricks().len() != usize::from(trick_no) {
            return Err(DomainError::internal(format!(
                "trick {trick_no} resolved but round holds {} tricks",
                round.tricks().len()
            ))
            .into());
        }

        debug!(trick = trick_no, winner = winning.seat, card = %winning.card, "Trick won");
        self.frontend
            .display_trick_winner(seat_info(&table.context, winning.seat)?, winning.card)
            .await?;
        Ok(())
    }
}
