use tracing::{debug, info};

use super::phase::Phase;
use super::{seat_info, Table, WizardEngine};
use crate::domain::rules::dealer_for_round;
use crate::domain::scoring::apply_round_scoring;
use crate::domain::{derive_dealing_seed, Deck, RoundContext};
use crate::error::EngineError;
use crate::errors::domain::DomainError;

impl WizardEngine {
    /// One full round: deal, bid, play every trick, score.
    pub(super) async fn play_round(
        &self,
        table: &mut Table,
        game_seed: u64,
        round_no: u8,
    ) -> Result<(), EngineError> {
        self.deal_round(table, game_seed, round_no).await?;
        self.collect_bids(table, round_no).await?;
        self.play_tricks(table, round_no).await?;
        self.score_round(table).await
    }

    /// Deal `round_no` cards to every seat from a fresh deck, then turn up trump.
    ///
    /// The deck is rebuilt and shuffled each round with
    /// `derive_dealing_seed(game_seed, round_no)`, so a game seed fixes every deal.
    async fn deal_round(
        &self,
        table: &mut Table,
        game_seed: u64,
        round_no: u8,
    ) -> Result<(), EngineError> {
        self.set_phase(Phase::Dealing);
        self.frontend.display_start_round(round_no).await?;
        self.frontend
            .display_deal_in_progress(self.config.deal_pause)
            .await?;

        let player_count = table.player_count();
        let previous_dealer = table.context.current_round().map(|r| r.dealer());
        let dealer = dealer_for_round(previous_dealer, player_count);

        if let Some(player) = table.players.iter().find(|p| !p.hand().is_empty()) {
            return Err(DomainError::internal(format!(
                "{} still holds cards at the start of round {round_no}",
                player.name()
            ))
            .into());
        }

        let mut deck = Deck::new(self.config.wizard_count, self.config.jester_count);
        deck.shuffle_with_seed(derive_dealing_seed(game_seed, round_no));

        // One card per seat per pass, in fixed seat order.
        for _ in 0..round_no {
            for player in table.players.iter_mut() {
                player.take_card(deck.pop_top()?);
            }
        }
        let trump_card = if deck.is_empty() {
            None
        } else {
            Some(deck.pop_top()?)
        };

        table
            .context
            .start_round(RoundContext::new(round_no, trump_card, dealer, player_count));

        info!(
            round = round_no,
            dealer,
            trump = ?trump_card.map(|c| c.to_string()),
            remaining = deck.len(),
            "Round dealt"
        );
        debug!(round = round_no, "Transition: -> Bidding");

        let dealer_info = seat_info(&table.context, dealer)?;
        self.frontend.display_deal_done(dealer_info, trump_card).await?;
        Ok(())
    }

    /// Every seat bids once, seat 0 first. The total is not constrained.
    async fn collect_bids(&self, table: &mut Table, round_no: u8) -> Result<(), EngineError> {
        self.set_phase(Phase::Bidding);

        for seat in 0..table.player_count() {
            let bid = table.players[seat].make_bid(seat, &table.context).await?;
            table.context.current_round_mut()?.record_bid(seat, bid)?;
            debug!(round = round_no, seat, bid, "Bid placed");
            self.frontend
                .display_player_bid(seat_info(&table.context, seat)?, bid)
                .await?;
        }

        let total_bids = table
            .context
            .current_round()
            .map(|r| r.total_bids())
            .unwrap_or(0);
        info!(round = round_no, total_bids, "Bidding complete");
        self.frontend
            .display_bid_outcome(round_no, total_bids)
            .await?;
        Ok(())
    }

    /// Score the round into the running totals and confirm every hand was played out.
    async fn score_round(&self, table: &mut Table) -> Result<(), EngineError> {
        self.set_phase(Phase::Scoring);

        let deltas = apply_round_scoring(&mut table.context)?;

        if let Some(player) = table.players.iter().find(|p| !p.hand().is_empty()) {
            return Err(DomainError::internal(format!(
                "{} has {} unplayed cards after the last trick",
                player.name(),
                player.hand().len()
            ))
            .into());
        }

        info!(
            round = table.context.current_round().map(|r| r.round_no()),
            ?deltas,
            totals = ?table.context.scores(),
            "Round scored"
        );
        self.frontend.display_round_scores(&table.context).await?;
        Ok(())
    }
}
