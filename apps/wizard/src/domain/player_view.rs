//! What a single player is allowed to see when asked for a decision.

use super::game_context::{GameContext, PlayerInfo, RoundContext, Seat, TrickContext};
use super::rules::valid_bid_range;
use super::tricks::legal_moves;
use super::{Card, Suit};

/// Read-only view handed to a player's decision strategy: the shared game
/// context plus that player's own hand.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub seat: Seat,
    pub hand: &'a [Card],
    pub context: &'a GameContext,
}

impl<'a> TurnView<'a> {
    pub fn new(seat: Seat, hand: &'a [Card], context: &'a GameContext) -> Self {
        Self {
            seat,
            hand,
            context,
        }
    }

    pub fn player(&self) -> Option<&'a PlayerInfo> {
        self.context.player(self.seat)
    }

    pub fn player_name(&self) -> &'a str {
        self.player().map_or("", |p| p.name.as_str())
    }

    pub fn round(&self) -> Option<&'a RoundContext> {
        self.context.current_round()
    }

    pub fn round_no(&self) -> u8 {
        self.round().map_or(0, |r| r.round_no())
    }

    pub fn trump_card(&self) -> Option<Card> {
        self.round().and_then(|r| r.trump_card())
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.round().and_then(|r| r.trump_suit())
    }

    pub fn current_trick(&self) -> Option<&'a TrickContext> {
        self.round().and_then(|r| r.current_trick())
    }

    pub fn leading_suit(&self) -> Option<Suit> {
        self.current_trick().and_then(|t| t.leading_suit())
    }

    /// Cards already on the table in the current trick, in play order.
    pub fn cards_played(&self) -> Vec<Card> {
        self.current_trick()
            .map(|t| t.cards_played())
            .unwrap_or_default()
    }

    pub fn bid(&self) -> Option<u8> {
        self.round().and_then(|r| r.bid(self.seat))
    }

    pub fn tricks_won(&self) -> u8 {
        self.round().map_or(0, |r| r.tricks_won(self.seat))
    }

    pub fn legal_bids(&self) -> Vec<u8> {
        valid_bid_range(self.round_no()).collect()
    }

    pub fn legal_plays(&self) -> Vec<Card> {
        legal_moves(self.hand, self.leading_suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_parsing::try_parse_cards;

    #[test]
    fn view_exposes_round_and_legal_moves() {
        let mut ctx = GameContext::from_names(["ann", "bo", "cy", "di"]);
        let mut round = RoundContext::new(3, Some("5H".parse().unwrap()), 0, 4);
        let mut trick = TrickContext::new(1, 1);
        trick.record_play(1, "9C".parse().unwrap());
        round.start_trick(trick);
        ctx.start_round(round);

        let hand = try_parse_cards(["2C", "AH", "WZ"]).unwrap();
        let view = TurnView::new(2, &hand, &ctx);
        assert_eq!(view.player_name(), "cy");
        assert_eq!(view.round_no(), 3);
        assert_eq!(view.trump_suit(), Some(Suit::Hearts));
        assert_eq!(view.leading_suit(), Some(Suit::Clubs));
        assert_eq!(view.legal_bids(), vec![0, 1, 2, 3]);
        assert_eq!(view.legal_plays(), try_parse_cards(["2C"]).unwrap());
        assert_eq!(view.tricks_won(), 0);
    }
}
