//! ComputerPlayer: deterministic heuristic opponent.
//!
//! Bidding: count likely winners in the hand (Wizards, high trumps, off-suit
//! aces and kings) and bid the rounded estimate, capped at the round size.
//!
//! Play, bid-aware:
//! - Leading: lead strong while short of the bid, weak once it is met.
//! - Following and still short of the bid: win as cheaply as possible, else
//!   throw the weakest legal card.
//! - Following with the bid met: shed the strongest card that still loses,
//!   else the weakest card.

use async_trait::async_trait;

use super::trait_def::{PlayerKind, PlayerStrategy, StrategyError};
use crate::domain::{leading_suit, winning_play_index, Card, Rank, Suit, TurnView};

#[derive(Debug, Clone, Default)]
pub struct ComputerPlayer;

impl ComputerPlayer {
    pub const NAME: &'static str = "computer";

    pub fn new() -> Self {
        Self
    }

    /// Expected tricks from a hand, given the round's trump.
    pub fn estimate_tricks(hand: &[Card], trump: Option<Suit>) -> f32 {
        hand.iter()
            .map(|card| match (card.rank, card.suit) {
                (Rank::Wizard, _) => 1.0,
                (Rank::Jester, _) => 0.0,
                (rank, suit) if trump.is_some() && suit == trump => {
                    if rank >= Rank::Queen {
                        0.9
                    } else if rank >= Rank::Ten {
                        0.6
                    } else {
                        0.3
                    }
                }
                (Rank::Ace, _) => 0.7,
                (Rank::King, _) => 0.35,
                _ => 0.0,
            })
            .sum()
    }

    /// Ordering used to pick "cheap" and "expensive" cards.
    fn strength(card: Card, trump: Option<Suit>) -> u8 {
        match card.rank {
            Rank::Jester => 0,
            Rank::Wizard => 100,
            rank if trump.is_some() && card.suit == trump => 50 + rank as u8,
            rank => rank as u8,
        }
    }

    /// Would `card` take the trick if nobody after us plays?
    fn wins_so_far(played: &[Card], card: Card, trump: Option<Suit>) -> bool {
        let mut cards = played.to_vec();
        cards.push(card);
        let lead = leading_suit(&cards);
        matches!(winning_play_index(&cards, trump, lead), Ok(idx) if idx == cards.len() - 1)
    }
}

#[async_trait]
impl PlayerStrategy for ComputerPlayer {
    async fn choose_bid(&self, view: &TurnView<'_>) -> Result<u8, StrategyError> {
        let estimate = Self::estimate_tricks(view.hand, view.trump_suit());
        let bid = (estimate.round() as u8).min(view.round_no());
        Ok(bid)
    }

    async fn choose_card(&self, view: &TurnView<'_>) -> Result<Card, StrategyError> {
        let legal = view.legal_plays();
        let trump = view.trump_suit();
        let by_strength = |c: &&Card| Self::strength(**c, trump);

        let weakest = legal
            .iter()
            .min_by_key(by_strength)
            .copied()
            .ok_or_else(|| StrategyError::NoLegalMove("empty hand".into()))?;
        let strongest = legal.iter().max_by_key(by_strength).copied().unwrap_or(weakest);

        let wants_tricks = view.tricks_won() < view.bid().unwrap_or(0);
        let played = view.cards_played();

        if played.is_empty() {
            return Ok(if wants_tricks { strongest } else { weakest });
        }

        let (winners, losers): (Vec<Card>, Vec<Card>) = legal
            .iter()
            .copied()
            .partition(|&c| Self::wins_so_far(&played, c, trump));

        let choice = if wants_tricks {
            winners.iter().min_by_key(by_strength).copied().unwrap_or(weakest)
        } else {
            losers.iter().max_by_key(by_strength).copied().unwrap_or(weakest)
        };
        Ok(choice)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_parsing::try_parse_cards;
    use crate::domain::{GameContext, RoundContext, TrickContext};

    fn table(trump: &str, plays: &[(usize, &str)], bid_for_seat_2: u8) -> GameContext {
        let mut ctx = GameContext::from_names(["a", "b", "c", "d"]);
        let mut round = RoundContext::new(5, Some(trump.parse().unwrap()), 0, 4);
        round.record_bid(2, bid_for_seat_2).unwrap();
        let leader = plays.first().map_or(2, |p| p.0);
        let mut trick = TrickContext::new(1, leader);
        for (seat, token) in plays {
            trick.record_play(*seat, token.parse().unwrap());
        }
        round.start_trick(trick);
        ctx.start_round(round);
        ctx
    }

    #[test]
    fn estimate_counts_wizards_and_trumps() {
        let hand = try_parse_cards(["WZ", "AS", "QH", "2C", "JR"]).unwrap();
        let est = ComputerPlayer::estimate_tricks(&hand, Some(Suit::Hearts));
        assert!((est - 2.6).abs() < 1e-6, "got {est}");
    }

    #[tokio::test]
    async fn bid_is_capped_at_round_size() {
        let ctx = table("5H", &[], 0);
        let hand = try_parse_cards(["WZ", "WZ", "WZ", "WZ", "AH"]).unwrap();
        let view = TurnView::new(2, &hand, &ctx);
        let bid = ComputerPlayer::new().choose_bid(&view).await.unwrap();
        assert_eq!(bid, 5);
    }

    #[tokio::test]
    async fn wins_cheaply_when_short_of_bid() {
        let ctx = table("5H", &[(1, "9S")], 1);
        let hand = try_parse_cards(["TS", "KS", "2S"]).unwrap();
        let view = TurnView::new(2, &hand, &ctx);
        let card = ComputerPlayer::new().choose_card(&view).await.unwrap();
        assert_eq!(card, "TS".parse().unwrap());
    }

    #[tokio::test]
    async fn ducks_with_highest_loser_when_bid_met() {
        let ctx = table("5H", &[(1, "JS")], 0);
        let hand = try_parse_cards(["TS", "KS", "2S"]).unwrap();
        let view = TurnView::new(2, &hand, &ctx);
        let card = ComputerPlayer::new().choose_card(&view).await.unwrap();
        assert_eq!(card, "TS".parse().unwrap());
    }

    #[tokio::test]
    async fn follows_suit_even_when_holding_wizard() {
        let ctx = table("5H", &[(1, "3C")], 2);
        let hand = try_parse_cards(["WZ", "4C", "AH"]).unwrap();
        let view = TurnView::new(2, &hand, &ctx);
        let card = ComputerPlayer::new().choose_card(&view).await.unwrap();
        assert_eq!(card, "4C".parse().unwrap());
    }

    #[tokio::test]
    async fn leads_strong_when_wanting_tricks() {
        let ctx = table("5H", &[], 2);
        let hand = try_parse_cards(["2C", "KH", "JR"]).unwrap();
        let view = TurnView::new(2, &hand, &ctx);
        let card = ComputerPlayer::new().choose_card(&view).await.unwrap();
        assert_eq!(card, "KH".parse().unwrap());
    }
}
