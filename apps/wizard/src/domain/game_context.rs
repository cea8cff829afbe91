//! Structured history of a match: players, rounds, tricks, bids and scores.
//!
//! The engine is the only writer. Everything handed to front-ends and
//! strategies is a shared borrow, so observers never see a context change
//! underneath them; mutation helpers are crate-private.

use serde::{Deserialize, Serialize};

use super::cards_logic::winning_play_index;
use super::cards_types::{Card, Suit};
use crate::errors::domain::DomainError;

/// Position at the table, `0..player_count`. Turn order is seat order.
pub type Seat = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub seat: Seat,
    pub name: String,
}

/// One card played into a trick and who played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrickContext {
    trick_no: u8,
    leader: Seat,
    /// In the trick's own play order (starting at `leader`).
    plays: Vec<Play>,
    leading_suit: Option<Suit>,
    winner: Option<Seat>,
    winning_card: Option<Card>,
}

impl TrickContext {
    pub fn new(trick_no: u8, leader: Seat) -> Self {
        Self {
            trick_no,
            leader,
            plays: Vec::new(),
            leading_suit: None,
            winner: None,
            winning_card: None,
        }
    }

    pub fn trick_no(&self) -> u8 {
        self.trick_no
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn cards_played(&self) -> Vec<Card> {
        self.plays.iter().map(|p| p.card).collect()
    }

    pub fn leading_suit(&self) -> Option<Suit> {
        self.leading_suit
    }

    /// Set once every player has played and the trick is resolved.
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn winning_card(&self) -> Option<Card> {
        self.winning_card
    }

    pub(crate) fn record_play(&mut self, seat: Seat, card: Card) {
        self.plays.push(Play { seat, card });
        if self.leading_suit.is_none() {
            self.leading_suit = card.suit;
        }
    }

    pub(crate) fn resolve(&mut self, trump: Option<Suit>) -> Result<Play, DomainError> {
        let idx = winning_play_index(&self.cards_played(), trump, self.leading_suit)?;
        let play = self.plays[idx];
        self.winner = Some(play.seat);
        self.winning_card = Some(play.card);
        Ok(play)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundContext {
    round_no: u8,
    trump_card: Option<Card>,
    dealer: Seat,
    bids: Vec<Option<u8>>,
    tricks_won: Vec<u8>,
    tricks: Vec<TrickContext>,
    score_deltas: Vec<Option<i32>>,
}

impl RoundContext {
    /// Every seat starts the round with zero tricks won and no bid.
    pub fn new(round_no: u8, trump_card: Option<Card>, dealer: Seat, player_count: usize) -> Self {
        Self {
            round_no,
            trump_card,
            dealer,
            bids: vec![None; player_count],
            tricks_won: vec![0; player_count],
            tricks: Vec::with_capacity(round_no as usize),
            score_deltas: vec![None; player_count],
        }
    }

    pub fn round_no(&self) -> u8 {
        self.round_no
    }

    pub fn trump_card(&self) -> Option<Card> {
        self.trump_card
    }

    /// A Wizard or Jester turned up, or an exhausted deck, means no trump.
    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_card.and_then(|c| c.suit)
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn bid(&self, seat: Seat) -> Option<u8> {
        self.bids.get(seat).copied().flatten()
    }

    pub fn bids(&self) -> &[Option<u8>] {
        &self.bids
    }

    /// Reported to players but never constrained.
    pub fn total_bids(&self) -> u32 {
        self.bids.iter().flatten().map(|&b| b as u32).sum()
    }

    pub fn tricks_won(&self, seat: Seat) -> u8 {
        self.tricks_won.get(seat).copied().unwrap_or(0)
    }

    pub fn tricks(&self) -> &[TrickContext] {
        &self.tricks
    }

    pub fn current_trick(&self) -> Option<&TrickContext> {
        self.tricks.last()
    }

    pub fn previous_trick(&self) -> Option<&TrickContext> {
        self.tricks.len().checked_sub(2).map(|i| &self.tricks[i])
    }

    pub fn score_delta(&self, seat: Seat) -> Option<i32> {
        self.score_deltas.get(seat).copied().flatten()
    }

    pub(crate) fn record_bid(&mut self, seat: Seat, bid: u8) -> Result<(), DomainError> {
        let slot = self
            .bids
            .get_mut(seat)
            .ok_or_else(|| DomainError::internal(format!("bid from unknown seat {seat}")))?;
        *slot = Some(bid);
        Ok(())
    }

    pub(crate) fn start_trick(&mut self, trick: TrickContext) {
        self.tricks.push(trick);
    }

    pub(crate) fn current_trick_mut(&mut self) -> Result<&mut TrickContext, DomainError> {
        self.tricks
            .last_mut()
            .ok_or_else(|| DomainError::internal("no trick in progress"))
    }

    pub(crate) fn award_trick(&mut self, seat: Seat) -> Result<(), DomainError> {
        let won = self
            .tricks_won
            .get_mut(seat)
            .ok_or_else(|| DomainError::internal(format!("trick awarded to unknown seat {seat}")))?;
        *won += 1;
        Ok(())
    }

    pub(crate) fn record_score_delta(&mut self, seat: Seat, delta: i32) -> Result<(), DomainError> {
        let slot = self
            .score_deltas
            .get_mut(seat)
            .ok_or_else(|| DomainError::internal(format!("score for unknown seat {seat}")))?;
        *slot = Some(delta);
        Ok(())
    }
}

/// The single authoritative record of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameContext {
    /// Turn order, fixed for the whole game.
    players: Vec<PlayerInfo>,
    /// Append-only, one per round played so far.
    rounds: Vec<RoundContext>,
    /// Cumulative, indexed by seat. Starts at zero and is only added to.
    scores: Vec<i32>,
}

impl GameContext {
    pub fn new(players: Vec<PlayerInfo>) -> Self {
        let scores = vec![0; players.len()];
        Self {
            players,
            rounds: Vec::new(),
            scores,
        }
    }

    /// Seats are assigned in the order the names are given.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| PlayerInfo {
                seat,
                name: name.into(),
            })
            .collect();
        Self::new(players)
    }

    pub fn players(&self) -> &[PlayerInfo] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> Option<&PlayerInfo> {
        self.players.get(seat)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn rounds(&self) -> &[RoundContext] {
        &self.rounds
    }

    pub fn current_round(&self) -> Option<&RoundContext> {
        self.rounds.last()
    }

    pub fn previous_round(&self) -> Option<&RoundContext> {
        self.rounds.len().checked_sub(2).map(|i| &self.rounds[i])
    }

    pub fn score(&self, seat: Seat) -> i32 {
        self.scores.get(seat).copied().unwrap_or(0)
    }

    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    /// Players by cumulative score, highest first; ties keep seat order.
    pub fn standings(&self) -> Vec<(&PlayerInfo, i32)> {
        let mut table: Vec<(&PlayerInfo, i32)> = self
            .players
            .iter()
            .map(|p| (p, self.score(p.seat)))
            .collect();
        table.sort_by(|a, b| b.1.cmp(&a.1));
        table
    }

    pub(crate) fn start_round(&mut self, round: RoundContext) {
        self.rounds.push(round);
    }

    pub(crate) fn current_round_mut(&mut self) -> Result<&mut RoundContext, DomainError> {
        self.rounds
            .last_mut()
            .ok_or_else(|| DomainError::internal("no round in progress"))
    }

    pub(crate) fn add_score(&mut self, seat: Seat, delta: i32) -> Result<(), DomainError> {
        let total = self
            .scores
            .get_mut(seat)
            .ok_or_else(|| DomainError::internal(format!("score for unknown seat {seat}")))?;
        *total += delta;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rank;

    #[test]
    fn trick_leading_suit_ignores_specials() {
        let mut trick = TrickContext::new(1, 2);
        trick.record_play(2, Card::JESTER);
        assert_eq!(trick.leading_suit(), None);
        trick.record_play(3, Card::WIZARD);
        assert_eq!(trick.leading_suit(), None);
        trick.record_play(0, Card::new(Suit::Hearts, Rank::Four));
        trick.record_play(1, Card::new(Suit::Clubs, Rank::Ace));
        assert_eq!(trick.leading_suit(), Some(Suit::Hearts));
    }

    #[test]
    fn resolve_maps_winner_back_to_seat() {
        let mut trick = TrickContext::new(3, 2);
        for (seat, token) in [(2, "JR"), (3, "7S"), (0, "3S"), (1, "WZ")] {
            trick.record_play(seat, token.parse().unwrap());
        }
        let winner = trick.resolve(Some(Suit::Spades)).unwrap();
        assert_eq!(winner.seat, 1);
        assert_eq!(trick.winner(), Some(1));
        assert_eq!(trick.winning_card(), Some(Card::WIZARD));
    }

    #[test]
    fn round_tracks_bids_and_tricks() {
        let mut round = RoundContext::new(3, Some(Card::WIZARD), 1, 4);
        assert_eq!(round.trump_suit(), None);
        assert!((0..4).all(|s| round.tricks_won(s) == 0));

        round.record_bid(0, 1).unwrap();
        round.record_bid(2, 2).unwrap();
        assert_eq!(round.total_bids(), 3);
        assert_eq!(round.bid(1), None);
        assert!(round.record_bid(9, 1).is_err());

        round.award_trick(2).unwrap();
        round.award_trick(2).unwrap();
        assert_eq!(round.tricks_won(2), 2);
    }

    #[test]
    fn previous_lookups() {
        let mut ctx = GameContext::from_names(["ann", "bo", "cy"]);
        assert!(ctx.current_round().is_none());
        ctx.start_round(RoundContext::new(1, None, 0, 3));
        assert!(ctx.previous_round().is_none());
        ctx.start_round(RoundContext::new(2, None, 1, 3));
        assert_eq!(ctx.previous_round().map(|r| r.dealer()), Some(0));

        let round = ctx.current_round_mut().unwrap();
        round.start_trick(TrickContext::new(1, 2));
        round.start_trick(TrickContext::new(2, 0));
        assert_eq!(round.previous_trick().map(|t| t.leader()), Some(2));
    }

    #[test]
    fn standings_order_by_score() {
        let mut ctx = GameContext::from_names(["ann", "bo", "cy"]);
        ctx.add_score(0, -10).unwrap();
        ctx.add_score(1, 40).unwrap();
        ctx.add_score(2, 40).unwrap();
        let names: Vec<&str> = ctx
            .standings()
            .iter()
            .map(|(p, _)| p.name.as_str())
            .collect();
        assert_eq!(names, ["bo", "cy", "ann"]);
        assert_eq!(ctx.scores(), &[-10, 40, 40]);
    }
}
