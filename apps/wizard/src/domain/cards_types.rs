//! Core card-related types: Card, Rank, Suit

use serde::{Deserialize, Serialize};

/// Declaration order is the suit rank order; it only matters when two suits
/// have to be told apart for trump, never for cross-suit comparison.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

/// Jester sorts below every standard rank and Wizard above.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Rank {
    Jester,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Wizard,
}

impl Rank {
    /// The thirteen ranks that appear in every suit.
    pub const STANDARD: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn is_special(self) -> bool {
        matches!(self, Rank::Wizard | Rank::Jester)
    }
}

/// An immutable card value. Wizards and Jesters carry no suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Option<Suit>,
    pub rank: Rank,
}

impl Card {
    pub const WIZARD: Card = Card {
        suit: None,
        rank: Rank::Wizard,
    };

    pub const JESTER: Card = Card {
        suit: None,
        rank: Rank::Jester,
    };

    /// A standard suited card. Special ranks collapse to their suit-less form.
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        match rank {
            Rank::Wizard => Card::WIZARD,
            Rank::Jester => Card::JESTER,
            _ => Card {
                suit: Some(suit),
                rank,
            },
        }
    }

    pub fn is_wizard(&self) -> bool {
        self.rank == Rank::Wizard
    }

    pub fn is_jester(&self) -> bool {
        self.rank == Rank::Jester
    }

    pub fn is_special(&self) -> bool {
        self.rank.is_special()
    }

    pub fn is_suit(&self, suit: Suit) -> bool {
        self.suit == Some(suit)
    }
}

// Note: Ord on Card is only for stable sorting: suit-less cards first, then
// suit order C<D<H<S, then rank. Do not use for trick resolution.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_ranks_are_suitless() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Wizard), Card::WIZARD);
        assert_eq!(Card::new(Suit::Clubs, Rank::Jester), Card::JESTER);
        assert!(Card::WIZARD.suit.is_none());
        assert!(Card::JESTER.is_special());
        assert!(!Card::new(Suit::Spades, Rank::Ace).is_special());
    }

    #[test]
    fn jester_lowest_wizard_highest() {
        for rank in Rank::STANDARD {
            assert!(Rank::Jester < rank);
            assert!(rank < Rank::Wizard);
        }
    }

    #[test]
    fn sorting_groups_by_suit() {
        let mut hand = vec![
            Card::new(Suit::Spades, Rank::Two),
            Card::WIZARD,
            Card::new(Suit::Clubs, Rank::King),
            Card::JESTER,
            Card::new(Suit::Clubs, Rank::Three),
        ];
        hand.sort();
        assert_eq!(
            hand,
            vec![
                Card::JESTER,
                Card::WIZARD,
                Card::new(Suit::Clubs, Rank::Three),
                Card::new(Suit::Clubs, Rank::King),
                Card::new(Suit::Spades, Rank::Two),
            ]
        );
    }
}
