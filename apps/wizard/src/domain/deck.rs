//! Deck construction, shuffling and sequential draws.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

pub const DEFAULT_WIZARDS: u8 = 4;
pub const DEFAULT_JESTERS: u8 = 4;

/// Ordered cards; the top of the deck is the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Every suit × standard rank, then `wizards` Wizards and `jesters` Jesters.
    pub fn new(wizards: u8, jesters: u8) -> Self {
        let mut cards = Vec::with_capacity(Self::size_for(wizards, jesters));
        for suit in Suit::ALL {
            for rank in Rank::STANDARD {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.extend(std::iter::repeat(Card::WIZARD).take(wizards as usize));
        cards.extend(std::iter::repeat(Card::JESTER).take(jesters as usize));
        Self { cards }
    }

    /// The 60-card Wizard deck: 52 standard cards, 4 Wizards, 4 Jesters.
    pub fn standard() -> Self {
        Self::new(DEFAULT_WIZARDS, DEFAULT_JESTERS)
    }

    /// Size of a freshly built deck with this composition.
    pub fn size_for(wizards: u8, jesters: u8) -> usize {
        Suit::ALL.len() * Rank::STANDARD.len() + wizards as usize + jesters as usize
    }

    /// Uniform Fisher-Yates permutation in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Shuffle deterministically from a seed.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    pub fn pop_top(&mut self) -> Result<Card, DomainError> {
        self.cards.pop().ok_or(DomainError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn standard_deck_composition() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 60);
        assert_eq!(Deck::size_for(4, 4), 60);
        assert_eq!(deck.cards().iter().filter(|c| c.is_wizard()).count(), 4);
        assert_eq!(deck.cards().iter().filter(|c| c.is_jester()).count(), 4);

        let suited: HashSet<Card> = deck
            .cards()
            .iter()
            .copied()
            .filter(|c| !c.is_special())
            .collect();
        assert_eq!(suited.len(), 52, "every suited card appears exactly once");
    }

    #[test]
    fn custom_special_counts() {
        let deck = Deck::new(2, 0);
        assert_eq!(deck.len(), 54);
        assert!(deck.cards().iter().all(|c| !c.is_jester()));
    }

    #[test]
    fn pop_top_drains_then_fails() {
        let mut deck = Deck::new(0, 0);
        let top = *deck.cards().last().unwrap();
        assert_eq!(deck.pop_top().unwrap(), top);
        assert_eq!(deck.len(), 51);
        for _ in 0..51 {
            deck.pop_top().unwrap();
        }
        assert!(deck.is_empty());
        assert_eq!(deck.pop_top(), Err(DomainError::EmptyDeck));
    }

    #[test]
    fn seeded_shuffle_is_deterministic() {
        let mut a = Deck::standard();
        let mut b = Deck::standard();
        a.shuffle_with_seed(12345);
        b.shuffle_with_seed(12345);
        assert_eq!(a, b);

        let mut c = Deck::standard();
        c.shuffle_with_seed(54321);
        assert_ne!(a, c);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut deck = Deck::standard();
        deck.shuffle_with_seed(42);
        let mut shuffled = deck.cards().to_vec();
        let mut original = Deck::standard().cards().to_vec();
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }
}
