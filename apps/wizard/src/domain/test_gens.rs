// Proptest generators for domain types.
// Cards are drawn from a seeded shuffle of a real deck so suited cards stay unique.

use proptest::prelude::*;

use crate::domain::{Card, Deck, Suit};

pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Trump suit, or none (special card turned up / deck exhausted)
pub fn trump() -> impl Strategy<Value = Option<Suit>> {
    prop::option::of(suit())
}

fn dealt(seed: u64, count: usize, keep: impl Fn(&Card) -> bool) -> Vec<Card> {
    let mut deck = Deck::standard();
    deck.shuffle_with_seed(seed);
    deck.cards().iter().copied().filter(keep).take(count).collect()
}

/// 1..=6 cards as they might land in a trick, specials included
pub fn trick_cards() -> impl Strategy<Value = Vec<Card>> {
    (any::<u64>(), 1usize..=6).prop_map(|(seed, n)| dealt(seed, n, |_| true))
}

/// 1..=6 cards with no Wizard among them
pub fn trick_cards_without_wizard() -> impl Strategy<Value = Vec<Card>> {
    (any::<u64>(), 1usize..=6).prop_map(|(seed, n)| dealt(seed, n, |c| !c.is_wizard()))
}

/// A hand of 1..=15 cards
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    (any::<u64>(), 1usize..=15).prop_map(|(seed, n)| dealt(seed, n, |_| true))
}
