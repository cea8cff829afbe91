use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::{Card, Deck};

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    /// Property: a seeded shuffle is a permutation of the unshuffled deck.
    #[test]
    fn prop_shuffle_preserves_composition(seed in any::<u64>(), wizards in 0u8..=8, jesters in 0u8..=8) {
        let fresh = Deck::new(wizards, jesters);
        let mut shuffled = fresh.clone();
        shuffled.shuffle_with_seed(seed);

        prop_assert_eq!(shuffled.len(), Deck::size_for(wizards, jesters));
        let mut a: Vec<Card> = fresh.cards().to_vec();
        let mut b: Vec<Card> = shuffled.cards().to_vec();
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    /// Property: drawing the whole deck yields exactly its cards, then EmptyDeck.
    #[test]
    fn prop_pop_top_drains_in_order(seed in any::<u64>()) {
        let mut deck = Deck::standard();
        deck.shuffle_with_seed(seed);
        let expected: Vec<Card> = deck.cards().iter().rev().copied().collect();
        let mut drawn = Vec::new();
        while let Ok(card) = deck.pop_top() {
            drawn.push(card);
        }
        prop_assert_eq!(drawn, expected);
        prop_assert!(deck.is_empty());
    }
}
