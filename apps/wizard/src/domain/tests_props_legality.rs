use proptest::prelude::*;

/// Property-based tests for follow-suit legality
use crate::domain::test_gens;
use crate::domain::tricks::{check_play, legal_moves};
use crate::domain::hand_has_suit;

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    /// Property: holding the leading suit, only that suit is legal.
    #[test]
    fn prop_follow_suit_enforced(hand in test_gens::hand(), lead in test_gens::trump()) {
        let legal = legal_moves(&hand, lead);
        prop_assert!(!legal.is_empty());
        for card in &legal {
            prop_assert!(hand.contains(card), "legal move {} not in hand", card);
        }
        match lead {
            Some(suit) if hand_has_suit(&hand, suit) => {
                prop_assert!(legal.iter().all(|c| c.is_suit(suit)));
            }
            _ => prop_assert_eq!(legal.len(), hand.len()),
        }
    }

    /// Property: check_play accepts exactly the legal moves.
    #[test]
    fn prop_check_play_agrees_with_legal_moves(hand in test_gens::hand(), lead in test_gens::trump()) {
        let legal = legal_moves(&hand, lead);
        for card in &hand {
            prop_assert_eq!(check_play(&hand, lead, *card).is_ok(), legal.contains(card));
        }
    }
}
