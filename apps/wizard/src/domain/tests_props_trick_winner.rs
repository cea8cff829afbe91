use proptest::prelude::*;

/// Property-based tests for trick winner resolution
use crate::domain::test_gens;
use crate::domain::{leading_suit, winning_play_index, Card};

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    /// Property: without a Wizard, the winner is trump if any trump was played,
    /// else of the leading suit; cards of neither suit never win.
    #[test]
    fn prop_winner_is_trump_or_lead(
        cards in test_gens::trick_cards_without_wizard(),
        trump in test_gens::trump(),
    ) {
        prop_assume!(!cards.iter().all(Card::is_jester));
        let lead = leading_suit(&cards);

        let idx = winning_play_index(&cards, trump, lead).unwrap();
        let winner = cards[idx];

        let trumps: Vec<&Card> = cards.iter().filter(|c| trump.is_some() && c.suit == trump).collect();
        if !trumps.is_empty() {
            prop_assert_eq!(winner.suit, trump, "trump must win when trump was played");
            for c in trumps {
                prop_assert!(winner.rank >= c.rank);
            }
        } else {
            prop_assert_eq!(winner.suit, lead, "leading suit must win without trump");
            for c in cards.iter().filter(|c| c.suit == lead) {
                prop_assert!(winner.rank >= c.rank);
            }
        }
        prop_assert!(!winner.is_jester());
    }

    /// Property: the earliest Wizard wins regardless of everything else.
    #[test]
    fn prop_first_wizard_wins(
        mut cards in test_gens::trick_cards(),
        at in 0usize..6,
        trump in test_gens::trump(),
    ) {
        let at = at.min(cards.len());
        cards.insert(at, Card::WIZARD);
        let first = cards.iter().position(Card::is_wizard).unwrap();

        let idx = winning_play_index(&cards, trump, leading_suit(&cards)).unwrap();
        prop_assert_eq!(idx, first);
    }

    /// Property: an all-Jester trick goes to the first Jester.
    #[test]
    fn prop_all_jesters_first_wins(n in 1usize..=6, trump in test_gens::trump()) {
        let cards = vec![Card::JESTER; n];
        prop_assert_eq!(winning_play_index(&cards, trump, None).unwrap(), 0);
    }

    /// Property: the winner is always one of the trick's plays.
    #[test]
    fn prop_winner_in_range(cards in test_gens::trick_cards(), trump in test_gens::trump()) {
        let idx = winning_play_index(&cards, trump, leading_suit(&cards)).unwrap();
        prop_assert!(idx < cards.len());
    }
}
