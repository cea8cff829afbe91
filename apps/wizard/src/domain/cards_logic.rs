//! Card game logic: suits in hands, leading suit, and trick winner resolution.

use super::cards_types::{Card, Suit};
use crate::errors::domain::DomainError;

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.is_suit(suit))
}

/// Suit of the first suited card played. Jesters and Wizards never set it.
pub fn leading_suit(cards_played: &[Card]) -> Option<Suit> {
    cards_played.iter().find_map(|c| c.suit)
}

/// Index (in play order) of the card that wins the trick.
///
/// 1. The first Wizard played wins outright.
/// 2. A trick made only of Jesters goes to the first Jester.
/// 3. Otherwise Jesters drop out; the highest trump wins, else the highest
///    card of the leading suit. Cards of neither suit cannot win.
pub fn winning_play_index(
    cards_played: &[Card],
    trump: Option<Suit>,
    lead: Option<Suit>,
) -> Result<usize, DomainError> {
    if cards_played.is_empty() {
        return Err(DomainError::invalid_argument(
            "cannot resolve a trick with no cards played",
        ));
    }

    if let Some(idx) = cards_played.iter().position(Card::is_wizard) {
        return Ok(idx);
    }

    if cards_played.iter().all(Card::is_jester) {
        return Ok(0);
    }

    for suit in [trump, lead].into_iter().flatten() {
        if let Some(idx) = highest_of_suit(cards_played, suit)? {
            return Ok(idx);
        }
    }

    Err(DomainError::internal(format!(
        "no trump or leading-suit card among plays (trump={trump:?}, lead={lead:?})"
    )))
}

/// The winning card itself; see [`winning_play_index`].
pub fn calc_winning_card(
    cards_played: &[Card],
    trump: Option<Suit>,
    lead: Option<Suit>,
) -> Result<Card, DomainError> {
    let idx = winning_play_index(cards_played, trump, lead)?;
    Ok(cards_played[idx])
}

fn highest_of_suit(cards: &[Card], suit: Suit) -> Result<Option<usize>, DomainError> {
    let mut best: Option<usize> = None;
    for (idx, card) in cards.iter().enumerate() {
        if !card.is_suit(suit) {
            continue;
        }
        match best {
            None => best = Some(idx),
            Some(b) if card.rank > cards[b].rank => best = Some(idx),
            Some(b) if card.rank == cards[b].rank => {
                return Err(DomainError::internal(format!(
                    "duplicate card {card} at plays {b} and {idx}"
                )));
            }
            Some(_) => {}
        }
    }
    Ok(best)
}
