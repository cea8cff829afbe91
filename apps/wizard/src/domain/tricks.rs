use crate::domain::{hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Cards the holder may play, given the trick's leading suit so far.
///
/// Holding the leading suit restricts play to that suit; otherwise the whole
/// hand is legal. Returned sorted for stable presentation.
pub fn legal_moves(hand: &[Card], lead: Option<Suit>) -> Vec<Card> {
    let mut legal: Vec<Card> = match lead {
        Some(suit) if hand_has_suit(hand, suit) => {
            hand.iter().copied().filter(|c| c.is_suit(suit)).collect()
        }
        _ => hand.to_vec(),
    };
    legal.sort();
    legal
}

/// Validate a chosen card against the hand; returns its position in `hand`.
pub fn check_play(hand: &[Card], lead: Option<Suit>, card: Card) -> Result<usize, DomainError> {
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::illegal_move(
            IllegalMoveKind::CardNotInHand,
            format!("{card} is not in hand"),
        ));
    };

    if let Some(suit) = lead {
        if !card.is_suit(suit) && hand_has_suit(hand, suit) {
            return Err(DomainError::illegal_move(
                IllegalMoveKind::MustFollowSuit,
                format!("{card} played while holding {suit} on a {suit} lead"),
            ));
        }
    }

    Ok(pos)
}
