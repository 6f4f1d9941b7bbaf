use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::suit::Suit;

/// Indices of the cards a seat may legally play. Leading a trick makes
/// every card legal. Following, the lead suit must be followed when held;
/// a seat void in the lead suit may discard anything, trump included —
/// trump is never forced.
pub fn valid_moves(hand: &Hand, lead_suit: Option<Suit>) -> Vec<usize> {
    let Some(lead) = lead_suit else {
        return (0..hand.len()).collect();
    };

    if hand.has_suit(lead) {
        hand.iter()
            .enumerate()
            .filter(|(_, card)| card.suit == lead)
            .map(|(index, _)| index)
            .collect()
    } else {
        (0..hand.len()).collect()
    }
}

/// The same rule as [`valid_moves`], expressed as a predicate over one
/// candidate card. Used as the state machine's play guard.
pub fn is_valid_play(card: Card, hand: &Hand, lead_suit: Option<Suit>) -> bool {
    let Some(lead) = lead_suit else {
        return true;
    };

    if hand.has_suit(lead) {
        card.suit == lead
    } else {
        true
    }
}
