use spades_core::model::card::Card;
use spades_core::model::hand::Hand;
use spades_core::model::rank::Rank;

/// Estimates expected tricks for a hand: every spade is worth a
/// rank-scaled weight up to 1.0 for the ace, every other card a smaller
/// one up to 0.8. The floored sum is clamped into 1..=13 — the estimator
/// never bids nil. Shared by every difficulty tier.
pub fn estimate_bid(hand: &Hand) -> u8 {
    let score: f64 = hand.iter().copied().map(card_value).sum();
    (score.floor() as i64).clamp(1, 13) as u8
}

fn card_value(card: Card) -> f64 {
    if card.is_trump() {
        spade_value(card.rank)
    } else {
        off_suit_value(card.rank)
    }
}

fn spade_value(rank: Rank) -> f64 {
    match rank {
        Rank::Ace => 1.0,
        Rank::King => 0.9,
        Rank::Queen => 0.8,
        Rank::Jack => 0.7,
        Rank::Ten | Rank::Nine | Rank::Eight => 0.6,
        _ => 0.4,
    }
}

fn off_suit_value(rank: Rank) -> f64 {
    match rank {
        Rank::Ace => 0.8,
        Rank::King => 0.6,
        Rank::Queen => 0.4,
        Rank::Jack => 0.2,
        _ => 0.1,
    }
}
