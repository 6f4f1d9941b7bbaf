use crate::model::card::Card;
use crate::model::suit::Suit;

/// Cards held by one seat, kept in display order: suit group
/// (spades, hearts, diamonds, clubs), then rank descending. The order
/// is cosmetic; legality depends only on suit membership.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit == suit)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn sort(&mut self) {
        self.cards
            .sort_by(|a, b| a.suit.cmp(&b.suit).then(b.rank.cmp(&a.rank)));
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn cards_sort_by_suit_group_then_rank_descending() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ]);
        let ordered: Vec<_> = hand.iter().copied().collect();
        assert_eq!(ordered[0], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(ordered[1], Card::new(Rank::King, Suit::Hearts));
        assert_eq!(ordered[2], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(ordered[3], Card::new(Rank::Two, Suit::Clubs));
    }

    #[test]
    fn remove_at_returns_the_card() {
        let mut hand = Hand::with_cards(vec![
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Diamonds),
        ]);
        let removed = hand.remove_at(0);
        assert_eq!(removed, Some(Card::new(Rank::Nine, Suit::Diamonds)));
        assert_eq!(hand.len(), 1);
        assert_eq!(hand.remove_at(5), None);
    }

    #[test]
    fn has_suit_checks_membership() {
        let hand = Hand::with_cards(vec![Card::new(Rank::Four, Suit::Hearts)]);
        assert!(hand.has_suit(Suit::Hearts));
        assert!(!hand.has_suit(Suit::Spades));
    }
}
