use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::array;

pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 13;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealError {
    WrongDeckSize(usize),
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::WrongDeckSize(size) => {
                write!(f, "cannot deal {size} cards into 4 hands of {HAND_SIZE}")
            }
        }
    }
}

impl std::error::Error for DealError {}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the whole deck round-robin: card i goes to seat i mod 4.
    pub fn deal(&self) -> Result<[Hand; 4], DealError> {
        if self.cards.len() != DECK_SIZE {
            return Err(DealError::WrongDeckSize(self.cards.len()));
        }
        let mut piles: [Vec<Card>; 4] = array::from_fn(|_| Vec::with_capacity(HAND_SIZE));
        for (index, card) in self.cards.iter().enumerate() {
            piles[index % 4].push(*card);
        }
        Ok(piles.map(Hand::with_cards))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
