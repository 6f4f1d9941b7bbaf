use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

/// One trick in progress: up to four plays, one per seat. The lead suit
/// is fixed by the first play.
#[derive(Debug, Clone, Default)]
pub struct Trick {
    plays: Vec<Play>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickError {
    Complete,
    SeatAlreadyPlayed(Seat),
}

impl fmt::Display for TrickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrickError::Complete => write!(f, "trick already has four plays"),
            TrickError::SeatAlreadyPlayed(seat) => {
                write!(f, "{seat} has already played this trick")
            }
        }
    }
}

impl std::error::Error for TrickError {}

impl Trick {
    pub fn new() -> Self {
        Self {
            plays: Vec::with_capacity(4),
        }
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|play| play.card.suit)
    }

    pub fn push(&mut self, seat: Seat, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::Complete);
        }
        if self.plays.iter().any(|play| play.seat == seat) {
            return Err(TrickError::SeatAlreadyPlayed(seat));
        }
        self.plays.push(Play { seat, card });
        Ok(())
    }

    /// The play currently winning the trick. Evaluated left to right:
    /// trump beats non-trump, higher trump beats lower trump, and a
    /// lead-suit card beats only a lower lead-suit card. An off-suit
    /// non-trump card never wins.
    pub fn current_winner(&self) -> Option<&Play> {
        let lead = self.lead_suit()?;
        let mut best = self.plays.first()?;
        for play in &self.plays[1..] {
            if beats(play.card, best.card, lead) {
                best = play;
            }
        }
        Some(best)
    }

    /// The winning play once all four cards are down; `None` before that.
    pub fn winner(&self) -> Option<&Play> {
        if self.is_complete() {
            self.current_winner()
        } else {
            None
        }
    }

    /// Whether playing `card` now would take the lead. Trivially true on
    /// an empty trick.
    pub fn would_win(&self, card: Card) -> bool {
        match self.current_winner() {
            Some(best) => beats(card, best.card, self.lead_suit().unwrap_or(card.suit)),
            None => true,
        }
    }
}

/// Trump/lead-suit precedence for a candidate against the current best.
/// The current best is always trump or of the lead suit.
fn beats(candidate: Card, best: Card, lead: Suit) -> bool {
    if candidate.is_trump() {
        !best.is_trump() || candidate.rank > best.rank
    } else if candidate.suit == lead {
        !best.is_trump() && best.suit == lead && candidate.rank > best.rank
    } else {
        false
    }
}
