mod heuristic;

pub use heuristic::HeuristicPolicy;

use spades_core::model::hand::Hand;
use spades_core::model::seat::Seat;
use spades_core::model::trick::Trick;

/// Read-only view of everything a computer seat may consider: its own
/// hand and bid progress plus the public trick. Opponents' hands are
/// deliberately absent.
pub struct PolicyContext<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub trick: &'a Trick,
    pub bid: Option<u8>,
    pub tricks_won: u8,
}

/// Decision seam for a computer seat.
pub trait Policy: Send {
    /// Choose a bid during the bidding phase.
    fn choose_bid(&mut self, ctx: &PolicyContext) -> u8;

    /// Choose the hand index to play, or `None` when no card remains.
    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<usize>;
}
