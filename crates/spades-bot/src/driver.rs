use crate::policy::{Policy, PolicyContext};
use core::fmt;
use spades_core::game::state::{BidError, GameState, Phase, PlayError, PlayOutcome};

/// What a computer turn did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Bid(u8),
    Played(PlayOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    /// The game is not waiting on any seat (round over or game over).
    NotAwaitingTurn(Phase),
    /// The policy had no card to offer, which means an empty hand mid-play.
    NoPlayAvailable,
    Bid(BidError),
    Play(PlayError),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::NotAwaitingTurn(phase) => {
                write!(f, "no seat is due to act while {phase}")
            }
            TurnError::NoPlayAvailable => write!(f, "policy produced no card to play"),
            TurnError::Bid(err) => write!(f, "{err}"),
            TurnError::Play(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for TurnError {}

/// Resolves the current seat's turn with the given policy: one bid while
/// bidding, one card while playing. The decision is applied atomically —
/// either the engine accepts it in full or the state is untouched.
pub fn take_turn(state: &mut GameState, policy: &mut dyn Policy) -> Result<TurnOutcome, TurnError> {
    let seat = state.current_seat();
    let player = state.player(seat);
    let ctx = PolicyContext {
        seat,
        hand: player.hand(),
        trick: state.trick(),
        bid: player.bid(),
        tricks_won: player.tricks_won(),
    };

    match state.phase() {
        Phase::Bidding => {
            let bid = policy.choose_bid(&ctx);
            state.submit_bid(seat, bid).map_err(TurnError::Bid)?;
            Ok(TurnOutcome::Bid(bid))
        }
        Phase::Playing => {
            let index = policy.choose_play(&ctx).ok_or(TurnError::NoPlayAvailable)?;
            let outcome = state.play_card(seat, index).map_err(TurnError::Play)?;
            Ok(TurnOutcome::Played(outcome))
        }
        phase => Err(TurnError::NotAwaitingTurn(phase)),
    }
}
