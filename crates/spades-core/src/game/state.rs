use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::legality::is_valid_play;
use crate::model::score::{ScoreBoard, score_round};
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use crate::model::trick::{Trick, TrickError};
use core::fmt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

pub const MAX_BID: u8 = 13;
pub const WINNING_SCORE: i32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Bidding,
    Playing,
    Scoring,
    RoundOver,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Bidding => "bidding",
            Phase::Playing => "playing",
            Phase::Scoring => "scoring",
            Phase::RoundOver => "round over",
            Phase::GameOver => "game over",
        };
        f.write_str(label)
    }
}

/// One seat's per-round state.
#[derive(Debug, Clone)]
pub struct Player {
    seat: Seat,
    hand: Hand,
    bid: Option<u8>,
    tricks_won: u8,
    round_score: i32,
}

impl Player {
    fn new(seat: Seat, hand: Hand) -> Self {
        Self {
            seat,
            hand,
            bid: None,
            tricks_won: 0,
            round_score: 0,
        }
    }

    fn reset_for_round(&mut self, hand: Hand) {
        self.hand = hand;
        self.bid = None;
        self.tricks_won = 0;
        self.round_score = 0;
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn bid(&self) -> Option<u8> {
        self.bid
    }

    pub fn tricks_won(&self) -> u8 {
        self.tricks_won
    }

    pub fn round_score(&self) -> i32 {
        self.round_score
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidError {
    WrongPhase(Phase),
    OutOfTurn { expected: Seat, actual: Seat },
    OutOfRange(u8),
}

impl fmt::Display for BidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidError::WrongPhase(phase) => write!(f, "cannot bid while {phase}"),
            BidError::OutOfTurn { expected, actual } => {
                write!(f, "expected {expected} to bid next but got {actual}")
            }
            BidError::OutOfRange(bid) => write!(f, "bid {bid} is outside 0..={MAX_BID}"),
        }
    }
}

impl std::error::Error for BidError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    WrongPhase(Phase),
    OutOfTurn { expected: Seat, actual: Seat },
    NoSuchCard(usize),
    MustFollowSuit(Suit),
    Trick(TrickError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::WrongPhase(phase) => write!(f, "cannot play a card while {phase}"),
            PlayError::OutOfTurn { expected, actual } => {
                write!(f, "expected {expected} to play next but got {actual}")
            }
            PlayError::NoSuchCard(index) => write!(f, "no card at hand index {index}"),
            PlayError::MustFollowSuit(suit) => write!(f, "must follow the {suit} lead"),
            PlayError::Trick(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PlayError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    WrongPhase(Phase),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::WrongPhase(phase) => {
                write!(f, "cannot start the next round while {phase}")
            }
        }
    }
}

impl std::error::Error for RoundError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    TrickCompleted { winner: Seat },
    RoundCompleted { last_trick_winner: Seat },
}

/// The whole game: four players, the trick in progress, the phase
/// machine, and the cumulative match scores. The state machine is the
/// only mutator; every rejected action leaves the state untouched.
#[derive(Debug, Clone)]
pub struct GameState {
    players: [Player; 4],
    current_seat: Seat,
    phase: Phase,
    trick: Trick,
    round_number: u32,
    scores: ScoreBoard,
    winner: Option<Seat>,
    winning_score: i32,
    rng: StdRng,
    seed: u64,
}

impl GameState {
    /// Fresh match with a random deal.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Fresh match with a deterministic deal sequence.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let hands = deck.deal().expect("standard deck deals four hands");
        let mut seats = Seat::LOOP.iter();
        let players = hands.map(|hand| {
            let seat = *seats.next().expect("four seats for four hands");
            Player::new(seat, hand)
        });

        Self {
            players,
            current_seat: Seat::South,
            phase: Phase::Bidding,
            trick: Trick::new(),
            round_number: 1,
            scores: ScoreBoard::new(),
            winner: None,
            winning_score: WINNING_SCORE,
            rng,
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_seat(&self) -> Seat {
        self.current_seat
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 4] {
        &self.players
    }

    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn match_scores(&self) -> &[i32; 4] {
        self.scores.totals()
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn winning_score(&self) -> i32 {
        self.winning_score
    }

    /// Records one seat's bid. Seats bid in rotation starting at South;
    /// after the fourth bid the game enters the playing phase with South
    /// to lead.
    pub fn submit_bid(&mut self, seat: Seat, bid: u8) -> Result<(), BidError> {
        if self.phase != Phase::Bidding {
            return Err(BidError::WrongPhase(self.phase));
        }
        if seat != self.current_seat {
            return Err(BidError::OutOfTurn {
                expected: self.current_seat,
                actual: seat,
            });
        }
        if bid > MAX_BID {
            return Err(BidError::OutOfRange(bid));
        }

        self.players[seat.index()].bid = Some(bid);
        if seat == Seat::East {
            self.phase = Phase::Playing;
            self.current_seat = Seat::South;
        } else {
            self.current_seat = seat.next();
        }
        Ok(())
    }

    /// Plays the card at `index` from `seat`'s hand. Any rejected play is
    /// a pure no-op: wrong phase, out of turn, bad index, or breaking
    /// suit discipline while holding the lead suit. On the fourth card
    /// the trick is resolved, the winner leads next, and once every hand
    /// is empty the round is scored in the same transition.
    pub fn play_card(&mut self, seat: Seat, index: usize) -> Result<PlayOutcome, PlayError> {
        if self.phase != Phase::Playing {
            return Err(PlayError::WrongPhase(self.phase));
        }
        if seat != self.current_seat {
            return Err(PlayError::OutOfTurn {
                expected: self.current_seat,
                actual: seat,
            });
        }

        let hand = &self.players[seat.index()].hand;
        let card = hand.card_at(index).ok_or(PlayError::NoSuchCard(index))?;
        if !is_valid_play(card, hand, self.trick.lead_suit()) {
            let lead = self.trick.lead_suit().expect("lead suit set when following");
            return Err(PlayError::MustFollowSuit(lead));
        }

        // All checks passed; push first so a trick-level rejection cannot
        // leave the hand half-mutated.
        self.trick.push(seat, card).map_err(PlayError::Trick)?;
        self.players[seat.index()]
            .hand
            .remove_at(index)
            .expect("validated index is present");
        self.current_seat = seat.next();

        if !self.trick.is_complete() {
            return Ok(PlayOutcome::Played);
        }

        let winner = self.trick.winner().expect("complete trick has a winner").seat;
        self.players[winner.index()].tricks_won += 1;
        self.trick = Trick::new();
        self.current_seat = winner;

        if self.players.iter().all(|player| player.hand.is_empty()) {
            self.phase = Phase::Scoring;
            self.finish_round();
            return Ok(PlayOutcome::RoundCompleted {
                last_trick_winner: winner,
            });
        }

        Ok(PlayOutcome::TrickCompleted { winner })
    }

    /// Scores the finished round and settles the next phase: game over
    /// when a seat reaches the target, round over otherwise.
    fn finish_round(&mut self) {
        let bids = self
            .players
            .each_ref()
            .map(|player| player.bid.expect("all bids set before playing"));
        let tricks = self.players.each_ref().map(|player| player.tricks_won);
        let round_scores = score_round(bids, tricks);

        for (player, score) in self.players.iter_mut().zip(round_scores) {
            player.round_score = score;
        }
        self.scores.apply_round(round_scores);

        if let Some(winner) = self.scores.winner(self.winning_score) {
            self.winner = Some(winner);
            self.phase = Phase::GameOver;
        } else {
            self.phase = Phase::RoundOver;
        }
    }

    /// Advances past a finished round: fresh shuffle and deal, per-round
    /// fields cleared, round number bumped. Match scores persist.
    pub fn start_next_round(&mut self) -> Result<(), RoundError> {
        if self.phase != Phase::RoundOver {
            return Err(RoundError::WrongPhase(self.phase));
        }

        let deck = Deck::shuffled(&mut self.rng);
        let hands = deck.deal().expect("standard deck deals four hands");
        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.reset_for_round(hand);
        }
        self.trick = Trick::new();
        self.current_seat = Seat::South;
        self.phase = Phase::Bidding;
        self.round_number += 1;
        Ok(())
    }

    /// Cards dealt this round that are still in hands or on the table.
    /// Together with completed tricks this always accounts for 52.
    pub fn cards_accounted_for(&self) -> usize {
        let in_hands: usize = self.players.iter().map(|p| p.hand.len()).sum();
        let in_tricks: usize = self
            .players
            .iter()
            .map(|p| usize::from(p.tricks_won) * 4)
            .sum();
        in_hands + in_tricks + self.trick.len()
    }

    #[cfg(test)]
    pub(crate) fn scores_mut(&mut self) -> &mut ScoreBoard {
        &mut self.scores
    }

    #[cfg(test)]
    pub(crate) fn play_any_valid(&mut self) -> PlayOutcome {
        let seat = self.current_seat;
        let hand = &self.players[seat.index()].hand;
        let index = crate::model::legality::valid_moves(hand, self.trick.lead_suit())
            .into_iter()
            .next()
            .expect("current seat holds a legal card");
        self.play_card(seat, index).expect("legal play succeeds")
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
