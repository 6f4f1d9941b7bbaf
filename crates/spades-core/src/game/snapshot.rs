use crate::game::state::{GameState, Phase};
use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::trick::Play;
use serde::{Deserialize, Serialize};
use std::array;

/// Read-only projection of a [`GameState`] for a presentation layer:
/// everything a table view needs, with seat attribution on the trick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub seed: u64,
    pub round_number: u32,
    pub phase: Phase,
    pub current_seat: Seat,
    pub hands: [Vec<Card>; 4],
    pub bids: [Option<u8>; 4],
    pub tricks_won: [u8; 4],
    pub round_scores: [i32; 4],
    pub trick: Vec<Play>,
    pub match_scores: [i32; 4],
    pub winner: Option<Seat>,
    pub winning_score: i32,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = |i: usize| state.player(Seat::from_index(i).expect("index below four"));
        GameSnapshot {
            seed: state.seed(),
            round_number: state.round_number(),
            phase: state.phase(),
            current_seat: state.current_seat(),
            hands: array::from_fn(|i| player(i).hand().cards().to_vec()),
            bids: array::from_fn(|i| player(i).bid()),
            tricks_won: array::from_fn(|i| player(i).tricks_won()),
            round_scores: array::from_fn(|i| player(i).round_score()),
            trick: state.trick().plays().to_vec(),
            match_scores: *state.match_scores(),
            winner: state.winner(),
            winning_score: state.winning_score(),
        }
    }

    pub fn to_json(state: &GameState) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self::capture(state))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
