use super::{Policy, PolicyContext};
use crate::bot::{BotDifficulty, PlayPlanner, estimate_bid};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, event};

/// The standard computer opponent: the shared bid estimator plus the
/// tier-dependent card planner. Owns its rng so the easy tier can be
/// replayed from a fixed seed in tests.
pub struct HeuristicPolicy {
    difficulty: BotDifficulty,
    rng: StdRng,
}

impl HeuristicPolicy {
    pub fn new(difficulty: BotDifficulty) -> Self {
        Self::with_seed(difficulty, rand::random())
    }

    pub fn with_seed(difficulty: BotDifficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn easy() -> Self {
        Self::new(BotDifficulty::Easy)
    }

    pub fn medium() -> Self {
        Self::new(BotDifficulty::Medium)
    }

    pub fn hard() -> Self {
        Self::new(BotDifficulty::Hard)
    }

    pub fn difficulty(&self) -> BotDifficulty {
        self.difficulty
    }
}

impl Policy for HeuristicPolicy {
    fn choose_bid(&mut self, ctx: &PolicyContext) -> u8 {
        let bid = estimate_bid(ctx.hand);
        log_bid_decision(ctx, self.difficulty, bid);
        bid
    }

    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<usize> {
        let index = PlayPlanner::choose(
            ctx.hand,
            ctx.trick,
            ctx.bid.unwrap_or(0),
            ctx.tricks_won,
            self.difficulty,
            &mut self.rng,
        )?;
        log_play_decision(ctx, self.difficulty, index);
        Some(index)
    }
}

fn log_bid_decision(ctx: &PolicyContext, difficulty: BotDifficulty, bid: u8) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }
    event!(
        target: "spades_bot::bid",
        Level::INFO,
        seat = %ctx.seat,
        difficulty = ?difficulty,
        hand_size = ctx.hand.len(),
        bid,
    );
}

fn log_play_decision(ctx: &PolicyContext, difficulty: BotDifficulty, index: usize) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }
    let chosen = ctx
        .hand
        .card_at(index)
        .map(|card| card.to_string())
        .unwrap_or_default();
    event!(
        target: "spades_bot::play",
        Level::INFO,
        seat = %ctx.seat,
        difficulty = ?difficulty,
        hand_size = ctx.hand.len(),
        trick_len = ctx.trick.len(),
        lead_suit = ?ctx.trick.lead_suit(),
        needs_tricks = ctx.tricks_won < ctx.bid.unwrap_or(0),
        chosen = %chosen,
    );
}
