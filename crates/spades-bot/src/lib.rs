#![deny(warnings)]
pub mod bot;
pub mod driver;
pub mod policy;

pub use bot::{BotDifficulty, PlayPlanner, estimate_bid};
pub use driver::{TurnError, TurnOutcome, take_turn};
pub use policy::{HeuristicPolicy, Policy, PolicyContext};
