mod bid;
mod play;

pub use bid::estimate_bid;
pub use play::PlayPlanner;

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotDifficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for BotDifficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl BotDifficulty {
    /// Process-wide default, read once from `SPADES_BOT_DIFFICULTY`.
    pub fn from_env() -> Self {
        static CACHED: OnceLock<BotDifficulty> = OnceLock::new();
        *CACHED.get_or_init(|| match std::env::var("SPADES_BOT_DIFFICULTY") {
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "easy" => BotDifficulty::Easy,
                "medium" => BotDifficulty::Medium,
                "hard" => BotDifficulty::Hard,
                _ => BotDifficulty::default(),
            },
            Err(_) => BotDifficulty::default(),
        })
    }
}
