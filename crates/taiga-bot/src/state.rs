use std::sync::OnceLock;

use serenity::model::id::UserId;
use taiga_api::AniListClient;

use crate::registry::DrillDownRegistry;

/// Process-wide dependencies, constructed once in `main` and injected
/// into the event handler behind an `Arc`. No hidden globals.
pub struct BotState {
    pub anilist: AniListClient,
    pub registry: DrillDownRegistry,
    /// Command prefix including its trailing space, e.g. `"!taiga "`.
    pub prefix: String,
    pub inline_mentions: bool,
    /// Our own gateway identity, set once on the ready event.
    pub bot_user: OnceLock<UserId>,
}

impl BotState {
    pub fn new(prefix: &str, inline_mentions: bool) -> Self {
        Self {
            anilist: AniListClient::new(),
            registry: DrillDownRegistry::new(),
            prefix: format!("{} ", prefix.trim_end()),
            inline_mentions,
            bot_user: OnceLock::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_always_carries_one_trailing_space() {
        assert_eq!(BotState::new("!taiga", true).prefix, "!taiga ");
        assert_eq!(BotState::new("!taiga ", true).prefix, "!taiga ");
    }
}
