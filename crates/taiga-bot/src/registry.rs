//! The drill-down reaction registry.
//!
//! Each sent card binds `(message id, emoji)` pairs to drill-down
//! targets at attach time. The reaction handler looks the pair up
//! explicitly instead of capturing state in callbacks. Bindings are
//! in-memory only and live for the process lifetime.

use std::collections::HashMap;

use serenity::model::id::MessageId;
use tokio::sync::RwLock;

/// Reaction emoji for the director drill-down.
pub const DIRECTOR_REACTION: &str = "👉";
/// Reaction emoji for the original-creator drill-down.
pub const CREATOR_REACTION: &str = "👈";
/// Emoji pool cycled across a card's studios.
pub const STUDIO_REACTIONS: [&str; 2] = ["👇", "👆"];

/// Emoji assigned to the studio at index `i`.
pub fn studio_reaction(i: usize) -> &'static str {
    STUDIO_REACTIONS[i % STUDIO_REACTIONS.len()]
}

/// What a reaction on a sent card resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillTarget {
    Person { id: u64 },
    Studio { id: u64 },
}

#[derive(Debug, Default)]
pub struct DrillDownRegistry {
    bindings: RwLock<HashMap<(MessageId, String), DrillTarget>>,
}

impl DrillDownRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an emoji on a message to a target. A later binding for the
    /// same pair overwrites the earlier one (a card with more studios
    /// than pool emoji keeps the last binding per emoji).
    pub async fn bind(&self, message: MessageId, emoji: &str, target: DrillTarget) {
        self.bindings
            .write()
            .await
            .insert((message, emoji.to_string()), target);
    }

    pub async fn lookup(&self, message: MessageId, emoji: &str) -> Option<DrillTarget> {
        self.bindings
            .read()
            .await
            .get(&(message, emoji.to_string()))
            .copied()
    }
}
