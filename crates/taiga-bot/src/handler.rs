//! The Message Router: serenity event callbacks for messages and
//! drill-down reactions. Errors never escape a handler; each failure
//! is logged and terminates only the event that caused it.

use std::sync::Arc;

use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::gateway::ActivityData;
use serenity::model::channel::{Message, Reaction, ReactionType};
use serenity::model::gateway::Ready;
use taiga_api::{EntityRef, MediaQuery};
use taiga_core::{parse_command, scan_mentions};
use tracing::{error, info};

use crate::registry::DrillTarget;
use crate::send::resolve_and_send;
use crate::state::BotState;

/// Media fetched per drill-down activation.
const DRILL_DOWN_MAX_RESULTS: u32 = 3;

pub struct Handler {
    state: Arc<BotState>,
}

impl Handler {
    pub fn new(state: Arc<BotState>) -> Self {
        Self { state }
    }

    /// Explicit command path. Queries run sequentially; a parse failure
    /// is reported back to the channel and drops the request.
    async fn run_command(&self, ctx: &Context, msg: &Message, body: &str) {
        let queries = match parse_command(body) {
            Ok(queries) => queries,
            Err(err) => {
                info!(error = %err, "rejecting malformed command");
                let reply = format!("Could not parse that request: {err}");
                if let Err(send_err) = msg.channel_id.say(&ctx.http, reply).await {
                    error!(error = %send_err, "failed to report command error");
                }
                return;
            }
        };

        for query in queries {
            resolve_and_send(&self.state, &ctx.http, msg.channel_id, &query).await;
        }
    }

    /// Implicit path: one independent task per inline mention, so
    /// unrelated mentions resolve in parallel with no ordering
    /// guarantee between their cards.
    fn spawn_mention_lookups(&self, ctx: &Context, msg: &Message) {
        for query in scan_mentions(&msg.content) {
            let state = Arc::clone(&self.state);
            let http = Arc::clone(&ctx.http);
            let channel = msg.channel_id;
            tokio::spawn(async move {
                resolve_and_send(&state, &http, channel, &query).await;
            });
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "connected to Discord");
        let _ = self.state.bot_user.set(ready.user.id);
        ctx.set_activity(Some(ActivityData::watching("anilist")));
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        if let Some(body) = msg.content.strip_prefix(&self.state.prefix) {
            self.run_command(&ctx, &msg, body).await;
        } else if self.state.inline_mentions {
            self.spawn_mention_lookups(&ctx, &msg);
        }
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        // The bot seeds the affordances itself; skip those events.
        if reaction.user_id.is_some() && reaction.user_id == self.state.bot_user.get().copied() {
            return;
        }
        let ReactionType::Unicode(emoji) = &reaction.emoji else {
            return;
        };
        let Some(target) = self
            .state
            .registry
            .lookup(reaction.message_id, emoji)
            .await
        else {
            return;
        };

        let query = match target {
            DrillTarget::Person { id } => MediaQuery::ByPerson {
                person: EntityRef::id(id),
                kind: None,
                max_results: DRILL_DOWN_MAX_RESULTS,
            },
            DrillTarget::Studio { id } => MediaQuery::ByStudio {
                studio: EntityRef::id(id),
                max_results: DRILL_DOWN_MAX_RESULTS,
            },
        };

        // Each activation runs independently; simultaneous reactions on
        // the same or different cards never share state.
        let state = Arc::clone(&self.state);
        let http = Arc::clone(&ctx.http);
        let channel = reaction.channel_id;
        tokio::spawn(async move {
            resolve_and_send(&state, &http, channel, &query).await;
        });
    }
}
