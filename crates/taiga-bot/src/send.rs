//! Outbound side of the pipeline: resolve queries, post cards, and
//! attach the drill-down reaction affordances.

use std::sync::Arc;

use serenity::builder::CreateMessage;
use serenity::http::Http;
use serenity::model::channel::ReactionType;
use serenity::model::id::{ChannelId, MessageId};
use taiga_api::{Media, MediaQuery};
use tracing::{error, warn};

use crate::embed::card_embed;
use crate::registry::{
    studio_reaction, DrillTarget, CREATOR_REACTION, DIRECTOR_REACTION,
};
use crate::state::BotState;

/// Resolve one query and send one card per result. Any failure is
/// logged and terminates only this lookup.
pub async fn resolve_and_send(
    state: &Arc<BotState>,
    http: &Arc<Http>,
    channel: ChannelId,
    query: &MediaQuery,
) {
    match state.anilist.resolve(query).await {
        Ok(results) => {
            for media in results {
                if let Err(err) = send_card(state, http, channel, &media).await {
                    error!(error = %err, "failed to send media card");
                }
            }
        }
        Err(err) => error!(error = %err, ?query, "media lookup failed"),
    }
}

/// Send one media card and wire up its drill-down reactions. Every
/// sent card is itself drill-down eligible, so reaction-triggered
/// lookups recurse naturally through new reaction events.
pub async fn send_card(
    state: &Arc<BotState>,
    http: &Arc<Http>,
    channel: ChannelId,
    media: &Media,
) -> Result<(), serenity::Error> {
    let card = taiga_core::render(media);
    let message = channel
        .send_message(http, CreateMessage::new().embed(card_embed(&card)))
        .await?;

    if let Some(director) = media.director() {
        attach(
            state,
            http,
            channel,
            message.id,
            DIRECTOR_REACTION,
            DrillTarget::Person { id: director.id },
        )
        .await;
    }
    if let Some(creator) = media.original_creator() {
        attach(
            state,
            http,
            channel,
            message.id,
            CREATOR_REACTION,
            DrillTarget::Person { id: creator.id },
        )
        .await;
    }
    for (i, studio) in media.studios.iter().enumerate() {
        attach(
            state,
            http,
            channel,
            message.id,
            studio_reaction(i),
            DrillTarget::Studio { id: studio.id },
        )
        .await;
    }

    Ok(())
}

/// Register the binding, then seed the reaction so users can see the
/// affordance. A failed reaction-add keeps the binding: the user can
/// still react manually.
async fn attach(
    state: &Arc<BotState>,
    http: &Arc<Http>,
    channel: ChannelId,
    message: MessageId,
    emoji: &str,
    target: DrillTarget,
) {
    state.registry.bind(message, emoji, target).await;

    let reaction = ReactionType::Unicode(emoji.to_string());
    if let Err(err) = http.create_reaction(channel, message, &reaction).await {
        warn!(%channel, %message, error = %err, "failed to seed drill-down reaction");
    }
}
