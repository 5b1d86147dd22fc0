mod embed;
mod handler;
mod registry;
mod send;
mod state;

use std::sync::Arc;

use clap::Parser;
use serenity::prelude::GatewayIntents;
use tracing::error;

use crate::handler::Handler;
use crate::state::BotState;

/// AniList lookup bot for Discord.
///
/// Explicit lookups: `!taiga [anime|manga] <id|title|person|studio> <args...>`.
/// Implicit lookups: any `{anime title}` or `<manga title>` span in a
/// message. Sent cards carry reaction affordances that drill down by
/// director, original creator, or studio.
#[derive(Debug, Parser)]
#[command(name = "taiga", version, about)]
struct Args {
    /// Discord bot token.
    #[arg(short, long, env = "DISCORD_TOKEN")]
    token: String,

    /// Command prefix for explicit lookups.
    #[arg(long, default_value = "!taiga")]
    prefix: String,

    /// Disable implicit {anime} / <manga> mention scanning.
    #[arg(long)]
    no_inline: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("taiga=info")),
        )
        .init();

    let args = Args::parse();
    let state = Arc::new(BotState::new(&args.prefix, !args.no_inline));

    let intents = GatewayIntents::non_privileged()
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let mut client = match serenity::Client::builder(&args.token, intents)
        .event_handler(Handler::new(state))
        .await
    {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "failed to build Discord client");
            std::process::exit(1);
        }
    };

    if let Err(err) = client.start().await {
        error!(error = %err, "Discord client stopped");
        std::process::exit(1);
    }
}
