use serenity::builder::CreateEmbed;
use taiga_core::Card;

/// Convert a rendered card into a serenity embed.
pub fn card_embed(card: &Card) -> CreateEmbed {
    let mut builder = CreateEmbed::new()
        .title(&card.title)
        .url(&card.url)
        .description(&card.description)
        .colour(card.color);

    if let Some(thumbnail) = &card.thumbnail {
        builder = builder.thumbnail(thumbnail);
    }
    for field in &card.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }
    builder
}
