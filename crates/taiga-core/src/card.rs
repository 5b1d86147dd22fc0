//! The Card Renderer: a pure mapping from a [`Media`] record to the
//! display card the gateway layer turns into a rich embed.

use taiga_api::{Media, Person};

/// Embed accent color for media cards.
const CARD_COLOR: u32 = 0x00ff00;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A rendered, gateway-agnostic media card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub url: String,
    pub title: String,
    pub description: String,
    pub color: u32,
    pub thumbnail: Option<String>,
    pub fields: Vec<CardField>,
}

/// Render a media record into a card.
///
/// Pure and total: identical input yields identical output, and a
/// missing director or creator simply omits that field. Field order is
/// fixed: classification line, studios in source order, director,
/// original creator.
pub fn render(media: &Media) -> Card {
    let title = media
        .title
        .romaji
        .clone()
        .or_else(|| media.title.english.clone())
        .unwrap_or_else(|| "Unknown title".to_string());

    // The API marks line breaks with literal <br> tags; nothing else
    // in the description is touched.
    let description = media
        .description
        .as_deref()
        .unwrap_or_default()
        .replace("<br>", "\n");

    let thumbnail = media
        .cover_image
        .medium
        .clone()
        .or_else(|| media.cover_image.large.clone())
        .or_else(|| media.cover_image.extra_large.clone());

    let mut fields = vec![CardField {
        name: "Media Type".to_string(),
        value: classification_line(media),
        inline: false,
    }];

    for studio in &media.studios {
        fields.push(CardField {
            name: "Studio".to_string(),
            value: format!("[{}]({})", studio.name, studio.site_url),
            inline: false,
        });
    }

    if let Some(director) = media.director() {
        fields.push(CardField {
            name: "Director".to_string(),
            value: person_link(director),
            inline: true,
        });
    }
    if let Some(creator) = media.original_creator() {
        fields.push(CardField {
            name: "Original Creator".to_string(),
            value: person_link(creator),
            inline: true,
        });
    }

    Card {
        url: media.site_url.clone(),
        title,
        description,
        color: CARD_COLOR,
        thumbnail,
        fields,
    }
}

fn person_link(person: &Person) -> String {
    format!("[{}]({})", person.full_name(), person.site_url)
}

/// "ANIME TV MANGA"-style line; absent parts drop out of the join.
fn classification_line(media: &Media) -> String {
    [
        media.kind.map(|k| k.as_graphql()),
        media.format.as_deref(),
        media.source.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use taiga_api::model::{CoverImage, MediaTitle};
    use taiga_api::{MediaKind, StaffEdge, Studio};

    fn sample_media() -> Media {
        Media {
            site_url: "https://anilist.co/anime/16498".to_string(),
            title: MediaTitle {
                english: Some("Attack on Titan".to_string()),
                romaji: Some("Shingeki no Kyojin".to_string()),
            },
            description: Some("Walls.<br>Titans.<br>Despair.".to_string()),
            cover_image: CoverImage {
                extra_large: Some("xl.jpg".to_string()),
                large: Some("lg.jpg".to_string()),
                medium: Some("md.jpg".to_string()),
            },
            kind: Some(MediaKind::Anime),
            format: Some("TV".to_string()),
            source: Some("MANGA".to_string()),
            studios: vec![
                Studio {
                    id: 858,
                    name: "Wit Studio".to_string(),
                    site_url: "https://anilist.co/studio/858".to_string(),
                },
                Studio {
                    id: 6,
                    name: "MAPPA".to_string(),
                    site_url: "https://anilist.co/studio/6".to_string(),
                },
            ],
            staff: vec![
                StaffEdge {
                    role: "Director".to_string(),
                    person: Person {
                        id: 10237,
                        site_url: "https://anilist.co/staff/10237".to_string(),
                        first_name: "Tetsurou".to_string(),
                        last_name: "Araki".to_string(),
                    },
                },
                StaffEdge {
                    role: "Original Creator".to_string(),
                    person: Person {
                        id: 97215,
                        site_url: "https://anilist.co/staff/97215".to_string(),
                        first_name: "Hajime".to_string(),
                        last_name: "Isayama".to_string(),
                    },
                },
            ],
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let media = sample_media();
        assert_eq!(render(&media), render(&media));
    }

    #[test]
    fn test_field_order_is_fixed() {
        let card = render(&sample_media());
        let names: Vec<&str> = card.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Media Type", "Studio", "Studio", "Director", "Original Creator"]
        );
    }

    #[test]
    fn test_classification_line() {
        let card = render(&sample_media());
        assert_eq!(card.fields[0].value, "ANIME TV MANGA");
        assert!(!card.fields[0].inline);
    }

    #[test]
    fn test_classification_line_skips_missing_parts() {
        let mut media = sample_media();
        media.format = None;
        let card = render(&media);
        assert_eq!(card.fields[0].value, "ANIME MANGA");
    }

    #[test]
    fn test_director_field_iff_director_present() {
        let mut media = sample_media();
        assert!(render(&media).fields.iter().any(|f| f.name == "Director"));

        media.staff.retain(|e| e.role != "Director");
        let card = render(&media);
        assert!(!card.fields.iter().any(|f| f.name == "Director"));
        // Creator is untouched by the director's absence.
        assert!(card.fields.iter().any(|f| f.name == "Original Creator"));
    }

    #[test]
    fn test_person_fields_are_markdown_links() {
        let card = render(&sample_media());
        let director = card.fields.iter().find(|f| f.name == "Director").unwrap();
        assert_eq!(
            director.value,
            "[Tetsurou Araki](https://anilist.co/staff/10237)"
        );
        assert!(director.inline);
    }

    #[test]
    fn test_description_br_normalization() {
        let card = render(&sample_media());
        assert_eq!(card.description, "Walls.\nTitans.\nDespair.");
    }

    #[test]
    fn test_description_nothing_else_altered() {
        let mut media = sample_media();
        media.description = Some("a <b>bold</b> claim &amp; more".to_string());
        let card = render(&media);
        assert_eq!(card.description, "a <b>bold</b> claim &amp; more");
    }

    #[test]
    fn test_thumbnail_prefers_medium() {
        let mut media = sample_media();
        assert_eq!(render(&media).thumbnail.as_deref(), Some("md.jpg"));

        media.cover_image.medium = None;
        assert_eq!(render(&media).thumbnail.as_deref(), Some("lg.jpg"));

        media.cover_image.large = None;
        assert_eq!(render(&media).thumbnail.as_deref(), Some("xl.jpg"));

        media.cover_image.extra_large = None;
        assert_eq!(render(&media).thumbnail, None);
    }

    #[test]
    fn test_title_falls_back_to_english() {
        let mut media = sample_media();
        media.title.romaji = None;
        assert_eq!(render(&media).title, "Attack on Titan");

        media.title.english = None;
        assert_eq!(render(&media).title, "Unknown title");
    }

    #[test]
    fn test_render_total_on_empty_media() {
        let card = render(&Media::default());
        assert_eq!(card.title, "Unknown title");
        assert_eq!(card.fields.len(), 1);
        assert_eq!(card.fields[0].value, "");
    }
}
