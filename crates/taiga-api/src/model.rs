//! Service-agnostic domain types.
//!
//! A [`Media`] value is constructed once from an API response, is
//! immutable afterwards, and only lives for the duration of one
//! render/dispatch cycle. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Staff role string AniList uses for a show's director.
pub const DIRECTOR_ROLE: &str = "Director";
/// Staff role string AniList uses for the original creator of a work.
pub const ORIGINAL_CREATOR_ROLE: &str = "Original Creator";

/// The anime-vs-manga filter applied to a query. Carried as
/// `Option<MediaKind>` wherever "either" is a valid answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Anime,
    Manga,
}

impl MediaKind {
    /// The AniList GraphQL `MediaType` enum value.
    pub fn as_graphql(self) -> &'static str {
        match self {
            Self::Anime => "ANIME",
            Self::Manga => "MANGA",
        }
    }

    pub fn from_graphql(value: &str) -> Option<Self> {
        match value {
            "ANIME" => Some(Self::Anime),
            "MANGA" => Some(Self::Manga),
            _ => None,
        }
    }
}

/// Result ordering for title searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSort {
    /// Plain search-relevance order, up to `max_results` hits.
    Relevance,
    /// Prefer an exact romaji/english match among the top relevance
    /// results, falling back to the single most popular hit.
    ExactMatchFirst,
}

/// Identifies a person or studio by AniList id or by name.
///
/// Exactly one of the two fields should be set; a reference with
/// neither is a caller error the client rejects before any network
/// call is made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRef {
    pub id: Option<u64>,
    pub name: Option<String>,
}

impl EntityRef {
    pub fn id(id: u64) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }
}

/// A structured lookup against the metadata service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaQuery {
    ById {
        id: u64,
    },
    ByTitle {
        title: String,
        kind: Option<MediaKind>,
        sort: TitleSort,
        max_results: u32,
    },
    ByPerson {
        person: EntityRef,
        kind: Option<MediaKind>,
        max_results: u32,
    },
    ByStudio {
        studio: EntityRef,
        max_results: u32,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaTitle {
    pub english: Option<String>,
    pub romaji: Option<String>,
}

/// Cover art in the three resolutions AniList serves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverImage {
    pub extra_large: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub id: u64,
    pub site_url: String,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    /// "First Last", tolerating a missing half.
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, _) => self.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Studio {
    pub id: u64,
    pub name: String,
    pub site_url: String,
}

/// An association between a media record and a person, carrying the
/// role label (e.g. "Director").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffEdge {
    pub role: String,
    pub person: Person,
}

/// A normalized anime/manga record.
///
/// `description` holds the API text verbatim (including `<br>` markup);
/// line-break normalization happens at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Media {
    pub site_url: String,
    pub title: MediaTitle,
    pub description: Option<String>,
    pub cover_image: CoverImage,
    pub kind: Option<MediaKind>,
    pub format: Option<String>,
    pub source: Option<String>,
    pub studios: Vec<Studio>,
    pub staff: Vec<StaffEdge>,
}

impl Media {
    /// The staff entry whose role is exactly [`DIRECTOR_ROLE`]. First
    /// match wins if upstream data carries duplicates.
    pub fn director(&self) -> Option<&Person> {
        self.staff
            .iter()
            .find(|edge| edge.role == DIRECTOR_ROLE)
            .map(|edge| &edge.person)
    }

    /// The staff entry whose role is exactly [`ORIGINAL_CREATOR_ROLE`].
    pub fn original_creator(&self) -> Option<&Person> {
        self.staff
            .iter()
            .find(|edge| edge.role == ORIGINAL_CREATOR_ROLE)
            .map(|edge| &edge.person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: u64, first: &str, last: &str) -> Person {
        Person {
            id,
            site_url: format!("https://anilist.co/staff/{id}"),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[test]
    fn test_director_first_match_wins() {
        let media = Media {
            staff: vec![
                StaffEdge {
                    role: "Sound Director".to_string(),
                    person: person(1, "Sound", "Guy"),
                },
                StaffEdge {
                    role: "Director".to_string(),
                    person: person(2, "Tetsurou", "Araki"),
                },
                StaffEdge {
                    role: "Director".to_string(),
                    person: person(3, "Second", "Director"),
                },
            ],
            ..Media::default()
        };

        assert_eq!(media.director().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_creator_absent_is_none() {
        let media = Media {
            staff: vec![StaffEdge {
                role: "Director".to_string(),
                person: person(2, "Tetsurou", "Araki"),
            }],
            ..Media::default()
        };

        assert!(media.original_creator().is_none());
    }

    #[test]
    fn test_role_match_is_exact() {
        // "Assistant Director" must not satisfy the director lookup.
        let media = Media {
            staff: vec![StaffEdge {
                role: "Assistant Director".to_string(),
                person: person(4, "Some", "Assistant"),
            }],
            ..Media::default()
        };

        assert!(media.director().is_none());
    }

    #[test]
    fn test_full_name_handles_missing_halves() {
        assert_eq!(person(1, "Hajime", "Isayama").full_name(), "Hajime Isayama");
        assert_eq!(person(1, "CLAMP", "").full_name(), "CLAMP");
        assert_eq!(person(1, "", "Isayama").full_name(), "Isayama");
        assert_eq!(person(1, "", "").full_name(), "");
    }

    #[test]
    fn test_entity_ref_constructors() {
        assert_eq!(EntityRef::id(97), EntityRef { id: Some(97), name: None });
        assert!(EntityRef::default().is_empty());
        assert!(!EntityRef::name("Madhouse").is_empty());
    }
}
