//! Wire-shape types for AniList GraphQL responses and their
//! normalization into the flat domain model.

use serde::Deserialize;

use crate::model::{CoverImage, Media, MediaKind, MediaTitle, Person, StaffEdge, Studio};

// ── GraphQL envelope ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

// ── Query-specific payloads ──────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MediaResponse {
    #[serde(rename = "Media")]
    pub media: RawMedia,
}

#[derive(Debug, Deserialize)]
pub struct PageResponse {
    #[serde(rename = "Page")]
    pub page: Page,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub media: Vec<RawMedia>,
}

#[derive(Debug, Deserialize)]
pub struct StaffMediaResponse {
    #[serde(rename = "Staff")]
    pub staff: Option<StaffNode>,
}

#[derive(Debug, Deserialize)]
pub struct StaffNode {
    #[serde(rename = "staffMedia")]
    pub staff_media: IdNodes,
}

#[derive(Debug, Deserialize)]
pub struct StudioMediaResponse {
    #[serde(rename = "Studio")]
    pub studio: Option<StudioNode>,
}

#[derive(Debug, Deserialize)]
pub struct StudioNode {
    pub media: IdNodes,
}

#[derive(Debug, Deserialize)]
pub struct IdNodes {
    #[serde(default)]
    pub nodes: Vec<IdNode>,
}

#[derive(Debug, Deserialize)]
pub struct IdNode {
    pub id: u64,
}

// ── Media record as it comes off the wire ────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMedia {
    #[serde(default)]
    pub site_url: String,
    #[serde(default)]
    pub title: RawTitle,
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: RawCoverImage,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub format: Option<String>,
    pub source: Option<String>,
    #[serde(default)]
    pub studios: EdgeList<RawStudioEdge>,
    #[serde(default)]
    pub staff: EdgeList<RawStaffEdge>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTitle {
    pub english: Option<String>,
    pub romaji: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCoverImage {
    pub extra_large: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct EdgeList<T> {
    #[serde(default)]
    pub edges: Vec<T>,
}

impl<T> Default for EdgeList<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawStudioEdge {
    pub node: RawStudio,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStudio {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub site_url: String,
}

#[derive(Debug, Deserialize)]
pub struct RawStaffEdge {
    #[serde(default)]
    pub role: String,
    pub node: RawPerson,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPerson {
    pub id: u64,
    #[serde(default)]
    pub site_url: String,
    #[serde(default)]
    pub name: RawPersonName,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPersonName {
    pub first: Option<String>,
    pub last: Option<String>,
}

// ── Normalization ────────────────────────────────────────────────

impl RawPerson {
    fn into_person(self) -> Person {
        Person {
            id: self.id,
            site_url: self.site_url,
            first_name: self.name.first.unwrap_or_default(),
            last_name: self.name.last.unwrap_or_default(),
        }
    }
}

impl RawMedia {
    /// Flatten the edge-list wire shape into the domain record.
    /// Studio and staff ordering is preserved as returned.
    pub fn into_media(self) -> Media {
        Media {
            site_url: self.site_url,
            title: MediaTitle {
                english: self.title.english,
                romaji: self.title.romaji,
            },
            description: self.description,
            cover_image: CoverImage {
                extra_large: self.cover_image.extra_large,
                large: self.cover_image.large,
                medium: self.cover_image.medium,
            },
            kind: self.media_type.as_deref().and_then(MediaKind::from_graphql),
            format: self.format,
            source: self.source,
            studios: self
                .studios
                .edges
                .into_iter()
                .map(|edge| Studio {
                    id: edge.node.id,
                    name: edge.node.name,
                    site_url: edge.node.site_url,
                })
                .collect(),
            staff: self
                .staff
                .edges
                .into_iter()
                .map(|edge| StaffEdge {
                    role: edge.role,
                    person: edge.node.into_person(),
                })
                .collect(),
        }
    }
}
