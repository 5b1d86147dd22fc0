use std::sync::LazyLock;

use futures::future::join_all;
use reqwest::Client;

use super::error::AniListError;
use super::types::{
    GraphQLResponse, MediaResponse, PageResponse, RawMedia, StaffMediaResponse,
    StudioMediaResponse,
};
use crate::model::{EntityRef, Media, MediaKind, MediaQuery, TitleSort};

const API_URL: &str = "https://graphql.anilist.co";

/// GraphQL `MediaSort` value for search-relevance order.
const SORT_SEARCH_MATCH: &str = "SEARCH_MATCH";
/// GraphQL `MediaSort` value for popularity order.
const SORT_POPULARITY: &str = "POPULARITY_DESC";

/// Field selection shared by every query that returns full media records.
const MEDIA_FIELDS: &str = r#"
    siteUrl
    title { english romaji }
    description(asHtml: false)
    coverImage { extraLarge large medium }
    type
    format
    source
    studios { edges { node { id name siteUrl } } }
    staff { edges { role node { id siteUrl name { first last } } } }
"#;

static MEDIA_BY_ID_QUERY: LazyLock<String> = LazyLock::new(|| {
    format!("query ($id: Int!) {{ Media(id: $id) {{ {MEDIA_FIELDS} }} }}")
});

static MEDIA_SEARCH_QUERY: LazyLock<String> = LazyLock::new(|| {
    format!(
        "query ($search: String, $max: Int!, $type: MediaType, $sort: [MediaSort]) {{
            Page(page: 1, perPage: $max) {{
                media(search: $search, type: $type, sort: $sort) {{ {MEDIA_FIELDS} }}
            }}
        }}"
    )
});

const PERSON_MEDIA_QUERY: &str = "
    query ($id: Int, $search: String, $max: Int!, $type: MediaType) {
        Staff(id: $id, search: $search) {
            staffMedia(sort: POPULARITY_DESC, type: $type, page: 1, perPage: $max) {
                nodes { id }
            }
        }
    }
";

const STUDIO_MEDIA_QUERY: &str = "
    query ($id: Int, $search: String, $max: Int!) {
        Studio(id: $id, search: $search) {
            media(sort: POPULARITY_DESC, page: 1, perPage: $max) {
                nodes { id }
            }
        }
    }
";

/// AniList GraphQL API client. All queries are public, so no auth is
/// carried. No caching: every call re-queries the remote service.
pub struct AniListClient {
    http: Client,
}

impl Default for AniListClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AniListClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    async fn graphql_request<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AniListError> {
        tracing::debug!(operation, "AniList GraphQL request");

        let resp = self
            .http
            .post(API_URL)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(operation, status = status_code, "AniList API error");
            return Err(AniListError::Api {
                status: status_code,
                message: body,
            });
        }

        tracing::debug!(operation, status = %status, "AniList response received");
        let body: GraphQLResponse<T> = resp
            .json()
            .await
            .map_err(|e| AniListError::Parse(e.to_string()))?;

        match body.data {
            Some(data) => Ok(data),
            // A 200 can still carry an error payload with no usable data.
            None => {
                let message = body
                    .errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                tracing::warn!(operation, %message, "AniList returned error payload");
                Err(AniListError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// Look up a single media record by AniList id.
    pub async fn media_by_id(&self, id: u64) -> Result<Media, AniListError> {
        let resp: MediaResponse = self
            .graphql_request(
                "MediaById",
                &MEDIA_BY_ID_QUERY,
                serde_json::json!({ "id": id }),
            )
            .await?;
        Ok(resp.media.into_media())
    }

    /// Raw bounded title search with an explicit GraphQL sort.
    async fn search_media(
        &self,
        title: &str,
        kind: Option<MediaKind>,
        sort: &str,
        max_results: u32,
    ) -> Result<Vec<Media>, AniListError> {
        let mut vars = serde_json::json!({
            "search": title,
            "max": max_results,
            "sort": [sort],
        });
        if let Some(kind) = kind {
            vars["type"] = serde_json::json!(kind.as_graphql());
        }

        let resp: PageResponse = self
            .graphql_request("SearchMedia", &MEDIA_SEARCH_QUERY, vars)
            .await?;
        Ok(resp.page.media.into_iter().map(RawMedia::into_media).collect())
    }

    /// Media a person worked on, most popular first. Two-step: fetch the
    /// associated media ids, then resolve each id to a full record.
    pub async fn media_by_person(
        &self,
        person: &EntityRef,
        kind: Option<MediaKind>,
        max_results: u32,
    ) -> Result<Vec<Media>, AniListError> {
        let mut vars = entity_vars(person, max_results)?;
        if let Some(kind) = kind {
            vars["type"] = serde_json::json!(kind.as_graphql());
        }

        let resp: StaffMediaResponse = self
            .graphql_request("PersonMedia", PERSON_MEDIA_QUERY, vars)
            .await?;
        let ids = resp
            .staff
            .map(|s| s.staff_media.nodes)
            .unwrap_or_default();
        Ok(self.resolve_ids(ids.iter().map(|n| n.id)).await)
    }

    /// Media produced by a studio, most popular first. Same two-step
    /// shape as [`Self::media_by_person`].
    pub async fn media_by_studio(
        &self,
        studio: &EntityRef,
        max_results: u32,
    ) -> Result<Vec<Media>, AniListError> {
        let vars = entity_vars(studio, max_results)?;

        let resp: StudioMediaResponse = self
            .graphql_request("StudioMedia", STUDIO_MEDIA_QUERY, vars)
            .await?;
        let ids = resp.studio.map(|s| s.media.nodes).unwrap_or_default();
        Ok(self.resolve_ids(ids.iter().map(|n| n.id)).await)
    }

    /// Resolve a batch of media ids concurrently. Ids that fail to
    /// resolve are logged and dropped; one bad id never fails the batch.
    async fn resolve_ids(&self, ids: impl Iterator<Item = u64>) -> Vec<Media> {
        let lookups = ids.map(|id| async move { (id, self.media_by_id(id).await) });
        keep_resolved(join_all(lookups).await)
    }

    /// Execute a structured query and return its media records.
    pub async fn resolve(&self, query: &MediaQuery) -> Result<Vec<Media>, AniListError> {
        match query {
            MediaQuery::ById { id } => Ok(vec![self.media_by_id(*id).await?]),
            MediaQuery::ByTitle {
                title,
                kind,
                sort,
                max_results,
            } => match sort {
                TitleSort::Relevance => {
                    self.search_media(title, *kind, SORT_SEARCH_MATCH, *max_results)
                        .await
                }
                TitleSort::ExactMatchFirst => {
                    let mut candidates = self
                        .search_media(title, *kind, SORT_SEARCH_MATCH, *max_results)
                        .await?;
                    if let Some(index) = pick_exact_match(&candidates, title) {
                        return Ok(vec![candidates.swap_remove(index)]);
                    }
                    // No exact hit among the top results: take the single
                    // most popular match instead.
                    self.search_media(title, *kind, SORT_POPULARITY, 1).await
                }
            },
            MediaQuery::ByPerson {
                person,
                kind,
                max_results,
            } => self.media_by_person(person, *kind, *max_results).await,
            MediaQuery::ByStudio {
                studio,
                max_results,
            } => self.media_by_studio(studio, *max_results).await,
        }
    }
}

/// Index of the first candidate whose romaji or english title equals
/// `title` exactly. First in result order wins ties.
pub fn pick_exact_match(candidates: &[Media], title: &str) -> Option<usize> {
    candidates.iter().position(|media| {
        media.title.romaji.as_deref() == Some(title)
            || media.title.english.as_deref() == Some(title)
    })
}

/// Keep the media that resolved and drop each failed id with a `warn`
/// log. One bad id in a batch never fails the rest.
pub fn keep_resolved(
    results: impl IntoIterator<Item = (u64, Result<Media, AniListError>)>,
) -> Vec<Media> {
    results
        .into_iter()
        .filter_map(|(id, result)| match result {
            Ok(media) => Some(media),
            Err(err) => {
                tracing::warn!(id, error = %err, "dropping media id that failed to resolve");
                None
            }
        })
        .collect()
}

fn entity_vars(entity: &EntityRef, max_results: u32) -> Result<serde_json::Value, AniListError> {
    if entity.is_empty() {
        return Err(AniListError::InvalidQuery(
            "neither id nor name set for person/studio lookup",
        ));
    }
    let mut vars = serde_json::json!({ "max": max_results });
    if let Some(id) = entity.id {
        vars["id"] = serde_json::json!(id);
    } else if let Some(name) = &entity.name {
        vars["search"] = serde_json::json!(name);
    }
    Ok(vars)
}
