//! The implicit path of the Media Query Builder: free-form message
//! text is scanned for `{anime title}` and `<manga title>` spans.

use std::sync::LazyLock;

use regex::Regex;
use taiga_api::{MediaKind, MediaQuery, TitleSort};

/// Candidates checked for an exact title match per inline mention.
const MENTION_MAX_RESULTS: u32 = 3;

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}|<(.*?)>").expect("mention regex is valid"));

/// Scan a message body for inline title mentions. Each match becomes
/// an exact-match-first title query; empty spans are ignored. Never
/// fails -- text without mentions yields an empty list.
pub fn scan_mentions(body: &str) -> Vec<MediaQuery> {
    MENTION_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let (kind, title) = if let Some(m) = caps.get(1) {
                (MediaKind::Anime, m.as_str())
            } else if let Some(m) = caps.get(2) {
                (MediaKind::Manga, m.as_str())
            } else {
                return None;
            };
            if title.is_empty() {
                return None;
            }
            Some(MediaQuery::ByTitle {
                title: title.to_string(),
                kind: Some(kind),
                sort: TitleSort::ExactMatchFirst,
                max_results: MENTION_MAX_RESULTS,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_and_kind(query: &MediaQuery) -> (&str, Option<MediaKind>) {
        match query {
            MediaQuery::ByTitle { title, kind, .. } => (title.as_str(), *kind),
            other => panic!("expected a title query, got {other:?}"),
        }
    }

    #[test]
    fn test_mixed_mentions() {
        let queries = scan_mentions("Check out {Steins;Gate} and <Berserk>");
        assert_eq!(queries.len(), 2);
        assert_eq!(title_and_kind(&queries[0]), ("Steins;Gate", Some(MediaKind::Anime)));
        assert_eq!(title_and_kind(&queries[1]), ("Berserk", Some(MediaKind::Manga)));
    }

    #[test]
    fn test_mentions_are_exact_match_first() {
        let queries = scan_mentions("{Monster}");
        let MediaQuery::ByTitle { sort, max_results, .. } = &queries[0] else {
            panic!("expected a title query");
        };
        assert_eq!(*sort, TitleSort::ExactMatchFirst);
        assert_eq!(*max_results, 3);
    }

    #[test]
    fn test_non_greedy_matching() {
        // Two spans on one line stay separate.
        let queries = scan_mentions("{A} then {B}");
        assert_eq!(queries.len(), 2);
        assert_eq!(title_and_kind(&queries[0]).0, "A");
        assert_eq!(title_and_kind(&queries[1]).0, "B");
    }

    #[test]
    fn test_empty_spans_ignored() {
        assert!(scan_mentions("{} and <>").is_empty());
    }

    #[test]
    fn test_plain_text_yields_nothing() {
        assert!(scan_mentions("no mentions here").is_empty());
    }
}
