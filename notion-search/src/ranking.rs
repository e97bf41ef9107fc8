//! Relevance ranking of normalized pages against the query.
//!
//! Each title is scored with [`weighted_ratio`] against the query (both
//! lowercased). The pool is sorted by descending score with a stable sort,
//! so equal scores keep the order in which pages were merged, and then
//! truncated.

use crate::fuzzy::weighted_ratio;
use crate::types::{NormalizedPage, RankedPage};

/// Score a single title against the query.
pub fn score_title(title: &str, query: &str) -> u8 {
    weighted_ratio(&title.to_lowercase(), &query.to_lowercase())
}

/// Rank `pages` by fuzzy title relevance and keep at most `limit` entries.
///
/// An empty or whitespace-only query yields an empty list.
pub fn rank(pages: Vec<NormalizedPage>, query: &str, limit: usize) -> Vec<RankedPage> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<RankedPage> = pages
        .into_iter()
        .map(|page| {
            let score = score_title(&page.title, query);
            RankedPage { page, score }
        })
        .collect();

    // `sort_by` is stable: ties keep merge order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);

    tracing::debug!(returned = ranked.len(), "ranked search results");
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, url: &str) -> NormalizedPage {
        NormalizedPage {
            title: title.to_string(),
            url: url.to_string(),
            icon: None,
            workspace_label: "Acme".to_string(),
        }
    }

    #[test]
    fn exact_match_ranks_first() {
        let pages = vec![
            page("Grocery list", "https://a"),
            page("Roadmap", "https://b"),
            page("Roadmap archive 2019", "https://c"),
        ];
        let ranked = rank(pages, "roadmap", 10);
        assert_eq!(ranked[0].page.url, "https://b");
        assert_eq!(ranked[0].score, 100);
    }

    #[test]
    fn scores_are_non_increasing() {
        let pages = vec![
            page("Team wiki", "https://1"),
            page("Wiki", "https://2"),
            page("Engineering onboarding", "https://3"),
            page("wiki pages index", "https://4"),
            page("", "https://5"),
        ];
        let ranked = rank(pages, "wiki", 10);
        assert_eq!(ranked.len(), 5);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn truncates_to_limit() {
        let pages: Vec<NormalizedPage> = (0..25)
            .map(|i| page(&format!("Note {i}"), &format!("https://n/{i}")))
            .collect();
        let ranked = rank(pages, "note", 10);
        assert_eq!(ranked.len(), 10);
    }

    #[test]
    fn ties_keep_merge_order() {
        let pages = vec![
            page("Roadmap", "https://first"),
            page("Unrelated", "https://other"),
            page("Roadmap", "https://second"),
            page("Roadmap", "https://third"),
        ];
        let ranked = rank(pages, "roadmap", 10);
        let urls: Vec<&str> = ranked.iter().take(3).map(|r| r.page.url.as_str()).collect();
        assert_eq!(urls, vec!["https://first", "https://second", "https://third"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let pages = vec![
            page("Design doc", "https://1"),
            page("Doc templates", "https://2"),
            page("Design", "https://3"),
            page("Docs", "https://4"),
        ];
        let first = rank(pages.clone(), "design doc", 10);
        let second = rank(pages, "design doc", 10);
        assert_eq!(first, second);
    }

    #[test]
    fn query_case_is_ignored() {
        let pages = vec![page("Roadmap", "https://r")];
        assert_eq!(rank(pages, "ROADMAP", 10)[0].score, 100);
    }

    #[test]
    fn blank_query_returns_nothing() {
        let pages = vec![page("Roadmap", "https://r")];
        assert!(rank(pages.clone(), "", 10).is_empty());
        assert!(rank(pages, "   ", 10).is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let pages = vec![page("Roadmap", "https://same"), page("Roadmap", "https://same")];
        assert_eq!(rank(pages, "roadmap", 10).len(), 2);
    }
}
