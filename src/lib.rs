//! Embedded, in-memory search and filter engine for content catalogs.
//!
//! Built for a content site's live-as-you-type search: a few hundred to low
//! thousands of items, full rescans per query, no server round-trip, no
//! external index, no persistence. It is a filter, not a ranker — results
//! keep catalog order, there is no relevance scoring of any kind.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  types.rs  │────▶│  index.rs   │────▶│  engine.rs  │
//! │ (RawItem,  │     │ (ItemIndex, │     │(SearchEngine│
//! │ SearchPost)│     │ composites) │     │ search/...) │
//! └────────────┘     └─────────────┘     └─────────────┘
//!        │            ┌─────────────┐           │
//!        ├───────────▶│ matcher.rs  │◀──────────┤
//!        │            │(exact,fuzzy)│           │
//!        │            └─────────────┘           │
//!        │            ┌─────────────┐           │
//!        ├───────────▶│  filter.rs  │◀──────────┤
//!        │            └─────────────┘           │
//!        │            ┌─────────────┐           │
//!        └───────────▶│  cache.rs   │◀──────────┘
//!                     │ (memoized   │
//!                     │  results)   │
//!                     └─────────────┘
//! ```
//!
//! | Module    | Responsibility                                          |
//! |-----------|---------------------------------------------------------|
//! | `types`   | Data model and ingestion coercion                       |
//! | `utils`   | Case/diacritic folding (`normalize`)                    |
//! | `matcher` | Exact substring + fuzzy subsequence predicates          |
//! | `filter`  | Structured classification filters (AND semantics)       |
//! | `index`   | Post snapshot + precomputed composite search strings    |
//! | `cache`   | Memoized full result sets keyed by query + options      |
//! | `engine`  | The public orchestrator and metrics snapshot            |
//!
//! # Usage
//!
//! ```
//! use pilah::{SearchEngine, SearchFilters, SearchOptions, RawItem, ContentType};
//!
//! let items: Vec<RawItem> = serde_json::from_str(
//!     r#"[{"id":"1","title":"Panduan Menggunakan Anki","tags":["anki","srs"],"contentType":"tool"}]"#,
//! ).unwrap();
//! let mut engine = SearchEngine::new(items);
//!
//! let hits = engine.search("anki", &SearchOptions::default());
//! assert_eq!(hits.filtered_count, 1);
//!
//! let tools = engine.filter(&SearchFilters {
//!     content_type: Some(ContentType::Tool),
//!     ..SearchFilters::default()
//! });
//! assert_eq!(tools.posts[0].id, "1");
//! ```
//!
//! # What this crate is not
//!
//! No persistent index, no TF-IDF/BM25, no multi-node anything, no tolerance
//! for unbounded collections. Content classification (`contentType`,
//! `learningStage`) and all rendering/pagination live outside; the engine
//! consumes classifications as resolved fields and hands back ordered post
//! lists.

// Module declarations
mod cache;
mod engine;
mod filter;
mod index;
mod matcher;
mod types;
mod utils;

// Re-exports for public API
pub use cache::cache_key;
pub use engine::{SearchEngine, DEFAULT_MAX_SUGGESTIONS};
pub use filter::matches_filters;
pub use index::ItemIndex;
pub use matcher::{exact_contains, fuzzy_contains, post_matches, value_matches};
pub use types::{
    ContentType, LearningStage, RawItem, SearchField, SearchFilters, SearchMetrics, SearchOptions,
    SearchPost, SearchResult,
};
pub use utils::normalize;

#[cfg(test)]
mod tests {
    //! Engine-level tests over the canonical seed catalog.

    use super::*;
    use proptest::prelude::*;

    fn seed_items() -> Vec<RawItem> {
        serde_json::from_str(
            r#"[
                {"id": "1", "title": "Panduan Menggunakan Anki",
                 "tags": ["anki", "srs"], "contentType": "tool"},
                {"id": "2", "title": "Memulai Perjalanan Immersion",
                 "tags": ["immersion", "beginner"], "contentType": "guide"},
                {"id": "3", "title": "Memilih Konten yang Tepat",
                 "tags": ["anime", "manga"], "contentType": "methodology"}
            ]"#,
        )
        .unwrap()
    }

    fn seed_engine() -> SearchEngine {
        SearchEngine::new(seed_items())
    }

    #[test]
    fn search_finds_by_tag_and_title() {
        let mut engine = seed_engine();
        let result = engine.search("anki", &SearchOptions::default());
        assert_eq!(result.filtered_count, 1);
        assert_eq!(result.posts[0].id, "1");
        assert_eq!(result.total_count, 3);
    }

    #[test]
    fn filter_selects_exact_content_type() {
        let mut engine = seed_engine();
        let result = engine.filter(&SearchFilters {
            content_type: Some(ContentType::Tool),
            ..SearchFilters::default()
        });
        assert_eq!(result.filtered_count, 1);
        assert_eq!(result.posts[0].id, "1");
    }

    #[test]
    fn fuzzy_matches_subsequence_across_title() {
        // "an" appears as an ordered subsequence of "Memulai Perjalanan
        // Immersion" (and as a substring, via "perjalanan").
        let mut engine = seed_engine();
        let options = SearchOptions {
            fuzzy_match: true,
            ..SearchOptions::default()
        };
        let result = engine.search("an", &options);
        assert!(result.posts.iter().any(|p| p.id == "2"));
    }

    #[test]
    fn search_and_filter_intersects_by_id() {
        // Titles "Memulai..." and "Memilih..." both contain "me"; only the
        // guide survives the filter.
        let mut engine = seed_engine();
        let result = engine.search_and_filter(
            "me",
            &SearchFilters {
                content_type: Some(ContentType::Guide),
                ..SearchFilters::default()
            },
            &SearchOptions::default(),
        );
        assert_eq!(result.filtered_count, 1);
        assert_eq!(result.posts[0].id, "2");
    }

    #[test]
    fn no_match_is_a_normal_empty_result() {
        let mut engine = seed_engine();
        let result = engine.search("wanikani", &SearchOptions::default());
        assert_eq!(result.filtered_count, 0);
        assert!(result.posts.is_empty());
        assert_eq!(result.total_count, 3);
    }

    // =========================================================================
    // PROPERTY TESTS
    // =========================================================================

    fn word_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-z]{1,8}").unwrap()
    }

    fn catalog_strategy() -> impl Strategy<Value = Vec<RawItem>> {
        prop::collection::vec(
            (word_strategy(), word_strategy(), prop::collection::vec(word_strategy(), 0..3)),
            0..12,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, description, tags))| RawItem {
                    id: Some(i.to_string()),
                    title: Some(title),
                    description: Some(description),
                    tags: Some(tags),
                    ..RawItem::default()
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn counts_stay_within_bounds(items in catalog_strategy(), query in word_strategy()) {
            let mut engine = SearchEngine::new(items);
            let result = engine.search(&query, &SearchOptions::default());
            prop_assert_eq!(result.filtered_count, result.posts.len());
            prop_assert!(result.filtered_count <= result.total_count);
        }

        #[test]
        fn empty_query_returns_full_catalog_in_order(items in catalog_strategy()) {
            let mut engine = SearchEngine::new(items);
            let result = engine.search("", &SearchOptions::default());
            let expected: Vec<&str> = engine.posts().iter().map(|p| p.id.as_str()).collect();
            let got: Vec<&str> = result.posts.iter().map(|p| p.id.as_str()).collect();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn exact_match_implies_fuzzy_match(haystack in ".{0,40}", needle in ".{0,8}") {
            if exact_contains(&haystack, &needle) {
                prop_assert!(fuzzy_contains(&haystack, &needle));
            }
        }
    }
}
