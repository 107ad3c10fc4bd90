// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine: index + matcher + filter + cache behind one owned object.
//!
//! One `SearchEngine` instance owns one snapshot of the catalog. There is no
//! module-level shared instance; a host wanting page-wide sharing holds one
//! engine in its own composition root. Everything runs synchronously on the
//! calling thread — no I/O, no suspension points — which is what makes the
//! response-time budgets (50ms search, 30ms filter) direct CPU-time numbers.
//! Mutating operations take `&mut self`, so concurrent callers are rejected
//! at compile time instead of by convention.
//!
//! # Query whitespace policy
//!
//! Queries are trimmed before the emptiness check and before matching.
//! A search box containing only spaces behaves exactly like an empty one:
//! it returns the full catalog and skips the cache.
//!
//! # Timing
//!
//! Every operation overwrites the [`SearchMetrics`] snapshot. `search` fills
//! the search slot, `filter` the filter slot, `search_and_filter` both plus
//! a combined total.

use std::collections::HashSet;
use std::time::Instant;

use crate::cache::{cache_key, ResultCache};
use crate::filter::matches_filters;
use crate::index::ItemIndex;
use crate::matcher;
use crate::types::{
    RawItem, SearchField, SearchFilters, SearchMetrics, SearchOptions, SearchPost, SearchResult,
};
use crate::utils::normalize;

/// Conventional suggestion cap for autocomplete dropdowns.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// In-memory catalog search/filter engine.
///
/// `H` is the host's opaque per-post UI handle type; headless hosts use the
/// default `()`.
#[derive(Debug, Clone)]
pub struct SearchEngine<H = ()> {
    index: ItemIndex<H>,
    cache: ResultCache<H>,
    metrics: SearchMetrics,
}

/// An engine over an empty catalog.
impl<H> Default for SearchEngine<H> {
    fn default() -> Self {
        SearchEngine {
            index: ItemIndex::default(),
            cache: ResultCache::default(),
            metrics: SearchMetrics::default(),
        }
    }
}

impl<H: Clone> SearchEngine<H> {
    /// Build an engine over a snapshot of collaborator-shaped items.
    /// Ingestion coercion happens here; malformed items are defaulted,
    /// never rejected.
    pub fn new(items: Vec<RawItem<H>>) -> Self {
        SearchEngine {
            index: ItemIndex::build(items),
            cache: ResultCache::new(),
            metrics: SearchMetrics::default(),
        }
    }

    /// Build an engine over already-coerced posts.
    pub fn from_posts(posts: Vec<SearchPost<H>>) -> Self {
        SearchEngine {
            index: ItemIndex::from_posts(posts),
            cache: ResultCache::new(),
            metrics: SearchMetrics::default(),
        }
    }

    /// Free-text search over the whole index.
    ///
    /// An empty (after trimming) query returns the full catalog in index
    /// order, timed but uncached — the common "reset the search box" case
    /// gains nothing from memoizing a copy of the index.
    ///
    /// Repeating an identical `(query, options)` pair without an intervening
    /// [`update_posts`](Self::update_posts)/[`clear_cache`](Self::clear_cache)
    /// returns the same posts in the same order, served from the cache.
    pub fn search(&mut self, query: &str, options: &SearchOptions) -> SearchResult<H> {
        let started = Instant::now();
        let trimmed = query.trim();
        if trimmed.is_empty() {
            let posts = self.index.posts().to_vec();
            return self.finish_search(posts, started);
        }

        let key = cache_key(trimmed, options);
        let posts = match self.cache.get(&key) {
            Some(hit) => hit.to_vec(),
            None => {
                let matched = self.scan(trimmed, options);
                self.cache.insert(key, matched.clone());
                matched
            }
        };
        self.finish_search(posts, started)
    }

    /// Structured filter over the whole index: AND across present filter
    /// fields, index order preserved. Uncached — one linear pass.
    pub fn filter(&mut self, filters: &SearchFilters) -> SearchResult<H> {
        let started = Instant::now();
        let posts: Vec<SearchPost<H>> = self
            .index
            .posts()
            .iter()
            .filter(|post| matches_filters(post, filters))
            .cloned()
            .collect();
        let elapsed = ms_since(started);
        self.metrics = SearchMetrics {
            search_time_ms: 0.0,
            filter_time_ms: elapsed,
            total_time_ms: elapsed,
            result_count: posts.len(),
        };
        SearchResult {
            total_count: self.index.len(),
            filtered_count: posts.len(),
            posts,
            search_time_ms: elapsed,
        }
    }

    /// Combined search + filter: both run independently over the **entire**
    /// index, then intersect by post id, keeping the search result's order.
    ///
    /// The two-pass-then-intersect shape is load-bearing: `max_results`
    /// truncation happens inside `search`, before the intersection, so a
    /// truncated slot can be spent on a post the filter then removes. Do not
    /// "optimize" this into filter-then-search — that changes which posts
    /// survive truncation.
    pub fn search_and_filter(
        &mut self,
        query: &str,
        filters: &SearchFilters,
        options: &SearchOptions,
    ) -> SearchResult<H> {
        let started = Instant::now();

        let searched = self.search(query, options);
        let search_time = searched.search_time_ms;

        let filter_started = Instant::now();
        let keep: HashSet<&str> = self
            .index
            .posts()
            .iter()
            .filter(|post| matches_filters(post, filters))
            .map(|post| post.id.as_str())
            .collect();
        let posts: Vec<SearchPost<H>> = searched
            .posts
            .into_iter()
            .filter(|post| keep.contains(post.id.as_str()))
            .collect();
        let filter_time = ms_since(filter_started);

        let total = ms_since(started);
        self.metrics = SearchMetrics {
            search_time_ms: search_time,
            filter_time_ms: filter_time,
            total_time_ms: total,
            result_count: posts.len(),
        };
        SearchResult {
            total_count: self.index.len(),
            filtered_count: posts.len(),
            posts,
            search_time_ms: total,
        }
    }

    /// Autocomplete candidates: title words longer than 2 chars and tags
    /// whose folded form contains the folded query. One pass, first-seen
    /// order, set-deduplicated, capped at `max_suggestions` (conventionally
    /// [`DEFAULT_MAX_SUGGESTIONS`]). Empty or whitespace queries yield
    /// nothing.
    pub fn suggestions(&self, query: &str, max_suggestions: usize) -> Vec<String> {
        let folded_query = normalize(query);
        if folded_query.is_empty() || max_suggestions == 0 {
            return Vec::new();
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut out: Vec<String> = Vec::new();
        'posts: for post in self.index.posts() {
            for word in post.title.split_whitespace() {
                if word.chars().count() > 2 {
                    let folded = normalize(word);
                    if folded.contains(&folded_query) && seen.insert(folded) {
                        out.push(word.to_string());
                        if out.len() == max_suggestions {
                            break 'posts;
                        }
                    }
                }
            }
            for tag in &post.tags {
                let folded = normalize(tag);
                if folded.contains(&folded_query) && seen.insert(folded) {
                    out.push(tag.clone());
                    if out.len() == max_suggestions {
                        break 'posts;
                    }
                }
            }
        }
        out
    }

    /// Copy of the most recent operation's timings. Never fails; before the
    /// first operation it is all zeros.
    pub fn metrics(&self) -> SearchMetrics {
        self.metrics
    }

    /// Replace the catalog snapshot wholesale and drop every cache entry.
    /// The only way to change what the engine searches.
    pub fn update_posts(&mut self, items: Vec<RawItem<H>>) {
        self.index.rebuild(items);
        self.cache.clear();
    }

    /// Drop memoized results without touching the index.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// The current snapshot, in index order.
    pub fn posts(&self) -> &[SearchPost<H>] {
        self.index.posts()
    }

    /// Number of memoized `(query, options)` entries.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Linear scan of the whole index, in order, with `max_results`
    /// truncation applied.
    fn scan(&self, trimmed_query: &str, options: &SearchOptions) -> Vec<SearchPost<H>> {
        let folded_query = if options.case_sensitive {
            trimmed_query.to_string()
        } else {
            normalize(trimmed_query)
        };
        // Composite fast path: one precomputed folded string per post covers
        // the default field selection for exact, case-insensitive queries.
        let use_composite = !options.case_sensitive
            && !options.fuzzy_match
            && selects_all_fields(&options.search_fields);

        let mut matched: Vec<SearchPost<H>> = Vec::new();
        for (i, post) in self.index.posts().iter().enumerate() {
            if let Some(max) = options.max_results {
                if matched.len() >= max {
                    break;
                }
            }
            let hit = if use_composite {
                self.index.composite(i).contains(folded_query.as_str())
            } else {
                matcher::post_matches(post, &folded_query, options)
            };
            if hit {
                matched.push(post.clone());
            }
        }
        matched
    }

    fn finish_search(&mut self, posts: Vec<SearchPost<H>>, started: Instant) -> SearchResult<H> {
        let elapsed = ms_since(started);
        self.metrics = SearchMetrics {
            search_time_ms: elapsed,
            filter_time_ms: 0.0,
            total_time_ms: elapsed,
            result_count: posts.len(),
        };
        SearchResult {
            total_count: self.index.len(),
            filtered_count: posts.len(),
            posts,
            search_time_ms: elapsed,
        }
    }
}

fn selects_all_fields(fields: &[SearchField]) -> bool {
    SearchField::ALL.iter().all(|field| fields.contains(field))
}

fn ms_since(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
