// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Memoization of full query results.
//!
//! Live-as-you-type search re-issues the same queries constantly (every
//! backspace replays an earlier prefix), so the engine memoizes the complete
//! post sequence per `(query, options)` pair. The cache is a plain map, not
//! an LRU: it grows unboundedly for the life of the index snapshot. That is
//! accepted — entries are invalidated wholesale on every `update_posts`, and
//! memory-sensitive hosts call `clear_cache` themselves. Implicit eviction
//! would change observable behavior and stays out until someone needs it.
//!
//! # Key derivation
//!
//! The key is a deterministic serialization of the trimmed query plus every
//! `SearchOptions` field, with `search_fields` sorted and deduplicated so
//! field order at the call site is irrelevant. Unit separators keep query
//! text from colliding with option text.
//!
//! **Lockstep rule**: a new `SearchOptions` field MUST be added to
//! [`cache_key`], or two calls differing only in that field will alias one
//! cache slot and leak stale results.

use std::collections::HashMap;

use crate::types::{SearchField, SearchOptions, SearchPost};

/// Canonical cache key for a `(query, options)` pair.
pub fn cache_key(query: &str, options: &SearchOptions) -> String {
    let mut fields: Vec<SearchField> = options.search_fields.clone();
    fields.sort_unstable();
    fields.dedup();

    let mut key = String::with_capacity(query.len() + 32);
    key.push_str(query);
    key.push('\u{1f}');
    key.push(if options.case_sensitive { '1' } else { '0' });
    key.push(if options.fuzzy_match { '1' } else { '0' });
    key.push('\u{1f}');
    match options.max_results {
        Some(n) => key.push_str(&n.to_string()),
        None => key.push('*'),
    }
    key.push('\u{1f}');
    for field in fields {
        key.push_str(field.as_str());
        key.push(',');
    }
    key
}

/// Map from canonical key to the full (already truncated) post sequence.
#[derive(Debug, Clone)]
pub struct ResultCache<H = ()> {
    entries: HashMap<String, Vec<SearchPost<H>>>,
}

// Manual impl: `derive(Default)` would demand `H: Default`.
impl<H> Default for ResultCache<H> {
    fn default() -> Self {
        ResultCache::new()
    }
}

impl<H> ResultCache<H> {
    pub fn new() -> Self {
        ResultCache {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[SearchPost<H>]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn insert(&mut self, key: String, posts: Vec<SearchPost<H>>) {
        self.entries.insert(key, posts);
    }

    /// Drop every entry. Called on index rebuild and on explicit
    /// `clear_cache`.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
