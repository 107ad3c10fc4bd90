// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pure query-matching predicates.
//!
//! Two modes, selected per call by `SearchOptions::fuzzy_match`:
//!
//! - **Exact**: contiguous substring containment.
//! - **Fuzzy**: ordered, non-contiguous subsequence containment — a greedy
//!   left-to-right two-pointer scan. Linear, no DP, no scoring. It is a
//!   filter, not a ranker: exact containment implies fuzzy containment, so
//!   turning `fuzzy_match` on can only widen a result set.
//!
//! Case-insensitive matching folds both sides with [`normalize`], so queries
//! hit accented text and the precomputed composite strings (already folded)
//! stay consistent with the per-field path. Case-sensitive matching compares
//! raw text untouched.
//!
//! Callers fold the query once per operation and pass it in pre-folded;
//! these functions fold field values per call.

use crate::types::{SearchField, SearchOptions, SearchPost};
use crate::utils::normalize;

/// Contiguous substring containment on already-folded (or raw) text.
#[inline]
pub fn exact_contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// Ordered-subsequence containment: every char of `needle` appears in
/// `haystack` in the same relative order, not necessarily adjacent.
///
/// Greedy two-pointer scan over chars; succeeds iff the needle pointer
/// reaches the end. Greedy matching is complete here: taking the earliest
/// possible occurrence of each char never rules out a later subsequence.
pub fn fuzzy_contains(haystack: &str, needle: &str) -> bool {
    let mut chars = needle.chars();
    let Some(mut wanted) = chars.next() else {
        return true;
    };
    for c in haystack.chars() {
        if c == wanted {
            match chars.next() {
                Some(next) => wanted = next,
                None => return true,
            }
        }
    }
    false
}

/// Does a single field value match the (pre-folded) query under `options`?
pub fn value_matches(value: &str, folded_query: &str, options: &SearchOptions) -> bool {
    let folded;
    let haystack = if options.case_sensitive {
        value
    } else {
        folded = normalize(value);
        &folded
    };
    if options.fuzzy_match {
        fuzzy_contains(haystack, folded_query)
    } else {
        exact_contains(haystack, folded_query)
    }
}

/// Does a post match the (pre-folded) query under `options`?
///
/// OR across the selected fields: a title match, a description match, and a
/// match on any single tag are all equally sufficient. No field weighting.
pub fn post_matches<H>(post: &SearchPost<H>, folded_query: &str, options: &SearchOptions) -> bool {
    options.search_fields.iter().any(|field| match field {
        SearchField::Title => value_matches(&post.title, folded_query, options),
        SearchField::Description => value_matches(&post.description, folded_query, options),
        SearchField::Tags => post
            .tags
            .iter()
            .any(|tag| value_matches(tag, folded_query, options)),
    })
}
