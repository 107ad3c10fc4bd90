// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured-filter evaluation.
//!
//! AND across the fields a filter actually specifies; an unspecified field
//! imposes no constraint. Equality is exact — no case folding, no fuzzy
//! anything. The empty filter passes every post.

use crate::types::{SearchFilters, SearchPost};

/// Does a post satisfy every constraint present in `filters`?
///
/// The recommendation flag is tri-state: a post with `is_recommended: None`
/// fails both `Some(true)` and `Some(false)` filters. Absence on the post is
/// not a value to match against, it is the lack of one.
pub fn matches_filters<H>(post: &SearchPost<H>, filters: &SearchFilters) -> bool {
    if let Some(content_type) = filters.content_type {
        if post.content_type != content_type {
            return false;
        }
    }
    if let Some(learning_stage) = filters.learning_stage {
        if post.learning_stage != learning_stage {
            return false;
        }
    }
    if let Some(wanted) = filters.is_recommended {
        if post.is_recommended != Some(wanted) {
            return false;
        }
    }
    true
}
