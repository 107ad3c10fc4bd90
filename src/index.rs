// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The item index: the current snapshot of posts plus precomputed search text.
//!
//! Building the index runs ingestion coercion (`RawItem -> SearchPost`) and
//! precomputes one folded composite string per post:
//!
//! ```text
//! fold(title ⧺ " " ⧺ description ⧺ " " ⧺ tags.join(" "))
//! ```
//!
//! The composite is the fast path for the common query shape — default field
//! selection, exact matching, case-insensitive — where a single `contains`
//! on one string replaces three per-field folds.
//!
//! There is no partial update: `rebuild` replaces the whole snapshot, and
//! the orchestrator clears the result cache whenever that happens. Callers
//! needing incremental updates rebuild the whole index; at the collection
//! sizes this engine is designed for, a rebuild is a handful of string
//! allocations.

use crate::types::{RawItem, SearchPost};
use crate::utils::normalize;

/// Snapshot of the searchable collection.
///
/// `posts` and `composites` are parallel arrays: `composites[i]` is the
/// folded search text of `posts[i]`.
#[derive(Debug, Clone)]
pub struct ItemIndex<H = ()> {
    posts: Vec<SearchPost<H>>,
    composites: Vec<String>,
}

// Manual impl: `derive(Default)` would demand `H: Default`.
impl<H> Default for ItemIndex<H> {
    fn default() -> Self {
        ItemIndex {
            posts: Vec::new(),
            composites: Vec::new(),
        }
    }
}

impl<H> ItemIndex<H> {
    /// Ingest a raw collection: coerce each item and precompute its
    /// composite string.
    pub fn build(items: Vec<RawItem<H>>) -> Self {
        let posts: Vec<SearchPost<H>> = items.into_iter().map(SearchPost::from).collect();
        let composites = posts.iter().map(composite_text).collect();
        ItemIndex { posts, composites }
    }

    /// Index an already-coerced collection (mostly useful in tests and for
    /// hosts that build `SearchPost` values directly).
    pub fn from_posts(posts: Vec<SearchPost<H>>) -> Self {
        let composites = posts.iter().map(composite_text).collect();
        ItemIndex { posts, composites }
    }

    /// Replace the entire snapshot. The caller owns cache invalidation.
    pub fn rebuild(&mut self, items: Vec<RawItem<H>>) {
        *self = ItemIndex::build(items);
    }

    pub fn posts(&self) -> &[SearchPost<H>] {
        &self.posts
    }

    /// Folded composite string for `posts()[i]`.
    pub fn composite(&self, i: usize) -> &str {
        &self.composites[i]
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// `fold(title + " " + description + " " + tags joined by spaces)`.
fn composite_text<H>(post: &SearchPost<H>) -> String {
    let mut text = String::with_capacity(
        post.title.len()
            + post.description.len()
            + post.tags.iter().map(|t| t.len() + 1).sum::<usize>()
            + 2,
    );
    text.push_str(&post.title);
    text.push(' ');
    text.push_str(&post.description);
    for tag in &post.tags {
        text.push(' ');
        text.push_str(tag);
    }
    normalize(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, title: &str, tags: &[&str]) -> RawItem {
        RawItem {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            ..RawItem::default()
        }
    }

    #[test]
    fn composite_is_folded_title_description_tags() {
        let index = ItemIndex::build(vec![raw("1", "Panduan Menggunakan Anki", &["SRS", "Anki"])]);
        assert_eq!(index.composite(0), "panduan menggunakan anki srs anki");
    }

    #[test]
    fn rebuild_replaces_the_snapshot() {
        let mut index = ItemIndex::build(vec![raw("1", "a", &[]), raw("2", "b", &[])]);
        assert_eq!(index.len(), 2);
        index.rebuild(vec![raw("3", "c", &[])]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.posts()[0].id, "3");
    }

    #[test]
    fn index_preserves_input_order() {
        let index = ItemIndex::build(vec![raw("b", "b", &[]), raw("a", "a", &[]), raw("c", "c", &[])]);
        let ids: Vec<&str> = index.posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }
}
