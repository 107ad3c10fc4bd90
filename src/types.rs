// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the catalog engine.
//!
//! These types define what a searchable item looks like, what callers may ask
//! for, and what they get back. The classification fields (`ContentType`,
//! `LearningStage`, the recommendation flag) are produced by an external
//! collaborator; the engine consumes them as already-resolved values.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchPost**: `title`, `description`, `tags` are always present after
//!   ingestion (possibly empty, never absent). `RawItem -> SearchPost`
//!   coercion owns this; matching and filtering never see a missing field.
//!
//! - **SearchResult**: `filtered_count = posts.len() ∧ filtered_count ≤
//!   total_count`. `total_count` is the size of the full index, untouched by
//!   `max_results` truncation.
//!
//! - **SearchMetrics**: a single snapshot of the most recent operation,
//!   overwritten on every call. Not a history.

use serde::{Deserialize, Serialize};

// =============================================================================
// CLASSIFICATION ENUMS
// =============================================================================

/// Editorial category of a catalog item, supplied by the classification
/// collaborator.
///
/// Unknown or absent labels coerce to [`ContentType::Guide`] at ingestion, so
/// the engine never holds an out-of-enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Guide,
    Tool,
    Methodology,
    Practice,
}

impl ContentType {
    /// Parse a collaborator-supplied label. Unknown labels yield `None`;
    /// callers decide the fallback (ingestion uses the default).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "guide" => Some(Self::Guide),
            "tool" => Some(Self::Tool),
            "methodology" => Some(Self::Methodology),
            "practice" => Some(Self::Practice),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guide => "guide",
            Self::Tool => "tool",
            Self::Methodology => "methodology",
            Self::Practice => "practice",
        }
    }
}

/// Learner level a catalog item targets, supplied by the classification
/// collaborator. Unknown or absent labels coerce to
/// [`LearningStage::Beginner`] at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStage {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl LearningStage {
    /// Parse a collaborator-supplied label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

// =============================================================================
// ITEMS
// =============================================================================

/// A catalog item as the classification collaborator hands it over.
///
/// Every field is optional and defaulted so arbitrary collaborator JSON
/// deserializes without error; ingestion coerces this into a fully-populated
/// [`SearchPost`]. Malformed input is never rejected, only defaulted.
///
/// The `ui_handle` slot carries an opaque host reference (a DOM node, a list
/// row, whatever the rendering layer owns). It never round-trips through
/// serde and the engine never looks inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawItem<H = ()> {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub slug: Option<String>,
    pub content_type: Option<String>,
    pub learning_stage: Option<String>,
    pub is_recommended: Option<bool>,
    #[serde(skip)]
    pub ui_handle: Option<H>,
}

// Manual impl: `derive(Default)` would demand `H: Default`, which host handle
// types need not provide.
impl<H> Default for RawItem<H> {
    fn default() -> Self {
        RawItem {
            id: None,
            title: None,
            description: None,
            tags: None,
            slug: None,
            content_type: None,
            learning_stage: None,
            is_recommended: None,
            ui_handle: None,
        }
    }
}

/// One indexed catalog item.
///
/// `H` is the host's opaque UI handle type (default `()` for headless use).
/// The engine stores and returns handles so the caller can toggle visibility
/// in place instead of re-rendering, but matching and filtering never read
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPost<H = ()> {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub slug: String,
    pub content_type: ContentType,
    pub learning_stage: LearningStage,
    /// Tri-state on purpose: an absent flag equals neither `Some(true)` nor
    /// `Some(false)` under a recommendation filter.
    pub is_recommended: Option<bool>,
    #[serde(skip)]
    pub ui_handle: Option<H>,
}

impl<H> From<RawItem<H>> for SearchPost<H> {
    /// Ingestion coercion: absent or malformed fields become the documented
    /// defaults (`Guide`, `Beginner`, empty strings, empty tags). Unknown
    /// classification labels coerce to the default variant.
    fn from(raw: RawItem<H>) -> Self {
        SearchPost {
            id: raw.id.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
            slug: raw.slug.unwrap_or_default(),
            content_type: raw
                .content_type
                .as_deref()
                .and_then(ContentType::from_label)
                .unwrap_or_default(),
            learning_stage: raw
                .learning_stage
                .as_deref()
                .and_then(LearningStage::from_label)
                .unwrap_or_default(),
            is_recommended: raw.is_recommended,
            ui_handle: raw.ui_handle,
        }
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// A free-text field the matcher may inspect.
///
/// `Ord` exists so the cache key can sort the selection into canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Description,
    Tags,
}

impl SearchField {
    /// The default selection: every free-text field.
    pub const ALL: [SearchField; 3] = [Self::Title, Self::Description, Self::Tags];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Tags => "tags",
        }
    }
}

/// Structured filter over classification fields. `None` means "no constraint
/// on this field", not "match items where the field is absent".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub content_type: Option<ContentType>,
    pub learning_stage: Option<LearningStage>,
    pub is_recommended: Option<bool>,
}

/// Per-call knobs for [`search`](crate::SearchEngine::search).
///
/// New fields here must be reflected in the cache key derivation
/// ([`cache_key`](crate::cache_key)) in lockstep, or stale results leak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Match raw text instead of folded text.
    pub case_sensitive: bool,
    /// Ordered-subsequence matching instead of contiguous substring.
    pub fuzzy_match: bool,
    /// Truncate the result list. Affects `filtered_count`, never
    /// `total_count`.
    pub max_results: Option<usize>,
    /// Which free-text fields to inspect; a post matches if any of them does.
    pub search_fields: Vec<SearchField>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            case_sensitive: false,
            fuzzy_match: false,
            max_results: None,
            search_fields: SearchField::ALL.to_vec(),
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// What every engine operation returns.
///
/// `posts` keeps the relative order of the index (no relevance ranking in
/// this engine). The pagination/rendering layer consumes this as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "H: Default"))]
pub struct SearchResult<H = ()> {
    pub posts: Vec<SearchPost<H>>,
    /// Size of the full index, regardless of matching or truncation.
    pub total_count: usize,
    /// Size of `posts`.
    pub filtered_count: usize,
    /// Wall-clock duration of this operation, in milliseconds.
    pub search_time_ms: f64,
}

/// Timings of the most recent operation. Overwritten, never accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetrics {
    pub search_time_ms: f64,
    pub filter_time_ms: f64,
    pub total_time_ms: f64,
    pub result_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_labels_coerce_to_defaults() {
        let raw: RawItem = RawItem {
            content_type: Some("podcast".to_string()),
            learning_stage: Some("expert".to_string()),
            ..RawItem::default()
        };
        let post = SearchPost::from(raw);
        assert_eq!(post.content_type, ContentType::Guide);
        assert_eq!(post.learning_stage, LearningStage::Beginner);
    }

    #[test]
    fn absent_fields_become_empty_not_missing() {
        let post = SearchPost::from(RawItem::<()>::default());
        assert_eq!(post.title, "");
        assert_eq!(post.description, "");
        assert!(post.tags.is_empty());
        assert_eq!(post.is_recommended, None);
    }

    #[test]
    fn raw_item_deserializes_collaborator_json() {
        let json = r#"{
            "id": "1",
            "title": "Panduan Menggunakan Anki",
            "tags": ["anki", "srs"],
            "contentType": "tool",
            "unknownField": true
        }"#;
        let raw: RawItem = serde_json::from_str(json).unwrap();
        let post = SearchPost::from(raw);
        assert_eq!(post.id, "1");
        assert_eq!(post.content_type, ContentType::Tool);
        assert_eq!(post.learning_stage, LearningStage::Beginner);
        assert_eq!(post.description, "");
    }
}
