// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared catalog builders for integration and property tests.

#![allow(dead_code)]

use pilah::{RawItem, SearchEngine};

/// The canonical three-post seed catalog: an Anki tool guide, an immersion
/// starter guide, and a content-picking methodology post.
pub fn seed_items() -> Vec<RawItem> {
    serde_json::from_str(
        r#"[
            {"id": "1", "title": "Panduan Menggunakan Anki",
             "description": "Cara memakai SRS untuk kosakata",
             "tags": ["anki", "srs"], "slug": "panduan-anki",
             "contentType": "tool", "learningStage": "beginner",
             "isRecommended": true},
            {"id": "2", "title": "Memulai Perjalanan Immersion",
             "description": "Langkah pertama belajar lewat konten asli",
             "tags": ["immersion", "beginner"], "slug": "memulai-immersion",
             "contentType": "guide", "learningStage": "beginner"},
            {"id": "3", "title": "Memilih Konten yang Tepat",
             "description": "Anime dan manga sebagai bahan belajar",
             "tags": ["anime", "manga"], "slug": "memilih-konten",
             "contentType": "methodology", "learningStage": "intermediate"}
        ]"#,
    )
    .expect("seed catalog is valid JSON")
}

pub fn seed_engine() -> SearchEngine {
    SearchEngine::new(seed_items())
}

/// A synthetic catalog of `n` posts with predictable ids and rotating
/// classifications.
pub fn synthetic_items(n: usize) -> Vec<RawItem> {
    (0..n)
        .map(|i| RawItem {
            id: Some(format!("post-{i}")),
            title: Some(format!("Judul {i} tentang belajar bahasa")),
            description: Some(format!("Deskripsi nomor {i}")),
            tags: Some(vec![format!("tag{}", i % 7), "belajar".to_string()]),
            slug: Some(format!("judul-{i}")),
            content_type: Some(["guide", "tool", "methodology", "practice"][i % 4].to_string()),
            learning_stage: Some(["beginner", "intermediate", "advanced"][i % 3].to_string()),
            is_recommended: Some(i % 5 == 0),
            ..RawItem::default()
        })
        .collect()
}
