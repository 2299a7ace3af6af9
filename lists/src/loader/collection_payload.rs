// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, de::IgnoredAny};

/// What a fetch may resolve to. Backends either return a bare JSON array, or wrap it in
/// an object with a `data` array (Strapi does the latter, with a sibling `meta`).
///
/// Any other shape lands in [`CollectionPayload::Unrecognized`] and loads as an empty
/// collection rather than an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CollectionPayload<T> {
    Bare(Vec<T>),
    Envelope { data: Vec<T> },
    Unrecognized(IgnoredAny),
}

impl<T> CollectionPayload<T> {
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            CollectionPayload::Bare(items) | CollectionPayload::Envelope { data: items } => {
                items
            }
            CollectionPayload::Unrecognized(_) => vec![],
        }
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, CollectionPayload::Unrecognized(_))
    }
}

impl<T> From<Vec<T>> for CollectionPayload<T> {
    fn from(items: Vec<T>) -> Self { CollectionPayload::Bare(items) }
}
