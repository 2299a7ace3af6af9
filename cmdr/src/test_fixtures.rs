// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! JSON rows shaped like Strapi responses, and an in-memory source that serves them.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use constellation_lists::{AuthToken, CollectionPayload, CollectionSource, Column,
                          DEFAULT_ROWS_PER_PAGE, ItemId, PipelineError, PipelineResult,
                          json_field, strapi_identity};
use serde_json::{Value, json};

use crate::ListArgs;

pub fn clubs() -> Vec<Value> {
    vec![
        json!({"id": 1, "documentId": "c1", "name": "Chess", "members": 12, "private": true}),
        json!({"id": 2, "documentId": "c2", "name": "Robotics", "members": 40, "private": false}),
        json!({"id": 3, "documentId": "c3", "name": "Hiking", "members": 7, "private": false}),
    ]
}

pub fn club_columns() -> Vec<Column<Value>> {
    vec![
        Column::new("name", "Name", true, json_field("name")),
        Column::new("members", "Members", true, json_field("members")),
        Column::new("private", "Private", true, json_field("private")),
    ]
}

/// Same values clap produces when only the collection and columns are given.
pub fn list_args(collection: &str, columns: &[&str]) -> ListArgs {
    ListArgs {
        collection: collection.into(),
        query: None,
        sort: None,
        descending: false,
        page: 1,
        rows_per_page: DEFAULT_ROWS_PER_PAGE,
        all: false,
        columns: columns.iter().map(ToString::to_string).collect(),
        status_field: None,
        status: vec![],
        populate: false,
    }
}

/// Clones share state. Fetches return the rows wrapped in a Strapi `data` envelope.
#[derive(Debug, Clone, Default)]
pub struct JsonSource {
    inner: Arc<JsonSourceInner>,
}

#[derive(Debug, Default)]
struct JsonSourceInner {
    rows: Mutex<Vec<Value>>,
    fail_fetch: bool,
    reject_deletes: bool,
    seen_tokens: Mutex<Vec<Option<String>>>,
    deleted: Mutex<Vec<ItemId>>,
}

impl JsonSource {
    pub fn new(rows: Vec<Value>) -> Self {
        Self {
            inner: Arc::new(JsonSourceInner {
                rows: Mutex::new(rows),
                ..Default::default()
            }),
        }
    }

    pub fn failing() -> Self {
        Self {
            inner: Arc::new(JsonSourceInner {
                fail_fetch: true,
                ..Default::default()
            }),
        }
    }

    /// Must be called before the source is cloned.
    pub fn rejecting_deletes(self) -> Self {
        let rows = self.inner.rows.lock().unwrap().clone();
        Self {
            inner: Arc::new(JsonSourceInner {
                rows: Mutex::new(rows),
                reject_deletes: true,
                ..Default::default()
            }),
        }
    }

    pub fn seen_tokens(&self) -> Vec<Option<String>> {
        self.inner.seen_tokens.lock().unwrap().clone()
    }

    pub fn deleted_ids(&self) -> Vec<ItemId> { self.inner.deleted.lock().unwrap().clone() }
}

#[async_trait]
impl CollectionSource<Value> for JsonSource {
    async fn fetch(&self, token: Option<&AuthToken>) -> PipelineResult<CollectionPayload<Value>> {
        self.inner
            .seen_tokens
            .lock()
            .unwrap()
            .push(token.map(|it| it.as_str().to_owned()));

        if self.inner.fail_fetch {
            return Err(PipelineError::HttpStatus {
                url: "http://localhost:1337/api/clubs".into(),
                status: 503,
            });
        }

        let data = self.inner.rows.lock().unwrap().clone();
        Ok(CollectionPayload::Envelope { data })
    }

    async fn delete(&self, id: &ItemId, _token: Option<&AuthToken>) -> PipelineResult<()> {
        if self.inner.reject_deletes {
            return Err(PipelineError::HttpStatus {
                url: format!("http://localhost:1337/api/clubs/{id}"),
                status: 403,
            });
        }
        self.inner
            .rows
            .lock()
            .unwrap()
            .retain(|row| strapi_identity(row) != *id);
        self.inner.deleted.lock().unwrap().push(id.clone());
        Ok(())
    }
}
