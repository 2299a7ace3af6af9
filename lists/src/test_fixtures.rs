// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared rows, columns and an in-memory [`CollectionSource`] for tests.

use std::{collections::VecDeque,
          sync::{Arc, Mutex,
                 atomic::{AtomicBool, AtomicUsize, Ordering}}};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{AuthToken, CollectionPayload, CollectionSource, Column, ItemId,
            PipelineError, PipelineResult, StatusFacet};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub club: String,
    pub points: Option<i64>,
    pub blocked: bool,
}

pub fn member(id: u64, name: &str, club: &str, points: Option<i64>, blocked: bool) -> Member {
    Member {
        id,
        name: name.into(),
        club: club.into(),
        points,
        blocked,
    }
}

/// | id | name  | club     | points | status  |
/// |----|-------|----------|--------|---------|
/// | 1  | Zeta  | Hiking   | 100    | active  |
/// | 2  | Alpha | Chess    | 250    | active  |
/// | 3  | Gamma | Robotics | 1200   | blocked |
/// | 4  | Beta  | Chess    | 900    | active  |
pub fn members() -> Vec<Member> {
    vec![
        member(1, "Zeta", "Hiking", Some(100), false),
        member(2, "Alpha", "Chess", Some(250), false),
        member(3, "Gamma", "Robotics", Some(1200), true),
        member(4, "Beta", "Chess", Some(900), false),
    ]
}

pub fn member_status(it: &Member) -> String {
    if it.blocked { "blocked" } else { "active" }.to_owned()
}

pub fn member_identity(it: &Member) -> ItemId { ItemId::Numeric(it.id) }

pub fn member_columns() -> Vec<Column<Member>> {
    vec![
        Column::new("id", "Id", true, |it: &Member| it.id.into()),
        Column::new("name", "Name", true, |it: &Member| (&it.name).into()),
        Column::new("club", "Club", true, |it: &Member| (&it.club).into()),
        Column::new("points", "Points", true, |it: &Member| it.points.into()),
        Column::new("status", "Status", false, |it: &Member| member_status(it).into()),
    ]
}

pub fn status_facet() -> StatusFacet<Member> {
    StatusFacet::new(member_status, ["active", "blocked"])
}

pub fn ids(rows: &[&Member]) -> Vec<u64> { rows.iter().map(|it| it.id).collect() }

/// In-memory backend. Clones share state, so a test can keep one clone to script
/// responses and inspect calls after handing another to a pipeline.
///
/// - `fetch` pops a queued response if there is one, otherwise returns the current
///   rows as a bare array.
/// - `delete` removes the row (so later fetches don't return it) unless deletes are
///   rejected.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    inner: Arc<ScriptedSourceInner>,
}

#[derive(Debug, Default)]
struct ScriptedSourceInner {
    rows: Mutex<Vec<Member>>,
    responses: Mutex<VecDeque<PipelineResult<CollectionPayload<Member>>>>,
    fetch_count: AtomicUsize,
    seen_tokens: Mutex<Vec<Option<String>>>,
    deleted: Mutex<Vec<ItemId>>,
    reject_deletes: AtomicBool,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl ScriptedSource {
    pub fn with_rows(rows: Vec<Member>) -> Self {
        let it = Self::default();
        *it.inner.rows.lock().unwrap() = rows;
        it
    }

    /// Every fetch waits for [`Self::gate`] to be notified before resolving.
    pub fn gated(self) -> Self {
        *self.inner.gate.lock().unwrap() = Some(Arc::new(Notify::new()));
        self
    }

    pub fn gate(&self) -> Arc<Notify> {
        self.inner
            .gate
            .lock()
            .unwrap()
            .clone()
            .expect("source is not gated")
    }

    pub fn rejecting_deletes(self) -> Self {
        self.inner.reject_deletes.store(true, Ordering::SeqCst);
        self
    }

    pub fn push_response(&self, response: PipelineResult<CollectionPayload<Member>>) {
        self.inner.responses.lock().unwrap().push_back(response);
    }

    pub fn fetch_count(&self) -> usize { self.inner.fetch_count.load(Ordering::SeqCst) }

    pub fn seen_tokens(&self) -> Vec<Option<String>> {
        self.inner.seen_tokens.lock().unwrap().clone()
    }

    pub fn deleted_ids(&self) -> Vec<ItemId> { self.inner.deleted.lock().unwrap().clone() }
}

#[async_trait]
impl CollectionSource<Member> for ScriptedSource {
    async fn fetch(
        &self,
        token: Option<&AuthToken>,
    ) -> PipelineResult<CollectionPayload<Member>> {
        self.inner.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.inner
            .seen_tokens
            .lock()
            .unwrap()
            .push(token.map(|it| it.as_str().to_owned()));

        let gate = self.inner.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let queued = self.inner.responses.lock().unwrap().pop_front();
        match queued {
            Some(response) => response,
            None => Ok(self.inner.rows.lock().unwrap().clone().into()),
        }
    }

    async fn delete(&self, id: &ItemId, _token: Option<&AuthToken>) -> PipelineResult<()> {
        if self.inner.reject_deletes.load(Ordering::SeqCst) {
            return Err(PipelineError::rejected("scripted rejection"));
        }
        self.inner
            .rows
            .lock()
            .unwrap()
            .retain(|it| member_identity(it) != *id);
        self.inner.deleted.lock().unwrap().push(id.clone());
        Ok(())
    }
}
