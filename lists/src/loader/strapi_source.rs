// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`CollectionSource`] over the Strapi REST API, plus helpers for working with
//! untyped [`serde_json::Value`] rows (the identity extractor and a column accessor).

use std::{fmt::{Debug, Formatter},
          marker::PhantomData};

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::strapi_pagination::constants as pagination;
use crate::{AuthToken, CellValue, CollectionPayload, CollectionSource, DEBUG_LOADER_MOD,
            ItemId, PageCollector, PipelineError, PipelineResult, StrapiPage,
            create_client_with_user_agent};

mod constants {
    pub const API_PREFIX: &str = "api";
    pub const DOCUMENT_ID: &str = "documentId";
    pub const ID: &str = "id";
}

/// One Strapi collection type, eg: `clubs` at `{base_url}/api/clubs`.
///
/// - `fetch` is `GET {base_url}/api/{collection}` plus any extra query pairs (eg:
///   `populate=*`). It asks for 100 rows per page and keeps requesting the next page
///   until `meta.pagination.pageCount` is reached, so the whole collection loads.
/// - `delete` is `DELETE {base_url}/api/{collection}/{id}`.
/// - When a token is given it is sent as `Authorization: Bearer <token>`.
/// - Non 2xx responses become [`PipelineError::HttpStatus`].
pub struct StrapiCollection<T> {
    client: reqwest::Client,
    base_url: String,
    collection: String,
    query: Vec<(String, String)>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> StrapiCollection<T> {
    /// # Errors
    ///
    /// Returns an error if the underlying http client can't be built.
    pub fn try_new(
        base_url: impl Into<String>,
        collection: impl Into<String>,
    ) -> PipelineResult<Self> {
        Ok(Self::new_with_client(
            create_client_with_user_agent(None)?,
            base_url,
            collection,
        ))
    }

    pub fn new_with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            collection: collection.into(),
            query: vec![],
            _phantom: PhantomData,
        }
    }

    /// Adds a query pair to every fetch.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            constants::API_PREFIX,
            self.collection.trim_matches('/')
        )
    }

    #[must_use]
    pub fn item_url(&self, id: &ItemId) -> String {
        format!("{}/{id}", self.collection_url())
    }

    fn authorize(request: RequestBuilder, token: Option<&AuthToken>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }

    async fn send(request: RequestBuilder, url: &str) -> PipelineResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|source| PipelineError::Transport {
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::HttpStatus {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

impl<T> Debug for StrapiCollection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrapiCollection")
            .field("url", &self.collection_url())
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T> CollectionSource<T> for StrapiCollection<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch(&self, token: Option<&AuthToken>) -> PipelineResult<CollectionPayload<T>> {
        let url = self.collection_url();

        DEBUG_LOADER_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📡 Fetch collection",
                url = %url,
                query = ?self.query,
                has_token = token.is_some()
            );
        });

        let mut collector = PageCollector::default();
        let mut page = 1;
        loop {
            let request = self
                .client
                .get(&url)
                .query(&self.query)
                .query(&[
                    (pagination::PAGE_PARAM, page),
                    (pagination::PAGE_SIZE_PARAM, pagination::PAGE_SIZE),
                ]);
            let response = Self::send(Self::authorize(request, token), &url).await?;
            let body = response
                .json::<StrapiPage<T>>()
                .await
                .map_err(|source| PipelineError::Decode {
                    url: url.clone(),
                    source,
                })?;

            match collector.push(body) {
                Some(next_page) => page = next_page,
                None => break,
            }
        }

        Ok(collector.finish(&url))
    }

    async fn delete(&self, id: &ItemId, token: Option<&AuthToken>) -> PipelineResult<()> {
        let url = self.item_url(id);

        DEBUG_LOADER_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "🗑️ Delete row", url = %url);
        });

        let request = Self::authorize(self.client.delete(&url), token);
        Self::send(request, &url).await?;

        Ok(())
    }
}

/// Identity extractor for Strapi rows: the opaque `documentId` when present, otherwise
/// the numeric `id`.
///
/// A row with neither gets `ItemId::Document("")`, and every such row shares that id.
/// They can't be told apart: [`crate::ListPipeline::remove`] of that id drops all of
/// them locally, and [`crate::ListPipeline::upsert`] replaces the first one. Strapi
/// always sends `id`, so this only happens with a custom `fields` selection that
/// leaves both out.
#[must_use]
pub fn strapi_identity(row: &Value) -> ItemId {
    if let Some(document_id) = row.get(constants::DOCUMENT_ID).and_then(Value::as_str) {
        return ItemId::Document(document_id.to_owned());
    }
    match row.get(constants::ID).and_then(Value::as_u64) {
        Some(id) => ItemId::Numeric(id),
        None => ItemId::Document(String::new()),
    }
}

/// Column accessor that reads a top level field of a JSON row.
///
/// Missing fields and `null` are [`CellValue::Empty`]. Arrays and objects are shown as
/// compact JSON text.
pub fn json_field(name: impl Into<String>) -> impl Fn(&Value) -> CellValue + Send + Sync + 'static {
    let name = name.into();
    move |row: &Value| json_to_cell(row.get(&name))
}

#[must_use]
pub fn json_to_cell(value: Option<&Value>) -> CellValue {
    match value {
        None | Some(Value::Null) => CellValue::Empty,
        Some(Value::Bool(it)) => CellValue::Bool(*it),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(it) => CellValue::Integer(it),
            None => number.as_f64().map_or(CellValue::Empty, CellValue::Float),
        },
        Some(Value::String(it)) => CellValue::Text(it.clone()),
        Some(it) => CellValue::Text(it.to_string()),
    }
}
