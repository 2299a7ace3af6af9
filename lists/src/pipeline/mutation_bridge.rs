// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Deletes go to the backend first. Local rows are only dropped once the backend has
//! confirmed, so a rejected delete never leaves the view out of sync.

use crate::{DEBUG_PIPELINE_MOD, ItemId, ListPipeline, PipelineResult};

/// Outcome of one delete in [`ListPipeline::remove_selected`].
#[derive(Debug)]
pub struct RemoveOutcome {
    pub id: ItemId,
    /// Number of rows removed locally, or why the backend refused.
    pub result: PipelineResult<usize>,
}

impl<T: Send + 'static> ListPipeline<T> {
    /// Asks the backend to delete `id`. On success every local row with that identity
    /// is dropped (and deselected), and the number of dropped rows is returned. On
    /// failure nothing changes locally and the error is returned.
    ///
    /// # Errors
    ///
    /// Whatever [`crate::CollectionSource::delete`] returns, eg:
    /// [`crate::PipelineError::HttpStatus`] when the backend rejects the request.
    pub async fn remove(&mut self, id: &ItemId) -> PipelineResult<usize> {
        if let Err(error) = self.source.delete(id, self.token.as_ref()).await {
            tracing::error!(
                message = "❌ Delete rejected, keeping row",
                id = %id,
                error = ?error
            );
            return Err(error);
        }

        let before = self.rows.len();
        let identity = &self.config.identity;
        self.rows.retain(|row| identity(row) != *id);
        self.selection.deselect(id);
        let removed = before - self.rows.len();

        DEBUG_PIPELINE_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🗑️ Row removed",
                id = %id,
                removed = %removed,
                remaining = %self.rows.len()
            );
        });

        Ok(removed)
    }

    /// Runs [`Self::remove`] for every selected id, in selection order. Failed ids stay
    /// selected.
    pub async fn remove_selected(&mut self) -> Vec<RemoveOutcome> {
        let ids = self.selection.ids().to_vec();
        let mut outcomes = Vec::with_capacity(ids.len());
        for id in ids {
            let result = self.remove(&id).await;
            outcomes.push(RemoveOutcome { id, result });
        }
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PipelineError, SortDescriptor,
                test_fixtures::{Member, ScriptedSource, ids, member, member_columns,
                                member_identity}};
    use pretty_assertions::assert_eq;

    fn two_rows() -> Vec<Member> {
        vec![
            member(1, "Zeta", "Hiking", None, false),
            member(2, "Alpha", "Chess", None, false),
        ]
    }

    async fn pipeline_over(source: ScriptedSource) -> ListPipeline<Member> {
        let mut pipeline = ListPipeline::builder(source, member_identity)
            .columns(member_columns())
            .initial_sort(SortDescriptor::ascending("name"))
            .build();
        pipeline.load().await;
        pipeline
    }

    #[tokio::test]
    async fn test_remove_after_confirm() {
        let source = ScriptedSource::with_rows(two_rows());
        let mut pipeline = pipeline_over(source.clone()).await;

        let removed = pipeline.remove(&ItemId::Numeric(1)).await.unwrap();

        assert_eq!(removed, 1);
        assert_eq!(ids(&pipeline.page_items()), vec![2]);
        assert_eq!(source.deleted_ids(), vec![ItemId::Numeric(1)]);
    }

    #[tokio::test]
    async fn test_rejected_delete_keeps_rows() {
        let source = ScriptedSource::with_rows(two_rows()).rejecting_deletes();
        let mut pipeline = pipeline_over(source.clone()).await;
        pipeline.toggle_selected(ItemId::Numeric(1));

        let result = pipeline.remove(&ItemId::Numeric(1)).await;

        assert!(matches!(result, Err(PipelineError::Rejected { .. })));
        assert_eq!(pipeline.rows().len(), 2);
        assert!(pipeline.selection().contains(&ItemId::Numeric(1)));
        assert!(source.deleted_ids().is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_id_removes_nothing() {
        let mut pipeline = pipeline_over(ScriptedSource::with_rows(two_rows())).await;
        assert_eq!(pipeline.remove(&ItemId::Numeric(99)).await.unwrap(), 0);
        assert_eq!(pipeline.rows().len(), 2);
    }

    #[tokio::test]
    async fn test_remove_drops_selection() {
        let mut pipeline = pipeline_over(ScriptedSource::with_rows(two_rows())).await;
        pipeline.toggle_selected(ItemId::Numeric(2));
        pipeline.remove(&ItemId::Numeric(2)).await.unwrap();
        assert!(pipeline.selection().is_empty());
    }

    #[tokio::test]
    async fn test_remove_selected_reports_each() {
        let source = ScriptedSource::with_rows(two_rows());
        let mut pipeline = pipeline_over(source.clone()).await;
        pipeline.toggle_selected(ItemId::Numeric(2));
        pipeline.toggle_selected(ItemId::Numeric(1));

        let outcomes = pipeline.remove_selected().await;

        let summary: Vec<(ItemId, usize)> = outcomes
            .into_iter()
            .map(|it| (it.id, it.result.unwrap()))
            .collect();
        assert_eq!(
            summary,
            vec![(ItemId::Numeric(2), 1), (ItemId::Numeric(1), 1)]
        );
        assert!(pipeline.rows().is_empty());
        assert!(pipeline.selection().is_empty());
    }
}
