//! Persists a reordered sprint backlog.

use crate::{Channel, ClientResult, Notifier};

use pm_config::ReorderMode;
use pm_core::{PriorityUpdate, ReorderReport, RowOutcome, SettledBatch, priority_updates};

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};
use serde_json::json;

pub struct BacklogReorderController {
    channel: Arc<dyn Channel>,
    notifier: Arc<dyn Notifier>,
    mode: ReorderMode,
}

impl BacklogReorderController {
    pub fn new(channel: Arc<dyn Channel>, notifier: Arc<dyn Notifier>, mode: ReorderMode) -> Self {
        Self {
            channel,
            notifier,
            mode,
        }
    }

    pub fn mode(&self) -> ReorderMode {
        self.mode
    }

    /// Save `story_ids` (display order) with the configured mode.
    pub async fn save_order(&self, sprint_id: Option<i64>, story_ids: &[i64]) -> ReorderReport {
        match self.mode {
            ReorderMode::PerRow => self.reorder(story_ids).await,
            ReorderMode::Batch => self.reorder_atomic(sprint_id, story_ids).await,
        }
    }

    /// One `PUT /Story/:id` per row, all in flight at once.
    ///
    /// Rows that succeed stay saved even when others fail.
    pub async fn reorder(&self, story_ids: &[i64]) -> ReorderReport {
        let updates = priority_updates(story_ids);
        let mut batch = SettledBatch::new(updates.clone());

        let requests = updates.iter().map(|update| self.put_priority(update));
        for (index, result) in join_all(requests).await.into_iter().enumerate() {
            let outcome = match result {
                Ok(()) => RowOutcome::Succeeded,
                Err(e) => {
                    warn!(
                        "Priority update failed for story {}: {}",
                        updates[index].story_id, e
                    );
                    RowOutcome::Failed(e.user_message())
                }
            };
            batch.record(index, outcome);
        }

        let report = batch.into_report();
        debug!(
            "Reordered {} stories, {} failed",
            report.requested(),
            report.failed().count()
        );
        // Nothing moved, nothing to report
        if report.requested() > 0 {
            self.notifier.notify(&report.message());
        }
        report
    }

    /// The whole list in one `PUT /Story/priorities`, applied all-or-nothing.
    pub async fn reorder_atomic(
        &self,
        sprint_id: Option<i64>,
        story_ids: &[i64],
    ) -> ReorderReport {
        if story_ids.is_empty() {
            return ReorderReport { rows: Vec::new() };
        }

        let updates = priority_updates(story_ids);
        let body = json!({ "sprint_id": sprint_id, "story_ids": story_ids });

        let outcome = match self.channel.put("/Story/priorities", body).await {
            Ok(_) => RowOutcome::Succeeded,
            Err(e) => {
                warn!("Batch priority update failed: {}", e);
                RowOutcome::Failed(e.user_message())
            }
        };

        let report = ReorderReport {
            rows: updates
                .into_iter()
                .map(|update| (update, outcome.clone()))
                .collect(),
        };
        self.notifier.notify(&report.message());
        report
    }

    async fn put_priority(&self, update: &PriorityUpdate) -> ClientResult<()> {
        let path = format!("/Story/{}", update.story_id);
        self.channel
            .put(&path, json!({ "priority": update.priority }))
            .await
            .map(|_| ())
    }
}
