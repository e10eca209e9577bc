use crate::{PriorityUpdate, ReorderReport, RowOutcome};

/// Collects exactly one outcome per row of a concurrent batch.
///
/// A second outcome for the same row is ignored, so a completion handler that
/// fires twice cannot complete the batch early.
#[derive(Debug, Clone)]
pub struct SettledBatch {
    updates: Vec<PriorityUpdate>,
    outcomes: Vec<Option<RowOutcome>>,
    settled: usize,
}

impl SettledBatch {
    pub fn new(updates: Vec<PriorityUpdate>) -> Self {
        let outcomes = vec![None; updates.len()];
        Self {
            updates,
            outcomes,
            settled: 0,
        }
    }

    pub fn updates(&self) -> &[PriorityUpdate] {
        &self.updates
    }

    /// Returns `false` when the row is unknown or already settled.
    pub fn record(&mut self, index: usize, outcome: RowOutcome) -> bool {
        match self.outcomes.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(outcome);
                self.settled += 1;
                true
            }
            _ => false,
        }
    }

    pub fn settled(&self) -> usize {
        self.settled
    }

    pub fn is_complete(&self) -> bool {
        self.settled == self.updates.len()
    }

    /// Rows without an outcome are reported as failed.
    pub fn into_report(self) -> ReorderReport {
        let rows = self
            .updates
            .into_iter()
            .zip(self.outcomes)
            .map(|(update, outcome)| {
                let outcome =
                    outcome.unwrap_or_else(|| RowOutcome::Failed("no response".to_string()));
                (update, outcome)
            })
            .collect();

        ReorderReport { rows }
    }
}
