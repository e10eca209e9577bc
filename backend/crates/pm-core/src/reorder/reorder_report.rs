use crate::{Message, PriorityUpdate};

pub const REORDER_SUCCESS_MESSAGE: &str = "Stories priorities changed successfully";
pub const REORDER_ERROR_MESSAGE: &str = "Error in stories priority update";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Succeeded,
    Failed(String),
}

impl RowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Per-row result of a reorder. Succeeded rows are not rolled back when
/// other rows fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderReport {
    pub rows: Vec<(PriorityUpdate, RowOutcome)>,
}

impl ReorderReport {
    pub fn requested(&self) -> usize {
        self.rows.len()
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &PriorityUpdate> {
        self.rows
            .iter()
            .filter(|(_, outcome)| outcome.is_success())
            .map(|(update, _)| update)
    }

    pub fn failed(&self) -> impl Iterator<Item = (&PriorityUpdate, &str)> {
        self.rows.iter().filter_map(|(update, outcome)| match outcome {
            RowOutcome::Failed(reason) => Some((update, reason.as_str())),
            RowOutcome::Succeeded => None,
        })
    }

    pub fn has_errors(&self) -> bool {
        self.rows.iter().any(|(_, outcome)| !outcome.is_success())
    }

    pub fn message(&self) -> Message {
        if self.has_errors() {
            Message::error(REORDER_ERROR_MESSAGE)
        } else {
            Message::success(REORDER_SUCCESS_MESSAGE)
        }
    }
}
