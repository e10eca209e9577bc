//! Backlog reordering: one priority update per row, settled as a batch.

pub mod priority_update;
pub mod reorder_report;
pub mod settled_batch;
