//! Sprint statistics behind the burndown dashboard.

pub mod aggregate;
pub mod chart_data;
