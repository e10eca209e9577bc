//! Sprint start/end validation.
//!
//! Both date pickers of the sprint form are validated at selection time with
//! the same rules. Checks run in a fixed order: crossing the other boundary,
//! leaving the project window, overlapping another sprint.

pub mod boundary;
pub mod date_range_error;
pub mod rules;
pub mod sprint_date_range;
