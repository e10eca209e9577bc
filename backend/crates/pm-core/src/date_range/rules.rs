use crate::{Boundary, DateRangeError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date window of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ProjectBounds {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Dates occupied by an existing sprint. Both ends are sprint days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintRange {
    pub sprint_id: i64,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SprintRange {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end && self.start <= end
    }
}

/// Everything needed to judge a sprint date: the project window, the other
/// sprints of the project and the sprint being edited (if any).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeRules {
    pub bounds: ProjectBounds,
    pub siblings: Vec<SprintRange>,
    pub sprint_id: Option<i64>,
}

impl DateRangeRules {
    pub fn new(bounds: ProjectBounds, siblings: Vec<SprintRange>, sprint_id: Option<i64>) -> Self {
        Self {
            bounds,
            siblings,
            sprint_id,
        }
    }

    /// Check one boundary against the other boundary's committed value.
    pub fn check(
        &self,
        candidate: NaiveDate,
        other: Option<NaiveDate>,
        boundary: Boundary,
    ) -> Result<(), DateRangeError> {
        check_boundary(
            candidate,
            other,
            boundary,
            &self.bounds,
            &self.siblings,
            self.sprint_id,
        )
    }

    /// Check a complete range, as done when a form reaches the server.
    pub fn check_range(&self, start: NaiveDate, end: NaiveDate) -> Result<(), DateRangeError> {
        self.check(start, Some(end), Boundary::Start)?;
        self.check(end, Some(start), Boundary::End)
    }
}

/// Shared check for both date inputs, in order: crossing the other boundary,
/// leaving the project window, overlapping a sibling sprint. `sprint_id` is the
/// sprint being edited and is never compared with itself.
pub fn check_boundary(
    candidate: NaiveDate,
    other: Option<NaiveDate>,
    boundary: Boundary,
    bounds: &ProjectBounds,
    siblings: &[SprintRange],
    sprint_id: Option<i64>,
) -> Result<(), DateRangeError> {
    match (boundary, other) {
        (Boundary::Start, Some(end)) if candidate > end => {
            return Err(DateRangeError::StartAfterEnd);
        }
        (Boundary::End, Some(start)) if candidate < start => {
            return Err(DateRangeError::EndBeforeStart);
        }
        _ => {}
    }

    if !bounds.contains(candidate) {
        return Err(DateRangeError::OutsideProject {
            boundary,
            min: bounds.start,
            max: bounds.end,
        });
    }

    // With both ends known the whole range must be free, otherwise just the day.
    let (start, end) = match (boundary, other) {
        (Boundary::Start, Some(end)) => (candidate, end),
        (Boundary::End, Some(start)) => (start, candidate),
        _ => (candidate, candidate),
    };

    let conflict = siblings
        .iter()
        .filter(|s| Some(s.sprint_id) != sprint_id)
        .find(|s| s.overlaps(start, end));

    match conflict {
        Some(s) => Err(DateRangeError::Overlaps {
            boundary,
            sprint_id: s.sprint_id,
            title: s.title.clone(),
            start: s.start,
            end: s.end,
        }),
        None => Ok(()),
    }
}
