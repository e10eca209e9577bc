use crate::{Boundary, DateRangeError, DateRangeRules};

use chrono::NaiveDate;

/// State of one date input: the last accepted value and the error flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateField {
    pub value: Option<NaiveDate>,
    pub invalid: bool,
}

/// Result of picking a date in one of the two inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Accepted(NaiveDate),
    /// The input shows `restored` again (empty when `None`).
    Rejected {
        error: DateRangeError,
        restored: Option<NaiveDate>,
    },
}

impl Selection {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// The start/end pair of the sprint form.
#[derive(Debug, Clone)]
pub struct SprintDateRange {
    rules: DateRangeRules,
    start: DateField,
    end: DateField,
}

impl SprintDateRange {
    pub fn new(rules: DateRangeRules, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            rules,
            start: DateField {
                value: start,
                invalid: false,
            },
            end: DateField {
                value: end,
                invalid: false,
            },
        }
    }

    pub fn rules(&self) -> &DateRangeRules {
        &self.rules
    }

    pub fn field(&self, boundary: Boundary) -> DateField {
        match boundary {
            Boundary::Start => self.start,
            Boundary::End => self.end,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start.value
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end.value
    }

    /// Both dates present and neither input flagged.
    pub fn is_complete(&self) -> bool {
        self.start.value.is_some()
            && self.end.value.is_some()
            && !self.start.invalid
            && !self.end.invalid
    }

    pub fn select(&mut self, boundary: Boundary, candidate: NaiveDate) -> Selection {
        let other = self.field(boundary.opposite()).value;
        let result = self.rules.check(candidate, other, boundary);

        let field = match boundary {
            Boundary::Start => &mut self.start,
            Boundary::End => &mut self.end,
        };

        match result {
            Ok(()) => {
                field.value = Some(candidate);
                field.invalid = false;
                Selection::Accepted(candidate)
            }
            Err(error) => {
                field.invalid = true;
                Selection::Rejected {
                    error,
                    restored: field.value,
                }
            }
        }
    }
}
