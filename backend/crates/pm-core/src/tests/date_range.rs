use crate::tests::{day, q1_2024, sprint_a};
use crate::{
    Boundary, DateRangeError, DateRangeRules, ProjectBounds, Selection, SprintDateRange,
    SprintRange, check_boundary,
};

use chrono::{Duration, NaiveDate};
use googletest::prelude::*;
use proptest::prelude::*;

fn add_form() -> SprintDateRange {
    SprintDateRange::new(DateRangeRules::new(q1_2024(), vec![sprint_a()], None), None, None)
}

// =========================================================================
// Start date
// =========================================================================

#[test]
fn given_existing_sprint_when_start_inside_it_then_rejected_and_field_cleared() {
    // Given
    let mut range = add_form();

    // When
    let selection = range.select(Boundary::Start, day(2024, 1, 15));

    // Then
    match selection {
        Selection::Rejected { error, restored } => {
            assert!(matches!(error, DateRangeError::Overlaps { sprint_id: 10, .. }));
            assert_that!(restored, none());
        }
        Selection::Accepted(_) => panic!("overlapping start accepted"),
    }
    assert_that!(range.start(), none());
    assert!(range.field(Boundary::Start).invalid);
}

#[test]
fn given_existing_sprint_when_start_after_it_then_accepted() {
    let mut range = add_form();

    let selection = range.select(Boundary::Start, day(2024, 1, 21));

    assert_that!(selection, eq(&Selection::Accepted(day(2024, 1, 21))));
    assert_that!(range.start(), some(eq(day(2024, 1, 21))));
    assert!(!range.field(Boundary::Start).invalid);
}

#[test]
fn given_rejected_start_when_valid_start_picked_then_flag_cleared() {
    let mut range = add_form();
    range.select(Boundary::Start, day(2024, 1, 15));

    range.select(Boundary::Start, day(2024, 2, 1));

    assert!(!range.field(Boundary::Start).invalid);
    assert_that!(range.start(), some(eq(day(2024, 2, 1))));
}

#[test]
fn given_committed_start_when_bad_start_picked_then_previous_value_restored() {
    let mut range = add_form();
    range.select(Boundary::Start, day(2024, 2, 1));

    let selection = range.select(Boundary::Start, day(2023, 12, 31));

    assert_that!(
        selection,
        eq(&Selection::Rejected {
            error: DateRangeError::OutsideProject {
                boundary: Boundary::Start,
                min: day(2024, 1, 1),
                max: day(2024, 3, 31),
            },
            restored: Some(day(2024, 2, 1)),
        })
    );
    assert_that!(range.start(), some(eq(day(2024, 2, 1))));
}

#[test]
fn given_end_set_when_start_after_end_then_crossing_reported_first() {
    let mut range = add_form();
    range.select(Boundary::End, day(2024, 2, 10));

    // Outside the project as well, but crossing is checked first
    let selection = range.select(Boundary::Start, day(2024, 4, 2));

    assert!(matches!(
        selection,
        Selection::Rejected {
            error: DateRangeError::StartAfterEnd,
            ..
        }
    ));
}

// =========================================================================
// End date
// =========================================================================

#[test]
fn given_start_set_when_end_before_start_then_end_field_flagged() {
    let mut range = add_form();
    range.select(Boundary::Start, day(2024, 2, 10));

    let selection = range.select(Boundary::End, day(2024, 2, 1));

    assert!(matches!(
        selection,
        Selection::Rejected {
            error: DateRangeError::EndBeforeStart,
            ..
        }
    ));
    assert!(range.field(Boundary::End).invalid);
    assert!(!range.field(Boundary::Start).invalid);
}

#[test]
fn given_start_before_existing_sprint_when_end_spans_it_then_rejected() {
    let mut range = add_form();
    range.select(Boundary::Start, day(2024, 1, 2));

    let selection = range.select(Boundary::End, day(2024, 1, 25));

    assert!(!selection.is_accepted());
    assert_that!(range.end(), none());
}

#[test]
fn given_end_on_existing_sprint_start_then_rejected_inclusive() {
    let mut range = add_form();
    range.select(Boundary::Start, day(2024, 1, 2));

    let selection = range.select(Boundary::End, day(2024, 1, 10));

    assert!(!selection.is_accepted());
}

#[test]
fn given_end_day_before_existing_sprint_then_accepted() {
    let mut range = add_form();
    range.select(Boundary::Start, day(2024, 1, 2));

    let selection = range.select(Boundary::End, day(2024, 1, 9));

    assert!(selection.is_accepted());
    assert!(range.is_complete());
}

// =========================================================================
// Edit mode
// =========================================================================

#[test]
fn given_edited_sprint_when_moving_inside_own_range_then_accepted() {
    let rules = DateRangeRules::new(q1_2024(), vec![sprint_a()], Some(10));
    let mut range = SprintDateRange::new(rules, Some(day(2024, 1, 10)), Some(day(2024, 1, 20)));

    let selection = range.select(Boundary::Start, day(2024, 1, 12));

    assert!(selection.is_accepted());
}

#[test]
fn given_complete_range_when_check_range_then_each_rule_applies() {
    let rules = DateRangeRules::new(q1_2024(), vec![sprint_a()], None);

    assert_that!(rules.check_range(day(2024, 2, 1), day(2024, 2, 14)), ok(anything()));
    assert_that!(rules.check_range(day(2024, 1, 5), day(2024, 1, 12)), err(anything()));
    assert_that!(rules.check_range(day(2024, 3, 20), day(2024, 4, 3)), err(anything()));
}

#[test]
fn given_overlap_when_message_then_dates_use_user_format() {
    let err = check_boundary(
        day(2024, 1, 15),
        None,
        Boundary::Start,
        &q1_2024(),
        &[sprint_a()],
        None,
    )
    .unwrap_err();

    assert_that!(
        err.message("%d.%m.%Y"),
        eq("Start date conflicts with sprint 'Sprint A' (10.01.2024 - 20.01.2024).")
    );
}

#[test]
fn given_outside_project_when_message_then_mentions_window() {
    let err = check_boundary(
        day(2024, 5, 1),
        None,
        Boundary::End,
        &q1_2024(),
        &[],
        None,
    )
    .unwrap_err();

    assert_that!(err.boundary(), eq(Boundary::End));
    assert_that!(
        err.message("%Y-%m-%d"),
        contains_substring("End date must be between 2024-01-01 and 2024-03-31")
    );
}

// =========================================================================
// Properties
// =========================================================================

fn q1_day() -> impl Strategy<Value = NaiveDate> {
    (-20i64..110).prop_map(|offset| day(2024, 1, 1) + Duration::days(offset))
}

proptest! {
    #[test]
    fn start_accepted_iff_inside_bounds_before_end_and_free(
        candidate in q1_day(),
        end in proptest::option::of(q1_day()),
    ) {
        let bounds: ProjectBounds = q1_2024();
        let sibling: SprintRange = sprint_a();
        let mut range = SprintDateRange::new(
            DateRangeRules::new(bounds, vec![sibling.clone()], None),
            Some(day(2024, 3, 1)),
            end,
        );

        let selection = range.select(Boundary::Start, candidate);

        let range_end = end.unwrap_or(candidate);
        let expected = bounds.contains(candidate)
            && end.is_none_or(|e| candidate <= e)
            && !sibling.overlaps(candidate, range_end);

        prop_assert_eq!(selection.is_accepted(), expected);
        if expected {
            prop_assert_eq!(range.start(), Some(candidate));
        } else {
            prop_assert_eq!(range.start(), Some(day(2024, 3, 1)));
            prop_assert!(range.field(Boundary::Start).invalid);
        }
    }

    #[test]
    fn end_accepted_iff_inside_bounds_after_start_and_free(
        candidate in q1_day(),
        start in proptest::option::of(q1_day()),
    ) {
        let bounds = q1_2024();
        let sibling = sprint_a();
        let mut range = SprintDateRange::new(
            DateRangeRules::new(bounds, vec![sibling.clone()], None),
            start,
            None,
        );

        let selection = range.select(Boundary::End, candidate);

        let range_start = start.unwrap_or(candidate);
        let expected = bounds.contains(candidate)
            && start.is_none_or(|s| candidate >= s)
            && !sibling.overlaps(range_start, candidate);

        prop_assert_eq!(selection.is_accepted(), expected);
        if !expected {
            prop_assert_eq!(range.end(), None);
        }
    }
}
