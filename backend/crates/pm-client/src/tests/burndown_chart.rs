use crate::tests::{chart_data, day};
use crate::{BurndownChart, TooltipRow, Y_AXIS_TITLE};

use googletest::prelude::*;

#[test]
fn given_chart_data_then_titles_formatted() {
    let chart = BurndownChart::new(&chart_data(4), "%d.%m.%Y");

    assert_that!(chart.title, eq("08.01.2024 - 12.01.2024 - Sprint 7"));
    assert_that!(
        chart.subtitle,
        eq("Sprint task burndown chart - duration 5 days - 4 working days ")
    );
    assert_that!(chart.y_axis_title, eq(Y_AXIS_TITLE));
    assert_that!(chart.x_min, eq(day(2024, 1, 8)));
    assert_that!(chart.series, len(eq(2)));
}

#[test]
fn given_no_tasks_then_no_series() {
    let chart = BurndownChart::new(&chart_data(0), "%Y-%m-%d");

    assert_that!(chart.series, len(eq(0)));
    assert_that!(chart.axis_label(day(2024, 1, 8)), none());
    assert_that!(chart.tooltip(day(2024, 1, 8)), none());
}

#[test]
fn given_day_without_points_then_label_hidden() {
    let chart = BurndownChart::new(&chart_data(4), "%Y-%m-%d");

    assert_that!(chart.axis_label(day(2024, 1, 13)), none());
}

#[test]
fn given_excluded_day_then_label_not_planned() {
    let chart = BurndownChart::new(&chart_data(4), "%Y-%m-%d");

    let label = chart.axis_label(day(2024, 1, 10)).unwrap();
    assert_that!(label.text, eq("2024-01-10"));
    assert!(label.not_planned);

    let label = chart.axis_label(day(2024, 1, 9)).unwrap();
    assert!(!label.not_planned);
}

#[test]
fn given_day_after_sprint_then_label_not_planned() {
    let mut data = chart_data(4);
    data.chart_data[1]
        .data
        .push(crate::tests::point(day(2024, 1, 15), 1.0, false));
    let chart = BurndownChart::new(&data, "%Y-%m-%d");

    assert!(chart.axis_label(day(2024, 1, 15)).unwrap().not_planned);
}

#[test]
fn given_plain_day_then_tooltip_lists_series_and_rates() {
    let chart = BurndownChart::new(&chart_data(4), "%Y-%m-%d");

    let tooltip = chart.tooltip(day(2024, 1, 9)).unwrap();

    assert_that!(tooltip.title, eq("2024-01-09"));
    assert_that!(tooltip.sections, len(eq(2)));
    assert_eq!(
        tooltip.sections[0].rows,
        vec![
            TooltipRow::new("Ideal", "3"),
            TooltipRow::new("Actual", "3")
        ]
    );
    // one task done over two days
    assert_eq!(
        tooltip.sections[1].rows,
        vec![
            TooltipRow::new("Ideal", "1"),
            TooltipRow::new("Actual", "0.50 (2 days)")
        ]
    );
}

#[test]
fn given_point_after_skipped_days_then_title_is_range() {
    let chart = BurndownChart::new(&chart_data(4), "%Y-%m-%d");

    let tooltip = chart.tooltip(day(2024, 1, 11)).unwrap();

    assert_that!(tooltip.title, eq("2024-01-10 - 2024-01-11"));
}

#[test]
fn given_nothing_done_yet_then_no_actual_rate() {
    let chart = BurndownChart::new(&chart_data(4), "%Y-%m-%d");

    let tooltip = chart.tooltip(day(2024, 1, 8)).unwrap();

    assert_that!(tooltip.sections[1].rows, len(eq(1)));
}

#[test]
fn given_series_then_days_sorted_and_unique() {
    let chart = BurndownChart::new(&chart_data(4), "%Y-%m-%d");

    assert_that!(chart.days(), len(eq(5)));
    assert_eq!(chart.days().first(), Some(&day(2024, 1, 8)));
}
