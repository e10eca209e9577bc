use crate::charts::format::{format_duration, format_percent, format_thousands};
use crate::charts::tooltip::{Tooltip, TooltipRow, TooltipSection};

use pm_core::PieSlice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieKind {
    PhaseDurations,
    TaskTypes,
}

impl PieKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::PhaseDurations => "Task durations in phases",
            Self::TaskTypes => "Task types",
        }
    }

    pub fn series_name(&self) -> &'static str {
        match self {
            Self::PhaseDurations => "Task durations in phases",
            Self::TaskTypes => "Task types in sprint",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub kind: PieKind,
    pub title: String,
    pub series_name: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn new(kind: PieKind, slices: Vec<PieSlice>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            series_name: kind.series_name().to_string(),
            slices,
        }
    }

    /// `"<name> 12.34%"`
    pub fn legend_label(slice: &PieSlice) -> String {
        format!("{} {}%", slice.name, format_percent(slice.y))
    }

    pub fn tooltip(&self, slice: &PieSlice) -> Tooltip {
        let percentage = TooltipRow::new("Percentage:", format!("{}%", format_percent(slice.y)));

        match self.kind {
            PieKind::PhaseDurations => {
                let seconds = slice.duration.unwrap_or(0);
                Tooltip {
                    title: format!("Statistics of phase '{}'", slice.name),
                    sections: vec![TooltipSection::new(
                        None,
                        vec![
                            percentage,
                            TooltipRow::new("Duration:", format_duration(seconds)),
                            TooltipRow::new("", format!("{} seconds", format_thousands(seconds))),
                        ],
                    )],
                }
            }
            PieKind::TaskTypes => Tooltip {
                title: format!("Tasks in '{}' type", slice.name),
                sections: vec![TooltipSection::new(
                    None,
                    vec![
                        percentage,
                        TooltipRow::new(
                            "Count",
                            format_thousands(i64::from(slice.count.unwrap_or(0))),
                        ),
                    ],
                )],
            },
        }
    }
}
