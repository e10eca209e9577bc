//! Terminal implementations of the collaborators, used by the `pm` binary.

use crate::{BurndownChart, ChartRenderer, Confirm, Notifier, PieChart, format_number};

use pm_core::Message;

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use log::{debug, warn};

/// Writes toasts to stderr so stdout stays machine readable.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &Message) {
        debug!("Toast ({}): {}", message.kind.as_str(), message.text);
        eprintln!("[{}] {}", message.kind.as_str(), message.text);
    }
}

/// Answers yes without asking (`--yes`).
pub struct AssumeYes;

#[async_trait]
impl Confirm for AssumeYes {
    async fn confirm(&self, _title: &str, _message: &str) -> bool {
        true
    }
}

/// Prompts on stderr and reads `y`/`yes` from stdin.
pub struct StdinConfirm;

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        let prompt = format!("{}\n{} [y/N] ", title, message);

        let answer = tokio::task::spawn_blocking(move || {
            let mut stderr = io::stderr();
            write!(stderr, "{}", prompt).ok();
            stderr.flush().ok();

            let mut line = String::new();
            io::stdin().lock().read_line(&mut line).map(|_| line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
            Ok(Err(e)) => {
                warn!("Failed to read confirmation: {}", e);
                false
            }
            Err(e) => {
                warn!("Confirmation prompt aborted: {}", e);
                false
            }
        }
    }
}

/// Prints charts as plain text tables.
pub struct TextChartRenderer;

impl ChartRenderer for TextChartRenderer {
    fn render_burndown(&self, chart: &BurndownChart) {
        println!("{}", chart.title);
        println!("{}", chart.subtitle);

        if chart.series.is_empty() {
            println!("  (no tasks)");
            return;
        }

        let header: Vec<&str> = chart.series.iter().map(|s| s.name_short.as_str()).collect();
        println!("  {:<16} {}", "", header.join("\t"));

        for day in chart.days() {
            let Some(label) = chart.axis_label(day) else {
                continue;
            };
            let values: Vec<String> = chart
                .series
                .iter()
                .map(|s| {
                    s.data
                        .iter()
                        .find(|p| p.x == day)
                        .map(|p| format_number(p.y))
                        .unwrap_or_default()
                })
                .collect();
            let marker = if label.not_planned { "*" } else { " " };
            println!("{} {:<16} {}", marker, label.text, values.join("\t"));
        }
    }

    fn render_pie(&self, chart: &PieChart) {
        println!("{}", chart.title);
        if chart.slices.is_empty() {
            println!("  (no data)");
        }
        for slice in &chart.slices {
            println!("  {}", PieChart::legend_label(slice));
        }
    }
}
