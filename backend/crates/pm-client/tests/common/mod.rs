//! Shared fixtures for the client integration tests.
#![allow(dead_code)]

use pm_client::{BurndownChart, ChartRenderer, Confirm, HttpChannel, Notifier, PieChart};
use pm_core::{Message, MessageKind};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_CSRF_TOKEN: &str = "test-csrf-token-0123456789";

pub fn channel(server: &MockServer) -> Arc<HttpChannel> {
    Arc::new(HttpChannel::new(&server.uri(), Duration::from_secs(5)).unwrap())
}

/// Serve a CSRF token; it must be fetched at most once per channel.
pub async fn mount_csrf(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/csrfToken"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "_csrf": TEST_CSRF_TOKEN })),
        )
        .up_to_n_times(1)
        .mount(server)
        .await;
}

pub fn error_body(code: &str, message: &str, field: Option<&str>) -> Value {
    json!({ "error": { "code": code, "message": message, "field": field } })
}

/// Collects every toast.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<Message>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Message> {
        self.messages.lock().unwrap().last().cloned()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|m| m.kind == MessageKind::Error)
            .map(|m| m.text)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &Message) {
        self.messages.lock().unwrap().push(message.clone());
    }
}

/// Gives a fixed answer and remembers what was asked.
pub struct ScriptedConfirm {
    answer: bool,
    asked: Mutex<Vec<(String, String)>>,
}

impl ScriptedConfirm {
    pub fn yes() -> Self {
        Self {
            answer: true,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<(String, String)> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        self.asked
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
        self.answer
    }
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub burndowns: Mutex<Vec<BurndownChart>>,
    pub pies: Mutex<Vec<PieChart>>,
}

impl ChartRenderer for RecordingRenderer {
    fn render_burndown(&self, chart: &BurndownChart) {
        self.burndowns.lock().unwrap().push(chart.clone());
    }

    fn render_pie(&self, chart: &PieChart) {
        self.pies.lock().unwrap().push(chart.clone());
    }
}

/// Project running through Q1 2024.
pub fn project_json() -> Value {
    json!({
        "id": 1,
        "title": "Sprint board",
        "description": null,
        "date_start": "2024-01-01",
        "date_end": "2024-03-31",
        "created_at": 1704067200,
        "updated_at": 1704067200
    })
}

pub fn sprint_json(id: i64, title: &str, start: &str, end: &str) -> Value {
    json!({
        "id": id,
        "project_id": 1,
        "title": title,
        "description": null,
        "date_start": start,
        "date_end": end,
        "ignore_weekends": true,
        "created_at": 1704067200,
        "updated_at": 1704067200
    })
}

/// Sprint A occupies 2024-01-10..2024-01-20.
pub fn sprint_a_range() -> Value {
    json!({ "sprint_id": 10, "title": "Sprint A", "start": "2024-01-10", "end": "2024-01-20" })
}

pub fn add_form_json() -> Value {
    json!({
        "mode": "add",
        "project": project_json(),
        "sprint": null,
        "siblings": [sprint_a_range()],
        "stories": [],
        "exclude_days": [],
        "form_data": {}
    })
}

/// Sprint 5 (2024-02-05..2024-02-16) next to sprint A.
pub fn edit_form_json() -> Value {
    json!({
        "mode": "edit",
        "project": project_json(),
        "sprint": sprint_json(5, "Sprint 5", "2024-02-05", "2024-02-16"),
        "siblings": [sprint_a_range()],
        "stories": [],
        "exclude_days": [],
        "form_data": {}
    })
}
