use async_trait::async_trait;

/// Title of every destructive confirmation.
pub const DANGER_TITLE: &str = "danger - danger - danger";

/// Asks the user to confirm a destructive action.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, title: &str, message: &str) -> bool;
}
