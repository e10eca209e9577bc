use serde::{Deserialize, Serialize};

/// Response body for deletions
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted_id: i64,
}
