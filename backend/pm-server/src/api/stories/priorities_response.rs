use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct PrioritiesResponse {
    pub updated: usize,
}
