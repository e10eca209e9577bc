use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CsrfResponse {
    #[serde(rename = "_csrf")]
    pub csrf: Option<String>,
}
