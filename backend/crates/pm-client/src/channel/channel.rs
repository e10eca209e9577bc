use crate::ClientResult;

use async_trait::async_trait;
use serde_json::Value;

/// Request/response transport to the server.
///
/// Every call resolves to the decoded JSON body or a [`crate::ClientError`];
/// an error body from the server becomes `ClientError::Api`.
#[async_trait]
pub trait Channel: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Value>;

    async fn post(&self, path: &str, body: Value) -> ClientResult<Value>;

    async fn put(&self, path: &str, body: Value) -> ClientResult<Value>;

    async fn delete(&self, path: &str) -> ClientResult<Value>;
}
