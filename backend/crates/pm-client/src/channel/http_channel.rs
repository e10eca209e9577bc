use crate::{Channel, ClientError, ClientResult};

use pm_config::ClientConfig;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde_json::Value;
use tokio::sync::OnceCell;

pub const CSRF_HEADER: &str = "X-CSRF-Token";
const CSRF_PATH: &str = "/csrfToken";

/// [`Channel`] over plain HTTP.
///
/// The CSRF token is fetched from `GET /csrfToken` before the first
/// state-changing request and reused afterwards.
pub struct HttpChannel {
    pub base_url: String,
    client: ReqwestClient,
    csrf_token: OnceCell<Option<String>>,
}

impl HttpChannel {
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `timeout` - Applied to every request
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            csrf_token: OnceCell::new(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Self::new(&config.server_url, config.request_timeout())
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::Url {
            url: raw.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    async fn csrf_token(&self) -> ClientResult<Option<&str>> {
        let token = self
            .csrf_token
            .get_or_try_init(|| async {
                let url = self.url(CSRF_PATH, &[])?;
                let body = self.execute(self.client.get(url)).await?;
                let token = body
                    .get("_csrf")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                log::debug!(
                    "CSRF token {}",
                    if token.is_some() { "received" } else { "not required" }
                );
                Ok::<_, ClientError>(token)
            })
            .await?;

        Ok(token.as_deref())
    }

    /// State-changing request with the CSRF header attached.
    async fn mutate(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<Value> {
        let url = self.url(path, &[])?;
        let mut req = self.client.request(method, url);

        if let Some(token) = self.csrf_token().await? {
            req = req.header(CSRF_HEADER, token);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        self.execute(req).await
    }

    /// Execute request and handle errors
    async fn execute(&self, req: RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body: Value = if bytes.is_empty() {
            Value::Null
        } else if status.is_success() {
            serde_json::from_slice(&bytes)?
        } else {
            // Error pages are not always JSON
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        if status.is_success() {
            return Ok(body);
        }

        let error = body.get("error");
        let text = |key: &str| {
            error
                .and_then(|e| e.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            code: text("code").unwrap_or_else(|| format!("HTTP_{}", status.as_u16())),
            message: text("message")
                .or_else(|| body.as_str().map(str::to_string))
                .unwrap_or_else(|| status.to_string()),
            field: text("field"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl Channel for HttpChannel {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Value> {
        let url = self.url(path, query)?;
        self.execute(self.client.get(url)).await
    }

    async fn post(&self, path: &str, body: Value) -> ClientResult<Value> {
        self.mutate(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> ClientResult<Value> {
        self.mutate(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> ClientResult<Value> {
        self.mutate(Method::DELETE, path, None).await
    }
}
