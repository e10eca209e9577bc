//! Axum extractor guarding state-changing requests

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// Proof that the request carried the expected `X-CSRF-Token` header.
///
/// Always succeeds when the server runs without a CSRF token.
pub struct CsrfGuard;

impl FromRequestParts<AppState> for CsrfGuard {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(expected) = state.csrf_token.as_deref() else {
                return Ok(CsrfGuard);
            };

            let provided = parts
                .headers
                .get(CSRF_HEADER)
                .and_then(|value| value.to_str().ok());

            match provided {
                Some(token) if token == expected => Ok(CsrfGuard),
                Some(_) => {
                    log::warn!("Rejected {} {}: CSRF token mismatch", parts.method, parts.uri);
                    Err(ApiError::forbidden("Invalid CSRF token"))
                }
                None => {
                    log::warn!("Rejected {} {}: no CSRF token", parts.method, parts.uri);
                    Err(ApiError::forbidden("Missing CSRF token"))
                }
            }
        }
    }
}
