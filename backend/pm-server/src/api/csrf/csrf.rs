use crate::{AppState, CsrfResponse};

use axum::{Json, extract::State};

/// GET /csrfToken
///
/// Token the client echoes in `X-CSRF-Token`. `null` when the check is off.
pub async fn csrf_token(State(state): State<AppState>) -> Json<CsrfResponse> {
    Json(CsrfResponse {
        csrf: state.csrf_token.as_deref().map(str::to_string),
    })
}
