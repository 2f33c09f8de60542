use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension, Router,
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::{error::AuthError, server::Capture};

const SUCCESS_HTML: &str =
    "<h2>Authentication successful.</h2><p>You may now close this window.</p>";
const FAILED_HTML: &str = "<h4>Login failed.</h4><p>You may close this window and retry.</p>";

/// Shared between the authorization-code route and the YouTube auth flow.
pub struct CodeCallbackState {
    pub expected_state: String,
    pub capture: Arc<Capture<Result<String, AuthError>>>,
}

pub fn router(state: Arc<CodeCallbackState>) -> Router {
    Router::new()
        .route("/", get(callback))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(Extension(state))
}

async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<CodeCallbackState>>,
) -> Response {
    if let Some(error) = params.get("error") {
        state
            .capture
            .fill(Err(AuthError::Denied(error.clone())))
            .await;
        return (StatusCode::BAD_REQUEST, Html(FAILED_HTML)).into_response();
    }

    let Some(code) = params.get("code") else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if params.get("state") != Some(&state.expected_state) {
        state
            .capture
            .fill(Err(AuthError::Exchange(
                "OAuth state mismatch in callback".to_string(),
            )))
            .await;
        return (StatusCode::BAD_REQUEST, Html(FAILED_HTML)).into_response();
    }

    state.capture.fill(Ok(code.clone())).await;
    Html(SUCCESS_HTML).into_response()
}
