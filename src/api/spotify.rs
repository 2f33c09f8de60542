use std::sync::{Arc, LazyLock};

use axum::{
    Extension, Router,
    extract::RawQuery,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use regex::Regex;
use tokio::sync::Mutex;

use crate::{config, error::AuthError, server::Capture, spotify::auth::AuthPhase};

/// Relocates the browser to `token?<fragment>` so the token reaches the listener.
pub const REDIRECT_HTML: &str =
    r#"<script>location.replace("token?" + location.hash.slice(1));</script>"#;

pub const TOKEN_HTML: &str = "<script>close()</script>Thanks! You may now close this window.";

const FAILED_HTML: &str = "Authorization failed. You may close this window and try again.";

static ACCESS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("access_token=([^&]*)").expect("valid access_token pattern"));

static AUTH_ERROR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?:^|&)error=([^&]*)").expect("valid error pattern"));

/// Shared between the implicit-grant routes and the listener that owns them.
pub struct CallbackState {
    pub phase: Mutex<AuthPhase>,
    pub capture: Arc<Capture<Result<String, AuthError>>>,
}

impl CallbackState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            phase: Mutex::new(AuthPhase::NeedToken),
            capture: Capture::new(),
        })
    }
}

pub fn router(state: Arc<CallbackState>) -> Router {
    Router::new()
        .route(config::SPOTIFY_REDIRECT_PATH, get(redirect))
        .route("/token", get(token))
        .fallback(not_found)
        .layer(Extension(state))
}

/// Pulls the `access_token` value out of a raw query string.
pub fn extract_access_token(query: &str) -> Option<String> {
    ACCESS_TOKEN
        .captures(query)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

async fn redirect(Extension(state): Extension<Arc<CallbackState>>) -> Html<&'static str> {
    let mut phase = state.phase.lock().await;
    if matches!(*phase, AuthPhase::NeedToken | AuthPhase::AwaitingRedirect) {
        *phase = AuthPhase::AwaitingToken;
    }
    Html(REDIRECT_HTML)
}

async fn token(
    RawQuery(query): RawQuery,
    Extension(state): Extension<Arc<CallbackState>>,
) -> Response {
    // `/token` without a query string is not a callback.
    let Some(query) = query else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if let Some(access_token) = extract_access_token(&query) {
        *state.phase.lock().await = AuthPhase::Captured;
        state.capture.fill(Ok(access_token)).await;
        return Html(TOKEN_HTML).into_response();
    }

    let err = match AUTH_ERROR.captures(&query).and_then(|c| c.get(1)) {
        Some(reason) => AuthError::Denied(reason.as_str().to_string()),
        None => AuthError::MissingToken { query },
    };
    state.capture.fill(Err(err)).await;
    (StatusCode::BAD_REQUEST, Html(FAILED_HTML)).into_response()
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
