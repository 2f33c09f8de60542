use std::{
    io,
    net::{Ipv4Addr, SocketAddr},
    path::Path,
    sync::Arc,
};

use tokio::net::TcpListener;
use url::form_urlencoded;

use crate::{
    api::spotify::{CallbackState, router},
    config,
    error::AuthError,
    info,
    management::TokenManager,
    server, success,
    types::Token,
    warning,
};

use super::SpotifyClient;

/// Progress of one implicit-grant authorization.
///
/// `NeedToken` → `AwaitingRedirect` once the browser is sent to Spotify,
/// → `AwaitingToken` after `/redirect` served the rewrite script,
/// → `Captured` when `/token` delivered the access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    NeedToken,
    AwaitingRedirect,
    AwaitingToken,
    Captured,
}

/// Parameters of one implicit-grant authorization attempt.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub authorize_url: String,
    pub client_id: String,
    pub scope: String,
    pub port: u16,
}

impl AuthorizationRequest {
    /// Request for the configured client id and scope on the registered port.
    pub fn from_config() -> Self {
        Self {
            authorize_url: config::spotify_apiauth_url(),
            client_id: config::spotify_client_id(),
            scope: config::spotify_scope(),
            port: config::SPOTIFY_CALLBACK_PORT,
        }
    }

    pub fn redirect_uri(&self) -> String {
        format!(
            "http://127.0.0.1:{}{}",
            self.port,
            config::SPOTIFY_REDIRECT_PATH
        )
    }

    /// Authorize URL asking for an access token in the redirect fragment.
    pub fn url(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("scope", &self.scope)
            .append_pair("redirect_uri", &self.redirect_uri())
            .finish();
        format!("{}?{}", self.authorize_url, query)
    }
}

/// Loopback listener receiving the implicit-grant redirect.
///
/// Serves `/redirect` and `/token` on one port until a token (or a failed
/// callback) is captured. Requests are handled one after another on the
/// calling task.
pub struct CallbackListener {
    listener: TcpListener,
    state: Arc<CallbackState>,
}

impl CallbackListener {
    pub async fn bind(addr: SocketAddr) -> Result<Self, AuthError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| AuthError::Bind { addr, source })?;

        Ok(Self {
            listener,
            state: CallbackState::new(),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn phase(&self) -> AuthPhase {
        *self.state.phase.lock().await
    }

    /// Records that the user was sent to the authorize URL.
    pub async fn await_redirect(&self) {
        let mut phase = self.state.phase.lock().await;
        if *phase == AuthPhase::NeedToken {
            *phase = AuthPhase::AwaitingRedirect;
        }
    }

    /// Serves callbacks until `/token` is hit and returns its access token.
    ///
    /// Waits indefinitely; the only way out without a callback is
    /// interrupting the process.
    pub async fn wait_for_token(self) -> Result<String, AuthError> {
        let app = router(Arc::clone(&self.state));
        let capture = Arc::clone(&self.state.capture);
        server::serve_until_captured(self.listener, app, capture).await?
    }
}

/// Runs the implicit-grant flow and caches the token at `token_file`.
///
/// The listener is bound before the browser opens so the redirect cannot
/// arrive early. If the process dies before a token is captured nothing is
/// written and the next run starts over.
pub async fn authorize(
    request: &AuthorizationRequest,
    token_file: &Path,
) -> Result<SpotifyClient, AuthError> {
    let url = request.url();
    let listener =
        CallbackListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, request.port))).await?;

    info!(
        "Logging in (click if it doesn't open automatically): {}",
        url
    );
    if webbrowser::open(&url).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.");
    }
    listener.await_redirect().await;

    let access_token = listener.wait_for_token().await?;
    info!("Received access token from Spotify.");

    let token_manager = TokenManager::new(Token { access_token }, token_file);
    token_manager.persist().await?;
    success!("Saved Spotify token to {}", token_file.display());

    Ok(token_manager.into_client())
}

/// Client from the token cache, or from an interactive authorization when
/// there is no cache yet.
pub async fn get_spotify_client(token_file: &Path) -> Result<SpotifyClient, AuthError> {
    match TokenManager::load(token_file).await? {
        Some(manager) => Ok(manager.into_client()),
        None => authorize(&AuthorizationRequest::from_config(), token_file).await,
    }
}
