use std::{
    net::{Ipv4Addr, SocketAddr},
    path::Path,
    sync::Arc,
};

use reqwest::Client;
use tokio::net::TcpListener;
use url::form_urlencoded;

use crate::{
    api::google::{CodeCallbackState, router},
    config,
    error::AuthError,
    info, server,
    server::Capture,
    success,
    types::{ClientSecrets, GoogleToken, InstalledApp, PkceToken},
    utils, warning,
};

use super::YoutubeClient;

/// Reads the `installed` section of a Google client secrets file.
pub async fn load_client_secrets(path: &Path) -> Result<InstalledApp, AuthError> {
    let invalid = |reason: String| AuthError::ClientSecrets {
        path: path.to_path_buf(),
        reason,
    };

    let content = async_fs::read_to_string(path)
        .await
        .map_err(|e| invalid(e.to_string()))?;
    let secrets: ClientSecrets =
        serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
    Ok(secrets.installed)
}

/// Consent URL for the authorization-code flow with an S256 PKCE challenge.
pub fn authorize_url(app: &InstalledApp, redirect_uri: &str, pkce: &PkceToken) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("response_type", "code")
        .append_pair("client_id", &app.client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("scope", config::YOUTUBE_SCOPE)
        .append_pair("state", &pkce.state)
        .append_pair(
            "code_challenge",
            &utils::generate_code_challenge(&pkce.code_verifier),
        )
        .append_pair("code_challenge_method", "S256")
        .append_pair("access_type", "offline")
        .finish();
    format!("{}?{}", app.auth_uri, query)
}

/// Runs the installed-application flow and returns a YouTube client.
///
/// Listens on an OS-assigned loopback port for the `/?code=...` redirect, then
/// exchanges the code at the client's token endpoint. The token is not cached.
pub async fn authorize(secrets_path: &Path) -> Result<YoutubeClient, AuthError> {
    let app = load_client_secrets(secrets_path).await?;

    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AuthError::Bind { addr, source })?;
    let redirect_uri = format!("http://127.0.0.1:{}/", listener.local_addr()?.port());

    let pkce = PkceToken {
        code_verifier: utils::generate_code_verifier(),
        state: utils::generate_state(),
    };
    let url = authorize_url(&app, &redirect_uri, &pkce);

    info!(
        "Authorizing YouTube (click if it doesn't open automatically): {}",
        url
    );
    if webbrowser::open(&url).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.");
    }

    let capture = Capture::new();
    let state = Arc::new(CodeCallbackState {
        expected_state: pkce.state.clone(),
        capture: Arc::clone(&capture),
    });
    let code = server::serve_until_captured(listener, router(state), capture).await??;

    let token = exchange_code_pkce(&app, &code, &pkce.code_verifier, &redirect_uri).await?;
    success!("YouTube authorization successful.");
    Ok(YoutubeClient::new(token.access_token))
}

/// Exchanges an authorization code (plus PKCE verifier) for an access token.
pub async fn exchange_code_pkce(
    app: &InstalledApp,
    code: &str,
    verifier: &str,
    redirect_uri: &str,
) -> Result<GoogleToken, AuthError> {
    let res = Client::new()
        .post(&app.token_uri)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", app.client_id.as_str()),
            ("client_secret", app.client_secret.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await
        .map_err(|e| AuthError::Exchange(e.to_string()))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| AuthError::Exchange(e.to_string()))?;
    if !status.is_success() {
        return Err(AuthError::Exchange(format!("HTTP {status}: {body}")));
    }

    serde_json::from_str(&body).map_err(|e| AuthError::Exchange(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> InstalledApp {
        InstalledApp {
            client_id: "cid.apps.googleusercontent.com".to_string(),
            client_secret: "secret".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
        }
    }

    #[test]
    fn authorize_url_carries_pkce_challenge() {
        let pkce = PkceToken {
            code_verifier: "verifier".to_string(),
            state: "xyz".to_string(),
        };
        let url = authorize_url(&app(), "http://127.0.0.1:5555/", &pkce);

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/auth?response_type=code&"));
        assert!(url.contains("state=xyz"));
        assert!(url.contains(&format!(
            "code_challenge={}",
            utils::generate_code_challenge("verifier")
        )));
        assert!(url.contains("code_challenge_method=S256"));
        assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A5555%2F"));
    }

    #[tokio::test]
    async fn client_secrets_need_installed_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client_secret.json");

        std::fs::write(&path, r#"{"web": {"client_id": "x"}}"#).unwrap();
        assert!(matches!(
            load_client_secrets(&path).await,
            Err(AuthError::ClientSecrets { .. })
        ));

        std::fs::write(
            &path,
            r#"{"installed": {"client_id": "x", "client_secret": "y"}}"#,
        )
        .unwrap();
        let app = load_client_secrets(&path).await.unwrap();
        assert_eq!(app.client_id, "x");
        assert_eq!(app.token_uri, "https://oauth2.googleapis.com/token");
    }
}
