//! Configuration management for spotube.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a built-in default so a bare
//! `spotube migrate` works without any setup beyond the YouTube client secrets.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults
//!
//! The callback port and redirect path are not configurable. They are part of
//! the redirect URI registered for the Spotify client id.

use std::{env, path::PathBuf};

/// Port of the Spotify implicit-grant callback listener.
pub const SPOTIFY_CALLBACK_PORT: u16 = 43019;

/// Path the Spotify authorize endpoint redirects the browser to.
pub const SPOTIFY_REDIRECT_PATH: &str = "/redirect";

/// OAuth scope requested from YouTube.
pub const YOUTUBE_SCOPE: &str = "https://www.googleapis.com/auth/youtube.force-ssl";

const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1/";
const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_SPOTIFY_CLIENT_ID: &str = "5c098bcc800e45d49e476265bc9b6934";
const DEFAULT_SPOTIFY_SCOPE: &str =
    "playlist-read-private playlist-read-collaborative user-library-read";
const DEFAULT_SPOTIFY_TOKEN_FILE: &str = "spotify_token.json";
const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3/";
const DEFAULT_YOUTUBE_CLIENT_SECRETS: &str = "client_secret.json";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives at:
/// - Linux: `~/.local/share/spotube/.env`
/// - macOS: `~/Library/Application Support/spotube/.env`
/// - Windows: `%LOCALAPPDATA%/spotube/.env`
///
/// A missing file is fine; every setting has a default.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotube/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Base URL of the Spotify Web API, always ending in `/`.
///
/// Relative request paths such as `me/tracks` are appended to it.
pub fn spotify_apiurl() -> String {
    let mut url = var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL);
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Spotify authorize endpoint used for the implicit grant.
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL)
}

/// Client id registered with Spotify for the `127.0.0.1:43019/redirect` URI.
pub fn spotify_client_id() -> String {
    var_or("SPOTIFY_API_AUTH_CLIENT_ID", DEFAULT_SPOTIFY_CLIENT_ID)
}

/// Space separated scope list requested during authorization.
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SPOTIFY_SCOPE)
}

/// Location of the cached Spotify token, relative to the working directory
/// unless an absolute path is configured.
pub fn spotify_token_file() -> PathBuf {
    PathBuf::from(var_or("SPOTIFY_TOKEN_FILE", DEFAULT_SPOTIFY_TOKEN_FILE))
}

/// Redirect URI registered with Spotify.
pub fn spotify_redirect_uri() -> String {
    format!("http://127.0.0.1:{SPOTIFY_CALLBACK_PORT}{SPOTIFY_REDIRECT_PATH}")
}

/// Base URL of the YouTube Data API, always ending in `/`.
pub fn youtube_apiurl() -> String {
    let mut url = var_or("YOUTUBE_API_URL", DEFAULT_YOUTUBE_API_URL);
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Path of the Google "installed application" client secrets file.
pub fn youtube_client_secrets() -> PathBuf {
    PathBuf::from(var_or(
        "YOUTUBE_CLIENT_SECRETS",
        DEFAULT_YOUTUBE_CLIENT_SECRETS,
    ))
}
