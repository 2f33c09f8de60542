use std::path::{Path, PathBuf};

use crate::{error::StoreError, spotify::SpotifyClient, types::Token};

/// The cached Spotify token and the file it lives in.
///
/// The file holds a single JSON object `{"access_token": "..."}`. Tokens are
/// never validated on load; a stale one surfaces as a failed fetch.
pub struct TokenManager {
    token: Token,
    path: PathBuf,
}

impl TokenManager {
    pub fn new(token: Token, path: impl Into<PathBuf>) -> Self {
        TokenManager {
            token,
            path: path.into(),
        }
    }

    /// Reads the token cache. `Ok(None)` means there is no cache file yet and
    /// the caller has to authorize interactively.
    pub async fn load(path: &Path) -> Result<Option<Self>, StoreError> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = async_fs::read_to_string(path).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Some(Self::new(token, path)))
    }

    /// Overwrites the cache file with the current token.
    pub async fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds a Spotify client bound to the cached token.
    pub fn into_client(self) -> SpotifyClient {
        SpotifyClient::new(self.token.access_token)
    }
}
