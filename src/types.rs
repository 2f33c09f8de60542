use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// Cached Spotify credential, the single field of the token file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
}

/// One page of a Spotify paging object.
///
/// `next` is the absolute URL of the following page, `None` on the last one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T = Value> {
    pub items: Vec<T>,
    pub total: u64,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Entry of a saved-tracks or playlist-tracks page.
///
/// `track` is null for local files and tracks removed from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAlbum {
    pub album: Album,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksRef {
    pub href: String,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub tracks: TracksRef,
}

/// A source playlist with all of its tracks loaded.
#[derive(Debug, Clone)]
pub struct LoadedPlaylist {
    pub name: String,
    pub tracks: Vec<SavedTrack>,
}

/// Installed-application section of a Google client secrets file.
#[derive(Debug, Clone, Deserialize)]
pub struct InstalledApp {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_google_auth_uri")]
    pub auth_uri: String,
    #[serde(default = "default_google_token_uri")]
    pub token_uri: String,
}

fn default_google_auth_uri() -> String {
    "https://accounts.google.com/o/oauth2/auth".to_string()
}

fn default_google_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecrets {
    pub installed: InstalledApp,
}

/// Authorization-code callback state for the YouTube loopback flow.
#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub state: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleToken {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPlaylist {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResultId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// Outcome of migrating one playlist.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct MigrationRow {
    pub playlist: String,
    pub tracks: usize,
    pub matched: usize,
    pub missing: usize,
}
