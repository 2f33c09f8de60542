use crate::{
    error::FetchError,
    types::{PlaylistSummary, SavedAlbum, SavedTrack, User},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Profile of the user the token belongs to.
    pub async fn me(&self) -> Result<User, FetchError> {
        self.get_json("me", &[]).await
    }

    /// The user's liked songs, 50 per page.
    pub async fn saved_tracks(&self) -> Result<Vec<SavedTrack>, FetchError> {
        self.list("me/tracks", &[("limit", "50".to_string())])
            .await
    }

    /// The user's liked albums, 50 per page.
    pub async fn saved_albums(&self) -> Result<Vec<SavedAlbum>, FetchError> {
        self.list("me/albums", &[("limit", "50".to_string())])
            .await
    }

    /// Playlists owned or followed by `user_id`, 50 per page.
    pub async fn playlists(&self, user_id: &str) -> Result<Vec<PlaylistSummary>, FetchError> {
        self.list(
            &format!("users/{user_id}/playlists"),
            &[("limit", "50".to_string())],
        )
        .await
    }

    /// Tracks behind a playlist's `tracks.href`, 100 per page.
    pub async fn playlist_tracks(&self, href: &str) -> Result<Vec<SavedTrack>, FetchError> {
        self.list(href, &[("limit", "100".to_string())]).await
    }
}
