use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::{
    config,
    error::YoutubeError,
    types::{CreatedPlaylist, SearchResponse},
};

/// Minimal YouTube Data API v3 client for rebuilding playlists.
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: Client,
    token: String,
    base_url: String,
}

impl YoutubeClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, config::youtube_apiurl())
    }

    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            token: token.into(),
            base_url: base_url.into(),
        }
    }

    /// Creates a private playlist and returns its id.
    pub async fn create_playlist(
        &self,
        title: &str,
        description: &str,
    ) -> Result<String, YoutubeError> {
        let body = json!({
            "snippet": {
                "title": title,
                "description": description
            },
            "status": {
                "privacyStatus": "private"
            }
        });

        let created: CreatedPlaylist = self
            .send(
                self.http
                    .post(format!("{}playlists", self.base_url))
                    .query(&[("part", "snippet,status")])
                    .json(&body),
            )
            .await?;
        Ok(created.id)
    }

    /// Appends `video_id` to the end of `playlist_id`.
    pub async fn add_video(&self, playlist_id: &str, video_id: &str) -> Result<(), YoutubeError> {
        let body = json!({
            "snippet": {
                "playlistId": playlist_id,
                "resourceId": {
                    "kind": "youtube#video",
                    "videoId": video_id
                }
            }
        });

        let _: serde_json::Value = self
            .send(
                self.http
                    .post(format!("{}playlistItems", self.base_url))
                    .query(&[("part", "snippet")])
                    .json(&body),
            )
            .await?;
        Ok(())
    }

    /// Id of the top search hit for `query`, if it is a video.
    pub async fn search_video(&self, query: &str) -> Result<Option<String>, YoutubeError> {
        let response: SearchResponse = self
            .send(
                self.http
                    .get(format!("{}search", self.base_url))
                    .query(&[("part", "snippet"), ("maxResults", "1"), ("q", query)]),
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.id.video_id))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, YoutubeError> {
        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(YoutubeError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}
