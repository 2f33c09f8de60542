use serde_json::json;
use spotube::{error::YoutubeError, youtube::YoutubeClient};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> YoutubeClient {
    YoutubeClient::with_base_url("yt-token", format!("{}/youtube/v3/", server.uri()))
}

#[tokio::test]
async fn create_playlist_is_private() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/youtube/v3/playlists"))
        .and(query_param("part", "snippet,status"))
        .and(header("authorization", "Bearer yt-token"))
        .and(body_partial_json(json!({
            "snippet": {"title": "Road Trip"},
            "status": {"privacyStatus": "private"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "PL123"})))
        .expect(1)
        .mount(&server)
        .await;

    let id = client(&server).create_playlist("Road Trip", "").await.unwrap();
    assert_eq!(id, "PL123");
}

#[tokio::test]
async fn add_video_posts_resource_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/youtube/v3/playlistItems"))
        .and(query_param("part", "snippet"))
        .and(body_partial_json(json!({
            "snippet": {
                "playlistId": "PL123",
                "resourceId": {"kind": "youtube#video", "videoId": "vid1"}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "item"})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).add_video("PL123", "vid1").await.unwrap();
}

#[tokio::test]
async fn search_video_returns_top_hit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("maxResults", "1"))
        .and(query_param("q", "Habits Tove Lo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": {"kind": "youtube#video", "videoId": "abc"}}]
        })))
        .mount(&server)
        .await;

    let hit = client(&server).search_video("Habits Tove Lo").await.unwrap();
    assert_eq!(hit.as_deref(), Some("abc"));
}

#[tokio::test]
async fn search_video_without_results_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    assert!(client(&server).search_video("nothing").await.unwrap().is_none());
}

#[tokio::test]
async fn error_status_keeps_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/youtube/v3/playlists"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded"))
        .mount(&server)
        .await;

    let err = client(&server).create_playlist("x", "").await.unwrap_err();
    match err {
        YoutubeError::Status { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "quotaExceeded");
        }
        other => panic!("unexpected error: {other}"),
    }
}
