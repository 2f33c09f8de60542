use std::time::Duration;

use serde_json::json;
use spotube::{
    cli::{LIKED_SONGS, export_playlist, load_library},
    spotify::SpotifyClient,
    types::{Artist, LoadedPlaylist, SavedTrack, Track, User},
    utils::DumpSelection,
    youtube::YoutubeClient,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn me() -> User {
    User {
        id: "user1".to_string(),
        display_name: None,
    }
}

fn saved(name: &str, artist: &str) -> SavedTrack {
    SavedTrack {
        track: Some(Track {
            name: name.to_string(),
            artists: vec![Artist {
                name: artist.to_string(),
            }],
        }),
    }
}

fn empty_page() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"items": [], "total": 0, "next": null}))
}

#[tokio::test]
async fn load_library_puts_liked_songs_first() {
    let server = MockServer::start().await;
    let spotify = SpotifyClient::with_base_url("t", format!("{}/v1/", server.uri()))
        .retry_delay(Duration::from_millis(1));

    Mock::given(method("GET"))
        .and(path("/v1/me/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"track": {"name": "Habits", "artists": [{"name": "Tove Lo"}]}}],
            "total": 1,
            "next": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/me/albums"))
        .respond_with(empty_page())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users/user1/playlists"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "p1",
                "name": "Road Trip",
                "tracks": {"href": format!("{}/v1/playlists/p1/tracks", server.uri()), "total": 2}
            }],
            "total": 1,
            "next": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/playlists/p1/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"track": {"name": "Drive", "artists": [{"name": "Incubus"}]}},
                {"track": null}
            ],
            "total": 2,
            "next": null
        })))
        .mount(&server)
        .await;

    let dump = DumpSelection {
        liked: true,
        playlists: true,
    };
    let playlists = load_library(&spotify, &me(), dump).await.unwrap();

    let names: Vec<_> = playlists.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec![LIKED_SONGS, "Road Trip"]);
    assert_eq!(playlists[0].tracks.len(), 1);
    assert_eq!(playlists[1].tracks.len(), 2);
}

#[tokio::test]
async fn load_library_skips_liked_songs_by_default() {
    let server = MockServer::start().await;
    let spotify = SpotifyClient::with_base_url("t", format!("{}/v1/", server.uri()));

    Mock::given(method("GET"))
        .and(path("/v1/me/tracks"))
        .respond_with(empty_page())
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/users/user1/playlists"))
        .respond_with(empty_page())
        .expect(1)
        .mount(&server)
        .await;

    let playlists = load_library(&spotify, &me(), DumpSelection::default())
        .await
        .unwrap();
    assert!(playlists.is_empty());
}

#[tokio::test]
async fn export_playlist_counts_matches_and_misses() {
    let server = MockServer::start().await;
    let youtube = YoutubeClient::with_base_url("yt", format!("{}/", server.uri()));

    Mock::given(method("POST"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "PL1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Drive Incubus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": {"videoId": "v1"}}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Obscure Nobody"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let playlist = LoadedPlaylist {
        name: "Road Trip".to_string(),
        tracks: vec![
            saved("Drive", "Incubus"),
            SavedTrack { track: None },
            saved("Obscure", "Nobody"),
        ],
    };
    let row = export_playlist(&youtube, &playlist).await;

    assert_eq!(row.playlist, "Road Trip");
    assert_eq!(row.tracks, 2);
    assert_eq!(row.matched, 1);
    assert_eq!(row.missing, 1);
}

#[tokio::test]
async fn export_playlist_marks_everything_missing_when_creation_fails() {
    let server = MockServer::start().await;
    let youtube = YoutubeClient::with_base_url("yt", format!("{}/", server.uri()));

    Mock::given(method("POST"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    let playlist = LoadedPlaylist {
        name: "Broken".to_string(),
        tracks: vec![saved("A", "B"), saved("C", "D")],
    };
    let row = export_playlist(&youtube, &playlist).await;

    assert_eq!(row.matched, 0);
    assert_eq!(row.missing, 2);
}
