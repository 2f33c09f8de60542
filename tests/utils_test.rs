use spotube::types::{Artist, Track};
use spotube::utils::*;

fn create_test_track(name: &str, artists: &[&str]) -> Track {
    Track {
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|a| Artist {
                name: a.to_string(),
            })
            .collect(),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    assert!(!challenge.is_empty());

    // Deterministic for the same input
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // URL-safe base64 without padding
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_state() {
    let state = generate_state();
    assert_eq!(state.len(), 30);
    assert_ne!(state, generate_state());
}

#[test]
fn test_resolve_url() {
    let base = "https://api.spotify.com/v1/";
    assert_eq!(resolve_url(base, "me"), "https://api.spotify.com/v1/me");
    assert_eq!(resolve_url(base, "/me"), "https://api.spotify.com/v1/me");
    assert_eq!(
        resolve_url(base, "https://api.spotify.com/v1/playlists/1/tracks"),
        "https://api.spotify.com/v1/playlists/1/tracks"
    );
    assert_eq!(
        resolve_url(base, "http://127.0.0.1:9000/v1/me"),
        "http://127.0.0.1:9000/v1/me"
    );
}

#[test]
fn test_append_query_without_existing_query() {
    let url = append_query(
        "https://api.spotify.com/v1/me/tracks",
        &[("a", "1".to_string()), ("b", "2".to_string())],
    );
    assert_eq!(url, "https://api.spotify.com/v1/me/tracks?a=1&b=2");
}

#[test]
fn test_append_query_with_existing_query() {
    let url = append_query(
        "https://api.spotify.com/v1/me/tracks?x=1",
        &[("limit", "50".to_string())],
    );
    assert_eq!(url, "https://api.spotify.com/v1/me/tracks?x=1&limit=50");
}

#[test]
fn test_append_query_encodes_values() {
    let url = append_query("search", &[("q", "AC/DC & friends".to_string())]);
    assert_eq!(url, "search?q=AC%2FDC+%26+friends");
}

#[test]
fn test_append_query_without_params() {
    assert_eq!(append_query("me?x=1", &[]), "me?x=1");
}

#[test]
fn test_search_query() {
    let track = create_test_track("Habits", &["Tove Lo"]);
    assert_eq!(search_query(&track), "Habits Tove Lo");

    let track = create_test_track("Under Pressure", &["Queen", "David Bowie"]);
    assert_eq!(search_query(&track), "Under Pressure Queen, David Bowie");
    assert_eq!(artist_names(&track), "Queen, David Bowie");
}

#[test]
fn test_parse_dump_selection() {
    let liked = parse_dump_selection("liked").unwrap();
    assert!(liked.liked && !liked.playlists);

    let playlists = parse_dump_selection("playlists").unwrap();
    assert_eq!(playlists, DumpSelection::default());

    for both in ["liked,playlists", "playlists,liked"] {
        let selection = parse_dump_selection(both).unwrap();
        assert!(selection.liked && selection.playlists);
        assert_eq!(selection.to_string(), "liked,playlists");
    }
}

#[test]
fn test_parse_dump_selection_rejects_unknown() {
    assert!(parse_dump_selection("albums").is_err());
    assert!(parse_dump_selection("").is_err());
    assert!(parse_dump_selection("liked,liked").is_err());
}
