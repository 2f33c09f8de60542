use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};
use url::form_urlencoded;

use crate::types::Track;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Random value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(30)
        .map(char::from)
        .collect()
}

/// Resolves a request path against the API base.
///
/// Absolute `http(s)://` URLs, such as pagination cursors, pass through as-is.
pub fn resolve_url(base: &str, url: &str) -> String {
    if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else {
        format!("{}{}", base, url.trim_start_matches('/'))
    }
}

/// Appends form-encoded `params` to `url`, using `&` when it already has a query.
pub fn append_query(url: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{query}")
}

/// Free-text video search query for a track: `"<name> <artist>, <artist>"`.
pub fn search_query(track: &Track) -> String {
    format!("{} {}", track.name, artist_names(track))
}

pub fn artist_names(track: &Track) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Which parts of the library a migration loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpSelection {
    pub liked: bool,
    pub playlists: bool,
}

impl Default for DumpSelection {
    fn default() -> Self {
        Self {
            liked: false,
            playlists: true,
        }
    }
}

impl fmt::Display for DumpSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.liked, self.playlists) {
            (true, true) => write!(f, "liked,playlists"),
            (true, false) => write!(f, "liked"),
            (false, _) => write!(f, "playlists"),
        }
    }
}

/// Parses `--dump`: `liked`, `playlists`, or both comma separated in any order.
pub fn parse_dump_selection(s: &str) -> Result<DumpSelection, String> {
    let mut selection = DumpSelection {
        liked: false,
        playlists: false,
    };

    for part in s.split(',').map(str::trim) {
        match part {
            "liked" if !selection.liked => selection.liked = true,
            "playlists" if !selection.playlists => selection.playlists = true,
            other => {
                return Err(format!(
                    "invalid dump selection '{other}', expected liked, playlists, or both"
                ));
            }
        }
    }

    Ok(selection)
}
