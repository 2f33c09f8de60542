use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error,
    error::FetchError,
    info,
    spotify::{SpotifyClient, auth::get_spotify_client},
    success,
    types::{LoadedPlaylist, MigrationRow, User},
    utils::{self, DumpSelection},
    warning,
    youtube::{self, YoutubeClient},
};

use super::report::{self, ReportFormat};

pub const LIKED_SONGS: &str = "Liked Songs";

#[derive(Debug, Clone, Default)]
pub struct MigrateOptions {
    /// Spotify token to use instead of the cache or an interactive login.
    pub token: Option<String>,
    pub dump: DumpSelection,
    pub format: ReportFormat,
}

/// Copies the selected parts of the Spotify library into YouTube playlists.
///
/// A Spotify fetch that exhausts its retries ends the program; YouTube
/// failures only skip the affected track or playlist.
pub async fn migrate(options: MigrateOptions) {
    let spotify = match options.token {
        Some(token) => SpotifyClient::new(token),
        None => match get_spotify_client(&config::spotify_token_file()).await {
            Ok(client) => client,
            Err(e) => error!("Spotify authorization failed: {}", e),
        },
    };

    info!("Loading user info...");
    let me = match spotify.me().await {
        Ok(me) => me,
        Err(e) => error!("{}", e),
    };
    info!(
        "Logged in as {} ({})",
        me.display_name.as_deref().unwrap_or(&me.id),
        me.id
    );

    let playlists = match load_library(&spotify, &me, options.dump).await {
        Ok(playlists) => playlists,
        Err(e) => error!("{}", e),
    };

    let youtube = match youtube::auth::authorize(&config::youtube_client_secrets()).await {
        Ok(client) => client,
        Err(e) => error!("YouTube authorization failed: {}", e),
    };

    let mut rows = Vec::with_capacity(playlists.len());
    for playlist in &playlists {
        rows.push(export_playlist(&youtube, playlist).await);
    }
    success!("Finished exporting playlists to YouTube.");

    match report::render(&rows, options.format) {
        Ok(out) => println!("{}", out),
        Err(e) => warning!("Failed to render report: {}", e),
    }
}

/// Loads liked songs and/or playlists with all their tracks.
///
/// Liked songs come first, as a playlist named [`LIKED_SONGS`].
pub async fn load_library(
    spotify: &SpotifyClient,
    me: &User,
    dump: DumpSelection,
) -> Result<Vec<LoadedPlaylist>, FetchError> {
    let mut playlists = Vec::new();

    if dump.liked {
        info!("Loading liked albums and songs...");
        let tracks = spotify.saved_tracks().await?;
        let albums = spotify.saved_albums().await?;
        info!(
            "Found {} liked songs and {} liked albums",
            tracks.len(),
            albums.len()
        );
        playlists.push(LoadedPlaylist {
            name: LIKED_SONGS.to_string(),
            tracks,
        });
    }

    if dump.playlists {
        info!("Loading playlists...");
        let summaries = spotify.playlists(&me.id).await?;
        info!("Found {} playlists", summaries.len());

        for summary in summaries {
            info!(
                "Loading playlist: {} ({} songs)",
                summary.name, summary.tracks.total
            );
            let tracks = spotify.playlist_tracks(&summary.tracks.href).await?;
            playlists.push(LoadedPlaylist {
                name: summary.name,
                tracks,
            });
        }
    }

    Ok(playlists)
}

/// Creates a private YouTube playlist for `playlist` and fills it with the top
/// search hit of every track.
///
/// Entries without a track (local files, removed songs) are skipped and not
/// counted.
pub async fn export_playlist(youtube: &YoutubeClient, playlist: &LoadedPlaylist) -> MigrationRow {
    let tracks: Vec<_> = playlist
        .tracks
        .iter()
        .filter_map(|t| t.track.as_ref())
        .collect();
    let mut row = MigrationRow {
        playlist: playlist.name.clone(),
        tracks: tracks.len(),
        matched: 0,
        missing: 0,
    };

    info!("Creating YouTube playlist: {}", playlist.name);
    let playlist_id = match youtube.create_playlist(&playlist.name, "").await {
        Ok(id) => id,
        Err(e) => {
            warning!("Failed to create playlist {}: {}", playlist.name, e);
            row.missing = row.tracks;
            return row;
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    for track in tracks {
        let query = utils::search_query(track);
        let label = format!("{} - {}", track.name, utils::artist_names(track));
        pb.set_message(format!("Searching YouTube for: {query}"));

        let video_id = match youtube.search_video(&query).await {
            Ok(Some(video_id)) => video_id,
            Ok(None) => {
                pb.suspend(|| warning!("No video found for: {}", label));
                row.missing += 1;
                continue;
            }
            Err(e) => {
                pb.suspend(|| warning!("Search failed for {}: {}", label, e));
                row.missing += 1;
                continue;
            }
        };

        match youtube.add_video(&playlist_id, &video_id).await {
            Ok(()) => row.matched += 1,
            Err(e) => {
                pb.suspend(|| warning!("Failed to add {} to playlist: {}", label, e));
                row.missing += 1;
            }
        }
    }

    pb.finish_and_clear();
    success!(
        "Playlist {}: {}/{} tracks added",
        playlist.name,
        row.matched,
        row.tracks
    );
    row
}
