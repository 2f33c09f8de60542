//! # CLI Module
//!
//! Command implementations for spotube. Each command logs its progress and
//! ends the program through [`crate::error!`] on failures it cannot work
//! around.
//!
//! ## Commands
//!
//! - [`auth`] - runs the Spotify implicit-grant login and caches the token
//! - [`migrate`] - loads liked songs and/or playlists from Spotify and rebuilds
//!   them as private YouTube playlists, then prints a summary report
//!
//! ## Usage
//!
//! ```bash
//! spotube auth                                  # log in to Spotify once
//! spotube migrate                               # playlists only
//! spotube migrate --dump liked,playlists        # liked songs too
//! spotube migrate --token BQC... --format json  # bypass the token cache
//! ```

mod auth;
mod migrate;
mod report;

pub use auth::auth;
pub use migrate::{LIKED_SONGS, MigrateOptions, export_playlist, load_library, migrate};
pub use report::{ReportFormat, render};
