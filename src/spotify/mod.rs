//! # Spotify Integration Module
//!
//! Read-only access to a user's Spotify library.
//!
//! ## Components
//!
//! - [`SpotifyClient`] ([`client`]) - bearer-authenticated GET with a fixed
//!   2 second wait between attempts. Exhausted attempts come back as
//!   [`crate::error::FetchError::RetriesExhausted`]; the caller decides whether
//!   that ends the program.
//! - [`SpotifyClient::list`] ([`pagination`]) - follows `next` cursors until
//!   the last page and logs progress at most every 15 seconds.
//! - [`auth`] - implicit-grant authorization through a loopback listener on
//!   `127.0.0.1:43019`, caching the token with
//!   [`crate::management::TokenManager`].
//! - [`library`] - the typed endpoints a migration reads.
//!
//! ## API Coverage
//!
//! - `GET /me` - current user profile
//! - `GET /me/tracks` - liked songs
//! - `GET /me/albums` - liked albums
//! - `GET /users/{user_id}/playlists` - playlists
//! - `GET /playlists/{id}/tracks` - playlist entries, via the playlist's `tracks.href`
//!
//! Every listing expects the paging envelope `{items, total, next}`.

pub mod auth;
pub mod client;
pub mod library;
pub mod pagination;

pub use client::SpotifyClient;
