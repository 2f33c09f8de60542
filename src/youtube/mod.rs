//! # YouTube Integration Module
//!
//! The destination side of a migration.
//!
//! - [`auth`] - installed-application OAuth (authorization code with PKCE)
//!   using the Google client secrets file and a loopback listener on an
//!   OS-assigned port.
//! - [`YoutubeClient`] ([`client`]) - playlist creation, playlist item
//!   insertion and single-result video search.
//!
//! Unlike the Spotify client there is no retry; a failed call is reported to
//! the caller, which skips the affected track.

pub mod auth;
pub mod client;

pub use client::YoutubeClient;
