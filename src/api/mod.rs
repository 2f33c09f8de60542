//! # API Module
//!
//! Route handlers for the short-lived loopback listeners used during OAuth.
//!
//! ## Spotify (implicit grant)
//!
//! Spotify returns the access token in the URL fragment, which browsers never
//! send to a server. [`spotify::router`] therefore serves two hops:
//!
//! - `GET /redirect` answers with a tiny script that rewrites the fragment into
//!   a query string and navigates to `token?<fragment>`.
//! - `GET /token?access_token=...` extracts the token and fills the listener's
//!   capture slot, which stops the listener.
//!
//! Every other path is a 404. No request is logged.
//!
//! ## Google (authorization code)
//!
//! [`google::router`] receives `GET /?code=...&state=...` and hands the code to
//! the YouTube authorization flow for the token exchange.

pub mod google;
pub mod spotify;
