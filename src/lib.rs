//! Spotify to YouTube migration library
//!
//! This library moves a user's Spotify library (playlists and liked songs) to
//! YouTube. Tracks are matched to videos by free-text search and the playlists
//! are rebuilt on the destination account.
//!
//! # Modules
//!
//! - `api` - Route handlers for the local OAuth callback listeners
//! - `cli` - Command implementations driving a migration
//! - `config` - Configuration management and environment variables
//! - `error` - Error types shared by the API clients and auth flows
//! - `management` - Cached Spotify token on disk
//! - `server` - Single-use loopback HTTP server for OAuth redirects
//! - `spotify` - Spotify Web API client, paginator and implicit-grant flow
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `youtube` - YouTube Data API client and installed-app authorization
//!
//! # Example
//!
//! ```
//! use spotube::{config, management::TokenManager};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     config::load_env().await?;
//!     let cached = TokenManager::load(&config::spotify_token_file()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod youtube;

/// Prints an informational message with a blue bullet point.
///
/// Every line carries a `%I:%M:%S` wall-clock timestamp.
///
/// # Example
///
/// ```
/// info!("Loading playlists...");
/// info!("Found {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "[{}] [{}] {}",
      chrono::Local::now().format("%I:%M:%S").to_string().dimmed(),
      "o".blue().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Finished exporting playlists to YouTube.");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "[{}] [{}] {}",
      chrono::Local::now().format("%I:%M:%S").to_string().dimmed(),
      "✓".green().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1. Only the binary and the command layer use it;
/// library components hand errors back to their caller instead.
///
/// # Example
///
/// ```
/// error!("Couldn't load playlists: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "[{}] [{}] {}",
      chrono::Local::now().format("%I:%M:%S").to_string().dimmed(),
      "!".red().bold(),
      std::format_args!($($arg)*)
    );
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No video found for: {}", query);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "[{}] [{}] {}",
      chrono::Local::now().format("%I:%M:%S").to_string().dimmed(),
      "!".yellow().bold(),
      std::format_args!($($arg)*)
    );
  })
}
