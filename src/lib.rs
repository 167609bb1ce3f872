//! Spotify to YouTube Playlist Transfer Library
//!
//! This library copies a Spotify playlist into a new YouTube playlist: it
//! reads the source tracks page by page, searches YouTube for each track and
//! appends the first match to the new playlist.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loaded once from the environment
//! - `error` - The error taxonomy shared by all modules
//! - `management` - Token caching and refresh
//! - `oauth` - OAuth 2.0 PKCE authorization flow
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client (the source)
//! - `transfer` - The transfer workflow over the source and destination traits
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `youtube` - YouTube Data API client (the destination)

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod oauth;
pub mod server;
pub mod spotify;
pub mod transfer;
pub mod types;
pub mod utils;
pub mod youtube;

pub use error::TransferError;

/// Result type used throughout the crate.
pub type Res<T> = std::result::Result<T, TransferError>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Added {} by {} to YouTube playlist", name, artist);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the CLI layer uses this; library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Transfer failed: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Could not find {} by {} on YouTube", name, artist);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
