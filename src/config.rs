//! Configuration management for sp2yt.
//!
//! Configuration values come from environment variables and `.env` files and
//! are collected once into a [`Config`] at process start. Nothing reads the
//! environment after that; clients receive the parts they need by reference.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use crate::error::TransferError;

pub const APP_DIR: &str = "sp2yt";

const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Loads environment variables from `.env` files.
///
/// The file in the platform-specific local data directory is loaded first
/// when it exists:
/// - Linux: `~/.local/share/sp2yt/.env`
/// - macOS: `~/Library/Application Support/sp2yt/.env`
/// - Windows: `%LOCALAPPDATA%/sp2yt/.env`
///
/// A `.env` in the working directory is loaded afterwards. Variables that
/// are already set are never overwritten.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), TransferError> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| TransferError::Config(e.to_string()))?;
    }

    // a missing working-directory .env is fine
    let _ = dotenv::dotenv();
    Ok(())
}

/// Returns the application's local data directory, e.g. `~/.local/share/sp2yt`.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// OAuth client settings for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthConfig {
    pub service: String,
    pub client_id: String,
    pub client_secret: Option<String>,
    pub auth_url: String,
    pub token_url: String,
    pub redirect_uri: String,
    pub scope: String,
    pub extra_auth_params: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyConfig {
    pub oauth: OAuthConfig,
    pub api_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeConfig {
    pub oauth: OAuthConfig,
    pub api_url: String,
}

/// How often and how patiently a conflicting playlist insert is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

/// Process-wide settings.
///
/// A service without a client id is left unconfigured; commands that need it
/// fail through [`Config::spotify`] or [`Config::youtube`], so a Spotify-only
/// setup can still list tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    spotify: Option<SpotifyConfig>,
    youtube: Option<YoutubeConfig>,
    pub server_addr: SocketAddr,
    pub retry: RetryPolicy,
}

const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
const YOUTUBE_CLIENT_ID: &str = "YOUTUBE_API_AUTH_CLIENT_ID";

fn unconfigured(key: &str) -> TransferError {
    TransferError::Config(format!("{key} must be set"))
}

impl Config {
    pub fn spotify(&self) -> Result<&SpotifyConfig, TransferError> {
        self.spotify
            .as_ref()
            .ok_or_else(|| unconfigured(SPOTIFY_CLIENT_ID))
    }

    pub fn youtube(&self) -> Result<&YoutubeConfig, TransferError> {
        self.youtube
            .as_ref()
            .ok_or_else(|| unconfigured(YOUTUBE_CLIENT_ID))
    }

    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, TransferError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TransferError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let spotify = get(SPOTIFY_CLIENT_ID).map(|client_id| SpotifyConfig {
            oauth: OAuthConfig {
                service: "Spotify".to_string(),
                client_id,
                client_secret: get("SPOTIFY_API_AUTH_CLIENT_SECRET"),
                auth_url: or_default(
                    "SPOTIFY_API_AUTH_URL",
                    "https://accounts.spotify.com/authorize",
                ),
                token_url: or_default(
                    "SPOTIFY_API_TOKEN_URL",
                    "https://accounts.spotify.com/api/token",
                ),
                redirect_uri: or_default("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
                scope: or_default("SPOTIFY_API_AUTH_SCOPE", "playlist-read-private"),
                extra_auth_params: Vec::new(),
            },
            api_url: or_default("SPOTIFY_API_URL", "https://api.spotify.com/v1"),
        });

        let youtube = get(YOUTUBE_CLIENT_ID).map(|client_id| YoutubeConfig {
            oauth: OAuthConfig {
                service: "YouTube".to_string(),
                client_id,
                client_secret: get("YOUTUBE_API_AUTH_CLIENT_SECRET"),
                auth_url: or_default(
                    "YOUTUBE_API_AUTH_URL",
                    "https://accounts.google.com/o/oauth2/v2/auth",
                ),
                token_url: or_default(
                    "YOUTUBE_API_TOKEN_URL",
                    "https://oauth2.googleapis.com/token",
                ),
                redirect_uri: or_default("YOUTUBE_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
                scope: or_default(
                    "YOUTUBE_API_AUTH_SCOPE",
                    "https://www.googleapis.com/auth/youtube.force-ssl",
                ),
                // Google only hands out refresh tokens for offline access
                extra_auth_params: vec![
                    ("access_type".to_string(), "offline".to_string()),
                    ("prompt".to_string(), "consent".to_string()),
                ],
            },
            api_url: or_default("YOUTUBE_API_URL", "https://www.googleapis.com/youtube/v3"),
        });

        let server_addr = or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
            .parse::<SocketAddr>()
            .map_err(|e| TransferError::Config(format!("SERVER_ADDRESS: {e}")))?;

        let defaults = RetryPolicy::default();
        let max_attempts = match get("INSERT_MAX_ATTEMPTS") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    TransferError::Config(format!(
                        "INSERT_MAX_ATTEMPTS must be a positive integer, got {v}"
                    ))
                })?,
            None => defaults.max_attempts,
        };
        let delay = match get("INSERT_RETRY_DELAY_SECS") {
            Some(v) => Duration::from_secs(v.parse::<u64>().map_err(|_| {
                TransferError::Config(format!(
                    "INSERT_RETRY_DELAY_SECS must be a number of seconds, got {v}"
                ))
            })?),
            None => defaults.delay,
        };

        Ok(Config {
            spotify,
            youtube,
            server_addr,
            retry: RetryPolicy {
                max_attempts,
                delay,
            },
        })
    }
}
