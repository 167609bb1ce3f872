//! # CLI Module
//!
//! User-facing commands. Each command builds the clients it needs from the
//! [`crate::config::Config`] created in `main`, runs the library code and
//! turns any error into a red message and exit code 1.
//!
//! - [`auth`] - Authorizes sp2yt with Spotify or YouTube and caches the token
//! - [`transfer`] - Copies a Spotify playlist into a new YouTube playlist
//! - [`tracks`] - Lists the tracks of a Spotify playlist
//!
//! ```bash
//! sp2yt auth youtube
//! sp2yt tracks https://open.spotify.com/playlist/37i9dQZF1DX9tPFwDMOaN1
//! sp2yt transfer https://open.spotify.com/playlist/37i9dQZF1DX9tPFwDMOaN1 --title "KPOP ON"
//! ```
//!
//! Tokens are cached per service in the local data directory. Setting
//! `SPOTIFY_REFRESH_TOKEN` or `YOUTUBE_REFRESH_TOKEN` replaces the cache file
//! with a refresh token taken from the environment.

mod auth;
mod tracks;
mod transfer;

use std::env;

use crate::{
    Res,
    config::Config,
    management::{EnvTokenStore, FileTokenStore, TokenStore},
    spotify::SpotifyClient,
    youtube::YoutubeClient,
};

pub use auth::{Service, auth};
pub use tracks::tracks;
pub use transfer::transfer;

const SPOTIFY_REFRESH_TOKEN: &str = "SPOTIFY_REFRESH_TOKEN";
const YOUTUBE_REFRESH_TOKEN: &str = "YOUTUBE_REFRESH_TOKEN";

fn token_store(service: &str, refresh_token_var: &str) -> Box<dyn TokenStore> {
    match env::var(refresh_token_var) {
        Ok(v) if !v.trim().is_empty() => Box::new(EnvTokenStore::new(refresh_token_var)),
        _ => Box::new(FileTokenStore::for_service(service)),
    }
}

fn spotify_client(config: &Config) -> Res<SpotifyClient> {
    Ok(SpotifyClient::new(
        config.spotify()?,
        config.server_addr,
        token_store("spotify", SPOTIFY_REFRESH_TOKEN),
    ))
}

fn youtube_client(config: &Config) -> Res<YoutubeClient> {
    Ok(YoutubeClient::new(
        config.youtube()?,
        config.server_addr,
        token_store("youtube", YOUTUBE_REFRESH_TOKEN),
    ))
}
