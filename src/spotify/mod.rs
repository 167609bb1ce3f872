//! # Spotify Integration Module
//!
//! Read-only access to Spotify playlists through the Spotify Web API.
//!
//! - [`SpotifyClient`] - the [`crate::transfer::SourceClient`] implementation.
//!   It owns a [`crate::management::TokenManager`] and refreshes the access
//!   token before every request when needed.
//! - [`playlist`] - the `GET /playlists/{id}/tracks` call and the conversion
//!   of its pages into track records.
//!
//! Pagination follows the `next` URL Spotify returns, so offsets are never
//! computed locally. Authorization uses the PKCE flow from [`crate::oauth`]
//! with the `playlist-read-private` scope.

mod client;
pub mod playlist;

pub use client::SpotifyClient;
