//! # YouTube Integration Module
//!
//! Playlist creation, video search and playlist item insertion through the
//! YouTube Data API v3.
//!
//! - [`YoutubeClient`] - the [`crate::transfer::DestinationClient`]
//!   implementation, authorized with the `youtube.force-ssl` scope.
//! - [`playlist`] - `POST /playlists` and `POST /playlistItems`.
//! - [`search`] - `GET /search`, restricted to videos.
//!
//! Calls are not retried here. Retrying conflicting inserts is the business
//! of [`crate::transfer::PlaylistBuilder`].

mod client;
pub mod playlist;
pub mod search;

pub use client::YoutubeClient;
