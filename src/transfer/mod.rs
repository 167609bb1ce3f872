//! # Transfer Module
//!
//! The playlist transfer workflow, independent of any concrete HTTP client.
//!
//! ```text
//! orchestrator ── reader  ──▶ SourceClient      (Spotify)
//!              ├─ matcher ──▶ DestinationClient (YouTube search)
//!              └─ builder ──▶ DestinationClient (playlist + items)
//! ```
//!
//! The service clients live in [`crate::spotify`] and [`crate::youtube`];
//! tests drive the same workflow with fakes.

mod builder;
mod matcher;
mod orchestrator;
mod reader;

use async_trait::async_trait;

use crate::{
    Res,
    types::{Privacy, TrackPage},
};

pub use builder::PlaylistBuilder;
pub use matcher::{build_query, find_best_match};
pub use orchestrator::{DEFAULT_DESCRIPTION, TransferRequest, transfer_playlist};
pub use reader::fetch_tracks;

/// Read access to the service playlists are copied from.
#[async_trait]
pub trait SourceClient: Send + Sync {
    /// Obtains valid credentials, authorizing interactively if needed.
    async fn authenticate(&self) -> Res<()>;

    /// Fetches one page of a playlist's tracks.
    ///
    /// `cursor` is `None` for the first page and otherwise the `next` value of
    /// the previous page, passed back unchanged.
    async fn playlist_page(&self, playlist_id: &str, cursor: Option<&str>) -> Res<TrackPage>;
}

/// Write access to the service playlists are copied to.
#[async_trait]
pub trait DestinationClient: Send + Sync {
    async fn authenticate(&self) -> Res<()>;

    /// Creates an empty playlist and returns its id.
    async fn create_playlist(&self, title: &str, description: &str, privacy: Privacy)
    -> Res<String>;

    /// Returns the ids of at most `max_results` top-ranked matches for `query`.
    async fn search(&self, query: &str, max_results: u32) -> Res<Vec<String>>;

    /// Appends one item to a playlist.
    ///
    /// A conflicting insert must surface as [`crate::error::TransferError::Conflict`].
    async fn insert_item(&self, playlist_id: &str, content_id: &str) -> Res<()>;
}
