use crate::{
    Res,
    config::RetryPolicy,
    info, success,
    transfer::{
        DestinationClient, PlaylistBuilder, SourceClient, build_query, fetch_tracks,
        find_best_match,
    },
    types::Privacy,
    utils, warning,
};

pub const DEFAULT_DESCRIPTION: &str = "From Spotify";

#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub source_url: String,
    pub title: String,
    pub description: String,
    pub privacy: Privacy,
}

impl TransferRequest {
    pub fn new(source_url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            title: title.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            privacy: Privacy::default(),
        }
    }
}

/// Copies the source playlist behind `request.source_url` into a new
/// destination playlist.
///
/// Tracks without a match are skipped; every other failure ends the run.
/// The URL is validated before either service is contacted, and both
/// services are authenticated before the destination playlist is created.
pub async fn transfer_playlist<S, D>(
    source: &S,
    destination: &D,
    request: &TransferRequest,
    retry: RetryPolicy,
) -> Res<()>
where
    S: SourceClient + ?Sized,
    D: DestinationClient + ?Sized,
{
    let playlist_id = utils::parse_playlist_id(&request.source_url)?;

    source.authenticate().await?;
    destination.authenticate().await?;

    let tracks = fetch_tracks(source, &playlist_id).await?;
    info!("Found {} tracks in playlist {}", tracks.len(), playlist_id);

    let builder = PlaylistBuilder::new(destination, retry);
    let playlist = builder
        .create_playlist(&request.title, &request.description, request.privacy)
        .await?;
    success!("Created YouTube playlist {} ({})", playlist.title, playlist.id);

    let mut added = 0usize;
    let mut skipped = 0usize;

    for track in &tracks {
        let query = build_query(track);
        match find_best_match(destination, &query).await? {
            Some(video_id) => {
                builder.add_item(&playlist, &video_id).await?;
                added += 1;
                success!(
                    "Added {} by {} to YouTube playlist",
                    track.name,
                    track.artist
                );
            }
            None => {
                skipped += 1;
                warning!("Could not find {} by {} on YouTube", track.name, track.artist);
            }
        }
    }

    info!(
        "Transfer finished: {} added, {} not found, playlist {}",
        added, skipped, playlist.title
    );
    Ok(())
}
