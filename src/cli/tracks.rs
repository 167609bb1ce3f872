use tabled::Table;

use crate::{
    cli,
    config::Config,
    error, info,
    transfer::{SourceClient, fetch_tracks},
    types::TrackTableRow,
    utils,
};

pub async fn tracks(config: &Config, url: &str) {
    let playlist_id = match utils::parse_playlist_id(url) {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let source = match cli::spotify_client(config) {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };
    if let Err(e) = source.authenticate().await {
        error!("{}", e);
    }

    let tracks = match fetch_tracks(&source, &playlist_id).await {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to fetch playlist {}: {}", playlist_id, e),
    };

    if tracks.is_empty() {
        info!("Playlist {} has no tracks", playlist_id);
        return;
    }

    let rows: Vec<TrackTableRow> = tracks
        .into_iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            name: t.name,
            artist: t.artist,
        })
        .collect();

    println!("{}", Table::new(rows));
}
