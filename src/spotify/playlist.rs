use reqwest::{Client, StatusCode};

use crate::{
    Res,
    error::{TransferError, ensure_success},
    types::{PlaylistTracksResponse, TrackPage, TrackRecord},
};

const PAGE_LIMIT: u32 = 100;
const TRACK_FIELDS: &str = "items(track(name,artists(name))),next";

/// Retrieves one page of a playlist's tracks.
///
/// With `next` set, that URL is requested as returned by the previous page;
/// it already carries the offset, limit and field filter.
pub async fn get_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    playlist_id: &str,
    next: Option<&str>,
) -> Res<PlaylistTracksResponse> {
    let request = match next {
        Some(url) => client.get(url),
        None => client
            .get(format!(
                "{uri}/playlists/{playlist_id}/tracks",
                uri = api_url.trim_end_matches('/'),
            ))
            .query(&[
                ("limit", PAGE_LIMIT.to_string()),
                ("fields", TRACK_FIELDS.to_string()),
            ]),
    };

    let response = request.bearer_auth(token).send().await?;
    let response = ensure_success(response)
        .await
        .map_err(|e| into_lookup_error(playlist_id, e))?;
    Ok(response.json::<PlaylistTracksResponse>().await?)
}

/// Spotify rejects ids that are not valid base62 with `400 Invalid base62 id`
/// instead of a 404; both mean the playlist does not resolve.
pub fn into_lookup_error(playlist_id: &str, err: TransferError) -> TransferError {
    match err {
        TransferError::Service {
            status: StatusCode::BAD_REQUEST,
            message,
        } => TransferError::NotFound(format!("{playlist_id}: {message}")),
        other => other,
    }
}

/// Reduces a Spotify page to track records.
///
/// Entries without a track (removed or local items) or without any artist
/// cannot be searched for. They are listed in [`TrackPage::skipped`] so the
/// caller can report them once its progress display is gone.
pub fn into_track_page(response: PlaylistTracksResponse) -> TrackPage {
    let mut skipped = Vec::new();
    let tracks = response
        .items
        .into_iter()
        .filter_map(|item| {
            let Some(track) = item.track else {
                skipped.push("unavailable playlist entry".to_string());
                return None;
            };
            let Some(artist) = track.artists.into_iter().next() else {
                skipped.push(format!("{} without artist", track.name));
                return None;
            };
            Some(TrackRecord {
                name: track.name,
                artist: artist.name,
            })
        })
        .collect();

    TrackPage {
        tracks,
        next: response.next,
        skipped,
    }
}
