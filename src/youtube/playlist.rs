use reqwest::Client;

use crate::{
    Res,
    error::ensure_success,
    types::{
        AddPlaylistItemRequest, AddPlaylistItemResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, PlaylistItemSnippet, PlaylistSnippet, PlaylistStatus, Privacy,
        ResourceId,
    },
};

const VIDEO_KIND: &str = "youtube#video";

/// Creates an empty playlist on the authorized channel and returns its id.
pub async fn create(
    client: &Client,
    api_url: &str,
    token: &str,
    title: &str,
    description: &str,
    privacy: Privacy,
) -> Res<String> {
    let body = CreatePlaylistRequest {
        snippet: PlaylistSnippet {
            title: title.to_string(),
            description: description.to_string(),
        },
        status: PlaylistStatus {
            privacy_status: privacy,
        },
    };

    let response = client
        .post(format!("{}/playlists", api_url.trim_end_matches('/')))
        .query(&[("part", "snippet,status")])
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;

    let response = ensure_success(response).await?;
    let created = response.json::<CreatePlaylistResponse>().await?;
    Ok(created.id)
}

/// Appends a video to the end of a playlist.
///
/// YouTube answers `409 Conflict` when the playlist is being modified
/// concurrently; that surfaces as `TransferError::Conflict`.
pub async fn add_video(
    client: &Client,
    api_url: &str,
    token: &str,
    playlist_id: &str,
    video_id: &str,
) -> Res<AddPlaylistItemResponse> {
    let body = AddPlaylistItemRequest {
        snippet: PlaylistItemSnippet {
            playlist_id: playlist_id.to_string(),
            resource_id: ResourceId {
                kind: VIDEO_KIND.to_string(),
                video_id: video_id.to_string(),
            },
        },
    };

    let response = client
        .post(format!("{}/playlistItems", api_url.trim_end_matches('/')))
        .query(&[("part", "snippet")])
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;

    let response = ensure_success(response).await?;
    Ok(response.json::<AddPlaylistItemResponse>().await?)
}
