use reqwest::Client;

use crate::{Res, error::ensure_success, types::SearchResponse};

/// Searches videos and returns the ids of the top `max_results` hits in rank order.
pub async fn videos(
    client: &Client,
    api_url: &str,
    token: &str,
    query: &str,
    max_results: u32,
) -> Res<Vec<String>> {
    let max_results = max_results.to_string();
    let response = client
        .get(format!("{}/search", api_url.trim_end_matches('/')))
        .query(&[
            ("part", "snippet"),
            ("type", "video"),
            ("maxResults", max_results.as_str()),
            ("q", query),
        ])
        .bearer_auth(token)
        .send()
        .await?;

    let response = ensure_success(response).await?;
    let results = response.json::<SearchResponse>().await?;
    Ok(video_ids(results))
}

pub fn video_ids(response: SearchResponse) -> Vec<String> {
    response
        .items
        .into_iter()
        .filter_map(|item| item.id.video_id)
        .collect()
}
