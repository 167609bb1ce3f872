use crate::{Res, transfer::DestinationClient, types::TrackRecord};

/// `"<track name> <primary artist>"`, passed to the search as is.
pub fn build_query(track: &TrackRecord) -> String {
    format!("{} {}", track.name, track.artist)
}

/// Asks the destination for its single top-ranked result.
pub async fn find_best_match<D>(destination: &D, query: &str) -> Res<Option<String>>
where
    D: DestinationClient + ?Sized,
{
    let results = destination.search(query, 1).await?;
    Ok(results.into_iter().next())
}
