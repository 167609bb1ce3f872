use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    transfer::SourceClient,
    types::{PlaylistId, TrackRecord},
    warning,
};

/// Fetches every track of a playlist, following the page cursor until the
/// source reports no further page. Source order is preserved.
///
/// Entries the source had to skip are reported after the spinner is cleared.
pub async fn fetch_tracks<S>(source: &S, playlist_id: &PlaylistId) -> Res<Vec<TrackRecord>>
where
    S: SourceClient + ?Sized,
{
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching tracks of playlist {}...", playlist_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let mut tracks: Vec<TrackRecord> = Vec::new();
    let mut skipped: Vec<String> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = match source
            .playlist_page(playlist_id.as_str(), cursor.as_deref())
            .await
        {
            Ok(page) => page,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        tracks.extend(page.tracks);
        skipped.extend(page.skipped);
        pb.set_message(format!("Fetched {} tracks...", tracks.len()));

        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    pb.finish_and_clear();

    for entry in &skipped {
        warning!("Skipping {}", entry);
    }

    Ok(tracks)
}
