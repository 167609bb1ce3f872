use tokio::time::sleep;

use crate::{
    Res,
    config::RetryPolicy,
    error::TransferError,
    transfer::DestinationClient,
    types::{DestinationPlaylist, Privacy},
    warning,
};

/// Creates the destination playlist and fills it one item at a time.
pub struct PlaylistBuilder<'a, D: DestinationClient + ?Sized> {
    destination: &'a D,
    retry: RetryPolicy,
}

impl<'a, D: DestinationClient + ?Sized> PlaylistBuilder<'a, D> {
    pub fn new(destination: &'a D, retry: RetryPolicy) -> Self {
        Self { destination, retry }
    }

    /// Creates the playlist. Not retried: without it there is nothing to fill.
    pub async fn create_playlist(
        &self,
        title: &str,
        description: &str,
        privacy: Privacy,
    ) -> Res<DestinationPlaylist> {
        let id = self
            .destination
            .create_playlist(title, description, privacy)
            .await?;

        Ok(DestinationPlaylist {
            id,
            title: title.to_string(),
        })
    }

    /// Appends `content_id` to `playlist`.
    ///
    /// Conflicts are retried up to `max_attempts` times with a fixed delay in
    /// between; any other error is returned right away.
    pub async fn add_item(&self, playlist: &DestinationPlaylist, content_id: &str) -> Res<()> {
        let max_attempts = self.retry.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            match self
                .destination
                .insert_item(&playlist.id, content_id)
                .await
            {
                Ok(()) => return Ok(()),
                Err(e) if e.is_conflict() => {
                    warning!("Attempt {} of {} failed: {}", attempt, max_attempts, e);
                    if attempt < max_attempts {
                        sleep(self.retry.delay).await;
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(TransferError::RetriesExhausted {
            attempts: max_attempts,
        })
    }
}
