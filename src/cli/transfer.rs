use crate::{
    cli,
    config::Config,
    error,
    transfer::{self, TransferRequest},
};

pub async fn transfer(config: &Config, request: TransferRequest) {
    let (source, destination) = match (cli::spotify_client(config), cli::youtube_client(config)) {
        (Ok(source), Ok(destination)) => (source, destination),
        (Err(e), _) | (_, Err(e)) => error!("{}", e),
    };

    if let Err(e) = transfer::transfer_playlist(&source, &destination, &request, config.retry).await
    {
        error!("Transfer failed: {}", e);
    }
}
