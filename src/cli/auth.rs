use clap::ValueEnum;

use crate::{cli, config::Config, error, success};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Service {
    Spotify,
    Youtube,
}

pub async fn auth(config: &Config, service: Service) {
    let result = match service {
        Service::Spotify => match cli::spotify_client(config) {
            Ok(client) => client.reauthorize().await,
            Err(e) => Err(e),
        },
        Service::Youtube => match cli::youtube_client(config) {
            Ok(client) => client.reauthorize().await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => success!("Authentication successful!"),
        Err(e) => error!("Authentication failed: {}", e),
    }
}
