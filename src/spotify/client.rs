use std::net::SocketAddr;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    Res,
    config::SpotifyConfig,
    management::{TokenManager, TokenStore},
    spotify::playlist,
    transfer::SourceClient,
    types::TrackPage,
};

pub struct SpotifyClient {
    http: Client,
    api_url: String,
    server_addr: SocketAddr,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(config: &SpotifyConfig, server_addr: SocketAddr, store: Box<dyn TokenStore>) -> Self {
        Self {
            http: Client::new(),
            api_url: config.api_url.clone(),
            server_addr,
            tokens: Mutex::new(TokenManager::new(config.oauth.clone(), store)),
        }
    }

    /// Forces a new browser authorization and caches the resulting token.
    pub async fn reauthorize(&self) -> Res<()> {
        self.tokens.lock().await.reauthorize(self.server_addr).await
    }
}

#[async_trait]
impl SourceClient for SpotifyClient {
    async fn authenticate(&self) -> Res<()> {
        self.tokens.lock().await.authenticate(self.server_addr).await
    }

    async fn playlist_page(&self, playlist_id: &str, cursor: Option<&str>) -> Res<TrackPage> {
        let token = self.tokens.lock().await.get_valid_token().await?;
        let response =
            playlist::get_tracks(&self.http, &self.api_url, &token, playlist_id, cursor).await?;
        Ok(playlist::into_track_page(response))
    }
}
