use std::net::SocketAddr;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    Res,
    config::YoutubeConfig,
    management::{TokenManager, TokenStore},
    transfer::DestinationClient,
    types::Privacy,
    youtube::{playlist, search},
};

pub struct YoutubeClient {
    http: Client,
    api_url: String,
    server_addr: SocketAddr,
    tokens: Mutex<TokenManager>,
}

impl YoutubeClient {
    pub fn new(config: &YoutubeConfig, server_addr: SocketAddr, store: Box<dyn TokenStore>) -> Self {
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

    async fn access_token(&self) -> Res<String> {
        self.tokens.lock().await.get_valid_token().await
    }
}

#[async_trait]
impl DestinationClient for YoutubeClient {
    async fn authenticate(&self) -> Res<()> {
        self.tokens.lock().await.authenticate(self.server_addr).await
    }

    async fn create_playlist(
        &self,
        title: &str,
        description: &str,
        privacy: Privacy,
    ) -> Res<String> {
        let token = self.access_token().await?;
        playlist::create(&self.http, &self.api_url, &token, title, description, privacy).await
    }

    async fn search(&self, query: &str, max_results: u32) -> Res<Vec<String>> {
        let token = self.access_token().await?;
        search::videos(&self.http, &self.api_url, &token, query, max_results).await
    }

    async fn insert_item(&self, playlist_id: &str, content_id: &str) -> Res<()> {
        let token = self.access_token().await?;
        playlist::add_video(&self.http, &self.api_url, &token, playlist_id, content_id).await?;
        Ok(())
    }
}
