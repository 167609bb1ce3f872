use std::net::SocketAddr;

use chrono::Utc;

use crate::{
    Res, config::OAuthConfig, error::TransferError, management::TokenStore, oauth, success,
    types::Token,
};

/// Seconds before the real expiry at which a token is already treated as expired.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Owns one service's token: loads it from its store, refreshes it when it
/// is about to expire and writes every new token back.
pub struct TokenManager {
    oauth: OAuthConfig,
    store: Box<dyn TokenStore>,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(oauth: OAuthConfig, store: Box<dyn TokenStore>) -> Self {
        TokenManager {
            oauth,
            store,
            token: None,
        }
    }

    /// Makes sure a usable token exists.
    ///
    /// Uses the cached token when there is one, refreshing it if needed.
    /// Without a cached token the interactive browser flow runs.
    pub async fn authenticate(&mut self, server_addr: SocketAddr) -> Res<()> {
        if self.token.is_none() {
            self.token = self.store.load().await?;
        }

        if self.token.is_none() {
            let token = oauth::authorize(&self.oauth, server_addr).await?;
            self.store.save(&token).await?;
            self.token = Some(token);
            success!("{} authorization successful!", self.oauth.service);
        }

        self.get_valid_token().await.map(|_| ())
    }

    /// Runs the interactive flow even when a token is cached.
    pub async fn reauthorize(&mut self, server_addr: SocketAddr) -> Res<()> {
        let token = oauth::authorize(&self.oauth, server_addr).await?;
        self.store.save(&token).await?;
        self.token = Some(token);
        Ok(())
    }

    /// Returns an access token that is valid for at least a few more minutes.
    pub async fn get_valid_token(&mut self) -> Res<String> {
        let Some(token) = self.token.as_ref() else {
            return Err(TransferError::Authentication(format!(
                "no {} token, authorize first",
                self.oauth.service
            )));
        };

        if is_expired(token, now()) {
            if token.refresh_token.is_empty() {
                return Err(TransferError::Authentication(format!(
                    "{} token expired and cannot be refreshed",
                    self.oauth.service
                )));
            }

            let new_token = oauth::refresh_token(&self.oauth, &token.refresh_token).await?;
            self.store.save(&new_token).await?;
            self.token = Some(new_token);
        }

        Ok(self
            .token
            .as_ref()
            .map(|t| t.access_token.clone())
            .unwrap_or_default())
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}

fn now() -> u64 {
    Utc::now().timestamp() as u64
}

/// Whether `token` expires within the safety margin at unix time `now`.
pub fn is_expired(token: &Token, now: u64) -> bool {
    let expires_at = token.obtained_at.saturating_add(token.expires_in);
    now >= expires_at.saturating_sub(EXPIRY_MARGIN_SECS)
}
