use std::{env, path::PathBuf};

use async_trait::async_trait;

use crate::{Res, config, types::Token};

/// Where a service's OAuth token is kept between runs.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Res<Option<Token>>;
    async fn save(&self, token: &Token) -> Res<()>;
}

/// Token cache as a pretty-printed JSON file.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The default cache file for a service, e.g.
    /// `~/.local/share/sp2yt/cache/youtube_token.json`.
    pub fn for_service(service: &str) -> Self {
        let mut path = config::data_dir();
        path.push(format!("cache/{}_token.json", service.to_lowercase()));
        Self::new(path)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Res<Option<Token>> {
        if !self.path.is_file() {
            return Ok(None);
        }

        let content = async_fs::read_to_string(&self.path).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Some(token))
    }

    async fn save(&self, token: &Token) -> Res<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(token)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}

/// Seeds the token from a refresh token held in an environment variable.
///
/// The loaded token is already expired, so the first use refreshes it.
/// Nothing is written back; refreshed tokens live for the current run only.
pub struct EnvTokenStore {
    var: String,
}

impl EnvTokenStore {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

#[async_trait]
impl TokenStore for EnvTokenStore {
    async fn load(&self) -> Res<Option<Token>> {
        Ok(env::var(&self.var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|refresh_token| Token {
                access_token: String::new(),
                refresh_token,
                scope: String::new(),
                expires_in: 0,
                obtained_at: 0,
            }))
    }

    async fn save(&self, _token: &Token) -> Res<()> {
        Ok(())
    }
}
