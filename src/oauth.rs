//! OAuth 2.0 authorization code flow with PKCE.
//!
//! Spotify and Google both accept the same flow for installed applications,
//! so one implementation serves both. The [`OAuthConfig`] decides which
//! service is talked to.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::{Mutex, oneshot};

use crate::{
    Res,
    config::OAuthConfig,
    error::{TransferError, ensure_success},
    info,
    server::start_api_server,
    types::{PkceToken, Token},
    utils, warning,
};

const AUTH_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    scope: Option<String>,
    expires_in: Option<u64>,
}

impl TokenResponse {
    /// Some providers omit the refresh token on refresh; the previous one stays valid.
    fn into_token(self, previous_refresh_token: &str, fallback_scope: &str) -> Token {
        Token {
            access_token: self.access_token,
            refresh_token: self
                .refresh_token
                .unwrap_or_else(|| previous_refresh_token.to_string()),
            scope: self.scope.unwrap_or_else(|| fallback_scope.to_string()),
            expires_in: self.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// Runs the interactive authorization flow and returns a fresh token.
///
/// 1. Generates a PKCE verifier, its S256 challenge and a CSRF state
/// 2. Starts the local callback server on `server_addr`
/// 3. Opens the authorization URL in the default browser
/// 4. Waits for the callback route to exchange the code for a token
/// 5. Shuts the callback server down again
///
/// Fails with [`TransferError::Authentication`] when no token arrives within
/// two minutes.
pub async fn authorize(oauth: &OAuthConfig, server_addr: SocketAddr) -> Res<Token> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let csrf_state = utils::generate_state();

    let auth_url = authorize_url(oauth, &code_challenge, &csrf_state)?;

    let shared_state = Arc::new(Mutex::new(Some(PkceToken {
        oauth: oauth.clone(),
        code_verifier,
        csrf_state,
        token: None,
    })));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let server_state = Arc::clone(&shared_state);
    let mut server =
        tokio::spawn(async move { start_api_server(server_state, server_addr, shutdown_rx).await });

    info!("Authorize access to {} in your browser", oauth.service);
    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = tokio::select! {
        token = wait_for_token(Arc::clone(&shared_state)) => token,
        // the server only ends on its own when it could not start
        result = &mut server => {
            return Err(match result {
                Ok(Err(e)) => e,
                Ok(Ok(())) => TransferError::Authentication("callback server stopped".to_string()),
                Err(e) => TransferError::Authentication(e.to_string()),
            });
        }
    };

    let _ = shutdown_tx.send(());
    match server.await {
        Ok(Err(e)) => warning!("Callback server stopped with an error: {}", e),
        Err(e) => warning!("Callback server task failed: {}", e),
        Ok(Ok(())) => {}
    }

    token.ok_or_else(|| {
        TransferError::Authentication(format!(
            "{} authorization failed or timed out",
            oauth.service
        ))
    })
}

/// Builds the URL the user is sent to for granting access.
pub fn authorize_url(oauth: &OAuthConfig, code_challenge: &str, state: &str) -> Res<Url> {
    let mut params: Vec<(&str, &str)> = vec![
        ("client_id", oauth.client_id.as_str()),
        ("response_type", "code"),
        ("redirect_uri", oauth.redirect_uri.as_str()),
        ("code_challenge", code_challenge),
        ("code_challenge_method", "S256"),
        ("scope", oauth.scope.as_str()),
        ("state", state),
    ];
    params.extend(
        oauth
            .extra_auth_params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str())),
    );

    Url::parse_with_params(&oauth.auth_url, &params)
        .map_err(|e| TransferError::Config(format!("{} auth URL: {e}", oauth.service)))
}

/// Polls the shared state until the callback route has stored a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < AUTH_TIMEOUT {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for a token.
///
/// The client secret is sent only when one is configured; Spotify's PKCE
/// flow works without it, Google's installed-app flow requires it.
pub async fn exchange_code_pkce(oauth: &OAuthConfig, code: &str, verifier: &str) -> Res<Token> {
    let mut form = vec![
        ("grant_type", "authorization_code"),
        ("client_id", oauth.client_id.as_str()),
        ("code", code),
        ("code_verifier", verifier),
        ("redirect_uri", oauth.redirect_uri.as_str()),
    ];
    if let Some(secret) = &oauth.client_secret {
        form.push(("client_secret", secret.as_str()));
    }

    let response = Client::new().post(&oauth.token_url).form(&form).send().await?;
    let response = ensure_success(response).await.map_err(into_auth_error)?;
    let json: TokenResponse = response.json().await?;

    Ok(json.into_token("", &oauth.scope))
}

/// Exchanges a refresh token for a new access token.
pub async fn refresh_token(oauth: &OAuthConfig, refresh_token: &str) -> Res<Token> {
    let mut form = vec![
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
        ("client_id", oauth.client_id.as_str()),
    ];
    if let Some(secret) = &oauth.client_secret {
        form.push(("client_secret", secret.as_str()));
    }

    let response = Client::new().post(&oauth.token_url).form(&form).send().await?;
    let response = ensure_success(response).await.map_err(into_auth_error)?;
    let json: TokenResponse = response.json().await?;

    Ok(json.into_token(refresh_token, &oauth.scope))
}

// token endpoints answer 400 for revoked or expired grants
fn into_auth_error(err: TransferError) -> TransferError {
    match err {
        TransferError::Service { status, message } => {
            TransferError::Authentication(format!("{status}: {message}"))
        }
        other => other,
    }
}
