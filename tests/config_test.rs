use std::{collections::HashMap, time::Duration};

use sp2yt::{
    TransferError,
    config::{Config, RetryPolicy},
    oauth::authorize_url,
};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

fn required_vars() -> Vec<(&'static str, &'static str)> {
    vec![
        ("SPOTIFY_API_AUTH_CLIENT_ID", "spotify-client"),
        ("YOUTUBE_API_AUTH_CLIENT_ID", "youtube-client"),
        ("YOUTUBE_API_AUTH_CLIENT_SECRET", "youtube-secret"),
    ]
}

#[test]
fn test_defaults_apply() {
    let config = Config::from_lookup(lookup(&required_vars())).unwrap();
    let spotify = config.spotify().unwrap();
    let youtube = config.youtube().unwrap();

    assert_eq!(spotify.oauth.client_id, "spotify-client");
    assert_eq!(spotify.oauth.client_secret, None);
    assert_eq!(spotify.oauth.scope, "playlist-read-private");
    assert_eq!(spotify.api_url, "https://api.spotify.com/v1");

    assert_eq!(youtube.oauth.client_id, "youtube-client");
    assert_eq!(
        youtube.oauth.client_secret.as_deref(),
        Some("youtube-secret")
    );
    assert_eq!(
        youtube.oauth.scope,
        "https://www.googleapis.com/auth/youtube.force-ssl"
    );
    assert_eq!(
        youtube.api_url,
        "https://www.googleapis.com/youtube/v3"
    );

    assert_eq!(config.server_addr.to_string(), "127.0.0.1:8888");
    assert_eq!(config.retry, RetryPolicy::default());
    assert_eq!(config.retry.max_attempts, 3);
    assert_eq!(config.retry.delay, Duration::from_secs(5));
}

#[test]
fn test_overrides_apply() {
    let mut vars = required_vars();
    vars.extend([
        ("SPOTIFY_API_URL", "http://localhost:9000/v1"),
        ("SERVER_ADDRESS", "0.0.0.0:9999"),
        ("INSERT_MAX_ATTEMPTS", "5"),
        ("INSERT_RETRY_DELAY_SECS", "0"),
    ]);

    let config = Config::from_lookup(lookup(&vars)).unwrap();

    assert_eq!(config.spotify().unwrap().api_url, "http://localhost:9000/v1");
    assert_eq!(config.server_addr.port(), 9999);
    assert_eq!(
        config.retry,
        RetryPolicy {
            max_attempts: 5,
            delay: Duration::ZERO,
        }
    );
}

#[test]
fn test_missing_client_id_is_an_error() {
    let vars = [("SPOTIFY_API_AUTH_CLIENT_ID", "spotify-client")];

    let config = Config::from_lookup(lookup(&vars)).unwrap();

    match config.youtube() {
        Err(TransferError::Config(message)) => {
            assert!(message.contains("YOUTUBE_API_AUTH_CLIENT_ID"))
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_spotify_only_setup_is_usable() {
    let vars = [("SPOTIFY_API_AUTH_CLIENT_ID", "spotify-client")];

    let config = Config::from_lookup(lookup(&vars)).unwrap();

    assert_eq!(config.spotify().unwrap().oauth.client_id, "spotify-client");
    assert!(config.youtube().is_err());
}

#[test]
fn test_youtube_only_setup_is_usable() {
    let vars = [("YOUTUBE_API_AUTH_CLIENT_ID", "youtube-client")];

    let config = Config::from_lookup(lookup(&vars)).unwrap();

    assert_eq!(config.youtube().unwrap().oauth.client_id, "youtube-client");
    match config.spotify() {
        Err(TransferError::Config(message)) => {
            assert!(message.contains("SPOTIFY_API_AUTH_CLIENT_ID"))
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_blank_values_count_as_unset() {
    let mut vars = required_vars();
    vars.push(("SPOTIFY_API_AUTH_SCOPE", "  "));
    let config = Config::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(config.spotify().unwrap().oauth.scope, "playlist-read-private");

    let vars = [
        ("SPOTIFY_API_AUTH_CLIENT_ID", ""),
        ("YOUTUBE_API_AUTH_CLIENT_ID", "youtube-client"),
    ];
    let config = Config::from_lookup(lookup(&vars)).unwrap();
    assert!(matches!(config.spotify(), Err(TransferError::Config(_))));
}

#[test]
fn test_invalid_numbers_are_rejected() {
    for (key, value) in [
        ("INSERT_MAX_ATTEMPTS", "zero"),
        ("INSERT_MAX_ATTEMPTS", "0"),
        ("INSERT_RETRY_DELAY_SECS", "-1"),
        ("SERVER_ADDRESS", "localhost"),
    ] {
        let mut vars = required_vars();
        vars.push((key, value));
        assert!(
            matches!(
                Config::from_lookup(lookup(&vars)),
                Err(TransferError::Config(_))
            ),
            "{key}={value} should be rejected"
        );
    }
}

#[test]
fn test_youtube_authorize_url_requests_offline_access() {
    let config = Config::from_lookup(lookup(&required_vars())).unwrap();

    let url = authorize_url(&config.youtube().unwrap().oauth, "challenge", "state123").unwrap();
    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();

    assert!(url.as_str().starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
    assert_eq!(params["client_id"], "youtube-client");
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["redirect_uri"], "http://127.0.0.1:8888/callback");
    assert_eq!(params["code_challenge"], "challenge");
    assert_eq!(params["code_challenge_method"], "S256");
    assert_eq!(
        params["scope"],
        "https://www.googleapis.com/auth/youtube.force-ssl"
    );
    assert_eq!(params["state"], "state123");
    assert_eq!(params["access_type"], "offline");
    assert_eq!(params["prompt"], "consent");
}

#[test]
fn test_spotify_authorize_url() {
    let config = Config::from_lookup(lookup(&required_vars())).unwrap();

    let url = authorize_url(&config.spotify().unwrap().oauth, "challenge", "state123").unwrap();
    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();

    assert_eq!(url.host_str(), Some("accounts.spotify.com"));
    assert_eq!(params["scope"], "playlist-read-private");
    assert!(!params.contains_key("access_type"));
}
