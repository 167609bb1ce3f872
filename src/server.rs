use std::{net::SocketAddr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::sync::{Mutex, oneshot};

use crate::{Res, api, types::PkceToken};

/// Serves the OAuth callback until `shutdown` fires.
pub async fn start_api_server(
    state: Arc<Mutex<Option<PkceToken>>>,
    addr: SocketAddr,
    shutdown: oneshot::Receiver<()>,
) -> Res<()> {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.await;
        })
        .await?;

    Ok(())
}
