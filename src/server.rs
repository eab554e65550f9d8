use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};

use crate::{
    Res, TuneNestError, api,
    api::{AppState, SharedState},
    info,
};

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/catalog", get(api::catalog))
        .route("/playlists/{id}", get(api::playlist))
        .route("/songs/{id}", get(api::song))
        .route("/artists/{id}", get(api::artist))
        .route("/artists/{id}/releases", get(api::releases))
        .route("/youtube", get(api::youtube))
        .route("/search", get(api::search))
        .layer(Extension(state))
}

/// Binds `address` and serves the API until the process is stopped.
pub async fn start_api_server(address: &str, state: AppState) -> Res<()> {
    let addr = SocketAddr::from_str(address).map_err(|e| {
        TuneNestError::Configuration(format!("invalid server address {address:?}: {e}"))
    })?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| TuneNestError::Configuration(format!("cannot bind {addr}: {e}")))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, router(Arc::new(state)))
        .await
        .map_err(|e| TuneNestError::Configuration(format!("server stopped: {e}")))
}
