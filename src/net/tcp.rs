//! Plain TCP (HTTP/1.1) branch.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::ServerError;

/// Bind `addr` and serve `router` over HTTP/1.1 until a fatal error.
///
/// Never touches TLS material. Accept-loop concurrency belongs to axum and
/// hyper; this function is one blocking await.
pub async fn serve(addr: SocketAddr, router: Router) -> Result<Infallible, ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::startup("bind TCP listener", e))?;

    tracing::info!(address = %addr, "HTTP/1.1 listener bound");

    match axum::serve(listener, router).await {
        Ok(()) => Err(ServerError::transport("HTTP listener closed unexpectedly")),
        Err(e) => Err(ServerError::transport(e)),
    }
}
