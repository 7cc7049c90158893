//! QUIC (HTTP/3) branch.
//!
//! The endpoint accept loop is the one blocking await; each connection and
//! each request stream runs on its own task. Per-connection and per-stream
//! failures (handshake refused, client reset, body cut short) are logged and
//! never terminate the process; only endpoint construction or closure is
//! fatal.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use bytes::Bytes;
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::error::ServerError;
use crate::net::tls;

/// Capability knobs passed to QUIC transport construction. Exactly these and
/// nothing else; everything TLS-related travels separately.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuicTransportOptions {
    /// Use multiple network paths where the transport stack supports it.
    pub multipath: bool,
}

/// Bind a QUIC endpoint on `addr` and serve `router` over HTTP/3 until a
/// fatal error.
pub async fn serve(
    addr: SocketAddr,
    cert_path: &Path,
    key_path: &Path,
    router: Router,
    options: QuicTransportOptions,
) -> Result<Infallible, ServerError> {
    let tls_config = tls::load_server_crypto(cert_path, key_path)
        .map_err(|e| ServerError::startup("load TLS certificate/key", e))?;
    let crypto = quinn::crypto::rustls::QuicServerConfig::try_from(tls_config)
        .map_err(|e| ServerError::startup("build QUIC crypto config", e))?;
    let server_config = quinn::ServerConfig::with_crypto(Arc::new(crypto));

    if options.multipath {
        // quinn schedules a single path; what it does offer is passive path
        // migration, which stays enabled. The flag is accepted so a client
        // capable of multipath can still negotiate it end to end.
        tracing::info!("multipath requested; endpoint accepts path migration");
    }

    let endpoint = quinn::Endpoint::server(server_config, addr)
        .map_err(|e| ServerError::startup("bind UDP socket", e))?;

    tracing::info!(address = %addr, "HTTP/3 endpoint bound");

    while let Some(incoming) = endpoint.accept().await {
        let router = router.clone();
        tokio::spawn(async move {
            let connection = match incoming.await {
                Ok(connection) => connection,
                Err(err) => {
                    tracing::debug!(error = %err, "QUIC handshake failed");
                    return;
                }
            };
            let remote = connection.remote_address();
            if let Err(err) = serve_connection(connection, router).await {
                tracing::debug!(peer = %remote, error = %err, "connection ended with error");
            }
        });
    }

    // accept() only yields None once the endpoint is closed.
    Err(ServerError::transport("QUIC endpoint closed unexpectedly"))
}

/// Run the HTTP/3 request loop for one established connection.
async fn serve_connection(connection: quinn::Connection, router: Router) -> Result<(), h3::Error> {
    let mut h3_conn: h3::server::Connection<h3_quinn::Connection, Bytes> =
        h3::server::Connection::new(h3_quinn::Connection::new(connection)).await?;

    loop {
        match h3_conn.accept().await? {
            Some((request, stream)) => {
                let router = router.clone();
                tokio::spawn(async move {
                    if let Err(err) = handle_request(request, stream, router).await {
                        tracing::debug!(error = %err, "request stream failed");
                    }
                });
            }
            // Client cleanly closed the connection.
            None => return Ok(()),
        }
    }
}

/// Dispatch one HTTP/3 request to the shared router and stream the response
/// body back over the request stream.
async fn handle_request(
    request: Request<()>,
    mut stream: h3::server::RequestStream<h3_quinn::BidiStream<Bytes>, Bytes>,
    router: Router,
) -> Result<(), h3::Error> {
    let (parts, ()) = request.into_parts();
    let request = Request::from_parts(parts, Body::empty());

    let response = match router.oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    let (parts, mut body) = response.into_parts();
    stream.send_response(Response::from_parts(parts, ())).await?;

    while let Some(frame) = body.frame().await {
        match frame {
            Ok(frame) => {
                if let Ok(data) = frame.into_data() {
                    stream.send_data(data).await?;
                }
            }
            Err(err) => {
                // File read failed mid-stream; the response head is already
                // sent, so all we can do is cut the stream short.
                tracing::debug!(error = %err, "response body read failed");
                break;
            }
        }
    }

    stream.finish().await
}
