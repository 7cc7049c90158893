//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the shared static-file router
//! - Emit one human-readable startup line naming transport and address
//! - Dispatch to exactly one transport branch and block forever
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, surfaced to main as a value
//! - The two branches are mutually exclusive and share no state beyond the
//!   already-resolved config and the router

use std::convert::Infallible;

use crate::config::{ServerConfig, Transport};
use crate::error::ServerError;
use crate::net::quic::QuicTransportOptions;
use crate::{http, net};

/// Serve until a fatal error. Never returns under normal operation.
///
/// Takes an already-validated [`ServerConfig`] and consumes it exactly once.
pub async fn run(config: ServerConfig) -> Result<Infallible, ServerError> {
    let router = http::build_router(&config.root);
    let addr = config.bind_addr();

    tracing::info!(
        protocol = config.transport.name(),
        address = %addr,
        root = %config.root.display(),
        "creating server"
    );

    match config.transport {
        Transport::Quic {
            cert,
            key,
            multipath,
        } => {
            net::quic::serve(
                addr,
                &cert,
                &key,
                router,
                QuicTransportOptions { multipath },
            )
            .await
        }
        Transport::Tcp => net::tcp::serve(addr, router).await,
    }
}
