//! The shared static-file handler.
//!
//! One `Router` instance is built per process and handed to whichever
//! transport was selected, so routing and content are identical over QUIC
//! and TCP. File lookup, traversal safety, content-type, and conditional
//! request handling are all `ServeDir`'s contract.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the request handler rooted at `root`.
///
/// The directory is not opened or checked here; a missing root simply
/// produces 404s, matching plain file-server behavior.
pub fn build_router(root: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root))
        .layer(TraceLayer::new_for_http())
}
