//! Network transports.
//!
//! # Data Flow
//! ```text
//! lifecycle::startup picks exactly one branch:
//!     tcp.rs  — TcpListener + axum::serve (HTTP/1.1)
//!     quic.rs — tls.rs loads rustls material
//!               → quinn endpoint (UDP)
//!               → h3 connection/request loop → shared Router
//! ```
//!
//! Both serve functions block for the life of the process and only return
//! with an error. Bind and TLS-load failures are `ServerError::Startup`;
//! anything after a successful start is `ServerError::Transport`.

pub mod quic;
pub mod tcp;
pub mod tls;
