//! Static file server over QUIC (HTTP/3) or plain TCP (HTTP/1.1).
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI flags / TOML file
//!       → config (resolve & validate, pick transport variant)
//!       → http (axum Router wrapping ServeDir)
//!       → lifecycle::startup (one startup log line, dispatch)
//!           ├─ net::tcp  — TcpListener + axum::serve, blocks forever
//!           └─ net::quic — rustls + quinn endpoint + h3 request loop,
//!                          blocks forever
//!
//!   Any error anywhere surfaces as a ServerError at main, which logs it
//!   and exits. There is no retry, fallback, or graceful shutdown.
//! ```
//!
//! Both transports serve the exact same `Router`, so content and routing
//! behavior are identical whichever protocol a benchmark run selects.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;

pub use cli::Args;
pub use config::{ServerConfig, Transport};
pub use error::ServerError;
pub use lifecycle::run;
