//! Startup failure paths: bad TLS material, port conflicts.

use std::net::SocketAddr;
use std::path::Path;

use clap::Parser;
use quicfile::config::FileConfig;
use quicfile::net::quic::{self, QuicTransportOptions};
use quicfile::{Args, ServerConfig, ServerError};

mod common;

#[tokio::test]
async fn quic_with_unreadable_cert_fails_before_serving() {
    let root = common::scratch_root("quic-badcert");
    let addr: SocketAddr = "127.0.0.1:28664".parse().unwrap();
    let router = quicfile::http::build_router(&root);

    let err = quic::serve(
        addr,
        Path::new("/nonexistent/bad.crt"),
        Path::new("/nonexistent/bad.key"),
        router,
        QuicTransportOptions::default(),
    )
    .await
    .unwrap_err();

    match err {
        ServerError::Startup { context, .. } => {
            assert_eq!(context, "load TLS certificate/key");
        }
        other => panic!("expected startup error, got: {other}"),
    }
}

#[tokio::test]
async fn second_bind_on_occupied_port_is_a_startup_error() {
    let root = common::scratch_root("conflict");
    let addr: SocketAddr = "127.0.0.1:28665".parse().unwrap();

    // Hold the port so the server's own bind must fail.
    let _occupant = tokio::net::TcpListener::bind(addr).await.unwrap();

    let args = Args::parse_from([
        "quicfile",
        "--dir",
        root.to_str().unwrap(),
        "--protocol",
        "tcp",
        "--port",
        "28665",
    ]);
    let config = ServerConfig::resolve(args, FileConfig::default()).unwrap();
    let router = quicfile::http::build_router(&config.root);

    let err = quicfile::net::tcp::serve(addr, router).await.unwrap_err();
    assert!(matches!(err, ServerError::Startup { .. }));
}

#[tokio::test]
async fn config_errors_exit_with_a_distinct_code() {
    let args = Args::parse_from(["quicfile", "--protocol", "tcp"]);
    let err: ServerError = ServerConfig::resolve(args, FileConfig::default())
        .unwrap_err()
        .into();
    assert_eq!(err.exit_code(), 2);

    let startup = ServerError::startup("bind TCP listener", std::io::Error::other("in use"));
    assert_eq!(startup.exit_code(), 1);
}
