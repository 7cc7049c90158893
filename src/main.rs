//! quicfile — static file server over QUIC (HTTP/3) or plain TCP.
//!
//! The binary is a thin shell: initialize tracing, resolve configuration,
//! hand off to [`quicfile::run`]. The fatal-exit policy lives here and only
//! here; the library reports every failure as a [`ServerError`] value.

use std::convert::Infallible;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quicfile::config::{self, FileConfig, ServerConfig};
use quicfile::{Args, ServerError};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quicfile=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    match bootstrap(args).await {
        Ok(never) => match never {},
        Err(err) => {
            tracing::error!(error = %err, "fatal");
            std::process::exit(err.exit_code());
        }
    }
}

async fn bootstrap(args: Args) -> Result<Infallible, ServerError> {
    let file = match &args.config {
        Some(path) => config::loader::load_file(path)?,
        None => FileConfig::default(),
    };
    let config = ServerConfig::resolve(args, file)?;
    quicfile::run(config).await
}
