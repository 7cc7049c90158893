//! Command-line surface.
//!
//! Every option except `--dir` has a default; `--dir` is validated during
//! config resolution rather than by clap so that an empty value and a missing
//! value produce the same diagnostic.

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "quicfile")]
#[command(about = "Serve a directory over QUIC (HTTP/3) or plain TCP", version)]
pub struct Args {
    /// Path to the directory to be served (required)
    #[arg(long, value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from))]
    pub dir: Option<PathBuf>,

    /// Port to bind
    #[arg(long)]
    pub port: Option<u16>,

    /// Transport protocol: "quic" or "tcp"
    #[arg(long)]
    pub protocol: Option<String>,

    /// Path to the TLS certificate file, used only with quic
    #[arg(long)]
    pub cert: Option<PathBuf>,

    /// Path to the TLS private key file, used only with quic
    #[arg(long)]
    pub key: Option<PathBuf>,

    /// Use multiple network paths on the QUIC transport where supported
    #[arg(long)]
    pub multipath_quic: bool,

    /// Optional TOML file with the same settings; flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}
