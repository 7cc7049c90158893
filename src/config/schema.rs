//! Configuration schema and resolution.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cli::Args;
use crate::config::loader::FileConfig;

pub const DEFAULT_PORT: u16 = 6060;
pub const DEFAULT_CERT: &str = "cert.crt";
pub const DEFAULT_KEY: &str = "priv.key";

/// The resolved, validated configuration for one server instance.
///
/// Built once at process start, immutable afterwards, consumed exactly once
/// to pick the transport branch and the bind address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Filesystem root to serve files from.
    pub root: PathBuf,

    /// Port to bind (TCP or UDP depending on transport).
    pub port: u16,

    /// The transport branch to dispatch to.
    pub transport: Transport,
}

/// The two mutually exclusive transports.
///
/// TLS material lives only on the QUIC variant; the TCP branch has no way to
/// reach a certificate or key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    Quic {
        cert: PathBuf,
        key: PathBuf,
        multipath: bool,
    },
    Tcp,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("parameter 'dir' is required")]
    MissingRootDir,

    #[error("unrecognized protocol {0:?}, expected \"quic\" or \"tcp\"")]
    UnrecognizedProtocol(String),

    #[error("cannot read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    FileParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ServerConfig {
    /// Merge CLI flags with file values (flags win) and validate.
    ///
    /// Checked in order: the root directory first, then the protocol string
    /// (case-sensitive exact match). Certificate and key paths are resolved
    /// only when the protocol turns out to be quic; they are never opened
    /// here.
    pub fn resolve(args: Args, file: FileConfig) -> Result<Self, ConfigError> {
        let root = args.dir.or(file.dir).unwrap_or_default();
        if root.as_os_str().is_empty() {
            return Err(ConfigError::MissingRootDir);
        }

        let port = args.port.or(file.port).unwrap_or(DEFAULT_PORT);
        let protocol = args
            .protocol
            .or(file.protocol)
            .unwrap_or_else(|| "quic".to_string());

        let transport = match protocol.as_str() {
            "quic" => Transport::Quic {
                cert: args
                    .cert
                    .or(file.cert)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CERT)),
                key: args
                    .key
                    .or(file.key)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_KEY)),
                multipath: args.multipath_quic || file.multipath_quic.unwrap_or(false),
            },
            "tcp" => Transport::Tcp,
            _ => return Err(ConfigError::UnrecognizedProtocol(protocol)),
        };

        Ok(Self {
            root,
            port,
            transport,
        })
    }

    /// Wildcard host combined with the configured port, identical for both
    /// transports.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Transport {
    pub fn name(&self) -> &'static str {
        match self {
            Transport::Quic { .. } => "quic",
            Transport::Tcp => "tcp",
        }
    }
}
