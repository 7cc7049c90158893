//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::schema::ConfigError;

/// Raw values from an optional TOML config file.
///
/// Every field is optional; resolution in [`crate::config::ServerConfig`]
/// fills in defaults and lets CLI flags override.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub dir: Option<PathBuf>,
    pub port: Option<u16>,
    pub protocol: Option<String>,
    pub cert: Option<PathBuf>,
    pub key: Option<PathBuf>,
    pub multipath_quic: Option<bool>,
}

/// Read and deserialize a TOML config file.
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::FileParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_keys() {
        let file: FileConfig = toml::from_str(
            r#"
            dir = "/srv/www"
            port = 8443
            protocol = "quic"
            cert = "tls/server.crt"
            key = "tls/server.key"
            multipath_quic = true
            "#,
        )
        .expect("valid toml");
        assert_eq!(file.dir, Some(PathBuf::from("/srv/www")));
        assert_eq!(file.port, Some(8443));
        assert_eq!(file.protocol.as_deref(), Some("quic"));
        assert_eq!(file.multipath_quic, Some(true));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("prot = \"quic\"");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load_file(Path::new("/nonexistent/quicfile.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
