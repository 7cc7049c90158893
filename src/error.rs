//! Error taxonomy for the whole server.
//!
//! Three classes, all fatal:
//! - `Config`: rejected before any network resource is touched.
//! - `Startup`: listener or TLS construction failed while starting.
//! - `Transport`: the blocking serve call returned after a clean start.
//!
//! Nothing in the core terminates the process itself; errors bubble up to
//! `main`, which prints the diagnostic and exits with [`ServerError::exit_code`].

use crate::config::ConfigError;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Operator-supplied configuration is invalid. Needs correction, not recovery.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Could not construct or bind the chosen transport (port in use,
    /// certificate/key unreadable or malformed, permission denied).
    #[error("startup failed: {context}: {source}")]
    Startup { context: &'static str, source: BoxError },

    /// The serve loop returned after startup had already succeeded.
    #[error("transport failed: {0}")]
    Transport(BoxError),
}

impl ServerError {
    pub fn startup(context: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Startup {
            context,
            source: source.into(),
        }
    }

    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport(source.into())
    }

    /// Configuration mistakes exit with 2 (usage-style error); anything that
    /// failed at or after bind exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Startup { .. } | Self::Transport(_) => 1,
        }
    }
}
