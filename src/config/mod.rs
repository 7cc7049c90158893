//! Configuration management.
//!
//! # Data Flow
//! ```text
//! CLI flags (clap) + optional TOML file
//!     → loader.rs (parse & deserialize the file)
//!     → schema.rs (merge sources, validate, pick transport variant)
//!     → ServerConfig (validated, immutable)
//!     → consumed exactly once by lifecycle::startup
//! ```
//!
//! # Design Decisions
//! - Validation happens before any listener exists; an empty root directory
//!   or unrecognized protocol never touches the network or the filesystem.
//! - The transport is a closed enum, not a string: the TCP variant carries no
//!   certificate or key fields at all, so the TCP branch cannot dereference
//!   them even by accident.

pub mod loader;
pub mod schema;

pub use loader::FileConfig;
pub use schema::{ConfigError, ServerConfig, Transport};
