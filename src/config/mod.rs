//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line (clap)
//!     → schema.rs (RedirectorConfig: addr, TLS, vcs, route pairs)
//!     → loader.rs (routes file → RoutePair[], when a file is given)
//!     → routing::table (semantic validation, table construction)
//!     → shared via Arc to the request path
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - Loader checks line shape only; route semantics are validated where
//!   the table is built
//! - Any configuration error aborts startup before the listener binds

pub mod loader;
pub mod schema;

pub use loader::{load_routes, ConfigError};
pub use schema::{RedirectorConfig, RoutePair, TlsConfig};
