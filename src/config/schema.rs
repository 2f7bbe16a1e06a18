//! Configuration schema definitions.
//!
//! The runtime configuration is assembled in `main` from command-line
//! arguments; route pairs come either inline or from a routes file.

use std::path::PathBuf;

/// Root configuration for the redirector.
#[derive(Debug, Clone)]
pub struct RedirectorConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,

    /// Version control system written into the go-import meta tag.
    pub vcs: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Raw route pairs, validated during table construction.
    pub routes: Vec<RoutePair>,
}

impl Default for RedirectorConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            tls: None,
            vcs: "git".to_string(),
            request_timeout_secs: 30,
            routes: Vec::new(),
        }
    }
}

/// A single import-root to repo-root declaration, as written in
/// configuration. A trailing `/*` on both sides marks a wildcard route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePair {
    pub import: String,
    pub repo: String,
}

/// TLS configuration for the listener.
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: PathBuf,

    /// Path to private key file (PEM).
    pub key_path: PathBuf,
}
