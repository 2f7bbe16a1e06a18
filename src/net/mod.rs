//! Network subsystem.
//!
//! Plain HTTP binds a `tokio::net::TcpListener` directly in `main`;
//! this module only covers TLS material loading.

pub mod tls;
