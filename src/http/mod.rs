//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, Host + path extraction)
//!     → routing::resolve (table lookup)
//!     → render.rs (go-import meta tag page) or 302 / 404
//!     → Send to client
//! ```

pub mod render;
pub mod server;

pub use render::{RenderModel, Renderer};
pub use server::{AppState, HttpServer, StartupError};
