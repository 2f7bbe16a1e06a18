//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (host + path)
//!     → resolver.rs (normalize, exact then wildcard lookup)
//!     → Return: Package render model, DocRedirect, or NotFound
//!
//! Table Construction (at startup):
//!     RoutePair[]
//!     → Normalize trailing slashes
//!     → Validate (repo scheme, wildcard markers, duplicates)
//!     → Partition exact / wildcard, sort wildcard longest-first
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built at startup, immutable at runtime
//! - No regex in the hot path (equality and prefix checks only)
//! - Deterministic: longest wildcard prefix wins, always

pub mod resolver;
pub mod table;

pub use resolver::{resolve, Resolution};
pub use table::{RouteTable, TableError};
