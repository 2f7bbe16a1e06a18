//! Go import redirector library.

pub mod config;
pub mod http;
pub mod net;
pub mod routing;

pub use config::RedirectorConfig;
pub use http::HttpServer;
pub use routing::{resolve, Resolution, RouteTable};
