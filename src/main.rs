//! HTTP redirector for a custom Go import domain.
//!
//! Responds to requests under a configured import path root with a meta
//! tag specifying the source repository for `go get` and an HTML redirect
//! to the godoc.org documentation page for that package.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────┐
//!                      │              IMPORT REDIRECTOR              │
//!                      │                                            │
//!   Client Request     │  ┌─────────┐    ┌──────────┐              │
//!   ──────────────────▶│  │  http   │───▶│ routing  │              │
//!                      │  │ server  │    │ resolver │              │
//!                      │  └─────────┘    └────┬─────┘              │
//!                      │                      │                    │
//!                      │                      ▼                    │
//!   Client Response    │  ┌─────────┐    ┌──────────┐              │
//!   ◀──────────────────│  │ render  │◀───│  route   │              │
//!                      │  │ (tera)  │    │  table   │              │
//!                      │  └─────────┘    └──────────┘              │
//!                      │                                            │
//!                      │  config (CLI / routes file) · net (TLS)    │
//!                      └────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```text
//! go-import-redirector [--addr address] [--tls] [--vcs sys] <import> <repo>
//! go-import-redirector [--addr address] <routes-file>
//! ```
//!
//! If both `<import>` and `<repo>` end in `/*`, the corresponding path
//! element is taken from the import path and substituted into the repo
//! on each request. For example, with `rsc.io/* https://github.com/rsc/*`
//! the response for `rsc.io/x86/x86asm` includes:
//!
//! ```text
//! <meta name="go-import" content="rsc.io/x86 git https://github.com/rsc/x86">
//! <meta http-equiv="refresh" content="0; url=https://godoc.org/rsc.io/x86/x86asm">
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use go_import_redirector::config::{self, RedirectorConfig, RoutePair, TlsConfig};
use go_import_redirector::http::HttpServer;
use go_import_redirector::net::tls;

#[derive(Parser)]
#[command(name = "go-import-redirector")]
#[command(about = "HTTP redirector serving go-import meta tags", long_about = None)]
struct Cli {
    /// Address to serve on
    #[arg(long, default_value = "0.0.0.0:8080")]
    addr: String,

    /// Serve HTTPS, loading <host>.crt and <host>.key from the working directory
    #[arg(long)]
    tls: bool,

    /// Certificate file (PEM); overrides the <host>.crt default
    #[arg(long, requires = "tls")]
    tls_cert: Option<PathBuf>,

    /// Private key file (PEM); overrides the <host>.key default
    #[arg(long, requires = "tls")]
    tls_key: Option<PathBuf>,

    /// Version control system for the go-import meta tag (git, hg, svn)
    #[arg(long, default_value = "git")]
    vcs: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    request_timeout: u64,

    /// Either an `<import> <repo>` pair or a single routes file path
    #[arg(required = true, num_args = 1..=2, value_name = "IMPORT REPO | ROUTES-FILE")]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "go_import_redirector=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let routes = match cli.args.as_slice() {
        [import, repo] => vec![RoutePair {
            import: import.clone(),
            repo: repo.clone(),
        }],
        [file] => {
            tracing::info!(path = %file, "Reading routes file");
            config::load_routes(Path::new(file))?
        }
        _ => unreachable!("clap enforces 1..=2 positional args"),
    };

    let mut config = RedirectorConfig {
        bind_address: cli.addr,
        tls: None,
        vcs: cli.vcs,
        request_timeout_secs: cli.request_timeout,
        routes,
    };

    let server = HttpServer::new(&config)?;

    tracing::info!(
        bind_address = %config.bind_address,
        routes = config.routes.len(),
        vcs = %config.vcs,
        "Configuration loaded"
    );

    if cli.tls {
        let host = server
            .hosts()
            .into_iter()
            .next()
            .ok_or("no import host to derive TLS certificate paths from")?;
        let (default_cert, default_key) = tls::default_cert_paths(&host);
        config.tls = Some(TlsConfig {
            cert_path: cli.tls_cert.unwrap_or(default_cert),
            key_path: cli.tls_key.unwrap_or(default_key),
        });
    }

    match &config.tls {
        Some(tls_config) => {
            let rustls = tls::load_tls_config(&tls_config.cert_path, &tls_config.key_path).await?;
            let addr: SocketAddr = config.bind_address.parse()?;
            server.run_tls(addr, rustls).await?;
        }
        None => {
            let listener = TcpListener::bind(&config.bind_address).await?;
            server.run(listener).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
