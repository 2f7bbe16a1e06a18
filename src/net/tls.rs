//! TLS configuration and certificate loading.

use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;

/// Default certificate and key paths for an import host: `<host>.crt` and
/// `<host>.key` in the working directory. The certificate file should
/// contain the server certificate concatenated with the CA chain.
pub fn default_cert_paths(host: &str) -> (PathBuf, PathBuf) {
    (
        PathBuf::from(format!("{host}.crt")),
        PathBuf::from(format!("{host}.key")),
    )
}

/// Load TLS configuration from certificate and key files.
pub async fn load_tls_config(
    cert_path: &Path,
    key_path: &Path,
) -> Result<RustlsConfig, std::io::Error> {
    if !cert_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Certificate file not found: {cert_path:?}"),
        ));
    }
    if !key_path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Private key file not found: {key_path:?}"),
        ));
    }

    RustlsConfig::from_pem_file(cert_path, key_path).await
}
