//! Route configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RoutePair;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read routes file: {0}")]
    Io(#[from] std::io::Error),

    #[error("routes file malformed: {0}")]
    MalformedLine(String),
}

/// Load route pairs from a line-oriented file.
///
/// Each non-blank line holds exactly two whitespace-separated tokens,
/// `<import> <repo>`. Blank lines are skipped; any other token count is
/// fatal so the server never starts with a partial route set.
pub fn load_routes(path: &Path) -> Result<Vec<RoutePair>, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_routes(&content)
}

fn parse_routes(content: &str) -> Result<Vec<RoutePair>, ConfigError> {
    let mut pairs = Vec::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [import, repo] => pairs.push(RoutePair {
                import: (*import).to_string(),
                repo: (*repo).to_string(),
            }),
            _ => return Err(ConfigError::MalformedLine(line.to_string())),
        }
    }
    Ok(pairs)
}
