//! Route table construction and validation.
//!
//! # Responsibilities
//! - Normalize raw (import, repo) pairs to a canonical trailing-slash form
//! - Validate repo URLs and wildcard-marker consistency
//! - Partition routes into exact and wildcard sets
//!
//! # Design Decisions
//! - Table is built once at startup, immutable at runtime (shared via Arc)
//! - Wildcard entries kept sorted by import-root length, longest first,
//!   so prefix matching is deterministic
//! - Duplicate import roots are rejected rather than silently overwritten

use std::collections::HashMap;

use crate::config::schema::RoutePair;

/// Wildcard marker on a declared import/repo pair, e.g. `rsc.io/*`.
const WILDCARD_SUFFIX: &str = "/*";

/// Error type for route table construction.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("repo path must be a full URL: {0}")]
    MissingScheme(String),

    #[error("either both import and repo must end in /* or neither: {import} {repo}")]
    WildcardMismatch { import: String, repo: String },

    #[error("duplicate import root: {0}")]
    DuplicateRoute(String),

    #[error("no routes configured")]
    Empty,
}

/// Immutable mapping from import roots to repository roots.
///
/// Every stored import root and repo root ends with exactly one `/`.
#[derive(Debug, Default)]
pub struct RouteTable {
    /// Import roots matched only by full path equality.
    exact: HashMap<String, String>,

    /// Import roots matched by prefix, longest root first. The next path
    /// segment after the root is substituted into both sides per request.
    wildcard: Vec<(String, String)>,
}

/// Trim any trailing slash and re-append exactly one.
fn normalize(s: &str) -> String {
    let mut out = s.trim_end_matches('/').to_string();
    out.push('/');
    out
}

/// Remove one trailing wildcard marker, ignoring the normalized slash.
fn strip_wildcard(s: &str) -> &str {
    let base = s.trim_end_matches('/');
    base.strip_suffix(WILDCARD_SUFFIX).unwrap_or(base)
}

impl RouteTable {
    /// Build a table from raw configuration pairs.
    ///
    /// Fails on the first invalid pair; serving with a partially built
    /// table would hand out wrong redirects.
    pub fn build(pairs: &[RoutePair]) -> Result<Self, TableError> {
        if pairs.is_empty() {
            return Err(TableError::Empty);
        }

        let mut table = Self::default();
        for pair in pairs {
            table.insert(&pair.import, &pair.repo)?;
        }
        table
            .wildcard
            .sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Ok(table)
    }

    fn insert(&mut self, import: &str, repo: &str) -> Result<(), TableError> {
        let import = normalize(import);
        let repo = normalize(repo);

        if !repo.contains("://") {
            return Err(TableError::MissingScheme(repo));
        }

        let import_wild = import.trim_end_matches('/').ends_with(WILDCARD_SUFFIX);
        let repo_wild = repo.trim_end_matches('/').ends_with(WILDCARD_SUFFIX);
        if import_wild != repo_wild {
            return Err(TableError::WildcardMismatch { import, repo });
        }

        if import_wild {
            let root = normalize(strip_wildcard(&import));
            let repo_root = normalize(strip_wildcard(&repo));
            if self.contains_root(&root) {
                return Err(TableError::DuplicateRoute(root));
            }
            self.wildcard.push((root, repo_root));
        } else {
            if self.contains_root(&import) {
                return Err(TableError::DuplicateRoute(import));
            }
            self.exact.insert(import, repo);
        }
        Ok(())
    }

    fn contains_root(&self, root: &str) -> bool {
        self.exact.contains_key(root) || self.wildcard.iter().any(|(r, _)| r == root)
    }

    /// Repo root for an exact import root, if registered.
    pub fn exact_match(&self, path: &str) -> Option<&str> {
        self.exact.get(path).map(String::as_str)
    }

    /// Longest wildcard root that is a prefix of `path`, with its repo root.
    pub fn wildcard_match(&self, path: &str) -> Option<(&str, &str)> {
        self.wildcard
            .iter()
            .find(|(root, _)| path.starts_with(root.as_str()))
            .map(|(root, repo)| (root.as_str(), repo.as_str()))
    }

    /// True if `root` (in normalized form) is a registered import root of
    /// either kind. Used by the `.ping` diagnostic endpoint.
    pub fn is_registered(&self, root: &str) -> bool {
        self.contains_root(&normalize(root))
    }

    /// Hosts of all registered import roots, in no particular order.
    /// Used to derive default TLS certificate file names.
    pub fn hosts(&self) -> Vec<String> {
        let mut hosts: Vec<String> = self
            .exact
            .keys()
            .chain(self.wildcard.iter().map(|(r, _)| r))
            .map(|root| match root.find('/') {
                Some(i) => root[..i].to_string(),
                None => root.clone(),
            })
            .collect();
        hosts.sort();
        hosts.dedup();
        hosts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(import: &str, repo: &str) -> RoutePair {
        RoutePair {
            import: import.to_string(),
            repo: repo.to_string(),
        }
    }

    #[test]
    fn test_exact_route_normalized() {
        let table = RouteTable::build(&[pair("9fans.net/go", "https://github.com/9fans/go")])
            .unwrap();
        assert_eq!(
            table.exact_match("9fans.net/go/"),
            Some("https://github.com/9fans/go/")
        );
    }

    #[test]
    fn test_trailing_slash_declaration_is_equivalent() {
        let a = RouteTable::build(&[pair("a.io", "https://x")]).unwrap();
        let b = RouteTable::build(&[pair("a.io/", "https://x/")]).unwrap();
        assert_eq!(a.exact_match("a.io/"), b.exact_match("a.io/"));
    }

    #[test]
    fn test_wildcard_route_strips_marker() {
        let table =
            RouteTable::build(&[pair("rsc.io/*", "https://github.com/rsc/*")]).unwrap();
        assert!(table.exact_match("rsc.io/").is_none());
        assert_eq!(
            table.wildcard_match("rsc.io/x86/"),
            Some(("rsc.io/", "https://github.com/rsc/"))
        );
    }

    #[test]
    fn test_repo_without_scheme_rejected() {
        let err = RouteTable::build(&[pair("a.io", "github.com/a")]).unwrap_err();
        assert!(matches!(err, TableError::MissingScheme(_)));
    }

    #[test]
    fn test_wildcard_mismatch_rejected() {
        let err = RouteTable::build(&[pair("a.io/*", "https://x")]).unwrap_err();
        assert!(matches!(err, TableError::WildcardMismatch { .. }));

        let err = RouteTable::build(&[pair("a.io", "https://x/*")]).unwrap_err();
        assert!(matches!(err, TableError::WildcardMismatch { .. }));
    }

    #[test]
    fn test_duplicate_root_rejected() {
        let err = RouteTable::build(&[
            pair("a.io", "https://x"),
            pair("a.io/", "https://y"),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateRoute(_)));
    }

    #[test]
    fn test_empty_route_set_rejected() {
        assert!(matches!(RouteTable::build(&[]), Err(TableError::Empty)));
    }

    #[test]
    fn test_longest_wildcard_prefix_wins() {
        let table = RouteTable::build(&[
            pair("a.io/*", "https://short/*"),
            pair("a.io/nested/*", "https://long/*"),
        ])
        .unwrap();
        assert_eq!(
            table.wildcard_match("a.io/nested/pkg/"),
            Some(("a.io/nested/", "https://long/"))
        );
        assert_eq!(
            table.wildcard_match("a.io/other/"),
            Some(("a.io/", "https://short/"))
        );
    }

    #[test]
    fn test_is_registered() {
        let table = RouteTable::build(&[
            pair("9fans.net/go", "https://github.com/9fans/go"),
            pair("rsc.io/*", "https://github.com/rsc/*"),
        ])
        .unwrap();
        assert!(table.is_registered("9fans.net/go"));
        assert!(table.is_registered("rsc.io"));
        assert!(!table.is_registered("other.net"));
    }

    #[test]
    fn test_hosts() {
        let table = RouteTable::build(&[
            pair("9fans.net/go", "https://github.com/9fans/go"),
            pair("rsc.io/*", "https://github.com/rsc/*"),
        ])
        .unwrap();
        assert_eq!(table.hosts(), vec!["9fans.net".to_string(), "rsc.io".to_string()]);
    }
}
