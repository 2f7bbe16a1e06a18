//! Request path resolution.
//!
//! # Responsibilities
//! - Normalize the lookup key (host + URL path)
//! - Exact match first, then longest wildcard prefix
//! - Split the wildcard element from the documentation suffix
//!
//! # Design Decisions
//! - Pure function of (path, table); no I/O, no shared state
//! - A miss is an expected outcome, not an error
//! - A bare wildcard root redirects straight to the docs page

use crate::routing::table::RouteTable;

/// Outcome of resolving a request path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A package page: serve the go-import meta tag HTML.
    Package {
        import_root: String,
        repo_root: String,
        suffix: String,
    },
    /// Wildcard root hit with no package element: 302 to the docs index.
    DocRedirect { url: String },
    /// No configured route covers this path.
    NotFound,
}

/// Resolve `path` (request host concatenated with the URL path, query
/// stripped) against the table.
pub fn resolve(path: &str, table: &RouteTable) -> Resolution {
    let path = {
        let mut p = path.trim_end_matches('/').to_string();
        p.push('/');
        p
    };

    if let Some(repo) = table.exact_match(&path) {
        return Resolution::Package {
            import_root: path,
            repo_root: repo.to_string(),
            suffix: String::new(),
        };
    }

    let Some((root, repo)) = table.wildcard_match(&path) else {
        return Resolution::NotFound;
    };

    // Remainder never starts with '/' (the root ends with one) and always
    // ends with the normalized trailing slash.
    let remainder = path[root.len()..].trim_end_matches('/');
    if remainder.is_empty() {
        return Resolution::DocRedirect {
            url: format!("https://godoc.org/{}", repo.trim_end_matches('/')),
        };
    }

    let (elem, suffix) = match remainder.find('/') {
        Some(i) => (&remainder[..i], &remainder[i..]),
        None => (remainder, ""),
    };

    Resolution::Package {
        import_root: format!("{root}{elem}"),
        repo_root: format!("{repo}{elem}"),
        suffix: suffix.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RoutePair;

    fn table(pairs: &[(&str, &str)]) -> RouteTable {
        let pairs: Vec<RoutePair> = pairs
            .iter()
            .map(|(i, r)| RoutePair {
                import: (*i).to_string(),
                repo: (*r).to_string(),
            })
            .collect();
        RouteTable::build(&pairs).unwrap()
    }

    #[test]
    fn test_exact_match() {
        let t = table(&[("9fans.net/go", "https://github.com/9fans/go")]);
        assert_eq!(
            resolve("9fans.net/go", &t),
            Resolution::Package {
                import_root: "9fans.net/go/".to_string(),
                repo_root: "https://github.com/9fans/go/".to_string(),
                suffix: String::new(),
            }
        );
    }

    #[test]
    fn test_wildcard_single_element() {
        let t = table(&[("a.io/*", "https://x/*")]);
        assert_eq!(
            resolve("a.io/pkg", &t),
            Resolution::Package {
                import_root: "a.io/pkg".to_string(),
                repo_root: "https://x/pkg".to_string(),
                suffix: String::new(),
            }
        );
    }

    #[test]
    fn test_wildcard_with_suffix() {
        let t = table(&[("a.io/*", "https://x/*")]);
        assert_eq!(
            resolve("a.io/pkg/sub/thing", &t),
            Resolution::Package {
                import_root: "a.io/pkg".to_string(),
                repo_root: "https://x/pkg".to_string(),
                suffix: "/sub/thing".to_string(),
            }
        );
    }

    #[test]
    fn test_bare_wildcard_root_redirects_to_docs() {
        let t = table(&[("a.io/*", "https://x/*")]);
        assert_eq!(
            resolve("a.io", &t),
            Resolution::DocRedirect {
                url: "https://godoc.org/https://x".to_string(),
            }
        );
    }

    #[test]
    fn test_no_match() {
        let t = table(&[("a.io/*", "https://x/*")]);
        assert_eq!(resolve("b.io/pkg", &t), Resolution::NotFound);
        assert_eq!(resolve("a.iox/pkg", &t), Resolution::NotFound);
    }

    #[test]
    fn test_exact_route_subpath_is_a_miss() {
        let t = table(&[("9fans.net/go", "https://github.com/9fans/go")]);
        assert_eq!(resolve("9fans.net/go/acme", &t), Resolution::NotFound);
    }

    #[test]
    fn test_longest_prefix_is_deterministic() {
        let t = table(&[
            ("a.io/*", "https://short/*"),
            ("a.io/nested/*", "https://long/*"),
        ]);
        assert_eq!(
            resolve("a.io/nested/pkg", &t),
            Resolution::Package {
                import_root: "a.io/nested/pkg".to_string(),
                repo_root: "https://long/pkg".to_string(),
                suffix: String::new(),
            }
        );
    }

    #[test]
    fn test_exact_match_wins_over_wildcard() {
        let t = table(&[
            ("a.io/pinned", "https://exact/repo"),
            ("a.io/*", "https://wild/*"),
        ]);
        assert_eq!(
            resolve("a.io/pinned", &t),
            Resolution::Package {
                import_root: "a.io/pinned/".to_string(),
                repo_root: "https://exact/repo/".to_string(),
                suffix: String::new(),
            }
        );
    }
}
