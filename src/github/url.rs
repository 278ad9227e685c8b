// Repository identifiers parsed from GitHub URLs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static REPO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/([^/]+)/([^/]+)").expect("repository URL pattern is valid")
});

/// Owner and name of a repository, exactly as they appeared in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Extract the first `github.com/<owner>/<name>` pair from `url`.
    ///
    /// Both segments are the longest runs of non-`/` characters after the
    /// host. Nothing is normalized, so `widget.git` stays `widget.git` and
    /// a query string glued to the name is kept. Returns None when the
    /// marker is absent or a segment is empty.
    pub fn parse(url: &str) -> Option<Self> {
        let caps = REPO_URL.captures(url)?;
        Some(Self::new(&caps[1], &caps[2]))
    }

    /// Cache key, `owner/name`. Case-sensitive.
    pub fn cache_key(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_url() {
        let id = RepoId::parse("https://github.com/acme/widget").unwrap();
        assert_eq!(id, RepoId::new("acme", "widget"));
    }

    #[test]
    fn test_parse_takes_first_two_segments() {
        let id = RepoId::parse("https://github.com/acme/widget/tree/main/src").unwrap();
        assert_eq!(id.owner, "acme");
        assert_eq!(id.name, "widget");
    }

    #[test]
    fn test_parse_without_scheme() {
        let id = RepoId::parse("see github.com/rust-lang/rust for details").unwrap();
        assert_eq!(id.owner, "rust-lang");
        assert_eq!(id.name, "rust for details");
    }

    #[test]
    fn test_parse_no_normalization() {
        let id = RepoId::parse("https://github.com/Acme/Widget.git").unwrap();
        assert_eq!(id.owner, "Acme");
        assert_eq!(id.name, "Widget.git");
    }

    #[test]
    fn test_parse_first_occurrence_wins() {
        let id =
            RepoId::parse("https://github.com/first/one https://github.com/second/two").unwrap();
        assert_eq!(id.owner, "first");
    }

    #[test]
    fn test_parse_misses() {
        assert_eq!(RepoId::parse(""), None);
        assert_eq!(RepoId::parse("https://gitlab.com/acme/widget"), None);
        assert_eq!(RepoId::parse("https://github.com/acme"), None);
        assert_eq!(RepoId::parse("https://github.com/acme/"), None);
        assert_eq!(RepoId::parse("https://github.com//widget"), None);
    }

    #[test]
    fn test_cache_key() {
        let a = RepoId::new("acme", "widget");
        let b = RepoId::new("acme", "gadget");
        let c = RepoId::new("other", "widget");
        assert_eq!(a.cache_key(), "acme/widget");
        assert_ne!(a.cache_key(), b.cache_key());
        assert_ne!(a.cache_key(), c.cache_key());
        assert_eq!(a.to_string(), a.cache_key());
    }
}
