//! Per-repository overrides read from `gh-open.*` git config keys.

use crate::git::Git;

/// Git config key forcing a URL layout, e.g. `github.com`.
pub const URL_TYPE_KEY: &str = "gh-open.urltype";

/// Git config key for the web protocol, e.g. `http`.
pub const PROTOCOL_KEY: &str = "gh-open.protocol";

/// Protocol used when `gh-open.protocol` is unset or blank.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Per-repository overrides read from git config.
/// Built once per invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overrides {
    /// Scheme of the generated URL.
    pub protocol: String,
    /// Host whose URL layout should be used instead of the remote's.
    pub url_type: Option<String>,
}

impl Default for Overrides {
    fn default() -> Self {
        return Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            url_type: None,
        };
    }
}

impl Overrides {
    /// Load overrides from the repository's git config.
    /// Missing or blank keys fall back to deriving from the host and `https`.
    pub fn load(git: &Git) -> Self {
        let url_type = git.config_value(URL_TYPE_KEY, "");
        let protocol = git.config_value(PROTOCOL_KEY, DEFAULT_PROTOCOL);
        return Self::from_values(&url_type, &protocol);
    }

    /// Normalize raw config values: trim, blank url type means none,
    /// blank protocol means `https`.
    fn from_values(url_type: &str, protocol: &str) -> Self {
        let url_type = url_type.trim();
        let protocol = match protocol.trim() {
            "" => DEFAULT_PROTOCOL,
            given => given,
        };
        return Self {
            protocol: protocol.to_string(),
            url_type: (!url_type.is_empty()).then(|| return url_type.to_string()),
        };
    }
}
