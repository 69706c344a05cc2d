//! Provider registry: classifies a host into the URL layout it serves.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::render::{self, RenderFn};

/// Google-hosted wildcard domain. Each label is 2-63 characters,
/// alphanumeric with hyphens allowed only inside the label.
#[allow(clippy::expect_used, reason = "hardcoded pattern is a compile-time invariant")]
static GOOGLESOURCE_HOST: LazyLock<Regex> = LazyLock::new(|| {
    return Regex::new(r"^(?:[A-Za-z0-9][A-Za-z0-9-]{0,61}[A-Za-z0-9]\.)+googlesource\.com$")
        .expect("valid regex");
});

/// Hosted code-browsing services with a known URL layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// `bitbucket.org`
    Bitbucket,
    /// `github.com`
    GitHub,
    /// `gitlab.com`
    GitLab,
    /// `*.googlesource.com`
    GoogleSource,
    /// Anything else. Has no renderer.
    Unknown,
}

impl ProviderKind {
    /// Classify a hostname. Literal hosts match case-sensitively.
    pub fn from_host(host: &str) -> Self {
        return match host {
            "bitbucket.org" => ProviderKind::Bitbucket,
            "github.com" => ProviderKind::GitHub,
            "gitlab.com" => ProviderKind::GitLab,
            _ if GOOGLESOURCE_HOST.is_match(host) => ProviderKind::GoogleSource,
            _ => ProviderKind::Unknown,
        };
    }

    /// The render function for this provider, `None` for `Unknown`.
    pub fn renderer(self) -> Option<RenderFn> {
        return match self {
            ProviderKind::Bitbucket => Some(render::bitbucket),
            ProviderKind::GitHub => Some(render::github),
            ProviderKind::GitLab => Some(render::gitlab),
            ProviderKind::GoogleSource => Some(render::googlesource),
            ProviderKind::Unknown => None,
        };
    }
}

/// Pick the provider for a remote host. A non-empty `url_type` override is
/// classified instead of the host; it changes the URL layout only, never
/// the host the URL points at.
pub fn resolve_provider(host: &str, url_type: Option<&str>) -> ProviderKind {
    let classified = url_type.filter(|o| return !o.is_empty()).unwrap_or(host);
    return ProviderKind::from_host(classified);
}
