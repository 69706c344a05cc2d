//! Per-provider URL rendering.
//!
//! Each renderer takes the repository base, a repository-relative path, a
//! ref, and a line range, and produces the final URL. Renderers never look
//! up a commit themselves: an empty branch with a path is the caller's job.

use url::Url;

use crate::error::Error;
use crate::types::{LineRange, RemoteDescriptor};

/// Signature shared by all provider renderers.
pub type RenderFn = fn(&RepositoryUrl, &str, &str, LineRange) -> String;

/// Scheme, host and repository slug; path suffix and fragment are added per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryUrl {
    /// `scheme://host` with an empty path.
    origin: Url,
    /// `owner/repo` or `group/sub/repo`.
    slug: String,
}

impl RepositoryUrl {
    /// Base URL for a parsed remote using the given scheme.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if scheme and host do not parse as a URL.
    pub fn new(scheme: &str, descriptor: &RemoteDescriptor) -> Result<Self, Error> {
        let text = format!("{scheme}://{}", descriptor.host);
        return match Url::parse(&text) {
            Ok(origin) => Ok(Self {
                origin,
                slug: descriptor.slug(),
            }),
            Err(source) => Err(Error::InvalidUrl { source, url: text }),
        };
    }

    /// Bare repository URL, `scheme://host/owner/repo`.
    pub fn root(&self) -> String {
        return self.with_path(&format!("/{}", self.slug), None);
    }

    /// The origin with `path` percent-encoded as the URL path and an optional fragment.
    fn with_path(&self, path: &str, fragment: Option<&str>) -> String {
        let mut url = self.origin.clone();
        url.set_path(path);
        url.set_fragment(fragment);
        return url.into();
    }
}

/// `https://bitbucket.org/<owner>/<repo>/src/<branch>/<path>#lines-10:20`
pub fn bitbucket(base: &RepositoryUrl, path: &str, branch: &str, range: LineRange) -> String {
    let fragment = match range {
        LineRange::Empty => None,
        LineRange::Single(start) => Some(format!("lines-{start}")),
        LineRange::Span { start, end } => Some(format!("lines-{start}:{end}")),
    };
    return compose(base, "src", path, branch, fragment.as_deref());
}

/// Shared composition: root, view segment, branch, path, optional fragment.
/// Short-circuits to the bare root when neither path nor branch is given.
fn compose(
    base: &RepositoryUrl,
    view: &str,
    path: &str,
    branch: &str,
    fragment: Option<&str>,
) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() && branch.is_empty() {
        return base.root();
    }
    return base.with_path(&format!("/{}/{view}/{branch}/{path}", base.slug), fragment);
}

/// `https://github.com/<owner>/<repo>/tree/<branch>/<path>#L10-L20`
pub fn github(base: &RepositoryUrl, path: &str, branch: &str, range: LineRange) -> String {
    let fragment = match range {
        LineRange::Empty => None,
        LineRange::Single(start) => Some(format!("L{start}")),
        LineRange::Span { start, end } => Some(format!("L{start}-L{end}")),
    };
    return compose(base, "tree", path, branch, fragment.as_deref());
}

/// `https://gitlab.com/<owner>/<repo>/-/blob/<branch>/<path>#L10-20`
pub fn gitlab(base: &RepositoryUrl, path: &str, branch: &str, range: LineRange) -> String {
    let fragment = match range {
        LineRange::Empty => None,
        LineRange::Single(start) => Some(format!("L{start}")),
        LineRange::Span { start, end } => Some(format!("L{start}-{end}")),
    };
    return compose(base, "-/blob", path, branch, fragment.as_deref());
}

/// `https://<host>.googlesource.com/<owner>/<repo>/+/<branch>/<path>#10`
/// Gitiles anchors a single line, so the end of a span is dropped.
pub fn googlesource(base: &RepositoryUrl, path: &str, branch: &str, range: LineRange) -> String {
    let fragment = range.start().map(|start| return start.to_string());
    return compose(base, "+", path, branch, fragment.as_deref());
}
