/// Core domain types for remote descriptors and line anchors.
use serde::Serialize;

/// Requested line anchor. Parsed from `N` or `N-M` by the line spec parser.
/// An end line never exists without a start line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineRange {
    /// No anchor requested.
    #[default]
    Empty,
    /// A single line such as `10`.
    Single(u64),
    /// An inclusive range such as `10-20`.
    Span {
        /// Last line of the range.
        end: u64,
        /// First line of the range.
        start: u64,
    },
}

impl LineRange {
    /// The last line, present only for spans.
    pub const fn end(&self) -> Option<u64> {
        return match *self {
            LineRange::Empty | LineRange::Single(_) => None,
            LineRange::Span { end, .. } => Some(end),
        };
    }

    /// Whether no anchor was requested.
    pub const fn is_empty(&self) -> bool {
        return matches!(self, LineRange::Empty);
    }

    /// The first line, if any anchor was requested.
    pub const fn start(&self) -> Option<u64> {
        return match *self {
            LineRange::Empty => None,
            LineRange::Single(start) | LineRange::Span { start, .. } => Some(start),
        };
    }
}

/// Structured form of a remote address such as `git@github.com:owner/repo.git`.
/// Immutable once parsed; `repository` never carries a `.git` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteDescriptor {
    /// Path segments between owner and repository (nested groups), usually empty.
    pub groups: Vec<String>,
    /// DNS-style hostname without scheme, credentials, or port.
    pub host: String,
    /// First path segment: user, organization, or top-level group.
    pub owner: String,
    /// Last path segment with `.git` stripped.
    pub repository: String,
}

impl RemoteDescriptor {
    /// Repository path on the host, e.g. `owner/repo` or `group/sub/repo`.
    pub fn slug(&self) -> String {
        let mut segments: Vec<&str> = Vec::with_capacity(self.groups.len().saturating_add(2));
        segments.push(&self.owner);
        segments.extend(self.groups.iter().map(String::as_str));
        segments.push(&self.repository);
        return segments.join("/");
    }
}
