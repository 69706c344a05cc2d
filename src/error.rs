/// Crate-level error types for gh-open diagnostics.
use std::path::PathBuf;

/// All errors in gh-open carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the path, remote, or command that failed.
#[allow(clippy::error_impl_error, reason = "crate-level error type shared by lib and binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The default browser could not be launched for the resolved URL.
    #[error("failed to open browser for {url}: {source}")]
    BrowserOpenFailed {
        /// The wrapped launcher error.
        source: std::io::Error,
        /// URL that was being opened.
        url: String,
    },

    /// A `git` invocation exited non-zero or could not be spawned.
    #[error("git command failed: git {args}")]
    CommandFailed {
        /// Space-joined arguments passed to `git`.
        args: String,
        /// Trimmed standard error captured from the process.
        stderr: String,
    },

    /// Line option is neither `N` nor `N-M`.
    #[error("invalid line format: `{spec}` (expected N or N-M)")]
    InvalidLineSpec {
        /// The rejected line option text.
        spec: String,
    },

    /// Scheme and host do not form a valid web URL, e.g. a malformed
    /// `gh-open.protocol` value.
    #[error("invalid web url `{url}`: {source}")]
    InvalidUrl {
        /// The wrapped parser error.
        source: url::ParseError,
        /// The `scheme://host` text that was parsed.
        url: String,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// JSON serialization of a resolution failed.
    #[error("json: {0}")]
    Json(
        /// The wrapped serde_json error.
        #[from]
        serde_json::Error,
    ),

    /// The requested object is neither a regular file nor a directory.
    #[error("{}: no such file or directory", path.display())]
    NoSuchPath {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// The object does not live inside a git working copy.
    #[error("not a git repository (or any of the parent directories): {}", path.display())]
    NotARepository {
        /// Path that was searched for a working copy.
        path: PathBuf,
    },

    /// The working copy has no readable `remote.origin.url`.
    #[error("no remote origin address configured in {}", dir.display())]
    RemoteUnavailable {
        /// Repository top-level directory.
        dir: PathBuf,
    },

    /// The host matched no URL rendering strategy.
    #[error("unknown git service: `{host}`")]
    UnknownProvider {
        /// Host (or override value) that was classified.
        host: String,
    },

    /// The remote address matched none of the supported address syntaxes.
    #[error("unrecognized remote address syntax: `{remote}` ({reason})")]
    UnrecognizedRemote {
        /// Why the last parser in the chain turned the address down.
        reason: &'static str,
        /// Remote address as read from git config.
        remote: String,
    },
}
