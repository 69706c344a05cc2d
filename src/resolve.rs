//! Remote resolution: filesystem object in, web URL out.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::Overrides;
use crate::error::Error;
use crate::git::Git;
use crate::lines::parse_line_spec;
use crate::paths;
use crate::provider::{ProviderKind, resolve_provider};
use crate::remote;
use crate::render::RepositoryUrl;
use crate::types::{LineRange, RemoteDescriptor};

/// Everything gathered from git about the object's repository.
/// Built once per invocation, read-only afterwards.
#[derive(Debug, Clone)]
pub struct RepositoryContext {
    /// URL type and protocol overrides from git config.
    pub overrides: Overrides,
    /// `/`-separated path from the top level, empty for the root itself.
    pub relative_path: String,
    /// Raw `remote.origin.url`.
    pub remote: String,
    /// Working copy top-level directory.
    pub top_level: PathBuf,
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Parsed remote address.
    pub descriptor: RemoteDescriptor,
    /// URL layout used for rendering.
    pub provider: ProviderKind,
    /// Final web URL.
    pub url: String,
}

/// Locate the repository containing `object` and read its remote and overrides.
///
/// # Errors
///
/// Returns `Error::NoSuchPath` if `object` is neither a file nor a directory,
/// `Error::NotARepository` outside a working copy,
/// `Error::RemoteUnavailable` if `remote.origin.url` is unset,
/// or `Error::CommandFailed` if git itself fails.
pub fn gather_context(object: &Path) -> Result<(Git, RepositoryContext), Error> {
    let is_file = paths::is_regular_file(object);
    if !is_file && !paths::is_directory(object) {
        return Err(Error::NoSuchPath { path: object.to_path_buf() });
    }

    let absolute = paths::absolute_path(object)?;
    let search_dir = if is_file {
        absolute.parent().map_or_else(|| return absolute.clone(), Path::to_path_buf)
    } else {
        absolute.clone()
    };

    let locator = Git::new(&search_dir);
    if !locator.is_inside_work_tree() {
        return Err(Error::NotARepository { path: search_dir });
    }
    let top_level = locator.top_level_directory()?;
    let git = Git::new(&top_level);

    let relative_path = paths::relative_path(&top_level, &absolute)?;
    let remote = git.remote_origin_address().map_err(|_| {
        return Error::RemoteUnavailable { dir: top_level.clone() };
    })?;
    let overrides = Overrides::load(&git);
    debug!(
        top_level = %top_level.display(),
        relative_path = %relative_path,
        remote = %remote,
        ?overrides,
        "gathered repository context"
    );

    let context = RepositoryContext {
        overrides,
        relative_path,
        remote,
        top_level,
    };
    return Ok((git, context));
}

/// Render the URL for an already gathered context.
/// `head` is only called when a path or anchor is requested without a branch.
///
/// # Errors
///
/// Returns `Error::UnrecognizedRemote` for an unparsable remote,
/// `Error::UnknownProvider` when no URL layout matches,
/// `Error::InvalidUrl` when the configured protocol cannot form a URL,
/// or whatever `head` returns while looking up the current commit.
pub fn render_context(
    context: &RepositoryContext,
    branch: &str,
    range: LineRange,
    head: impl FnOnce() -> Result<String, Error>,
) -> Result<Resolution, Error> {
    let descriptor = remote::parse(&context.remote)?;
    let url_type = context.overrides.url_type.as_deref();
    let provider = resolve_provider(&descriptor.host, url_type);
    let Some(render) = provider.renderer() else {
        return Err(Error::UnknownProvider {
            host: url_type.unwrap_or(&descriptor.host).to_string(),
        });
    };
    let base = RepositoryUrl::new(&context.overrides.protocol, &descriptor)?;

    if context.relative_path.is_empty() && branch.is_empty() {
        return Ok(Resolution {
            url: base.root(),
            descriptor,
            provider,
        });
    }

    let reference = if branch.is_empty() { head()? } else { branch.to_string() };
    debug!(?provider, reference = %reference, "rendering url");
    let url = render(&base, &context.relative_path, &reference, range);
    return Ok(Resolution {
        descriptor,
        provider,
        url,
    });
}

/// Resolve a filesystem object to its web URL.
///
/// # Errors
///
/// Returns `Error::InvalidLineSpec` for a malformed line option, plus every
/// error of `gather_context` and `render_context`.
pub fn resolve(object: &Path, branch: &str, line_spec: &str) -> Result<Resolution, Error> {
    let range = parse_line_spec(line_spec)?;
    let (git, context) = gather_context(object)?;
    return render_context(&context, branch, range, || return git.current_commit_hash());
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAD: &str = "695895662d96bac8d94fd71dc9d2dec534c8e494";

    fn context(remote: &str, relative_path: &str) -> RepositoryContext {
        RepositoryContext {
            overrides: Overrides::default(),
            relative_path: relative_path.to_string(),
            remote: remote.to_string(),
            top_level: PathBuf::from("/work/gh-open"),
        }
    }

    fn head() -> Result<String, Error> {
        Ok(HEAD.to_string())
    }

    fn unreachable_head() -> Result<String, Error> {
        panic!("commit lookup not expected");
    }

    #[test]
    fn repository_root_skips_commit_lookup() {
        let ctx = context("git@github.com:inouet/gh-open.git", "");
        let resolution = render_context(&ctx, "", LineRange::Empty, unreachable_head).unwrap();
        assert_eq!(resolution.url, "https://github.com/inouet/gh-open");
        assert_eq!(resolution.provider, ProviderKind::GitHub);
    }

    #[test]
    fn branch_root() {
        let ctx = context("git@github.com:inouet/gh-open.git", "");
        let resolution = render_context(&ctx, "master", LineRange::Empty, unreachable_head).unwrap();
        assert_eq!(resolution.url, "https://github.com/inouet/gh-open/tree/master/");
    }

    #[test]
    fn file_with_line() {
        let ctx = context("git@github.com:inouet/gh-open.git", "README.md");
        let range = parse_line_spec("10").unwrap();
        let resolution = render_context(&ctx, "master", range, unreachable_head).unwrap();
        assert_eq!(
            resolution.url,
            "https://github.com/inouet/gh-open/tree/master/README.md#L10"
        );
    }

    #[test]
    fn missing_branch_pins_current_commit() {
        let ctx = context("https://gitlab.com/gitlab-examples/docker.git", "Dockerfile");
        let resolution = render_context(&ctx, "", LineRange::Single(1), head).unwrap();
        assert_eq!(
            resolution.url,
            format!("https://gitlab.com/gitlab-examples/docker/-/blob/{HEAD}/Dockerfile#L1")
        );
    }

    #[test]
    fn commit_lookup_failure_propagates() {
        let ctx = context("git@github.com:inouet/gh-open.git", "src");
        let failing = || -> Result<String, Error> {
            Err(Error::CommandFailed {
                args: "rev-parse HEAD".to_string(),
                stderr: String::new(),
            })
        };
        assert!(matches!(
            render_context(&ctx, "", LineRange::Empty, failing),
            Err(Error::CommandFailed { .. })
        ));
    }

    #[test]
    fn url_type_override_keeps_remote_host() {
        let mut ctx = context("git@github.com:inouet/gh-open.git", "README.md");
        ctx.overrides = Overrides {
            protocol: "http".to_string(),
            url_type: Some("bitbucket.org".to_string()),
        };
        let resolution =
            render_context(&ctx, "master", LineRange::Span { start: 2, end: 4 }, unreachable_head)
                .unwrap();
        assert_eq!(resolution.provider, ProviderKind::Bitbucket);
        assert_eq!(
            resolution.url,
            "http://github.com/inouet/gh-open/src/master/README.md#lines-2:4"
        );
    }

    #[test]
    fn self_hosted_gitlab_with_override() {
        let mut ctx = context("git@git.example.com:platform/tools/widget.git", "lib");
        ctx.overrides.url_type = Some("gitlab.com".to_string());
        let resolution = render_context(&ctx, "main", LineRange::Empty, unreachable_head).unwrap();
        assert_eq!(
            resolution.url,
            "https://git.example.com/platform/tools/widget/-/blob/main/lib"
        );
    }

    #[test]
    fn reserved_characters_in_relative_path() {
        let ctx = context("git@github.com:inouet/gh-open.git", "docs/notes #1.md");
        let resolution = render_context(&ctx, "master", LineRange::Single(3), unreachable_head).unwrap();
        assert_eq!(
            resolution.url,
            "https://github.com/inouet/gh-open/tree/master/docs/notes%20%231.md#L3"
        );
    }

    #[test]
    fn malformed_protocol_override() {
        let mut ctx = context("git@github.com:inouet/gh-open.git", "");
        ctx.overrides.protocol = "ht tp".to_string();
        assert!(matches!(
            render_context(&ctx, "", LineRange::Empty, unreachable_head),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[test]
    fn unknown_host_is_named() {
        let ctx = context("https://example.com/acme/widget.git", "");
        let err = render_context(&ctx, "", LineRange::Empty, unreachable_head).unwrap_err();
        assert!(matches!(&err, Error::UnknownProvider { host } if host == "example.com"));
    }

    #[test]
    fn unknown_override_is_named() {
        let mut ctx = context("git@github.com:inouet/gh-open.git", "");
        ctx.overrides.url_type = Some("gitea.io".to_string());
        let err = render_context(&ctx, "", LineRange::Empty, unreachable_head).unwrap_err();
        assert!(matches!(&err, Error::UnknownProvider { host } if host == "gitea.io"));
    }

    #[test]
    fn unparsable_remote() {
        let ctx = context("/srv/git/widget.git", "");
        assert!(matches!(
            render_context(&ctx, "", LineRange::Empty, unreachable_head),
            Err(Error::UnrecognizedRemote { .. })
        ));
    }

    #[test]
    fn missing_object() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.txt");
        assert!(matches!(resolve(&missing, "", ""), Err(Error::NoSuchPath { .. })));
    }

    #[test]
    fn invalid_line_spec_fails_first() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            resolve(&tmp.path().join("nope"), "", "3-"),
            Err(Error::InvalidLineSpec { .. })
        ));
    }

    #[test]
    fn directory_outside_repository() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(resolve(tmp.path(), "", ""), Err(Error::NotARepository { .. })));
    }
}
