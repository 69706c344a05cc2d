//! Git operations through the `git` CLI.
//!
//! The CLI is used instead of a native git library so that the user's own
//! git configuration (includes, `url.<base>.insteadOf`, worktrees) applies.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::Error;

/// Handle for running `git` inside one working directory.
#[derive(Debug)]
pub struct Git {
    /// Directory every command runs in.
    dir: PathBuf,
}

impl Git {
    /// `git clone <remote>` into a new directory below this handle's directory.
    ///
    /// # Errors
    ///
    /// Returns `Error::CommandFailed` if the clone fails.
    pub fn clone(&self, remote: &str) -> Result<String, Error> {
        return self.exec(&["clone", "--quiet", remote]);
    }

    /// `git config --get <key>`, or `default` when the key is unset.
    pub fn config_value(&self, key: &str, default: &str) -> String {
        return self
            .exec(&["config", "--get", key])
            .unwrap_or_else(|_| return default.to_string());
    }

    /// `git rev-parse HEAD`, e.g. `695895662d96bac8d94fd71dc9d2dec534c8e494`.
    ///
    /// # Errors
    ///
    /// Returns `Error::CommandFailed` if HEAD does not resolve (empty repository).
    pub fn current_commit_hash(&self) -> Result<String, Error> {
        return self.exec(&["rev-parse", "HEAD"]);
    }

    /// Run `git <args>` and return trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns `Error::CommandFailed` carrying the arguments when git cannot be
    /// spawned or exits non-zero.
    fn exec(&self, args: &[&str]) -> Result<String, Error> {
        let joined = args.join(" ");
        debug!(dir = %self.dir.display(), args = %joined, "running git");

        let output = Command::new("git")
            .current_dir(&self.dir)
            .args(args)
            .output()
            .map_err(|e| {
                return Error::CommandFailed {
                    args: joined.clone(),
                    stderr: e.to_string(),
                };
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(args = %joined, status = ?output.status.code(), %stderr, "git failed");
            return Err(Error::CommandFailed {
                args: joined,
                stderr,
            });
        }

        return Ok(String::from_utf8_lossy(&output.stdout).trim().to_string());
    }

    /// `git rev-parse --is-inside-work-tree`. Any failure counts as outside.
    pub fn is_inside_work_tree(&self) -> bool {
        return self
            .exec(&["rev-parse", "--is-inside-work-tree"])
            .is_ok_and(|answer| return answer == "true");
    }

    /// Create a handle that runs commands in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        return Self { dir: dir.into() };
    }

    /// `git config --get remote.origin.url`, e.g. `git@github.com:inouet/gh-open.git`.
    ///
    /// # Errors
    ///
    /// Returns `Error::CommandFailed` if no origin remote is configured.
    pub fn remote_origin_address(&self) -> Result<String, Error> {
        return self.exec(&["config", "--get", "remote.origin.url"]);
    }

    /// `git rev-parse --show-toplevel`.
    ///
    /// # Errors
    ///
    /// Returns `Error::CommandFailed` outside a working copy.
    pub fn top_level_directory(&self) -> Result<PathBuf, Error> {
        return self.exec(&["rev-parse", "--show-toplevel"]).map(PathBuf::from);
    }
}
