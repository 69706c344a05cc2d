//! Turn a path inside a git working copy into its web page URL on the
//! hosting service (GitHub, GitLab, Bitbucket, or a googlesource host).

pub mod browser;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod git;
pub mod lines;
pub mod paths;
pub mod provider;
pub mod remote;
pub mod render;
pub mod resolve;
pub mod types;

pub use error::Error;
pub use resolve::{Resolution, resolve};
