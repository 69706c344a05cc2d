//! User-facing error rendering: `Error: <message>` plus an optional fix section.

use std::fmt::Write as _;

use crate::config::{PROTOCOL_KEY, URL_TYPE_KEY};
use crate::error::Error;

/// ANSI bold, used for `##` headings on stderr.
const BOLD: &str = "\x1b[1m";
/// ANSI attribute reset.
const RESET: &str = "\x1b[0m";

/// Render an error with an optional fix section and print to stderr.
/// The first line is always `Error: <message>`.
pub fn print_error(e: &Error) {
    let rendered = render_error(e);
    for line in rendered.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as `Error: <message>`, followed by a `## Fix` section
/// for the variants the user can act on.
pub fn render_error(e: &Error) -> String {
    let mut out = format!("Error: {e}\n");
    let fix = match e {
        Error::CommandFailed { stderr, .. } => render_command_failed(stderr),
        Error::InvalidLineSpec { .. } => Some(render_invalid_line_spec()),
        Error::InvalidUrl { .. } => Some(render_invalid_url()),
        Error::NotARepository { .. } => Some(render_not_a_repository()),
        Error::RemoteUnavailable { .. } => Some(render_remote_unavailable()),
        Error::UnknownProvider { .. } => Some(render_unknown_provider()),
        Error::BrowserOpenFailed { .. } => Some(render_browser_open_failed()),
        Error::Io(_)
        | Error::Json(_)
        | Error::NoSuchPath { .. }
        | Error::UnrecognizedRemote { .. } => None,
    };
    if let Some(section) = fix {
        let _ = write!(out, "\n{section}");
    }
    return out;
}

/// Suggest `--print` when no browser could be launched.
fn render_browser_open_failed() -> String {
    return "\
## Fix

Print the URL instead of opening it:

    gh-open --print <path>
"
    .to_string();
}

/// Show git's own stderr, if it said anything.
fn render_command_failed(stderr: &str) -> Option<String> {
    if stderr.is_empty() {
        return None;
    }
    let mut out = String::from("## git said\n\n");
    for line in stderr.lines() {
        let _ = writeln!(out, "    {line}");
    }
    return Some(out);
}

/// Show the accepted line formats.
fn render_invalid_line_spec() -> String {
    return "\
## Fix

Use a single line or an inclusive range:

    gh-open --line 10 <file>
    gh-open --line 10-20 <file>
"
    .to_string();
}

/// Show how to reset the web protocol.
fn render_invalid_url() -> String {
    return format!(
        "\
## Fix

Set the web protocol to a plain scheme, or unset it to use https:

    git config {PROTOCOL_KEY} https
    git config --unset {PROTOCOL_KEY}
"
    );
}

/// Point at running from inside a working copy.
fn render_not_a_repository() -> String {
    return "\
## Fix

Run gh-open on a file or directory inside a git working copy.
"
    .to_string();
}

/// Show how to add an origin remote.
fn render_remote_unavailable() -> String {
    return "\
## Fix

Add the hosted repository as `origin`:

    git remote add origin <address>
"
    .to_string();
}

/// Show the config keys that force a URL layout and protocol.
fn render_unknown_provider() -> String {
    return format!(
        "\
## Fix

Tell gh-open which URL layout this host serves (github.com, gitlab.com,
bitbucket.org, or a *.googlesource.com host):

    git config {URL_TYPE_KEY} github.com

For hosts served over plain HTTP also set:

    git config {PROTOCOL_KEY} http
"
    );
}
