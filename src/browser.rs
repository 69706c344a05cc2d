use tracing::debug;

use crate::error::Error;

/// Open a URL in the user's default browser.
///
/// # Errors
///
/// Returns `Error::BrowserOpenFailed` if no browser could be launched.
pub fn open_url(url: &str) -> Result<(), Error> {
    debug!(url, "opening browser");
    return webbrowser::open(url).map_err(|source| {
        return Error::BrowserOpenFailed {
            source,
            url: url.to_string(),
        };
    });
}
