use tracing::{debug, error};

/// Open a URL in the user's default browser. Failures are logged rather than
/// surfaced; there is nothing actionable for the caller.
pub fn open_in_browser(url: &str) {
    debug!(url, "Opening URL in browser");
    if let Err(e) = open::that(url) {
        error!(error = %e, url, "Failed to open browser");
    }
}
