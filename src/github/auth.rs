use std::process::Command;
use tracing::debug;

/// Resolve a GitHub token using multiple strategies:
/// 1. `gh auth token` subprocess
/// 2. `GITHUB_TOKEN` environment variable
/// 3. `GH_TOKEN` environment variable
///
/// The endpoints we call work anonymously, so a missing token is not an
/// error; it only means stricter rate limits.
pub fn resolve_token() -> Option<String> {
    debug!("Attempting to resolve token via `gh auth token`");
    if let Ok(output) = Command::new("gh").args(["auth", "token"]).output()
        && output.status.success()
    {
        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !token.is_empty() {
            debug!("Token resolved via gh CLI");
            return Some(token);
        }
    }

    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(token) = std::env::var(var)
            && !token.is_empty()
        {
            debug!(var, "Token resolved via environment");
            return Some(token);
        }
    }

    debug!("No token found, continuing unauthenticated");
    None
}
