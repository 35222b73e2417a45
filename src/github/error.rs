use thiserror::Error;

/// Failure taxonomy for GitHub API calls.
///
/// The `Display` text of each variant is what reducers store in state when a
/// fetch fails, so keep the messages user-presentable.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request URL")]
    InvalidUrl,

    #[error("request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("could not decode the server response")]
    DecodingError(#[source] serde_json::Error),

    #[error("unexpected status code: {0}")]
    UnexpectedStatusCode(u16),
}
