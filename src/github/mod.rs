pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use client::{GithubClient, PullRequestFetcher, RepositoryFetcher};
pub use error::ApiError;
pub use models::*;
