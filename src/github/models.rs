use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub owner: Owner,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

impl Repository {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

/// Envelope returned by the repository search endpoint.
#[derive(Debug, Deserialize)]
pub struct RepoSearchResponse {
    pub items: Vec<Repository>,
}

/// A pull request as returned by `GET /repos/{owner}/{repo}/pulls`.
///
/// Almost every field is optional in practice; the API nulls them out for
/// deleted users and very old pull requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    pub title: Option<String>,
    pub user: Option<Owner>,
    pub body: Option<String>,
    pub html_url: Option<String>,
    pub state: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    pub fn is_open(&self) -> bool {
        self.state.as_deref() == Some("open")
    }
}
