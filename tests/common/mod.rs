#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reposcope::github::{
    ApiError, Owner, PullRequest, PullRequestFetcher, Repository, RepositoryFetcher,
};

pub fn make_repo(id: u64, name: &str) -> Repository {
    Repository {
        id,
        name: name.into(),
        owner: Owner {
            login: "rust-lang".into(),
        },
        description: Some(format!("Description of {name}")),
        html_url: format!("https://github.com/rust-lang/{name}"),
        stargazers_count: 100 * id,
        forks_count: 10 * id,
    }
}

pub fn make_pr(id: u64, state: &str) -> PullRequest {
    PullRequest {
        id,
        title: Some(format!("PR {id}")),
        user: Some(Owner {
            login: "contributor".into(),
        }),
        body: None,
        html_url: Some(format!("https://github.com/rust-lang/rust/pull/{id}")),
        state: Some(state.into()),
        created_at: Some(chrono::Utc::now()),
    }
}

/// In-process stand-in for the GitHub client.
///
/// Page 1 serves `first_page`, every other page serves `next_page`. Pages
/// listed in `fail_pages` fail instead. All requests are recorded so tests
/// can assert which pages were actually fetched.
#[derive(Clone, Default)]
pub struct MockApi {
    pub first_page: Vec<Repository>,
    pub next_page: Vec<Repository>,
    pub fail_pages: Vec<u32>,
    pub pull_requests: Vec<PullRequest>,
    pub fail_pull_requests: bool,
    pub delay: Option<Duration>,
    pub page_calls: Arc<Mutex<Vec<u32>>>,
    pub pr_calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl RepositoryFetcher for MockApi {
    fn fetch_page(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Repository>, ApiError>> + Send {
        let this = self.clone();
        async move {
            this.page_calls.lock().unwrap().push(page);
            if let Some(delay) = this.delay {
                tokio::time::sleep(delay).await;
            }
            if this.fail_pages.contains(&page) {
                return Err(ApiError::UnexpectedStatusCode(500));
            }
            Ok(if page == 1 {
                this.first_page
            } else {
                this.next_page
            })
        }
    }
}

impl PullRequestFetcher for MockApi {
    fn fetch_for_repo(
        &self,
        owner: &str,
        repo: &str,
    ) -> impl Future<Output = Result<Vec<PullRequest>, ApiError>> + Send {
        let this = self.clone();
        let owner = owner.to_string();
        let repo = repo.to_string();
        async move {
            this.pr_calls.lock().unwrap().push((owner, repo));
            if let Some(delay) = this.delay {
                tokio::time::sleep(delay).await;
            }
            if this.fail_pull_requests {
                return Err(ApiError::UnexpectedStatusCode(503));
            }
            Ok(this.pull_requests)
        }
    }
}
