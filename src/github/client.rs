use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::error::ApiError;
use super::models::{PullRequest, RepoSearchResponse, Repository};

/// Fetches pages of repositories for the infinite-scroll list.
///
/// Implementations must be cheap to clone: reducers clone the fetcher into
/// each effect they return.
pub trait RepositoryFetcher: Clone + Send + Sync + 'static {
    fn fetch_page(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Repository>, ApiError>> + Send;
}

/// Fetches the pull requests of a single repository.
pub trait PullRequestFetcher: Clone + Send + Sync + 'static {
    fn fetch_for_repo(
        &self,
        owner: &str,
        repo: &str,
    ) -> impl Future<Output = Result<Vec<PullRequest>, ApiError>> + Send;
}

/// GitHub REST v3 client.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    token: Option<String>,
    search_language: String,
}

impl GithubClient {
    pub fn new(
        api_url: &str,
        token: Option<String>,
        search_language: &str,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent("reposcope")
            .build()
            .map_err(ApiError::RequestFailed)?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            search_language: search_language.to_string(),
        })
    }

    async fn get_json(&self, url: Url) -> Result<String, ApiError> {
        let mut request = self.client.get(url);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await.map_err(ApiError::RequestFailed)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatusCode(status.as_u16()));
        }

        resp.text().await.map_err(ApiError::RequestFailed)
    }

    /// One page of the most-starred repositories for the configured language.
    pub async fn search_repositories(&self, page: u32) -> Result<Vec<Repository>, ApiError> {
        let url = Url::parse_with_params(
            &format!("{}/search/repositories", self.api_url),
            &[
                ("q", format!("language:{}", self.search_language).as_str()),
                ("sort", "stars"),
                ("page", page.to_string().as_str()),
            ],
        )
        .map_err(|_| ApiError::InvalidUrl)?;

        let body = self.get_json(url).await?;
        let response: RepoSearchResponse =
            serde_json::from_str(&body).map_err(ApiError::DecodingError)?;

        debug!(page, count = response.items.len(), "Fetched repository page");
        Ok(response.items)
    }

    /// All pull requests (open and closed) of one repository, first page.
    pub async fn pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequest>, ApiError> {
        let url = Url::parse_with_params(
            &format!("{}/repos/{}/{}/pulls", self.api_url, owner, repo),
            &[("state", "all")],
        )
        .map_err(|_| ApiError::InvalidUrl)?;

        let body = self.get_json(url).await?;
        let prs: Vec<PullRequest> =
            serde_json::from_str(&body).map_err(ApiError::DecodingError)?;

        debug!(owner, repo, count = prs.len(), "Fetched pull requests");
        Ok(prs)
    }
}

impl RepositoryFetcher for GithubClient {
    fn fetch_page(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Repository>, ApiError>> + Send {
        let client = self.clone();
        async move { client.search_repositories(page).await }
    }
}

impl PullRequestFetcher for GithubClient {
    fn fetch_for_repo(
        &self,
        owner: &str,
        repo: &str,
    ) -> impl Future<Output = Result<Vec<PullRequest>, ApiError>> + Send {
        let client = self.clone();
        let owner = owner.to_string();
        let repo = repo.to_string();
        async move { client.pull_requests(&owner, &repo).await }
    }
}
