//! Pull-request-list feature: fetch once, aggregate open/closed counters.

use crate::github::{ApiError, PullRequest, PullRequestFetcher, Repository};
use crate::store::Effect;

#[derive(Debug)]
pub enum PullRequestListAction {
    ViewAppeared,
    PullRequestSelected(PullRequest),
    Response(Result<Vec<PullRequest>, ApiError>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestListState {
    pub is_loading: bool,
    pub pull_requests: Vec<PullRequest>,
    pub error: Option<String>,
    pub repository_name: String,
    pub open_count: usize,
    pub closed_count: usize,
    pub has_fetched_once: bool,
}

impl PullRequestListState {
    pub fn initial(repository_name: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            pull_requests: Vec::new(),
            error: None,
            repository_name: repository_name.into(),
            open_count: 0,
            closed_count: 0,
            has_fetched_once: false,
        }
    }
}

/// Dependencies of the pull-request list: the fetcher plus the repository the
/// screen is bound to.
#[derive(Clone)]
pub struct PullRequestListDeps<C> {
    pub api: C,
    pub repository: Repository,
}

/// Pure state-transition function for the pull-request list.
///
/// Invariant: `open_count + closed_count == pull_requests.len()` after every
/// transition.
pub fn pull_request_list_reducer<C: PullRequestFetcher>(
    state: &mut PullRequestListState,
    action: PullRequestListAction,
    deps: &PullRequestListDeps<C>,
) -> Option<Effect<PullRequestListAction>> {
    match action {
        PullRequestListAction::ViewAppeared => {
            if state.has_fetched_once {
                return None;
            }

            state.is_loading = true;

            let api = deps.api.clone();
            let owner = deps.repository.owner.login.clone();
            let repo = deps.repository.name.clone();
            Some(Effect::run(move |send| async move {
                let result = api.fetch_for_repo(&owner, &repo).await;
                send.send(PullRequestListAction::Response(result));
            }))
        }

        // Selection carries the PR's external link; navigation happens in the
        // view layer.
        PullRequestListAction::PullRequestSelected(_) => None,

        PullRequestListAction::Response(Ok(prs)) => {
            state.is_loading = false;
            state.has_fetched_once = true;
            state.open_count = prs.iter().filter(|pr| pr.is_open()).count();
            state.closed_count = prs.len() - state.open_count;
            state.pull_requests = prs;
            None
        }

        PullRequestListAction::Response(Err(err)) => {
            state.is_loading = false;
            state.has_fetched_once = true;
            state.error = Some(err.to_string());
            state.pull_requests.clear();
            state.open_count = 0;
            state.closed_count = 0;
            None
        }
    }
}
