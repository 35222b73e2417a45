//! Repository-list feature: first-page load plus infinite-scroll pagination.

use crate::github::{ApiError, Repository, RepositoryFetcher};
use crate::store::Effect;

#[derive(Debug)]
pub enum RepoListAction {
    ViewAppeared,
    RepositorySelected(Repository),
    ReachedEndOfList,
    FirstPageResponse(Result<Vec<Repository>, ApiError>),
    NextPageResponse(Result<Vec<Repository>, ApiError>),
    /// Internal: fired by the toast dismiss timer.
    PaginationErrorDismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepoListState {
    pub is_loading_first_page: bool,
    pub repositories: Vec<Repository>,
    pub error: Option<String>,
    pub current_page: u32,
    pub is_fetching_next_page: bool,
    pub can_load_more_pages: bool,
    pub pagination_error: Option<String>,
}

impl RepoListState {
    pub fn initial() -> Self {
        Self {
            is_loading_first_page: false,
            repositories: Vec::new(),
            error: None,
            current_page: 1,
            is_fetching_next_page: false,
            can_load_more_pages: true,
            pagination_error: None,
        }
    }
}

/// Pure state-transition function for the repository list.
///
/// Invariants:
/// - `current_page` advances only after a *successful* next-page fetch; a
///   failed fetch leaves it untouched, so the next scroll trigger retries the
///   same page number.
/// - `can_load_more_pages` turns false exactly when the most recently fetched
///   page came back empty.
pub fn repo_list_reducer<D: RepositoryFetcher>(
    state: &mut RepoListState,
    action: RepoListAction,
    deps: &D,
) -> Option<Effect<RepoListAction>> {
    match action {
        RepoListAction::ViewAppeared => {
            // Re-entering the screen with data already loaded is a no-op.
            if !state.repositories.is_empty() {
                return None;
            }

            state.is_loading_first_page = true;
            state.error = None;

            let api = deps.clone();
            Some(Effect::run(move |send| async move {
                let result = api.fetch_page(1).await;
                send.send(RepoListAction::FirstPageResponse(result));
            }))
        }

        RepoListAction::ReachedEndOfList => {
            if state.is_fetching_next_page || !state.can_load_more_pages {
                return None;
            }

            state.is_fetching_next_page = true;
            let next_page = state.current_page + 1;

            let api = deps.clone();
            Some(Effect::run(move |send| async move {
                let result = api.fetch_page(next_page).await;
                send.send(RepoListAction::NextPageResponse(result));
            }))
        }

        // Selection is a navigation concern; the view layer reacts to it.
        RepoListAction::RepositorySelected(_) => None,

        RepoListAction::FirstPageResponse(Ok(repos)) => {
            state.is_loading_first_page = false;
            state.can_load_more_pages = !repos.is_empty();
            state.repositories = repos;
            None
        }

        RepoListAction::FirstPageResponse(Err(err)) => {
            state.is_loading_first_page = false;
            state.error = Some(err.to_string());
            None
        }

        RepoListAction::NextPageResponse(Ok(repos)) => {
            state.is_fetching_next_page = false;
            state.can_load_more_pages = !repos.is_empty();
            state.current_page += 1;
            state.repositories.extend(repos);
            None
        }

        RepoListAction::NextPageResponse(Err(err)) => {
            state.is_fetching_next_page = false;
            state.pagination_error = Some(err.to_string());
            None
        }

        RepoListAction::PaginationErrorDismissed => {
            state.pagination_error = None;
            None
        }
    }
}
