mod common;

use common::{MockApi, make_repo};
use reposcope::app::repo_list::{RepoListAction, RepoListState, repo_list_reducer};
use reposcope::github::ApiError;

fn mock() -> MockApi {
    MockApi {
        first_page: vec![make_repo(1, "serde"), make_repo(2, "tokio")],
        ..MockApi::default()
    }
}

fn fetch_error() -> ApiError {
    ApiError::UnexpectedStatusCode(500)
}

// --- First page ---

#[test]
fn test_view_appeared_sets_loading_and_returns_effect() {
    let mut state = RepoListState::initial();
    let effect = repo_list_reducer(&mut state, RepoListAction::ViewAppeared, &mock());

    assert!(state.is_loading_first_page);
    assert!(state.error.is_none());
    assert!(effect.is_some());
}

#[test]
fn test_view_appeared_clears_previous_error() {
    let mut state = RepoListState::initial();
    state.error = Some("boom".into());

    repo_list_reducer(&mut state, RepoListAction::ViewAppeared, &mock());
    assert!(state.error.is_none());
}

#[test]
fn test_view_appeared_is_noop_once_loaded() {
    let mut state = RepoListState::initial();
    state.repositories = vec![make_repo(1, "serde")];

    let before = state.clone();
    let effect = repo_list_reducer(&mut state, RepoListAction::ViewAppeared, &mock());

    assert_eq!(state, before);
    assert!(effect.is_none());
}

#[test]
fn test_first_page_success_stores_items() {
    // Scenario A
    let mut state = RepoListState::initial();
    let effect = repo_list_reducer(&mut state, RepoListAction::ViewAppeared, &mock());
    assert!(state.is_loading_first_page);
    assert!(effect.is_some());

    let repos = vec![make_repo(1, "serde"), make_repo(2, "tokio")];
    let effect = repo_list_reducer(
        &mut state,
        RepoListAction::FirstPageResponse(Ok(repos)),
        &mock(),
    );

    assert!(!state.is_loading_first_page);
    assert_eq!(state.repositories.len(), 2);
    assert!(state.can_load_more_pages);
    assert!(effect.is_none());
}

#[test]
fn test_first_page_empty_result_ends_pagination() {
    let mut state = RepoListState::initial();
    state.is_loading_first_page = true;

    repo_list_reducer(
        &mut state,
        RepoListAction::FirstPageResponse(Ok(vec![])),
        &mock(),
    );

    assert!(!state.can_load_more_pages);
    assert!(state.repositories.is_empty());
}

#[test]
fn test_first_page_failure_sets_error() {
    let mut state = RepoListState::initial();
    state.is_loading_first_page = true;

    let effect = repo_list_reducer(
        &mut state,
        RepoListAction::FirstPageResponse(Err(fetch_error())),
        &mock(),
    );

    assert!(!state.is_loading_first_page);
    assert_eq!(state.error.as_deref(), Some("unexpected status code: 500"));
    assert!(state.repositories.is_empty());
    assert!(effect.is_none());
}

// --- Pagination ---

fn loaded_state() -> RepoListState {
    let mut state = RepoListState::initial();
    state.repositories = vec![make_repo(1, "serde"), make_repo(2, "tokio")];
    state
}

#[test]
fn test_reached_end_starts_next_page_fetch() {
    let mut state = loaded_state();
    let effect = repo_list_reducer(&mut state, RepoListAction::ReachedEndOfList, &mock());

    assert!(state.is_fetching_next_page);
    assert_eq!(state.current_page, 1);
    assert!(effect.is_some());
}

#[test]
fn test_reached_end_is_noop_while_fetching() {
    let mut state = loaded_state();
    state.is_fetching_next_page = true;

    let before = state.clone();
    let effect = repo_list_reducer(&mut state, RepoListAction::ReachedEndOfList, &mock());

    assert_eq!(state, before);
    assert!(effect.is_none());
}

#[test]
fn test_reached_end_is_noop_when_no_more_pages() {
    let mut state = loaded_state();
    state.can_load_more_pages = false;

    let before = state.clone();
    let effect = repo_list_reducer(&mut state, RepoListAction::ReachedEndOfList, &mock());

    assert_eq!(state, before);
    assert!(effect.is_none());
}

#[test]
fn test_next_page_success_appends_and_advances_page() {
    let mut state = loaded_state();
    state.is_fetching_next_page = true;

    repo_list_reducer(
        &mut state,
        RepoListAction::NextPageResponse(Ok(vec![make_repo(3, "ratatui")])),
        &mock(),
    );

    assert!(!state.is_fetching_next_page);
    assert_eq!(state.repositories.len(), 3);
    assert_eq!(state.current_page, 2);
    assert!(state.can_load_more_pages);
}

#[test]
fn test_next_page_empty_result_ends_pagination() {
    // Scenario B
    let mut state = loaded_state();

    repo_list_reducer(&mut state, RepoListAction::ReachedEndOfList, &mock());
    assert!(state.is_fetching_next_page);

    repo_list_reducer(
        &mut state,
        RepoListAction::NextPageResponse(Ok(vec![])),
        &mock(),
    );

    assert!(!state.is_fetching_next_page);
    assert!(!state.can_load_more_pages);
    assert_eq!(state.current_page, 2);
    assert_eq!(state.repositories.len(), 2);
}

#[test]
fn test_next_page_failure_sets_toast_and_keeps_page() {
    let mut state = loaded_state();
    state.is_fetching_next_page = true;

    repo_list_reducer(
        &mut state,
        RepoListAction::NextPageResponse(Err(fetch_error())),
        &mock(),
    );

    assert!(!state.is_fetching_next_page);
    assert_eq!(
        state.pagination_error.as_deref(),
        Some("unexpected status code: 500")
    );
    // The page counter does not move on failure, so the next scroll trigger
    // recomputes the same page number and retries it. Deliberate; pinned by
    // test_failed_page_is_retried in store_tests.
    assert_eq!(state.current_page, 1);
    assert_eq!(state.repositories.len(), 2);
    assert!(state.error.is_none());
}

#[test]
fn test_pagination_error_dismissed_clears_toast() {
    let mut state = loaded_state();
    state.pagination_error = Some("transient".into());

    let effect = repo_list_reducer(&mut state, RepoListAction::PaginationErrorDismissed, &mock());

    assert!(state.pagination_error.is_none());
    assert!(effect.is_none());
}

// --- Selection / purity ---

#[test]
fn test_selection_does_not_change_state() {
    let mut state = loaded_state();
    let before = state.clone();

    let effect = repo_list_reducer(
        &mut state,
        RepoListAction::RepositorySelected(make_repo(1, "serde")),
        &mock(),
    );

    assert_eq!(state, before);
    assert!(effect.is_none());
}

#[test]
fn test_reducer_is_deterministic() {
    let base = loaded_state();

    let mut a = base.clone();
    let mut b = base.clone();
    let effect_a = repo_list_reducer(&mut a, RepoListAction::ReachedEndOfList, &mock());
    let effect_b = repo_list_reducer(&mut b, RepoListAction::ReachedEndOfList, &mock());

    assert_eq!(a, b);
    assert_eq!(effect_a.is_some(), effect_b.is_some());
}
