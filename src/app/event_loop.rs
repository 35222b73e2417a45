use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use tokio::sync::watch;
use tracing::debug;

use crate::app::pull_requests::{
    PullRequestListAction, PullRequestListDeps, PullRequestListState, pull_request_list_reducer,
};
use crate::app::repo_list::{RepoListAction, RepoListState, repo_list_reducer};
use crate::app::scroll::{EndOfListDetector, ScrollMetrics};
use crate::app::toast::DismissTimer;
use crate::github::{GithubClient, Repository};
use crate::store::Store;
use crate::ui::widgets;
use crate::util::browser::open_in_browser;
use crate::util::config::AppConfig;

type RepoStore = Store<RepoListState, RepoListAction>;
type PrStore = Store<PullRequestListState, PullRequestListAction>;

/// The pull-request screen owns its store; dropping the screen tears the
/// store down and cancels any fetch still in flight.
struct PrScreen {
    store: PrStore,
    state_rx: watch::Receiver<PullRequestListState>,
    cursor: usize,
}

pub async fn run(config: AppConfig, client: GithubClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, config, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
    client: GithubClient,
) -> Result<()> {
    let repo_store = Store::new(RepoListState::initial(), repo_list_reducer, client.clone());
    let mut repo_rx = repo_store.observe();
    repo_store.dispatch(RepoListAction::ViewAppeared);

    let mut detector = EndOfListDetector::new(
        config.pagination.threshold_rows as f64,
        Duration::from_millis(config.pagination.scroll_throttle_ms),
    );
    let mut toast_timer = DismissTimer::new(Duration::from_secs(config.pagination.toast_dismiss_secs));
    let mut last_pagination_error: Option<String> = None;

    let mut repo_cursor: usize = 0;
    let mut pr_screen: Option<PrScreen> = None;
    let mut should_quit = false;

    let mut event_stream = crossterm::event::EventStream::new();
    // Fallback redraw tick; picks up pull-request store updates.
    let mut redraw = tokio::time::interval(Duration::from_millis(250));

    loop {
        let repo_state = repo_rx.borrow().clone();
        let pr_state = pr_screen
            .as_ref()
            .map(|s| (s.state_rx.borrow().clone(), s.cursor));

        let mut list_rows: u16 = 0;
        terminal.draw(|f| {
            let vertical = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(f.area());
            let body = vertical[0];
            let footer = vertical[1];
            let status = vertical[2];
            list_rows = body.height.saturating_sub(2);

            match &pr_state {
                Some((state, cursor)) => {
                    widgets::render_pr_list(f, body, state, *cursor);
                    widgets::render_status_bar(
                        f,
                        status,
                        "j/k: move | Enter/o: open in browser | Esc: back | q: quit",
                    );
                }
                None => {
                    widgets::render_repo_list(
                        f,
                        body,
                        &repo_state,
                        repo_cursor,
                        config.ui.show_descriptions,
                    );
                    if let Some(ref msg) = repo_state.pagination_error {
                        widgets::render_pagination_toast(f, footer, msg);
                    } else if repo_state.is_fetching_next_page {
                        widgets::render_fetching_footer(f, footer);
                    }
                    widgets::render_status_bar(
                        f,
                        status,
                        "j/k: move | Enter: pull requests | o: open in browser | q: quit",
                    );
                }
            }
        })?;

        if should_quit {
            break;
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event
                    && let Event::Key(KeyEvent {
                        code,
                        modifiers,
                        kind: event::KeyEventKind::Press,
                        ..
                    }) = event
                {
                    if code == KeyCode::Char('q')
                        || (code == KeyCode::Char('c')
                            && modifiers.contains(KeyModifiers::CONTROL))
                    {
                        should_quit = true;
                    } else if let Some(screen) = pr_screen.as_mut() {
                        let mut close_screen = false;
                        match code {
                            KeyCode::Char('j') | KeyCode::Down => {
                                let len = screen.state_rx.borrow().pull_requests.len();
                                if screen.cursor + 1 < len {
                                    screen.cursor += 1;
                                }
                            }
                            KeyCode::Char('k') | KeyCode::Up => {
                                screen.cursor = screen.cursor.saturating_sub(1);
                            }
                            KeyCode::Enter | KeyCode::Char('o') => {
                                let pr = screen
                                    .state_rx
                                    .borrow()
                                    .pull_requests
                                    .get(screen.cursor)
                                    .cloned();
                                if let Some(pr) = pr {
                                    screen.store.dispatch(
                                        PullRequestListAction::PullRequestSelected(pr.clone()),
                                    );
                                    if let Some(url) = pr.html_url {
                                        open_in_browser(&url);
                                    }
                                }
                            }
                            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => {
                                close_screen = true;
                            }
                            _ => {}
                        }
                        if close_screen {
                            // Dropping the screen cancels its in-flight fetch.
                            pr_screen = None;
                            repo_store.dispatch(RepoListAction::ViewAppeared);
                        }
                    } else {
                        match code {
                            KeyCode::Char('j') | KeyCode::Down => {
                                if repo_cursor + 1 < repo_state.repositories.len() {
                                    repo_cursor += 1;
                                }
                                feed_scroll(
                                    &mut detector,
                                    &repo_store,
                                    repo_cursor,
                                    repo_state.repositories.len(),
                                    list_rows,
                                );
                            }
                            KeyCode::Char('k') | KeyCode::Up => {
                                repo_cursor = repo_cursor.saturating_sub(1);
                                feed_scroll(
                                    &mut detector,
                                    &repo_store,
                                    repo_cursor,
                                    repo_state.repositories.len(),
                                    list_rows,
                                );
                            }
                            KeyCode::Char('G') | KeyCode::End => {
                                repo_cursor = repo_state.repositories.len().saturating_sub(1);
                                feed_scroll(
                                    &mut detector,
                                    &repo_store,
                                    repo_cursor,
                                    repo_state.repositories.len(),
                                    list_rows,
                                );
                            }
                            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
                                if let Some(repo) =
                                    repo_state.repositories.get(repo_cursor).cloned()
                                {
                                    repo_store.dispatch(RepoListAction::RepositorySelected(
                                        repo.clone(),
                                    ));
                                    pr_screen = Some(open_pr_screen(repo, client.clone()));
                                }
                            }
                            KeyCode::Char('o') => {
                                if let Some(repo) = repo_state.repositories.get(repo_cursor) {
                                    open_in_browser(&repo.html_url);
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
            res = repo_rx.changed() => {
                if res.is_ok() {
                    let err = repo_rx.borrow().pagination_error.clone();
                    if err != last_pagination_error {
                        last_pagination_error = err.clone();
                        let sender = repo_store.action_sender();
                        toast_timer.update(err.is_some(), move || {
                            sender.send(RepoListAction::PaginationErrorDismissed);
                        });
                    }
                }
            }
            _ = redraw.tick() => {}
        }
    }

    Ok(())
}

fn open_pr_screen(repository: Repository, client: GithubClient) -> PrScreen {
    debug!(repo = %repository.full_name(), "Opening pull request screen");
    let store = Store::new(
        PullRequestListState::initial(repository.full_name()),
        pull_request_list_reducer,
        PullRequestListDeps {
            api: client,
            repository,
        },
    );
    let state_rx = store.observe();
    store.dispatch(PullRequestListAction::ViewAppeared);
    PrScreen {
        store,
        state_rx,
        cursor: 0,
    }
}

/// Translate the cursor position into scroll geometry and dispatch
/// `ReachedEndOfList` when the detector fires.
fn feed_scroll(
    detector: &mut EndOfListDetector,
    store: &RepoStore,
    cursor: usize,
    len: usize,
    visible_rows: u16,
) {
    let visible = f64::from(visible_rows.max(1));
    let metrics = ScrollMetrics {
        content_height: len as f64,
        visible_height: visible,
        offset: (cursor as f64 + 1.0 - visible).max(0.0),
    };
    if detector.sample(metrics) {
        store.dispatch(RepoListAction::ReachedEndOfList);
    }
}
