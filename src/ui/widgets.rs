use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table},
};

use crate::app::pull_requests::PullRequestListState;
use crate::app::repo_list::RepoListState;
use crate::ui::theme;
use crate::util::time::relative_time;

pub fn render_repo_list(
    f: &mut Frame,
    area: Rect,
    state: &RepoListState,
    cursor: usize,
    show_descriptions: bool,
) {
    let title = format!(" Repositories ({}) ", state.repositories.len());
    let block = Block::default().title(title).borders(Borders::ALL);

    if let Some(ref err) = state.error {
        let para = Paragraph::new(err.as_str()).style(theme::ERROR).block(block);
        f.render_widget(para, area);
        return;
    }

    if state.repositories.is_empty() {
        let msg = if state.is_loading_first_page {
            "Loading..."
        } else {
            "No repositories"
        };
        let para = Paragraph::new(msg).style(theme::DIM).block(block);
        f.render_widget(para, area);
        return;
    }

    let items: Vec<ListItem> = state
        .repositories
        .iter()
        .map(|repo| {
            let mut spans = vec![
                Span::styled(repo.full_name(), theme::REPO_NAME),
                Span::styled(format!("  ★ {}", repo.stargazers_count), theme::STARS),
                Span::styled(format!("  ⑂ {}", repo.forks_count), theme::DIM),
            ];
            if show_descriptions && let Some(ref desc) = repo.description {
                spans.push(Span::styled(format!("  {desc}"), theme::DIM));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(cursor));
    let list = List::new(items)
        .block(block)
        .highlight_style(theme::HIGHLIGHT);
    f.render_stateful_widget(list, area, &mut list_state);
}

pub fn render_pr_list(f: &mut Frame, area: Rect, state: &PullRequestListState, cursor: usize) {
    let title = format!(
        " {} — {} open / {} closed ",
        state.repository_name, state.open_count, state.closed_count
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    if let Some(ref err) = state.error {
        let para = Paragraph::new(err.as_str()).style(theme::ERROR).block(block);
        f.render_widget(para, area);
        return;
    }

    if state.pull_requests.is_empty() {
        let msg = if state.is_loading {
            "Loading..."
        } else {
            "No pull requests"
        };
        let para = Paragraph::new(msg).style(theme::DIM).block(block);
        f.render_widget(para, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("State").style(theme::HEADER),
        Cell::from("Title").style(theme::HEADER),
        Cell::from("Author").style(theme::HEADER),
        Cell::from("Created").style(theme::HEADER),
    ])
    .height(1);

    let rows: Vec<Row> = state
        .pull_requests
        .iter()
        .enumerate()
        .map(|(i, pr)| {
            let selected = i == cursor;
            let state_style = if pr.is_open() {
                theme::PR_OPEN
            } else {
                theme::PR_CLOSED
            };
            let base = if selected {
                theme::HIGHLIGHT
            } else {
                ratatui::style::Style::default()
            };

            Row::new(vec![
                Cell::from(pr.state.as_deref().unwrap_or("?").to_string())
                    .style(if selected { base } else { state_style }),
                Cell::from(pr.title.as_deref().unwrap_or("(untitled)").to_string()).style(base),
                Cell::from(
                    pr.user
                        .as_ref()
                        .map(|u| u.login.as_str())
                        .unwrap_or("ghost")
                        .to_string(),
                )
                .style(if selected { base } else { theme::PR_AUTHOR }),
                Cell::from(
                    pr.created_at
                        .as_ref()
                        .map(relative_time)
                        .unwrap_or_default(),
                )
                .style(if selected { base } else { theme::DIM }),
            ])
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Length(7),
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

/// Footer spinner row shown while the next page is being fetched.
pub fn render_fetching_footer(f: &mut Frame, area: Rect) {
    let para = Paragraph::new("Loading more...").style(theme::DIM);
    f.render_widget(para, area);
}

/// Transient toast for pagination errors, drawn over the bottom row.
pub fn render_pagination_toast(f: &mut Frame, area: Rect, message: &str) {
    let para = Paragraph::new(Span::styled(format!(" {message} "), theme::TOAST));
    f.render_widget(para, area);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, hints: &str) {
    let bar = Paragraph::new(Span::styled(hints, theme::STATUS_BAR)).style(theme::STATUS_BAR);
    f.render_widget(bar, area);
}
