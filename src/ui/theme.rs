use ratatui::style::{Color, Modifier, Style};

pub const HIGHLIGHT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

pub const HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const DIM: Style = Style::new().fg(Color::DarkGray);

pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

pub const TOAST: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);

pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

pub const REPO_NAME: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

pub const STARS: Style = Style::new().fg(Color::Yellow);

pub const PR_OPEN: Style = Style::new().fg(Color::Green);

pub const PR_CLOSED: Style = Style::new().fg(Color::Red);

pub const PR_AUTHOR: Style = Style::new().fg(Color::Yellow);
