use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use reposcope::{app, github, util};

#[derive(Parser, Debug)]
#[command(name = "reposcope", version, about = "TUI browser for top GitHub repositories")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = util::config::AppConfig::load(cli.config.as_deref())?;

    // Setup logging
    let _guard = setup_logging(&config, cli.debug)?;

    info!("reposcope starting");

    // A token is optional: the search and pulls endpoints work anonymously,
    // authenticated requests just get higher rate limits.
    let token = github::auth::resolve_token();
    if token.is_some() {
        info!("Using authenticated GitHub requests");
    }

    let client = github::GithubClient::new(
        &config.github.api_url,
        token,
        &config.github.search_language,
    )?;

    // Run the TUI event loop
    app::event_loop::run(config, client).await
}

fn setup_logging(
    config: &util::config::AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "reposcope.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("reposcope=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
