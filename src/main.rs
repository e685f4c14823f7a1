//! Ocean Word Splash - CLI
//!
//! Daily word puzzle with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use word_splash::{
    commands::{load_status, run_simple, score_guess},
    interactive::{App, run_tui},
    logging::{self, LevelFilter, LogConfig},
    output::{print_score_result, print_status},
    service::{DEFAULT_API_BASE, HttpScoringClient, OfflineService, ScoringService, ServiceConfig},
    settings::{Session, SettingsStore, Theme},
};

#[derive(Parser)]
#[command(
    name = "word_splash",
    about = "Ocean Word Splash: guess the daily six-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the scoring service API
    #[arg(long, global = true, env = "WORD_SPLASH_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Never contact the scoring service; score every guess locally
    #[arg(long, global = true)]
    offline: bool,

    /// Request timeout for the scoring service, in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout_secs: u64,

    /// Color theme (overrides and replaces the saved setting)
    #[arg(long, global = true, value_enum)]
    theme: Option<Theme>,

    /// Directory for log files (default: platform data dir)
    #[arg(long, global = true, env = "WORD_SPLASH_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Print today's status from the scoring service
    Status,

    /// Preview how a guess scores offline
    Score {
        /// Six-letter guess
        guess: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _log_guard = logging::init(&LogConfig::new(&log_dir, cli.log_level))
        .with_context(|| format!("failed to initialize logging in {}", log_dir.display()))?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Status => run_status_command(&cli),
        Commands::Score { guess } => run_score_command(&guess),
    }
}

/// Build the scoring service selected on the command line
///
/// A client that cannot be constructed degrades to offline play.
fn build_service(cli: &Cli) -> Box<dyn ScoringService> {
    if cli.offline {
        info!("offline mode requested");
        return Box::new(OfflineService);
    }

    let config = ServiceConfig {
        api_base: cli.api_base.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    match HttpScoringClient::new(&config) {
        Ok(client) => {
            info!(api_base = client.api_base(), "using scoring service");
            Box::new(client)
        }
        Err(err) => {
            warn!(error = %err, "scoring client unavailable, playing offline");
            Box::new(OfflineService)
        }
    }
}

fn open_session(cli: &Cli) -> Session {
    let store = SettingsStore::default_location()
        .inspect_err(|err| warn!(error = %err, "settings will not be saved"))
        .ok();
    Session::open(store, cli.theme)
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let service = build_service(cli);
    let session = open_session(cli);

    let app = App::new(service, session);
    let session = run_tui(app).context("terminal UI failed")?;
    session.close();
    Ok(())
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let service = build_service(cli);
    run_simple(service.as_ref()).context("simple mode failed")
}

fn run_status_command(cli: &Cli) -> Result<()> {
    let service = build_service(cli);
    let state = load_status(service.as_ref()).context("could not fetch today's status")?;
    print_status(&state);
    Ok(())
}

fn run_score_command(guess: &str) -> Result<()> {
    let result = score_guess(guess).with_context(|| format!("cannot score {guess:?}"))?;
    print_score_result(&result);
    Ok(())
}
