use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use abacus::banner::{BannerInfo, print_banner, print_session_summary};
use abacus::commands::{CommandRegistry, CommandResult, SessionInfo, StateChange};
use abacus::config::Config;
use abacus::consts::{MIN_SCREEN_WIDTH, default_db_path};
use abacus::keypad::Mode;
use abacus::screen::render;
use abacus::session::Session;

#[derive(Parser)]
#[command(name = "abacus", version, about = "Beads on a wire, moved by keys.")]
struct Cli {
    /// SQLite database for stored preferences (use :memory: for ephemeral)
    #[arg(short, long)]
    db: Option<String>,

    /// Start in scientific mode (remembered for next time)
    #[arg(short, long, default_value_t = false)]
    scientific: bool,

    /// Display width in columns (remembered for next time)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(MIN_SCREEN_WIDTH as i64..))]
    width: Option<u16>,

    /// Press one line of keys, print the display, and exit (non-interactive)
    #[arg(short, long)]
    eval: Option<String>,

    /// With --eval, print the whole calculator state as JSON
    #[arg(long, default_value_t = false, requires = "eval")]
    json: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// `RUST_LOG` wins; otherwise the `-v` count picks the level.
fn log_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn open_config(db: &str) -> Result<Config> {
    if db != ":memory:"
        && let Some(parent) = Path::new(db).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Config::open(db)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let db = cli
        .db
        .clone()
        .unwrap_or_else(|| default_db_path().to_string_lossy().into_owned());
    let config = open_config(&db)?;

    if cli.scientific {
        config.set_mode(Mode::Scientific)?;
    }
    if let Some(width) = cli.width {
        config.set_width(usize::from(width))?;
    }
    let mode = config.mode()?;
    let width = config.width()?;
    info!(%mode, width, db = %db, "starting");

    let mut session = Session::new(mode);

    // Single line mode
    if let Some(line) = cli.eval {
        session.feed(&line)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        } else {
            println!("{}", session.display());
        }
        return Ok(());
    }

    let config_label = if db == ":memory:" { "ephemeral" } else { &db };
    print_banner(&BannerInfo {
        mode,
        width,
        config: config_label,
    });
    println!("{}", render(session.state(), session.mode(), width));

    let commands = CommandRegistry::new();

    // REPL — async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\nabacus> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let info = SessionInfo {
            mode: session.mode(),
            state: session.state(),
            presses: session.presses(),
            db_path: config_label,
        };
        match commands.dispatch(input, &info).await {
            CommandResult::Quit => break,
            CommandResult::Handled => continue,
            CommandResult::StateChanged(StateChange::Mode(next)) => {
                if session.mode() != next {
                    session.toggle_mode();
                }
                remember_mode(&config, next);
            }
            CommandResult::NotACommand => {
                let before = session.mode();
                if let Err(e) = session.feed(input) {
                    eprintln!("  ✗ {e}");
                }
                if session.mode() != before {
                    remember_mode(&config, session.mode());
                }
            }
        }

        println!("{}", render(session.state(), session.mode(), width));
    }

    print_session_summary(session.presses());
    Ok(())
}

fn remember_mode(config: &Config, mode: Mode) {
    if let Err(e) = config.set_mode(mode) {
        warn!(error = %e, "failed to remember mode");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_eval_and_json() {
        let cli = Cli::parse_from(["abacus", "--eval", "2 + 2 =", "--json", "-d", ":memory:"]);
        assert_eq!(cli.eval.as_deref(), Some("2 + 2 ="));
        assert!(cli.json);
        assert_eq!(cli.db.as_deref(), Some(":memory:"));
        assert!(!cli.scientific);
    }

    #[test]
    fn json_requires_eval() {
        assert!(Cli::try_parse_from(["abacus", "--json"]).is_err());
    }

    #[test]
    fn width_below_minimum_is_rejected() {
        assert!(Cli::try_parse_from(["abacus", "--width", "3"]).is_err());
        let cli = Cli::parse_from(["abacus", "-w", "30"]);
        assert_eq!(cli.width, Some(30));
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["abacus", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn open_config_in_memory() {
        let config = open_config(":memory:").unwrap();
        assert_eq!(config.mode().unwrap(), Mode::Basic);
    }

    #[test]
    fn open_config_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("abacus.db");
        open_config(path.to_str().unwrap()).unwrap();
        assert!(path.exists());
    }
}
