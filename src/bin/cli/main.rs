mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use daily_cards_lib::DayKey;

#[derive(Parser)]
#[command(name = "daily-cards", about = "Today's language cards, the same all day for everyone", version)]
struct Cli {
    /// Config file (default: ~/.config/daily-cards/config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Show today's cards (default)
    Today {
        /// Card pool document (overrides cards_path from config)
        #[arg(long)]
        cards: Option<PathBuf>,
        /// Show the cards for a specific day (YYYY-MM-DD)
        #[arg(long, conflicts_with = "at")]
        date: Option<DayKey>,
        /// Use this instant instead of the current time (RFC 3339)
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
    },

    /// Print the day key used as today's seed
    DayKey {
        /// Use this instant instead of the current time (RFC 3339)
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
    },
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp like 2024-06-01T07:00:00+09:00: {}", e))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    let app = app::App::new(cli.config.as_deref())?;

    // No subcommand -> today's cards
    let command = cli.command.unwrap_or(Command::Today {
        cards: None,
        date: None,
        at: None,
    });

    match command {
        Command::Today { cards, date, at } => {
            let day_key = date.unwrap_or_else(|| app.day_key(at.unwrap_or_else(Utc::now)));
            commands::today::run(&app, cards.as_deref(), &day_key, &cli.format, use_color)?;
        }
        Command::DayKey { at } => {
            commands::day_key::run(&app, at.unwrap_or_else(Utc::now), &cli.format)?;
        }
    }

    Ok(())
}
