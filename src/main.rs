//! Gomoku with pluggable players
//!
//! ## Usage
//!
//! - `gomoku` - Open the game window
//! - `gomoku match --player1 reference --player2 random --games 10` - Headless match
//! - `gomoku print-config` - Print the default settings file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gomoku::board::Cell;
use gomoku::game::{play_match, GameSettings};
use gomoku::player::PlayerKind;
use gomoku::ui::GomokuApp;

/// Five in a row against humans or computer players
#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to TOML settings file
    #[arg(long, global = true, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override number of grid columns
    #[arg(long, global = true)]
    cols: Option<usize>,

    /// Override number of grid rows
    #[arg(long, global = true)]
    rows: Option<usize>,

    /// Enable the pair capture rule
    #[arg(long, global = true)]
    pair_check: bool,

    /// Override captured pairs needed to win
    #[arg(long, global = true)]
    pairs_to_win: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play computer players against each other without a window
    Match {
        #[arg(long, default_value = "reference")]
        player1: PlayerKind,

        #[arg(long, default_value = "random")]
        player2: PlayerKind,

        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
    /// Print the default settings as TOML
    PrintConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Some(Commands::PrintConfig) = cli.command {
        let toml = GameSettings::default_toml().context("serializing default settings")?;
        print!("{toml}");
        return Ok(());
    }

    let mut settings = GameSettings::load_or_default(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(cols) = cli.cols {
        settings.cols = cols;
    }
    if let Some(rows) = cli.rows {
        settings.rows = rows;
    }
    if cli.pair_check {
        settings.pair_check = true;
    }
    if let Some(pairs) = cli.pairs_to_win {
        settings.pairs_to_win = pairs;
    }
    settings.validate().context("invalid settings")?;

    match cli.command {
        Some(Commands::Match {
            player1,
            player2,
            games,
        }) => {
            settings.player1 = player1;
            settings.player2 = player2;
            run_match(settings, games)
        }
        Some(Commands::PrintConfig) | None => run_gui(settings),
    }
}

fn run_match(settings: GameSettings, games: u32) -> Result<()> {
    let report = play_match(settings, games).context("running headless match")?;

    println!("{}", report.final_grid);
    println!(
        "{} games: {} won by player 1, {} by player 2, {} tied",
        report.results.len(),
        report.wins(Cell::Color1),
        report.wins(Cell::Color2),
        report.ties()
    );
    for (name, score) in report.scores.iter() {
        println!("{name:>16}: {} / {} won", score.wins, score.total_games);
    }
    Ok(())
}

fn run_gui(settings: GameSettings) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("running the game window: {e}"))
}
