use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use connect_four_engine::config::AppConfig;
use connect_four_engine::game::{Game, GameRecord};

/// Create and play Connect Four games stored as JSON records.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four games stored as JSON files")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a fresh game to FILE
    New {
        file: PathBuf,

        /// Red player's name (overrides config)
        #[arg(long)]
        red: Option<String>,

        /// Blue player's name (overrides config)
        #[arg(long)]
        blue: Option<String>,

        /// Replace FILE if it already exists
        #[arg(long)]
        force: bool,
    },
    /// Apply one move to the game in FILE and save it
    Move {
        file: PathBuf,
        /// red or blue
        player: String,
        column: String,
    },
    /// Print the board and status of the game in FILE
    Show { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logger before config: loading may warn. Without RUST_LOG the max
    // level filters, info until log.level is known.
    let env_filter = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();
    if !env_filter {
        log::set_max_level(LevelFilter::Info);
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if !env_filter {
        log::set_max_level(config.log.level_filter()?);
    }

    match cli.command {
        Command::New {
            file,
            red,
            blue,
            force,
        } => {
            if file.exists() && !force {
                bail!("{} already exists (use --force to replace it)", file.display());
            }
            let red = red.unwrap_or(config.game.red_player_name);
            let blue = blue.unwrap_or(config.game.blue_player_name);
            let game = Game::new(red, blue).context("creating game")?;
            save(&file, &game)?;
            info!("created {}", file.display());
            print_game(&game);
        }
        Command::Move {
            file,
            player,
            column,
        } => {
            let mut game = load(&file)?;
            let status = game
                .apply_request(&column, &player)
                .with_context(|| format!("{player} playing column {column}"))?;
            save(&file, &game)?;
            print_game(&game);
            println!("{status}");
        }
        Command::Show { file } => {
            let game = load(&file)?;
            print_game(&game);
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<Game> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading game from {}", path.display()))?;
    let record = GameRecord::from_json(&json)
        .with_context(|| format!("parsing game in {}", path.display()))?;
    Game::from_record(record).with_context(|| format!("loading game from {}", path.display()))
}

fn save(path: &Path, game: &Game) -> Result<()> {
    let json = game.to_record().to_json()?;
    fs::write(path, json).with_context(|| format!("writing game to {}", path.display()))
}

fn print_game(game: &Game) {
    print!("{}", game.board());
    println!(
        "red: {}  blue: {}",
        game.red_player_name(),
        game.blue_player_name()
    );
    if game.is_terminal() {
        println!("status: {}", game.status());
    } else {
        let player = game.current_player();
        println!("status: {} ({} to move: {})", game.status(), player, game.player_name(player));
    }
}
