mod config;
mod direction;
mod error;
mod game;
mod render;
mod search;
mod sequence;
mod tile;

use anyhow::{Context, Result};
use clap::Parser;
use config::SolverConfig;
use log::info;
use render::ConsoleReporter;
use search::Search;
use std::io;
use std::path::PathBuf;
use tile::TileRange;

/// Explores whether a generated tile-push puzzle can be escaped.
#[derive(Parser)]
#[command(name = "tile-push-solver")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the board
    #[arg(long)]
    size: Option<usize>,

    /// Seed of the tile sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Hand-made board file, one row of tile codes per line, top row first
    #[arg(long)]
    board: Option<PathBuf>,

    /// Starting health
    #[arg(long)]
    health: Option<i32>,

    /// Never generate walls
    #[arg(long)]
    no_walls: bool,

    /// Do not expand states deeper than this many moves
    #[arg(long)]
    max_depth: Option<usize>,

    /// End the search at the first way out
    #[arg(long)]
    stop_at_first_win: bool,

    /// Print every explored board
    #[arg(long)]
    show_states: bool,

    /// Plain output without colours
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn into_config(self) -> Result<(SolverConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SolverConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(path) = &self.board {
            config.board = Some(
                SolverConfig::read_board(path)
                    .with_context(|| format!("loading board {}", path.display()))?,
            );
        }
        if let Some(health) = self.health {
            config.starting_health = health;
        }
        if self.no_walls {
            config.tile_range = TileRange::WithoutWalls;
        }
        if self.max_depth.is_some() {
            config.max_depth = self.max_depth;
        }
        config.stop_at_first_win |= self.stop_at_first_win;
        config.show_states |= self.show_states;

        Ok((config, !self.no_color))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let (config, color) = Cli::parse().into_config()?;
    let root = config.build_root().context("invalid solver settings")?;
    info!(
        "board {}x{}, seed {}, {:?}",
        root.size(),
        root.size(),
        root.sequence().seed(),
        root.sequence().range()
    );

    let mut reporter = ConsoleReporter::new(io::stdout().lock())
        .color(color)
        .show_states(config.show_states)
        .stop_at_first_win(config.stop_at_first_win);
    reporter.board(&root);

    let mut search = Search::new(root);
    if let Some(depth) = config.max_depth {
        search = search.with_max_depth(depth);
    }
    let outcome = search.run(&mut reporter);
    info!(
        "explored {} states, {} wins, exhausted: {}",
        outcome.explored, outcome.wins, outcome.exhausted
    );

    Ok(())
}
