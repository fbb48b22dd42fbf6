use std::path::PathBuf;

use amazeing::{
    MazeConfig, Point, config::parse_point, path_to_string, render::render_maze, solve,
};
use anyhow::Context;
use clap::Parser;
use tracing::Level;

/// Generate a maze, validate it and print it with its shortest route.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file with KEY=VALUE lines (WIDTH, HEIGHT, ENTRY, EXIT, PERFECT, SEED)
    config: Option<PathBuf>,

    /// Maze width in cells
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    width: Option<u16>,

    /// Maze height in cells
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    height: Option<u16>,

    /// Entry cell as x,y
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    entry: Option<Point>,

    /// Exit cell as x,y
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    exit: Option<Point>,

    /// Add loops instead of generating a perfect maze
    #[arg(long)]
    imperfect: bool,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print without terminal colors
    #[arg(long)]
    no_color: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => MazeConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MazeConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.config.is_none() && args.exit.is_none() {
        // Keep the default exit in the bottom right corner of a resized maze
        config.exit = (config.width - 1, config.height - 1);
    }
    if let Some(entry) = args.entry {
        config.entry = entry;
    }
    if let Some(exit) = args.exit {
        config.exit = exit;
    }
    if args.imperfect {
        config.perfect = false;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    tracing::info!(
        "Config: {}x{} entry={:?} exit={:?} perfect={} seed={:?}",
        config.width,
        config.height,
        config.entry,
        config.exit,
        config.perfect,
        config.seed
    );

    let generation = config.generate().context("maze generation failed")?;
    for warning in &generation.warnings {
        tracing::warn!("{}", warning);
    }
    for message in &generation.report.messages {
        tracing::info!("{}", message);
    }

    let path = solve(&generation.maze, config.entry, config.exit);
    match &path {
        Some(steps) => tracing::info!(
            "Shortest path ({} steps): {}",
            steps.len(),
            path_to_string(steps)
        ),
        None => tracing::warn!(
            "No path found from {:?} to {:?}!",
            config.entry,
            config.exit
        ),
    }

    println!(
        "{}",
        render_maze(
            &generation.maze,
            Some(config.entry),
            Some(config.exit),
            path.as_deref(),
            !args.no_color,
        )
    );
    Ok(())
}
