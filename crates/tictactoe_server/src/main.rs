//! Tic-tac-toe engine - unified CLI
//!
//! Serves the HTTP move API, plays in the terminal, or answers a single
//! board from the command line.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tictactoe_engine::{Player as Mark, best_move, heuristic_move};
use tictactoe_server::cli::{Cli, Command};
use tictactoe_server::{
    EnginePlayer, HeuristicPlayer, HumanPlayer, Match, Player, ServerConfig, SymbolMap,
    parse_board, serve, split_compact,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            seed,
        } => run_server(config, host, port, seed).await,
        Command::Play {
            ai_first,
            easy,
            seed,
        } => run_play(ai_first, easy, seed),
        Command::Suggest {
            board,
            ai,
            human,
            heuristic,
            seed,
        } => run_suggest(&board, &ai, &human, heuristic, seed),
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run the HTTP move API
async fn run_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    seed: Option<u64>,
) -> Result<()> {
    init_tracing("info");
    info!("Starting tic-tac-toe HTTP server");

    let mut config =
        ServerConfig::load(config_path.as_deref()).context("Failed to load server config")?;
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }

    serve(&config).await
}

/// Play against the engine in the terminal
#[instrument]
fn run_play(ai_first: bool, easy: bool, seed: Option<u64>) -> Result<()> {
    init_tracing("warn");

    let human = HumanPlayer::new("You", std::io::stdin().lock(), std::io::stdout());
    let engine: Box<dyn Player> = if easy {
        Box::new(HeuristicPlayer::new("Engine", Mark::O, rng_from(seed)))
    } else {
        Box::new(EnginePlayer::new("Engine", Mark::O, rng_from(seed)))
    };
    let first = if ai_first { Mark::O } else { Mark::X };

    let mut game = Match::new(Box::new(human), engine, first, std::io::stdout());
    game.run()?;
    Ok(())
}

/// Print the engine's move for one board
#[instrument]
fn run_suggest(board: &str, ai: &str, human: &str, heuristic: bool, seed: Option<u64>) -> Result<()> {
    init_tracing("warn");

    let symbols = SymbolMap::new(ai, human)?;
    let mut parsed = parse_board(&split_compact(board), &symbols)?;
    println!("{}\n", symbols.render(&parsed));

    let mut rng = rng_from(seed);
    let (ai_mark, human_mark) = (symbols.ai_mark(), symbols.human_mark());
    let chosen = if heuristic {
        heuristic_move(&parsed, ai_mark, human_mark, &mut rng)
    } else {
        best_move(&mut parsed, ai_mark, human_mark, &mut rng)
    };

    match chosen {
        Some(pos) => println!("{} plays {} (index {})", ai, pos, pos.to_index()),
        None => println!("No legal move available"),
    }
    Ok(())
}
