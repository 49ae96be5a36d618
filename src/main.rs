//! Goban-Rules: command line front end for the Go rules engine.
//!
//! ## Usage
//!
//! - `goban-rules` - Play a random 9x9 demo game
//! - `goban-rules selfplay --size 13 --seed 7` - Play a seeded random game
//! - `goban-rules moves "<diagram>"` - List the legal moves of a position
//! - `goban-rules score "<diagram>"` - Area score of a position
//! - `goban-rules perft --depth 3` - Count move-tree nodes

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use goban_rules::board::GoBoard;
use goban_rules::constants::{DEFAULT_CAPACITY, DEFAULT_KOMI};
use goban_rules::engine::{Game, perft};
use goban_rules::game::GoGame;
use goban_rules::playout::random_playout;
use goban_rules::point::BoardSize;

/// Goban-Rules: Go rules engine for game-tree search
#[derive(Parser)]
#[command(name = "goban-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a short random game on a 9x9 board
    Demo,
    /// Play a seeded random game and report the result
    Selfplay {
        /// Board side length (9, 13 or 19)
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Compensation added to white's score
        #[arg(long, default_value_t = DEFAULT_KOMI)]
        komi: f64,
        /// Random seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Maximum number of moves
        #[arg(long, default_value_t = 400)]
        plies: usize,
        /// Initial history capacity
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
    },
    /// List the legal moves of a diagram, e.g. "9/9/9/9/4X4/9/9/9/9 w -"
    Moves {
        diagram: String,
    },
    /// Area score of a diagram
    Score {
        diagram: String,
        /// Compensation added to white's score
        #[arg(long, default_value_t = DEFAULT_KOMI)]
        komi: f64,
    },
    /// Count the nodes of the legal move tree
    Perft {
        /// Board side length (9, 13 or 19)
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Search depth in plies
        #[arg(long, default_value_t = 2)]
        depth: usize,
        /// Start from this diagram instead of an empty board
        #[arg(long)]
        diagram: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay {
            size,
            komi,
            seed,
            plies,
            capacity,
        }) => run_selfplay(board_size(size)?, komi, seed, plies, capacity),
        Some(Commands::Moves { diagram }) => run_moves(&diagram),
        Some(Commands::Score { diagram, komi }) => run_score(&diagram, komi),
        Some(Commands::Perft {
            size,
            depth,
            diagram,
        }) => run_perft(board_size(size)?, depth, diagram.as_deref()),
        Some(Commands::Demo) | None => {
            println!("Goban-Rules: Go rules engine\n");
            run_selfplay(BoardSize::Nine, DEFAULT_KOMI, 1, 120, DEFAULT_CAPACITY)
        }
    }
}

fn board_size(side: usize) -> Result<BoardSize> {
    BoardSize::try_from(side).with_context(|| format!("invalid --size {side}"))
}

fn parse_board(diagram: &str) -> Result<GoBoard> {
    diagram
        .parse()
        .with_context(|| format!("invalid diagram '{diagram}'"))
}

fn run_selfplay(size: BoardSize, komi: f64, seed: u64, plies: usize, capacity: usize) -> Result<()> {
    let mut game = GoGame::with_capacity(capacity, size);
    game.set_komi(komi);
    let mut rng = fastrand::Rng::with_seed(seed);

    let start = Instant::now();
    let played = random_playout(&mut game, &mut rng, plies);
    eprintln!(
        "played {played} moves in {:.1} ms (seed {seed})",
        start.elapsed().as_secs_f64() * 1000.0
    );

    let board = game.to_board();
    let record: Vec<String> = game
        .moves()
        .iter()
        .map(|&mv| board.to_coordinates(mv))
        .collect();

    println!("{game}");
    println!("Diagram: {}", board.to_diagram());
    println!("Moves: {}", record.join(" "));
    println!(
        "Black {:.1} - White {:.1} (score {}, ended: {})",
        game.black_score(),
        game.white_score(),
        game.score(),
        game.has_ended()
    );
    println!("Outcome: {}", game.outcome());
    Ok(())
}

fn run_moves(diagram: &str) -> Result<()> {
    let board = parse_board(diagram)?;
    let mut game = GoGame::new(board.size());
    game.set_board(board.clone());

    let moves: Vec<String> = game
        .legal_moves()
        .into_iter()
        .map(|mv| board.to_coordinates(mv))
        .collect();

    println!("{board}");
    println!("{} legal moves: {}", moves.len(), moves.join(" "));
    Ok(())
}

fn run_score(diagram: &str, komi: f64) -> Result<()> {
    let board = parse_board(diagram)?;
    let mut game = GoGame::new(board.size());
    game.set_board(board);
    game.set_komi(komi);

    println!("Black: {:.1}", game.black_score());
    println!("White: {:.1}", game.white_score());
    println!("Score: {}", game.score());
    Ok(())
}

fn run_perft(size: BoardSize, depth: usize, diagram: Option<&str>) -> Result<()> {
    let mut game = GoGame::new(size);
    if let Some(diagram) = diagram {
        game.set_board(parse_board(diagram)?);
    }
    game.ensure_capacity(depth + 1);

    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&mut game, d);
        let secs = start.elapsed().as_secs_f64();
        eprintln!("depth {d}: {secs:.3} s");
        println!("perft({d}) = {nodes}");
    }
    Ok(())
}
