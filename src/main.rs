//! Baduk-Rust: a Go rules engine.
//!
//! Command-line front end for the engine: watch two random bots play each
//! other, or play against one yourself.
//!
//! ## Usage
//!
//! - `baduk-rust` - Run a bot-vs-bot demo game
//! - `baduk-rust demo --size 9 --seed 42` - Demo on a chosen board, reproducibly
//! - `baduk-rust play` - Play as Black against the random bot

use std::io::{self, BufRead, Write};

use anyhow::ensure;
use clap::{Parser, Subcommand};

use baduk_rust::agent::{Agent, RandomBot};
use baduk_rust::board::Player;
use baduk_rust::game::{parse_move, GameState, Move};

/// Baduk-Rust: a Go rules engine
#[derive(Parser)]
#[command(name = "baduk-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch two random bots play a full game
    Demo {
        /// Board side length
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Seed the bots for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play as Black against a random bot
    Play {
        /// Board side length
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Seed the bot for a reproducible opponent
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { size, seed }) => run_demo(size, seed),
        Some(Commands::Play { size, seed }) => run_play(size, seed),
        None => run_demo(9, None),
    }
}

fn make_bot(seed: Option<u64>) -> RandomBot {
    match seed {
        Some(seed) => RandomBot::with_seed(seed),
        None => RandomBot::new(),
    }
}

/// Two random bots play until the game ends (or a generous move cap, in
/// case random play wanders).
fn run_demo(size: usize, seed: Option<u64>) -> anyhow::Result<()> {
    ensure!((1..=19).contains(&size), "board size must be between 1 and 19");
    println!("Baduk-Rust: bot vs bot on {size}x{size}\n");

    let mut black = make_bot(seed);
    let mut white = make_bot(seed.map(|s| s.wrapping_add(1)));
    let mut game = GameState::new_game(size);
    let max_moves = 3 * size * size;
    let mut move_number = 0;

    while !game.is_over() && move_number < max_moves {
        let mover = game.next_player();
        let mv = match mover {
            Player::Black => black.select_move(&game),
            Player::White => white.select_move(&game),
        };
        game = game.apply_move(mv);
        move_number += 1;
        println!("Move {move_number}: {mover} {mv}");
        if move_number % 20 == 0 {
            println!("\n{}", game.board());
        }
    }

    println!("\n{}", game.board());
    if game.is_over() {
        println!("Game over after {move_number} moves.");
    } else {
        println!("Stopping after {move_number} moves.");
    }
    Ok(())
}

/// Interactive game: the human plays Black from stdin, the bot answers as
/// White. Rejected moves are reported and the prompt repeats.
fn run_play(size: usize, seed: Option<u64>) -> anyhow::Result<()> {
    ensure!((1..=19).contains(&size), "board size must be between 1 and 19");
    println!(
        "Baduk-Rust: you are Black on {size}x{size}. \
         Moves look like D4, pass, resign; quit leaves the game.\n"
    );

    let mut bot = make_bot(seed);
    let mut game = GameState::new_game(size);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    println!("{}", game.board());
    while !game.is_over() {
        let mv = if game.next_player() == Player::Black {
            write!(stdout, "your move: ")?;
            stdout.flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => break, // stdin closed, stop the session
            };
            if line.trim().eq_ignore_ascii_case("quit") {
                break;
            }
            let Some(mv) = parse_move(&line) else {
                println!("could not read that, try something like D4, pass, or resign");
                continue;
            };
            if let Err(err) = game.validate_move(mv) {
                println!("{err}");
                continue;
            }
            mv
        } else {
            let mv = bot.select_move(&game);
            println!("White plays {mv}");
            mv
        };
        game = game.apply_move(mv);
        println!("{}", game.board());
    }

    if let Some(Move::Resign) = game.last_move() {
        // The player left to move is the one the resigner conceded to.
        println!("{} wins by resignation.", game.next_player());
    } else if game.is_over() {
        println!("Game over: two passes.");
    }
    Ok(())
}
