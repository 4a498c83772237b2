//! Baduk-Rust: a Go rules engine with immutable game states.
//!
//! This crate implements the rules of Go: stone placement, string
//! merging, liberty bookkeeping, captures, and full move legality
//! (occupied points, suicide, and positional superko). Game states are
//! immutable values linked to their predecessors, so the move history
//! the ko rule depends on comes for free.
//!
//! ## Modules
//!
//! - [`board`] - Board state, stone strings, and capture mechanics
//! - [`game`] - Immutable game states, move legality, ko enforcement
//! - [`agent`] - Move-selection agents (random bot with eye avoidance)
//!
//! ## Example
//!
//! ```
//! use baduk_rust::board::Point;
//! use baduk_rust::game::{GameState, Move};
//!
//! // Create a new 9x9 game
//! let game = GameState::new_game(9);
//!
//! // Check a move and play it
//! let mv = Move::Play(Point::new(3, 3));
//! assert!(game.is_valid_move(mv));
//! let game = game.apply_move(mv);
//!
//! println!("{}", game.board());
//! ```

pub mod agent;
pub mod board;
pub mod game;
