//! Move-selection agents.
//!
//! The [`Agent`] trait is the seam between game flow and move choice.
//! [`RandomBot`] picks uniformly among legal plays but refuses to fill
//! its own eyes; without that guard random play destroys its own groups
//! and games never settle. When no candidate remains it passes, which is
//! how a game between two bots eventually ends (two passes in a row).

use crate::board::{Board, Player, Point};
use crate::game::{GameState, Move};

/// Something that can choose the next move for the player to move.
pub trait Agent {
    fn select_move(&mut self, game: &GameState) -> Move;
}

/// Whether `point` is an eye for `color`: an empty point whose on-grid
/// neighbors are all friendly stones, with enough friendly diagonals to
/// rule out most false eyes. In the interior three of the four diagonals
/// must be friendly; on the edge or in a corner every on-grid diagonal
/// must be.
///
/// Note: this is a heuristic. It misses some false eyes, which is
/// acceptable for keeping a random bot out of its own territory.
pub fn is_point_an_eye(board: &Board, point: Point, color: Player) -> bool {
    if board.get(point).is_some() {
        return false;
    }
    for neighbor in point.neighbors() {
        if board.is_on_grid(neighbor) && board.get(neighbor) != Some(color) {
            return false;
        }
    }
    let mut friendly_corners = 0;
    let mut off_board_corners = 0;
    for corner in point.diagonals() {
        if board.is_on_grid(corner) {
            if board.get(corner) == Some(color) {
                friendly_corners += 1;
            }
        } else {
            off_board_corners += 1;
        }
    }
    if off_board_corners > 0 {
        // On the edge there is no slack: every on-grid diagonal must be
        // friendly.
        return off_board_corners + friendly_corners == 4;
    }
    friendly_corners >= 3
}

/// An agent that plays a uniformly random legal move, never filling its
/// own eyes, and passes when nothing else remains.
pub struct RandomBot {
    rng: fastrand::Rng,
}

impl RandomBot {
    pub fn new() -> RandomBot {
        RandomBot { rng: fastrand::Rng::new() }
    }

    /// A bot with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> RandomBot {
        RandomBot { rng: fastrand::Rng::with_seed(seed) }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomBot {
    fn select_move(&mut self, game: &GameState) -> Move {
        let board = game.board();
        let mut candidates = Vec::new();
        for row in 1..=board.num_rows {
            for col in 1..=board.num_cols {
                let point = Point::new(row, col);
                if game.is_valid_move(Move::Play(point))
                    && !is_point_an_eye(board, point, game.next_player())
                {
                    candidates.push(point);
                }
            }
        }
        if candidates.is_empty() {
            return Move::Pass;
        }
        Move::Play(candidates[self.rng.usize(..candidates.len())])
    }
}
