//! Game state, move legality, and the rules of play.
//!
//! A game is a chain of immutable [`GameState`] values: applying a move
//! builds a new state whose `previous` link points at the old one, so the
//! whole history stays reachable. That history is not bookkeeping — the ko
//! rule is enforced by simulating a candidate move on a scratch board and
//! walking the chain to see whether the resulting position already
//! occurred (positional superko).
//!
//! Legality lives here, not on the board: [`GameState::validate_move`]
//! says why a move is rejected, [`GameState::is_valid_move`] collapses
//! that to a boolean, and [`GameState::apply_move`] trusts its caller to
//! have asked first.

use std::fmt;
use std::rc::Rc;

use crate::board::{letter_col, Board, BoardSize, Player, Point};

/// One turn's action: place a stone, pass, or resign.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Play(Point),
    Pass,
    Resign,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(point) => write!(f, "{point}"),
            Move::Pass => write!(f, "pass"),
            Move::Resign => write!(f, "resign"),
        }
    }
}

/// Why a proposed move was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended
    GameOver,
    /// Target point lies outside the board
    OffGrid,
    /// Target point is not empty
    Occupied,
    /// Move would leave its own string without liberties
    Suicide,
    /// Move would repeat an earlier whole-board position
    Ko,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "illegal move: the game is over"),
            MoveError::OffGrid => write!(f, "illegal move: point is off the board"),
            MoveError::Occupied => write!(f, "illegal move: point is occupied"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
            MoveError::Ko => write!(f, "illegal move: repeats an earlier position"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A snapshot of the game after some number of moves.
///
/// States are immutable; [`GameState::apply_move`] returns a fresh state
/// linked back to its predecessor. Boards are behind [`Rc`], so cloning a
/// state or passing the board forward unchanged costs a pointer copy, and
/// ancestors stay alive exactly as long as some descendant can still reach
/// them through `previous`.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Rc<Board>,
    next_player: Player,
    previous: Option<Rc<GameState>>,
    last_move: Option<Move>,
}

impl GameState {
    /// A fresh game on an empty board, Black to move.
    ///
    /// Accepts a bare side length for a square board or a
    /// `(rows, cols)` pair for a rectangular one.
    pub fn new_game(size: impl Into<BoardSize>) -> GameState {
        let size = size.into();
        GameState {
            board: Rc::new(Board::new(size.rows, size.cols)),
            next_player: Player::Black,
            previous: None,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn previous(&self) -> Option<&GameState> {
        self.previous.as_deref()
    }

    /// The state after `mv`, with `self` as its predecessor.
    ///
    /// A play deep-copies the board and places the stone for the player to
    /// move; pass and resign carry the board forward unchanged, sharing
    /// the same allocation. Legality is not checked here — callers consult
    /// [`GameState::is_valid_move`] first. Applying an illegal play is a
    /// contract violation: occupied and off-grid points panic inside
    /// [`Board::place_stone`], and a suicide play leaves its zero-liberty
    /// string on the board.
    pub fn apply_move(&self, mv: Move) -> GameState {
        let board = match mv {
            Move::Play(point) => {
                let mut board = Board::clone(&self.board);
                board.place_stone(self.next_player, point);
                Rc::new(board)
            }
            Move::Pass | Move::Resign => Rc::clone(&self.board),
        };
        GameState {
            board,
            next_player: self.next_player.other(),
            previous: Some(Rc::new(self.clone())),
            last_move: Some(mv),
        }
    }

    /// Whether playing `mv` as `player` would leave the played stone's
    /// string with zero liberties while capturing nothing.
    ///
    /// Simulated on a board copy. Capture takes precedence: a placement
    /// that fills its own last liberty but removes an enemy string first
    /// regains liberties through the vacated points and is not suicide.
    /// Pass and resign are never self-capture.
    pub fn is_move_self_capture(&self, player: Player, mv: Move) -> bool {
        let point = match mv {
            Move::Play(point) => point,
            _ => return false,
        };
        let mut next_board = Board::clone(&self.board);
        next_board.place_stone(player, point);
        next_board
            .get_go_string(point)
            .is_some_and(|string| string.num_liberties() == 0)
    }

    /// Whether playing `mv` as `player` would recreate a whole-board
    /// position that already occurred with the same player to move.
    ///
    /// This is positional superko: the candidate is simulated on a board
    /// copy and the resulting situation is compared against every ancestor
    /// in the `previous` chain, point-for-point. The walk makes the check
    /// cost proportional to history length times board area, which is the
    /// price of catching long repetition cycles as well as the simple ko.
    pub fn does_move_violate_ko(&self, player: Player, mv: Move) -> bool {
        let point = match mv {
            Move::Play(point) => point,
            _ => return false,
        };
        let mut next_board = Board::clone(&self.board);
        next_board.place_stone(player, point);
        let next_player = player.other();
        let mut past = self.previous.as_deref();
        while let Some(state) = past {
            if state.next_player == next_player && *state.board == next_board {
                return true;
            }
            past = state.previous.as_deref();
        }
        false
    }

    /// Checks `mv` for the player to move, reporting why it fails.
    ///
    /// Pass and resign are always allowed while the game runs. A play
    /// must land on an empty on-grid point, must not be suicide, and must
    /// not repeat an earlier position. Once the game is over nothing is
    /// allowed.
    pub fn validate_move(&self, mv: Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let point = match mv {
            Move::Play(point) => point,
            Move::Pass | Move::Resign => return Ok(()),
        };
        if !self.board.is_on_grid(point) {
            return Err(MoveError::OffGrid);
        }
        if self.board.get(point).is_some() {
            return Err(MoveError::Occupied);
        }
        if self.is_move_self_capture(self.next_player, mv) {
            return Err(MoveError::Suicide);
        }
        if self.does_move_violate_ko(self.next_player, mv) {
            return Err(MoveError::Ko);
        }
        Ok(())
    }

    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.validate_move(mv).is_ok()
    }

    /// Whether the game has ended: a resignation, or two passes in a row.
    pub fn is_over(&self) -> bool {
        match self.last_move {
            None => false,
            Some(Move::Resign) => true,
            Some(Move::Play(_)) => false,
            Some(Move::Pass) => {
                let second_last = self.previous.as_ref().and_then(|state| state.last_move);
                matches!(second_last, Some(Move::Pass))
            }
        }
    }
}

/// Parses a human move: `pass`, `resign`, or a vertex such as `D4`
/// (column letter skipping `I`, then 1-based row). Case-insensitive;
/// board bounds are not checked here, that is `validate_move`'s job.
pub fn parse_move(text: &str) -> Option<Move> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("pass") {
        return Some(Move::Pass);
    }
    if text.eq_ignore_ascii_case("resign") {
        return Some(Move::Resign);
    }
    let mut chars = text.chars();
    let col = letter_col(chars.next()?)?;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Move::Play(Point::new(row, col)))
}
