//! Board representation: stones, strings, and liberty bookkeeping.
//!
//! Every stone on the board belongs to exactly one [`GoString`], the
//! connected group of same-colored stones containing it. Strings live in an
//! arena keyed by id; the grid maps each occupied point to the id of its
//! string, so merging groups rewrites ids instead of chasing shared
//! references.
//!
//! [`Board::place_stone`] drives all mutation: it merges the new stone with
//! adjacent friendly strings, shortens enemy liberties, and removes enemy
//! strings left with no liberties (captures). Legality questions (occupied
//! point, suicide, ko) live one level up in [`crate::game`]; the board only
//! enforces its own call contracts.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// A stone color, which doubles as a player identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The opposing player.
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// A board intersection. Rows and columns are 1-based; `(1, 1)` is a corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Point {
        Point { row, col }
    }

    /// The four orthogonally adjacent points. No bounds filtering is done:
    /// on an edge or corner some results fall off the grid, and callers
    /// must check with [`Board::is_on_grid`].
    pub fn neighbors(self) -> [Point; 4] {
        [
            Point::new(self.row - 1, self.col),
            Point::new(self.row + 1, self.col),
            Point::new(self.row, self.col - 1),
            Point::new(self.row, self.col + 1),
        ]
    }

    /// The four diagonally adjacent points, unfiltered like
    /// [`Point::neighbors`]. Eye detection reads these.
    pub fn diagonals(self) -> [Point; 4] {
        [
            Point::new(self.row - 1, self.col - 1),
            Point::new(self.row - 1, self.col + 1),
            Point::new(self.row + 1, self.col - 1),
            Point::new(self.row + 1, self.col + 1),
        ]
    }
}

impl fmt::Display for Point {
    /// Renders the Go vertex, e.g. `D4`. Column letters skip `I`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match col_letter(self.col) {
            Some(c) => write!(f, "{c}{}", self.row),
            None => write!(f, "({},{})", self.row, self.col),
        }
    }
}

/// Board dimensions. Square boards convert from a bare side length,
/// rectangular ones from a `(rows, cols)` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardSize {
    pub rows: usize,
    pub cols: usize,
}

impl From<usize> for BoardSize {
    fn from(side: usize) -> BoardSize {
        BoardSize { rows: side, cols: side }
    }
}

impl From<(usize, usize)> for BoardSize {
    fn from((rows, cols): (usize, usize)) -> BoardSize {
        BoardSize { rows, cols }
    }
}

/// The letter labeling a column, skipping `I` per Go convention.
/// `None` beyond the 25 letterable columns.
pub(crate) fn col_letter(col: usize) -> Option<char> {
    if col == 0 || col > 25 {
        return None;
    }
    let mut c = b'A' + col as u8 - 1;
    if c >= b'I' {
        c += 1;
    }
    Some(c as char)
}

/// Inverse of [`col_letter`]; rejects `I` and non-letters.
pub(crate) fn letter_col(letter: char) -> Option<usize> {
    let up = letter.to_ascii_uppercase();
    if !up.is_ascii_uppercase() || up == 'I' {
        return None;
    }
    let mut col = (up as u8 - b'A' + 1) as usize;
    if up > 'I' {
        col -= 1;
    }
    Some(col)
}

/// A connected group of same-colored stones together with its liberties.
///
/// A string is a value: the board replaces strings wholesale on merge
/// rather than splicing shared state. Within the board, liberties are
/// always empty on-grid points disjoint from the stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoString {
    color: Player,
    stones: HashSet<Point>,
    liberties: HashSet<Point>,
}

impl GoString {
    pub fn new(
        color: Player,
        stones: impl IntoIterator<Item = Point>,
        liberties: impl IntoIterator<Item = Point>,
    ) -> GoString {
        GoString {
            color,
            stones: stones.into_iter().collect(),
            liberties: liberties.into_iter().collect(),
        }
    }

    pub fn color(&self) -> Player {
        self.color
    }

    pub fn stones(&self) -> &HashSet<Point> {
        &self.stones
    }

    pub fn liberties(&self) -> &HashSet<Point> {
        &self.liberties
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    /// A new string holding the stones of both inputs. Liberties now
    /// covered by the combined stones are dropped. Neither input is
    /// mutated.
    ///
    /// # Panics
    /// Panics if the strings differ in color.
    pub fn merged_with(&self, other: &GoString) -> GoString {
        assert_eq!(
            self.color, other.color,
            "only strings of the same color can merge"
        );
        let stones: HashSet<Point> = self.stones.union(&other.stones).copied().collect();
        let liberties = self
            .liberties
            .union(&other.liberties)
            .copied()
            .filter(|p| !stones.contains(p))
            .collect();
        GoString { color: self.color, stones, liberties }
    }

    /// Removes a liberty that has just been occupied.
    ///
    /// # Panics
    /// Panics if `point` is not currently a liberty; the board only calls
    /// this for points it knows the string borders.
    pub fn remove_liberty(&mut self, point: Point) {
        assert!(
            self.liberties.remove(&point),
            "{point} is not a liberty of this string"
        );
    }

    /// Adds a vacated liberty. Idempotent.
    pub fn add_liberty(&mut self, point: Point) {
        self.liberties.insert(point);
    }
}

/// A Go board of `num_rows` x `num_cols` intersections.
///
/// `Clone` produces the fully independent deep copy that legality
/// simulation relies on. Equality compares occupancy point by point (which
/// player holds each intersection), never string identity, so two boards
/// reached by different move orders compare equal when the stones agree.
#[derive(Clone, Debug)]
pub struct Board {
    pub num_rows: usize,
    pub num_cols: usize,
    /// Row-major grid of string ids; `None` is an empty intersection.
    grid: Vec<Option<u32>>,
    /// Arena of live strings, keyed by the ids stored in `grid`.
    strings: HashMap<u32, GoString>,
    next_id: u32,
}

impl Board {
    /// An empty board.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(num_rows: usize, num_cols: usize) -> Board {
        assert!(
            num_rows >= 1 && num_cols >= 1,
            "board needs at least one row and one column"
        );
        Board {
            num_rows,
            num_cols,
            grid: vec![None; num_rows * num_cols],
            strings: HashMap::new(),
            next_id: 0,
        }
    }

    fn idx(&self, point: Point) -> usize {
        (point.row - 1) * self.num_cols + (point.col - 1)
    }

    pub fn is_on_grid(&self, point: Point) -> bool {
        1 <= point.row
            && point.row <= self.num_rows
            && 1 <= point.col
            && point.col <= self.num_cols
    }

    /// The player occupying `point`, or `None` when the intersection is
    /// empty or off the grid.
    pub fn get(&self, point: Point) -> Option<Player> {
        if !self.is_on_grid(point) {
            return None;
        }
        self.grid[self.idx(point)].map(|id| self.strings[&id].color())
    }

    /// The whole string occupying `point`, letting callers read liberties
    /// without re-deriving them. `None` when empty or off the grid.
    pub fn get_go_string(&self, point: Point) -> Option<&GoString> {
        if !self.is_on_grid(point) {
            return None;
        }
        self.grid[self.idx(point)].map(|id| &self.strings[&id])
    }

    /// Places a stone for `player`, merging friendly neighbors and
    /// capturing enemy strings left without liberties.
    ///
    /// Captures resolve only after the played point has been struck from
    /// every adjacent enemy string, so one placement can capture several
    /// strings at once. A placement that captures nothing and fills its own
    /// last liberty leaves the zero-liberty string on the board; rejecting
    /// such self-capture is the job of
    /// [`crate::game::GameState::is_valid_move`], which simulates on a
    /// throwaway copy first.
    ///
    /// # Panics
    /// Panics if `point` is off the grid or already occupied. Callers
    /// validate first.
    pub fn place_stone(&mut self, player: Player, point: Point) {
        assert!(self.is_on_grid(point), "{point} is off the board");
        assert!(
            self.grid[self.idx(point)].is_none(),
            "{point} is already occupied"
        );
        let mut liberties = Vec::new();
        let mut same_color: Vec<u32> = Vec::new();
        let mut other_color: Vec<u32> = Vec::new();
        for neighbor in point.neighbors() {
            if !self.is_on_grid(neighbor) {
                continue;
            }
            match self.grid[self.idx(neighbor)] {
                None => liberties.push(neighbor),
                Some(id) => {
                    let list = if self.strings[&id].color() == player {
                        &mut same_color
                    } else {
                        &mut other_color
                    };
                    if !list.contains(&id) {
                        list.push(id);
                    }
                }
            }
        }

        // Merge the new stone into one string with its friendly neighbors
        // and point every covered intersection at the fresh id.
        let mut new_string = GoString::new(player, [point], liberties);
        for id in same_color {
            let absorbed = self.strings.remove(&id).unwrap();
            new_string = new_string.merged_with(&absorbed);
        }
        let id = self.next_id;
        self.next_id += 1;
        for &stone in new_string.stones() {
            let i = self.idx(stone);
            self.grid[i] = Some(id);
        }
        self.strings.insert(id, new_string);

        // The stone now occupies what used to be a liberty of each
        // adjacent enemy string; any of them left at zero is captured.
        for &enemy in &other_color {
            self.strings.get_mut(&enemy).unwrap().remove_liberty(point);
        }
        for enemy in other_color {
            if self.strings[&enemy].num_liberties() == 0 {
                self.remove_string(enemy);
            }
        }
    }

    /// Clears a captured string. Each vacated stone becomes a liberty of
    /// every neighboring string other than the one being removed.
    fn remove_string(&mut self, id: u32) {
        let string = self.strings.remove(&id).unwrap();
        for &stone in string.stones() {
            for neighbor in stone.neighbors() {
                if !self.is_on_grid(neighbor) {
                    continue;
                }
                if let Some(nid) = self.grid[self.idx(neighbor)] {
                    if nid != id {
                        self.strings.get_mut(&nid).unwrap().add_liberty(stone);
                    }
                }
            }
            let i = self.idx(stone);
            self.grid[i] = None;
        }
    }

    fn color_of(&self, id: Option<u32>) -> Option<Player> {
        id.map(|id| self.strings[&id].color())
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.num_rows == other.num_rows
            && self.num_cols == other.num_cols
            && self
                .grid
                .iter()
                .zip(&other.grid)
                .all(|(&a, &b)| self.color_of(a) == other.color_of(b))
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.num_rows).rev() {
            write!(f, "{row:>2} ")?;
            for col in 1..=self.num_cols {
                let ch = match self.get(Point::new(row, col)) {
                    Some(Player::Black) => 'X',
                    Some(Player::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        if self.num_cols <= 25 {
            write!(f, "   ")?;
            for col in 1..=self.num_cols {
                // col_letter covers every column up to 25
                write!(f, "{} ", col_letter(col).unwrap())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_other() {
        assert_eq!(Player::Black.other(), Player::White);
        assert_eq!(Player::White.other(), Player::Black);
    }

    #[test]
    fn test_neighbors_unfiltered() {
        let n = Point::new(1, 1).neighbors();
        assert!(n.contains(&Point::new(0, 1)), "corner neighbors keep off-grid entries");
        assert!(n.contains(&Point::new(2, 1)));
        assert!(n.contains(&Point::new(1, 0)));
        assert!(n.contains(&Point::new(1, 2)));
    }

    #[test]
    fn test_board_size_conversions() {
        assert_eq!(BoardSize::from(9), BoardSize { rows: 9, cols: 9 });
        assert_eq!(BoardSize::from((5, 7)), BoardSize { rows: 5, cols: 7 });
    }

    #[test]
    fn test_col_letters_skip_i() {
        assert_eq!(col_letter(1), Some('A'));
        assert_eq!(col_letter(8), Some('H'));
        assert_eq!(col_letter(9), Some('J'));
        assert_eq!(col_letter(25), Some('Z'));
        assert_eq!(letter_col('H'), Some(8));
        assert_eq!(letter_col('J'), Some(9));
        assert_eq!(letter_col('a'), Some(1));
        assert_eq!(letter_col('I'), None);
        assert_eq!(letter_col('i'), None);
    }

    #[test]
    fn test_point_display_vertex() {
        assert_eq!(Point::new(4, 4).to_string(), "D4");
        assert_eq!(Point::new(1, 9).to_string(), "J1");
    }

    #[test]
    fn test_is_on_grid_bounds() {
        let board = Board::new(9, 9);
        assert!(board.is_on_grid(Point::new(1, 1)));
        assert!(board.is_on_grid(Point::new(9, 9)));
        assert!(!board.is_on_grid(Point::new(0, 5)));
        assert!(!board.is_on_grid(Point::new(5, 10)));
    }

    #[test]
    fn test_place_single_stone() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, Point::new(5, 5));
        assert_eq!(board.get(Point::new(5, 5)), Some(Player::Black));
        let string = board.get_go_string(Point::new(5, 5)).unwrap();
        assert_eq!(string.stones().len(), 1);
        assert_eq!(string.num_liberties(), 4);
    }

    #[test]
    fn test_corner_stone_liberties() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, Point::new(1, 1));
        assert_eq!(board.get_go_string(Point::new(1, 1)).unwrap().num_liberties(), 2);
    }

    #[test]
    fn test_adjacent_stones_merge() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, Point::new(5, 5));
        board.place_stone(Player::Black, Point::new(5, 6));
        let string = board.get_go_string(Point::new(5, 5)).unwrap();
        assert_eq!(string.stones().len(), 2);
        // Shared liberties count once.
        assert_eq!(string.num_liberties(), 6);
        assert_eq!(
            board.get_go_string(Point::new(5, 6)).unwrap(),
            string,
            "both stones resolve to the same string"
        );
    }

    #[test]
    fn test_bridge_merges_three_strings() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, Point::new(5, 4));
        board.place_stone(Player::Black, Point::new(5, 6));
        board.place_stone(Player::Black, Point::new(4, 5));
        board.place_stone(Player::Black, Point::new(5, 5));
        let string = board.get_go_string(Point::new(5, 5)).unwrap();
        assert_eq!(string.stones().len(), 4);
        assert!(string.liberties().contains(&Point::new(6, 5)));
        assert!(!string.liberties().contains(&Point::new(5, 5)));
    }

    #[test]
    fn test_enemy_placement_takes_liberty() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, Point::new(5, 5));
        board.place_stone(Player::White, Point::new(5, 6));
        assert_eq!(board.get_go_string(Point::new(5, 5)).unwrap().num_liberties(), 3);
        assert_eq!(board.get_go_string(Point::new(5, 6)).unwrap().num_liberties(), 3);
    }

    #[test]
    fn test_capture_single_stone() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::White, Point::new(5, 5));
        board.place_stone(Player::Black, Point::new(4, 5));
        board.place_stone(Player::Black, Point::new(6, 5));
        board.place_stone(Player::Black, Point::new(5, 4));
        assert_eq!(board.get_go_string(Point::new(5, 5)).unwrap().num_liberties(), 1);
        board.place_stone(Player::Black, Point::new(5, 6));
        assert_eq!(board.get(Point::new(5, 5)), None, "white stone is captured");
        // The vacated point is a liberty of every surrounding black string.
        for p in [Point::new(4, 5), Point::new(6, 5), Point::new(5, 4), Point::new(5, 6)] {
            assert!(
                board.get_go_string(p).unwrap().liberties().contains(&Point::new(5, 5)),
                "{p} should regain the vacated liberty"
            );
        }
    }

    #[test]
    fn test_capture_group() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::White, Point::new(5, 5));
        board.place_stone(Player::White, Point::new(5, 6));
        for p in [
            Point::new(4, 5),
            Point::new(4, 6),
            Point::new(6, 5),
            Point::new(6, 6),
            Point::new(5, 4),
        ] {
            board.place_stone(Player::Black, p);
        }
        board.place_stone(Player::Black, Point::new(5, 7));
        assert_eq!(board.get(Point::new(5, 5)), None);
        assert_eq!(board.get(Point::new(5, 6)), None);
    }

    #[test]
    fn test_double_capture() {
        // Two separate white stones sharing their final liberty fall
        // together when it is filled.
        let mut board = Board::new(9, 9);
        board.place_stone(Player::White, Point::new(5, 4));
        board.place_stone(Player::White, Point::new(5, 6));
        for p in [
            Point::new(4, 4),
            Point::new(6, 4),
            Point::new(5, 3),
            Point::new(4, 6),
            Point::new(6, 6),
            Point::new(5, 7),
        ] {
            board.place_stone(Player::Black, p);
        }
        board.place_stone(Player::Black, Point::new(5, 5));
        assert_eq!(board.get(Point::new(5, 4)), None);
        assert_eq!(board.get(Point::new(5, 6)), None);
        let placed = board.get_go_string(Point::new(5, 5)).unwrap();
        assert!(placed.liberties().contains(&Point::new(5, 4)));
        assert!(placed.liberties().contains(&Point::new(5, 6)));
    }

    #[test]
    fn test_merged_with_drops_covered_liberties() {
        let a = GoString::new(
            Player::Black,
            [Point::new(5, 5)],
            [Point::new(5, 6), Point::new(4, 5)],
        );
        let b = GoString::new(
            Player::Black,
            [Point::new(5, 6)],
            [Point::new(5, 5), Point::new(5, 7)],
        );
        let merged = a.merged_with(&b);
        assert_eq!(merged.stones().len(), 2);
        assert!(!merged.liberties().contains(&Point::new(5, 5)));
        assert!(!merged.liberties().contains(&Point::new(5, 6)));
        assert!(merged.liberties().contains(&Point::new(4, 5)));
        assert!(merged.liberties().contains(&Point::new(5, 7)));
        // Inputs are untouched.
        assert_eq!(a.stones().len(), 1);
        assert_eq!(b.stones().len(), 1);
    }

    #[test]
    #[should_panic(expected = "same color")]
    fn test_merged_with_rejects_mixed_colors() {
        let a = GoString::new(Player::Black, [Point::new(1, 1)], []);
        let b = GoString::new(Player::White, [Point::new(1, 2)], []);
        let _ = a.merged_with(&b);
    }

    #[test]
    #[should_panic(expected = "not a liberty")]
    fn test_remove_missing_liberty_panics() {
        let mut s = GoString::new(Player::Black, [Point::new(1, 1)], [Point::new(1, 2)]);
        s.remove_liberty(Point::new(9, 9));
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_place_on_occupied_panics() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, Point::new(3, 3));
        board.place_stone(Player::White, Point::new(3, 3));
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_place_off_grid_panics() {
        let mut board = Board::new(9, 9);
        board.place_stone(Player::Black, Point::new(10, 1));
    }

    #[test]
    fn test_get_off_grid_is_none() {
        let board = Board::new(5, 5);
        assert_eq!(board.get(Point::new(0, 3)), None);
        assert_eq!(board.get(Point::new(3, 6)), None);
        assert!(board.get_go_string(Point::new(6, 3)).is_none());
    }

    #[test]
    fn test_board_equality_is_occupancy() {
        let mut a = Board::new(5, 5);
        a.place_stone(Player::Black, Point::new(1, 1));
        a.place_stone(Player::Black, Point::new(1, 2));
        let mut b = Board::new(5, 5);
        b.place_stone(Player::Black, Point::new(1, 2));
        b.place_stone(Player::Black, Point::new(1, 1));
        assert_eq!(a, b, "move order does not matter");
        b.place_stone(Player::White, Point::new(3, 3));
        assert_ne!(a, b);
        assert_ne!(Board::new(5, 5), Board::new(5, 6));
    }

    #[test]
    fn test_display_marks_stones() {
        let mut board = Board::new(3, 3);
        board.place_stone(Player::Black, Point::new(1, 1));
        board.place_stone(Player::White, Point::new(3, 3));
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 3 . . O ");
        assert_eq!(lines[2], " 1 X . . ");
        assert_eq!(lines[3], "   A B C ");
    }
}
