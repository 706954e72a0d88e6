//! Board primitives: coordinates, cell values, players, and the text format

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board
pub const BOARD_SIZE: usize = 3;

/// The value held by one cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    X,
    O,
}

impl CellValue {
    pub fn to_char(self) -> char {
        match self {
            CellValue::Empty => '.',
            CellValue::X => 'X',
            CellValue::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<CellValue> {
        match c {
            '.' | '-' => Some(CellValue::Empty),
            'X' | 'x' => Some(CellValue::X),
            'O' | 'o' | '0' => Some(CellValue::O),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(alias = "x")]
    X,
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player places
    pub fn mark(self) -> CellValue {
        match self {
            Player::X => CellValue::X,
            Player::O => CellValue::O,
        }
    }

    pub fn from_x_has_turn(x_has_turn: bool) -> Player {
        if x_has_turn { Player::X } else { Player::O }
    }

    pub fn is_x(self) -> bool {
        self == Player::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_player(s.trim(), s)
    }
}

/// A `(row, column)` coordinate on the board.
///
/// Both components are always in `0..=2`; [`Cell::new`] is the only way to
/// build one from arbitrary numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cell {
    row: usize,
    column: usize,
}

impl Cell {
    /// All nine cells in row-major order
    pub const ALL: [Cell; 9] = [
        Cell::at(0, 0),
        Cell::at(0, 1),
        Cell::at(0, 2),
        Cell::at(1, 0),
        Cell::at(1, 1),
        Cell::at(1, 2),
        Cell::at(2, 0),
        Cell::at(2, 1),
        Cell::at(2, 2),
    ];

    /// Create a cell, failing if either coordinate is outside `0..=2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tttree::tictactoe::Cell;
    ///
    /// let center = Cell::new(1, 1).unwrap();
    /// assert_eq!(center.index(), 4);
    /// assert!(Cell::new(3, 0).is_err());
    /// ```
    pub fn new(row: usize, column: usize) -> Result<Cell, crate::Error> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(crate::Error::OutOfRangeCoordinate { row, column });
        }
        Ok(Cell { row, column })
    }

    /// Unchecked constructor for the constant tables in this module tree
    pub(crate) const fn at(row: usize, column: usize) -> Cell {
        Cell { row, column }
    }

    /// Cell at a row-major index (0-8)
    pub fn from_index(index: usize) -> Result<Cell, crate::Error> {
        Cell::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn column(self) -> usize {
        self.column
    }

    /// Row-major index (0-8)
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.column
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
}

pub(crate) fn count_pieces(cells: &[CellValue; 9]) -> PieceCount {
    let mut count = PieceCount { x: 0, o: 0 };
    for cell in cells {
        match cell {
            CellValue::X => count.x += 1,
            CellValue::O => count.o += 1,
            CellValue::Empty => {}
        }
    }
    count
}

fn parse_player(player_str: &str, context: &str) -> Result<Player, crate::Error> {
    match player_str {
        "X" | "x" => Ok(Player::X),
        "O" | "o" => Ok(Player::O),
        _ => Err(crate::Error::InvalidPlayerString {
            player: player_str.to_string(),
            context: context.to_string(),
        }),
    }
}

fn parse_cells(chars: &[char], context: &str) -> Result<[CellValue; 9], crate::Error> {
    if chars.len() < 9 {
        return Err(crate::Error::InvalidBoardLength {
            expected: 9,
            got: chars.len(),
            context: context.to_string(),
        });
    }

    let mut cells = [CellValue::Empty; 9];
    for (i, &c) in chars.iter().take(9).enumerate() {
        cells[i] = CellValue::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
            character: c,
            position: i,
            context: context.to_string(),
        })?;
    }

    Ok(cells)
}

fn turn_from_counts(count: &PieceCount) -> Result<Player, crate::Error> {
    if count.x == count.o {
        Ok(Player::X)
    } else if count.x == count.o + 1 {
        Ok(Player::O)
    } else {
        Err(crate::Error::InvalidPieceCounts {
            x_count: count.x,
            o_count: count.o,
        })
    }
}

/// An explicit turn is trusted as long as neither side is more than one
/// piece ahead, so positions that cannot arise from either first player are
/// still expressible.
fn ensure_counts_plausible(count: &PieceCount) -> Result<(), crate::Error> {
    if count.x.abs_diff(count.o) <= 1 {
        Ok(())
    } else {
        Err(crate::Error::InvalidPieceCounts {
            x_count: count.x,
            o_count: count.o,
        })
    }
}

/// Parse the board text format.
///
/// Nine row-major cell characters (whitespace and `|`/`/` separators are
/// ignored), optionally followed by `_X` or `_O` naming the side to move.
/// Without a suffix the side to move is inferred from the piece counts with
/// X moving first. With a suffix the named side moves, provided the counts
/// differ by at most one.
pub(crate) fn parse_board(s: &str) -> Result<([CellValue; 9], Player), crate::Error> {
    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
        .collect();

    let (board_part, specified_turn) = match cleaned.rsplit_once('_') {
        Some((board, suffix)) if board.chars().count() >= 9 => {
            (board, Some(parse_player(suffix, s)?))
        }
        _ => (cleaned.as_str(), None),
    };

    let chars: Vec<char> = board_part.chars().collect();
    if chars.len() > 9 {
        return Err(crate::Error::InvalidBoardLength {
            expected: 9,
            got: chars.len(),
            context: s.to_string(),
        });
    }
    let cells = parse_cells(&chars, s)?;
    let count = count_pieces(&cells);

    let to_move = match specified_turn {
        Some(turn) => {
            ensure_counts_plausible(&count)?;
            turn
        }
        None => turn_from_counts(&count)?,
    };

    Ok((cells, to_move))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_rejects_out_of_range_coordinates() {
        assert!(Cell::new(0, 0).is_ok());
        assert!(Cell::new(2, 2).is_ok());

        let err = Cell::new(3, 1).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::OutOfRangeCoordinate { row: 3, column: 1 }
        ));
        assert!(Cell::new(0, 7).is_err());
    }

    #[test]
    fn cells_are_row_major() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_index(i).unwrap(), *cell);
        }
        assert!(Cell::from_index(9).is_err());
    }

    #[test]
    fn cell_equality_is_by_component() {
        assert_eq!(Cell::new(1, 2).unwrap(), Cell::new(1, 2).unwrap());
        assert_ne!(Cell::new(1, 2).unwrap(), Cell::new(2, 1).unwrap());
    }

    #[test]
    fn player_parses_case_insensitively() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!(" O ".parse::<Player>().unwrap(), Player::O);
        assert!("Z".parse::<Player>().is_err());
    }

    #[test]
    fn parse_board_infers_turn() {
        let (cells, to_move) = parse_board("XOX......").unwrap();
        assert_eq!(cells[0], CellValue::X);
        assert_eq!(cells[1], CellValue::O);
        assert_eq!(to_move, Player::O);

        let (_, to_move) = parse_board("XO. / ... / ...").unwrap();
        assert_eq!(to_move, Player::X);
    }

    #[test]
    fn parse_board_honors_turn_suffix() {
        let (_, to_move) = parse_board("........._O").unwrap();
        assert_eq!(to_move, Player::O);

        let (_, to_move) = parse_board("O........_X").unwrap();
        assert_eq!(to_move, Player::X);
    }

    #[test]
    fn turn_suffix_overrides_inferred_turn() {
        // X X .
        // O . .
        // . . .   X to move although X is already ahead
        let (cells, to_move) = parse_board("XX.O....._X").unwrap();
        assert_eq!(to_move, Player::X);
        assert_eq!(count_pieces(&cells), PieceCount { x: 2, o: 1 });
    }

    #[test]
    fn turn_suffix_still_needs_plausible_counts() {
        assert!(matches!(
            parse_board("XXX......_O"),
            Err(crate::Error::InvalidPieceCounts {
                x_count: 3,
                o_count: 0
            })
        ));
    }

    #[test]
    fn wrong_length_reports_board_length() {
        for (input, got) in [("XO", 2), ("..........", 10), ("XO.XO.XO.X_O", 10)] {
            match parse_board(input) {
                Err(crate::Error::InvalidBoardLength { expected, got: actual, .. }) => {
                    assert_eq!(expected, 9);
                    assert_eq!(actual, got, "{input}");
                }
                other => panic!("{input}: expected InvalidBoardLength, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_board_rejects_bad_input() {
        assert!(parse_board("XO").is_err());
        assert!(parse_board("XOZ......").is_err());
        assert!(parse_board("XXXX.....").is_err());
        assert!(parse_board("..........").is_err());
    }
}
