//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A mark occupying a cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' | '_' | '-' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' | '0' => Some(Mark::O),
            _ => None,
        }
    }

    /// The other player's mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next().and_then(Mark::from_char), chars.next()) {
            (Some(mark), None) if mark != Mark::Empty => Ok(mark),
            _ => Err(crate::Error::ParseMark {
                input: s.to_string(),
            }),
        }
    }
}

/// A placement on the board, addressed by zero-based row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Parse `row,col` or a single row-major cell index for a board of `size`.
    pub fn parse(input: &str, size: usize) -> Result<Self, crate::Error> {
        let parse_err = || crate::Error::ParseMove {
            input: input.to_string(),
        };
        let trimmed = input.trim();

        let mv = if let Some((row, col)) = trimmed.split_once(',') {
            let row = row.trim().parse().map_err(|_| parse_err())?;
            let col = col.trim().parse().map_err(|_| parse_err())?;
            Move::new(row, col)
        } else {
            let index: usize = trimmed.parse().map_err(|_| parse_err())?;
            if size == 0 {
                return Err(parse_err());
            }
            Move::new(index / size, index % size)
        };

        if mv.row >= size || mv.col >= size {
            return Err(crate::Error::InvalidPosition {
                row: mv.row,
                col: mv.col,
                size,
            });
        }
        Ok(mv)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N×N grid of marks stored in row-major order.
///
/// Boards are plain values: placing a mark with [`BoardState::with_mark`]
/// yields a new board and leaves the original untouched, so a board captured
/// into a search node is never shared with anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    size: usize,
    cells: Vec<Mark>,
}

impl BoardState {
    /// Standard tic-tac-toe board size
    pub const DEFAULT_SIZE: usize = 3;

    /// Create an empty 3x3 board
    pub fn new() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            cells: vec![Mark::Empty; Self::DEFAULT_SIZE * Self::DEFAULT_SIZE],
        }
    }

    /// Create an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyBoard`] when `size` is zero.
    pub fn empty(size: usize) -> Result<Self, crate::Error> {
        if size == 0 {
            return Err(crate::Error::EmptyBoard);
        }
        Ok(Self {
            size,
            cells: vec![Mark::Empty; size * size],
        })
    }

    /// Build a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows or any row's length differs from
    /// the number of rows.
    pub fn from_rows<R: AsRef<[Mark]>>(rows: &[R]) -> Result<Self, crate::Error> {
        let size = rows.len();
        if size == 0 {
            return Err(crate::Error::EmptyBoard);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, marks) in rows.iter().enumerate() {
            let marks = marks.as_ref();
            if marks.len() != size {
                return Err(crate::Error::NonSquareBoard {
                    row,
                    got: marks.len(),
                    expected: size,
                });
            }
            cells.extend_from_slice(marks);
        }

        Ok(Self { size, cells })
    }

    /// Parse a board whose size is inferred from the text.
    ///
    /// Rows may be separated by `/` or newlines; otherwise the text must hold
    /// a perfect square number of cells. Whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, crate::Error> {
        let rows = Self::split_rows(text);
        if rows.len() > 1 {
            let parsed = rows
                .iter()
                .map(|row| Self::parse_cells(row, text))
                .collect::<Result<Vec<_>, _>>()?;
            return Self::from_rows(&parsed);
        }

        let cells = Self::parse_cells(rows.first().map(String::as_str).unwrap_or(""), text)?;
        let size = (cells.len() as f64).sqrt().round() as usize;
        if size == 0 {
            return Err(crate::Error::EmptyBoard);
        }
        if size * size != cells.len() {
            return Err(crate::Error::NonSquareBoard {
                row: 0,
                got: cells.len(),
                expected: size * size,
            });
        }
        Ok(Self { size, cells })
    }

    /// Parse a board of a known size from text, row separators optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the text holds more or fewer cells than a
    /// `size`×`size` grid, or contains an unknown character.
    pub fn parse_sized(text: &str, size: usize) -> Result<Self, crate::Error> {
        if size == 0 {
            return Err(crate::Error::EmptyBoard);
        }
        let flat: String = Self::split_rows(text).concat();
        let cells = Self::parse_cells(&flat, text)?;
        let expected = size * size;

        if cells.len() > expected {
            return Err(crate::Error::TooManyCells {
                size,
                expected,
                got: cells.len(),
            });
        }
        if cells.len() < expected {
            return Err(crate::Error::InvalidBoardLength {
                expected,
                got: cells.len(),
                context: text.to_string(),
            });
        }
        Ok(Self { size, cells })
    }

    fn split_rows(text: &str) -> Vec<String> {
        text.split(['/', '\n'])
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|row| !row.is_empty())
            .collect()
    }

    fn parse_cells(chars: &str, context: &str) -> Result<Vec<Mark>, crate::Error> {
        chars
            .chars()
            .enumerate()
            .map(|(position, c)| {
                Mark::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position,
                    context: context.to_string(),
                })
            })
            .collect()
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    pub fn contains(&self, mv: Move) -> bool {
        mv.row < self.size && mv.col < self.size
    }

    fn index(&self, mv: Move) -> usize {
        mv.row * self.size + mv.col
    }

    /// Mark at `mv`, or `None` when the position is off the board
    pub fn get(&self, mv: Move) -> Option<Mark> {
        self.contains(mv).then(|| self.cells[self.index(mv)])
    }

    pub fn is_empty_cell(&self, mv: Move) -> bool {
        self.get(mv) == Some(Mark::Empty)
    }

    /// Overwrite a cell in place.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for an off-board move.
    pub fn set(&mut self, mv: Move, mark: Mark) -> Result<(), crate::Error> {
        if !self.contains(mv) {
            return Err(crate::Error::InvalidPosition {
                row: mv.row,
                col: mv.col,
                size: self.size,
            });
        }
        let idx = self.index(mv);
        self.cells[idx] = mark;
        Ok(())
    }

    /// Copy of this board with `mark` placed on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the move is off the board or the cell is taken.
    pub fn with_mark(&self, mv: Move, mark: Mark) -> Result<BoardState, crate::Error> {
        match self.get(mv) {
            None => Err(crate::Error::InvalidPosition {
                row: mv.row,
                col: mv.col,
                size: self.size,
            }),
            Some(Mark::Empty) => {
                let mut next = self.clone();
                let idx = next.index(mv);
                next.cells[idx] = mark;
                Ok(next)
            }
            Some(_) => Err(crate::Error::CellOccupied {
                row: mv.row,
                col: mv.col,
            }),
        }
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(idx, _)| Move::new(idx / self.size, idx % self.size))
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == mark).count()
    }

    /// True iff a full row, column or main diagonal holds only `mark`.
    pub fn check_win(&self, mark: Mark) -> bool {
        LineAnalyzer::has_won(self, mark)
    }

    /// True iff no cell is empty.
    pub fn check_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Mark::Empty)
    }

    /// Mark of the first completed line, if any
    pub fn winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|mark| self.check_win(*mark))
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.check_full()
    }

    /// Row-major text encoding with no separators, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|mark| mark.to_char()).collect()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for BoardState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardState::parse(s)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for mark in row {
                write!(f, "{}", mark.to_char())?;
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
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.size(), 3);
        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.check_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = BoardState::new();
        let next = board.with_mark(Move::new(1, 1), Mark::X).unwrap();

        assert_eq!(board.get(Move::new(1, 1)), Some(Mark::Empty));
        assert_eq!(next.get(Move::new(1, 1)), Some(Mark::X));
        assert_eq!(next.count(Mark::X), 1);
    }

    #[test]
    fn test_with_mark_rejects_occupied_and_out_of_bounds() {
        let board = BoardState::parse("X../.../...").unwrap();

        let occupied = board.with_mark(Move::new(0, 0), Mark::O).unwrap_err();
        assert!(matches!(occupied, crate::Error::CellOccupied { row: 0, col: 0 }));

        let outside = board.with_mark(Move::new(3, 0), Mark::O).unwrap_err();
        assert!(matches!(outside, crate::Error::InvalidPosition { size: 3, .. }));
    }

    #[test]
    fn test_empty_cells_are_row_major() {
        let board = BoardState::parse("X.O/.X./O..").unwrap();
        assert_eq!(
            board.empty_cells(),
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_parse_flat_and_rows_agree() {
        let flat = BoardState::parse("XO.......").unwrap();
        let rows = BoardState::parse("XO.\n...\n...").unwrap();
        assert_eq!(flat, rows);
        assert_eq!(flat.encode(), "XO.......");
    }

    #[test]
    fn test_parse_infers_size() {
        let board = BoardState::parse("X.../.O../..../....").unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.get(Move::new(1, 1)), Some(Mark::O));
    }

    #[test]
    fn test_parse_rejects_non_square() {
        let result = BoardState::parse("XO./../...");
        assert!(matches!(
            result,
            Err(crate::Error::NonSquareBoard { row: 1, got: 2, expected: 3 })
        ));

        let result = BoardState::parse("XO.....");
        assert!(matches!(result, Err(crate::Error::NonSquareBoard { .. })));
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let result = BoardState::parse("XOZ......");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidCellCharacter { character: 'Z', position: 2, .. })
        ));
    }

    #[test]
    fn test_parse_sized_rejects_too_many_cells() {
        let result = BoardState::parse_sized("XOXOXOXOXO", 3);
        assert!(matches!(
            result,
            Err(crate::Error::TooManyCells { size: 3, expected: 9, got: 10 })
        ));

        let result = BoardState::parse_sized("XO", 3);
        assert!(matches!(result, Err(crate::Error::InvalidBoardLength { .. })));
    }

    #[test]
    fn test_from_rows_rejects_empty_grid() {
        let rows: Vec<Vec<Mark>> = Vec::new();
        assert!(matches!(
            BoardState::from_rows(&rows),
            Err(crate::Error::EmptyBoard)
        ));
    }

    #[test]
    fn test_display() {
        let board = BoardState::parse("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert_eq!(display, "XOX\n.O.\nX..\n");
    }

    #[test]
    fn test_move_parse() {
        assert_eq!(Move::parse("1,2", 3).unwrap(), Move::new(1, 2));
        assert_eq!(Move::parse(" 2 , 0 ", 3).unwrap(), Move::new(2, 0));
        assert_eq!(Move::parse("5", 3).unwrap(), Move::new(1, 2));
        assert!(matches!(
            Move::parse("3,0", 3),
            Err(crate::Error::InvalidPosition { .. })
        ));
        assert!(matches!(Move::parse("a,b", 3), Err(crate::Error::ParseMove { .. })));
    }

    #[test]
    fn test_mark_from_str() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!(" O ".parse::<Mark>().unwrap(), Mark::O);
        assert!(".".parse::<Mark>().is_err());
        assert!("XO".parse::<Mark>().is_err());
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
