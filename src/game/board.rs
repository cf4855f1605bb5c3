use std::fmt;
use std::str::FromStr;

use crate::error::BoardParseError;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Line directions as (row step, col step): horizontal, vertical, falling and
/// rising diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'X',
            Cell::Yellow => 'O',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
}

/// A rows x cols grid. Row 0 is the top; pieces settle in the lowest empty row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 6x7 board
    pub fn new() -> Self {
        Self::with_size(ROWS, COLS)
    }

    /// Create an empty board with custom dimensions.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn center_column(&self) -> usize {
        self.cols / 2
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) is off the board");
        self.cells[row * self.cols + col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .ok_or(MoveError::ColumnFull)?;
        self.cells[row * self.cols + col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Number of pieces `player` has in column `col`.
    pub fn count_in_column(&self, col: usize, player: Player) -> usize {
        let cell = player.to_cell();
        (0..self.rows).filter(|&row| self.get(row, col) == cell).count()
    }

    /// Every line of `WIN_LENGTH` cells on the board, in all four orientations.
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WIN_LENGTH]> + '_ {
        DIRECTIONS.iter().flat_map(move |&(dr, dc)| {
            (0..self.rows).flat_map(move |row| {
                (0..self.cols).filter_map(move |col| self.window_at(row, col, dr, dc))
            })
        })
    }

    fn window_at(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<[Cell; WIN_LENGTH]> {
        let span = WIN_LENGTH as isize - 1;
        let end_row = row as isize + dr * span;
        let end_col = col as isize + dc * span;
        if end_row < 0 || end_row >= self.rows as isize || end_col < 0 || end_col >= self.cols as isize {
            return None;
        }

        let mut window = [Cell::Empty; WIN_LENGTH];
        for (i, slot) in window.iter_mut().enumerate() {
            let r = row as isize + dr * i as isize;
            let c = col as isize + dc * i as isize;
            *slot = self.get(r as usize, c as usize);
        }
        Some(window)
    }

    /// The player with four aligned pieces, if any.
    pub fn check_winner(&self) -> Option<Player> {
        self.windows()
            .find(|window| window[0] != Cell::Empty && window.iter().all(|&c| c == window[0]))
            .and_then(|window| window[0].player())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(row, col).symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse rows of `.`/`X`/`O`, top row first, separated by newlines or `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<Cell>> = s
            .split(['\n', '/'])
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '.' => Ok(Cell::Empty),
                        'X' | 'x' => Ok(Cell::Red),
                        'O' | 'o' => Ok(Cell::Yellow),
                        other => Err(BoardParseError::UnknownSymbol(other)),
                    })
                    .collect()
            })
            .collect::<Result<_, _>>()?;

        let cols = rows.first().map(Vec::len).ok_or(BoardParseError::Empty)?;
        if let Some(row) = rows.iter().position(|r| r.len() != cols) {
            return Err(BoardParseError::RaggedRow {
                row,
                expected: cols,
                found: rows[row].len(),
            });
        }

        let board = Board {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        };

        for col in 0..board.cols {
            for row in 0..board.rows - 1 {
                if board.get(row, col) != Cell::Empty && board.get(row + 1, col) == Cell::Empty {
                    return Err(BoardParseError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!((board.rows(), board.cols()), (ROWS, COLS));
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Cell::Yellow), Err(MoveError::ColumnFull));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Cell::Red), Err(MoveError::InvalidColumn));
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::with_size(4, 4);
        for col in 0..4 {
            for _ in 0..4 {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_window_count_on_standard_board() {
        // 24 horizontal, 21 vertical, 12 per diagonal direction
        assert_eq!(Board::new().windows().count(), 69);
    }

    #[test]
    fn test_no_windows_on_tiny_board() {
        assert_eq!(Board::with_size(3, 3).windows().count(), 0);
        assert_eq!(Board::with_size(3, 3).check_winner(), None);
    }

    #[test]
    fn test_horizontal_win() {
        let board: Board = "....... / ....... / ....... / ....... / ....... / .OOOO..".parse().unwrap();
        assert_eq!(board.check_winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert_eq!(board.check_winner(), Some(Player::Yellow));
    }

    #[test]
    fn test_rising_diagonal_win() {
        let board: Board = "
            .......
            .......
            ...X...
            ..XO...
            .XOO...
            XOOO...
        "
        .parse()
        .unwrap();
        assert_eq!(board.check_winner(), Some(Player::Red));
    }

    #[test]
    fn test_falling_diagonal_win() {
        let board: Board = "
            .......
            .......
            ...X...
            ...OX..
            ...OOX.
            ...OOOX
        "
        .parse()
        .unwrap();
        assert_eq!(board.check_winner(), Some(Player::Red));
    }

    #[test]
    fn test_no_win_with_three_and_gap() {
        let board: Board = "....... / ....... / ....... / ....... / ....... / XXX.X..".parse().unwrap();
        assert_eq!(board.check_winner(), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        let text = board.to_string();
        assert!(text.ends_with("X . . ."));
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_floating_piece() {
        let err = "X... / .... / .... / ....".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardParseError::FloatingPiece { row: 0, col: 0 });
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = ".... / ... ".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            BoardParseError::RaggedRow {
                row: 1,
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        assert_eq!("..Z.".parse::<Board>().unwrap_err(), BoardParseError::UnknownSymbol('Z'));
        assert_eq!("  ".parse::<Board>().unwrap_err(), BoardParseError::Empty);
    }
}
