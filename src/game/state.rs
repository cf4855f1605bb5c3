use super::{Board, MoveError, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Board, side to move and move history for one game.
///
/// `apply_move`/`apply_move_as` are the only mutators of the board. Search
/// explores hypothetical continuations on clones; there is no undo.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    last_move: Option<(usize, usize)>,
    history: Vec<usize>,
}

impl GameState {
    /// Create initial game state on a 6x7 board
    pub fn initial() -> Self {
        Self::from_board(Board::new(), Player::FIRST)
    }

    /// Create initial game state on a custom-sized board.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self::from_board(Board::with_size(rows, cols), Player::FIRST)
    }

    /// Wrap an existing position. The move history starts empty.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        GameState {
            board,
            current_player: to_move,
            last_move: None,
            history: Vec::new(),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// (row, col) of the most recently placed piece.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Columns played so far, oldest first.
    pub fn move_history(&self) -> &[usize] {
        &self.history
    }

    /// Columns whose top cell is empty, ascending.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    pub fn is_valid_move(&self, col: usize) -> bool {
        !self.board.is_column_full(col)
    }

    /// Drop a piece for the player to move.
    pub fn apply_move(&mut self, col: usize) -> Result<(), MoveError> {
        self.apply_move_as(col, self.current_player)
    }

    /// Drop a piece of `player`'s colour into `col`, then pass the turn.
    ///
    /// On error the state is left untouched.
    pub fn apply_move_as(&mut self, col: usize, player: Player) -> Result<(), MoveError> {
        let row = self.board.drop_piece(col, player.to_cell())?;
        self.last_move = Some((row, col));
        self.history.push(col);
        self.current_player = self.current_player.other();
        Ok(())
    }

    /// Apply a move to a copy, leaving `self` untouched.
    pub fn play(&self, col: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move(col)?;
        Ok(next)
    }

    pub fn check_winner(&self) -> Option<Player> {
        self.board.check_winner()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.check_winner().is_some() || self.board.is_full()
    }

    /// Get game outcome if game is over. A win takes priority over a full board.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.check_winner() {
            Some(GameOutcome::Winner(winner))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS, ROWS};

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.valid_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(state.last_move(), None);
        assert!(state.move_history().is_empty());
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::initial();
        state.apply_move(3).unwrap();

        assert_eq!(state.current_player(), Player::Yellow);
        assert_eq!(state.board().get(5, 3), Cell::Red);
        assert_eq!(state.last_move(), Some((5, 3)));
        assert_eq!(state.move_history(), &[3]);
    }

    #[test]
    fn test_apply_move_as_explicit_player_still_flips_turn() {
        let mut state = GameState::initial();
        state.apply_move_as(2, Player::Yellow).unwrap();

        assert_eq!(state.board().get(5, 2), Cell::Yellow);
        assert_eq!(state.current_player(), Player::Yellow);
    }

    #[test]
    fn test_failed_move_leaves_state_unchanged() {
        let mut state = GameState::with_size(4, 4);
        for _ in 0..4 {
            state.apply_move(0).unwrap();
        }
        let before = state.clone();

        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull));
        assert_eq!(state.apply_move(4), Err(MoveError::InvalidColumn));
        assert_eq!(state, before);
    }

    #[test]
    fn test_is_valid_move_bounds() {
        let state = GameState::initial();
        assert!(state.is_valid_move(0));
        assert!(state.is_valid_move(COLS - 1));
        assert!(!state.is_valid_move(COLS));
        assert!(!state.is_valid_move(usize::MAX));
    }

    #[test]
    fn test_alternation_invariant() {
        let mut state = GameState::initial();
        let moves = [3, 3, 2, 4, 4, 0, 6, 1, 1, 5];
        for &col in &moves {
            let before = state.current_player();
            state.apply_move(col).unwrap();
            assert_ne!(state.current_player(), before);
        }
        assert_eq!(state.move_history(), &moves);
    }

    #[test]
    fn test_gravity_fills_column_bottom_up() {
        let mut state = GameState::initial();
        for n in 0..ROWS {
            state.apply_move(5).unwrap();
            // pieces occupy rows ROWS-1 ..= ROWS-1-n with no gaps
            for row in 0..ROWS {
                let filled = state.board().get(row, 5) != Cell::Empty;
                assert_eq!(filled, row >= ROWS - 1 - n, "row {row} after {} drops", n + 1);
            }
        }
        assert!(!state.is_valid_move(5));
        assert!(!state.valid_moves().contains(&5));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = GameState::initial();
        original.apply_move(3).unwrap();
        let mut copy = original.clone();

        copy.apply_move(4).unwrap();
        assert_eq!(original.board().get(5, 4), Cell::Empty);
        assert_eq!(original.move_history(), &[3]);

        original.apply_move(0).unwrap();
        assert_eq!(copy.board().get(5, 0), Cell::Empty);
        assert_eq!(copy.move_history(), &[3, 4]);
    }

    #[test]
    fn test_play_returns_successor() {
        let state = GameState::initial();
        let next = state.play(6).unwrap();
        assert_eq!(next.board().get(5, 6), Cell::Red);
        assert_eq!(state.board().get(5, 6), Cell::Empty);
        assert_eq!(state.play(9), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.check_winner(), Some(Player::Red));
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_draw_on_full_board_without_line() {
        // Columns alternate in pairs so no four ever line up
        let board: Board = "
            XXOOXXO
            OOXXOOX
            XXOOXXO
            OOXXOOX
            XXOOXXO
            OOXXOOX
        "
        .parse()
        .unwrap();
        let state = GameState::from_board(board, Player::Red);

        assert_eq!(state.check_winner(), None);
        assert!(state.valid_moves().is_empty());
        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_win_takes_priority_over_full_board() {
        let board: Board = "XOXO / XOXO / XOOX / XOXO".parse().unwrap();
        let state = GameState::from_board(board, Player::Red);
        assert!(state.valid_moves().is_empty());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }
}
