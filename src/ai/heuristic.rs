use crate::game::{Board, Cell, Player};

/// Score returned by [`WindowHeuristic`] when the board is already won.
pub const HEURISTIC_WIN: f64 = 1000.0;

const FOUR_WEIGHT: f64 = 1000.0;
const THREE_WEIGHT: f64 = 10.0;
const TWO_WEIGHT: f64 = 2.0;
const CENTER_WEIGHT: f64 = 3.0;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// Classification of every 4-cell window from one player's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCounts {
    pub four: usize,
    pub three: usize,
    pub two: usize,
    /// Windows holding pieces of both players. Counted, never scored.
    pub blocked: usize,
}

impl WindowCounts {
    /// Tally the windows of `board` for `player`.
    pub fn tally(board: &Board, player: Player) -> Self {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut counts = WindowCounts::default();

        for window in board.windows() {
            let own = window.iter().filter(|&&c| c == own_cell).count();
            let opp = window.iter().filter(|&&c| c == opp_cell).count();
            let empty = window.iter().filter(|&&c| c == Cell::Empty).count();

            if own == 4 {
                counts.four += 1;
            } else if own == 3 && empty == 1 {
                counts.three += 1;
            } else if own == 2 && empty == 2 {
                counts.two += 1;
            } else if own > 0 && opp > 0 {
                counts.blocked += 1;
            }
        }

        counts
    }

    fn weighted(&self) -> f64 {
        self.four as f64 * FOUR_WEIGHT + self.three as f64 * THREE_WEIGHT + self.two as f64 * TWO_WEIGHT
    }
}

/// Default heuristic that scans all 4-cell windows and scores threats,
/// plus a bonus for pieces in the center column.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn center_control(board: &Board, player: Player) -> f64 {
        board.count_in_column(board.center_column(), player) as f64 * CENTER_WEIGHT
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        // Search never calls this on a won board, but keep the short-circuit.
        match board.check_winner() {
            Some(winner) if winner == player => return HEURISTIC_WIN,
            Some(_) => return -HEURISTIC_WIN,
            None => {}
        }

        let opponent = player.other();
        WindowCounts::tally(board, player).weighted() - WindowCounts::tally(board, opponent).weighted()
            + Self::center_control(board, player)
            - Self::center_control(board, opponent)
    }
}
