use crate::game::{GameState, Player};

use super::heuristic::{Heuristic, WindowHeuristic};
use super::search::{children, SearchAgent, SearchContext, SearchMetrics, Strategy};

/// Minimax with alpha-beta pruning. Returns the same move and score as
/// [`Minimax`](super::Minimax) while visiting fewer nodes.
pub struct AlphaBeta {
    heuristic: Box<dyn Heuristic>,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        AlphaBeta { heuristic }
    }

    fn alpha_beta(
        ctx: &mut SearchContext,
        state: &GameState,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> (f64, Option<usize>) {
        ctx.visit(depth);

        if SearchContext::is_leaf(state, depth) {
            return (ctx.leaf_value(state), None);
        }

        let mut best_value = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        let mut best_move = None;
        let mut moves = children(state).peekable();

        while let Some((col, child)) = moves.next() {
            let (value, _) = Self::alpha_beta(ctx, &child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(col);
                }
                alpha = alpha.max(value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(col);
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                // a cutoff on the last sibling skips nothing
                if moves.peek().is_some() {
                    ctx.prunes += 1;
                }
                break;
            }
        }

        (best_value, best_move)
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAgent for AlphaBeta {
    fn strategy(&self) -> Strategy {
        Strategy::AlphaBeta
    }

    fn best_move(&self, state: &GameState, player: Player, depth: usize) -> (Option<usize>, SearchMetrics) {
        let mut ctx = SearchContext::new(self.heuristic.as_ref(), player, depth);
        let maximizing = ctx.root_maximizing();
        let (value, best_move) =
            Self::alpha_beta(&mut ctx, state, depth, f64::NEG_INFINITY, f64::INFINITY, maximizing);
        (best_move, ctx.finish(Strategy::AlphaBeta, value, best_move))
    }
}
