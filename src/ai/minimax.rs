use crate::game::{GameState, Player};

use super::heuristic::{Heuristic, WindowHeuristic};
use super::search::{children, SearchAgent, SearchContext, SearchMetrics, Strategy};

/// Plain depth-limited minimax.
pub struct Minimax {
    heuristic: Box<dyn Heuristic>,
}

impl Minimax {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        Minimax { heuristic }
    }

    fn minimax(ctx: &mut SearchContext, state: &GameState, depth: usize, maximizing: bool) -> (f64, Option<usize>) {
        ctx.visit(depth);

        if SearchContext::is_leaf(state, depth) {
            return (ctx.leaf_value(state), None);
        }

        let mut best_value = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        let mut best_move = None;

        for (col, child) in children(state) {
            let (value, _) = Self::minimax(ctx, &child, depth - 1, !maximizing);
            let improves = if maximizing { value > best_value } else { value < best_value };
            if improves {
                best_value = value;
                best_move = Some(col);
            }
        }

        (best_value, best_move)
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAgent for Minimax {
    fn strategy(&self) -> Strategy {
        Strategy::Minimax
    }

    fn best_move(&self, state: &GameState, player: Player, depth: usize) -> (Option<usize>, SearchMetrics) {
        let mut ctx = SearchContext::new(self.heuristic.as_ref(), player, depth);
        let maximizing = ctx.root_maximizing();
        let (value, best_move) = Self::minimax(&mut ctx, state, depth, maximizing);
        (best_move, ctx.finish(Strategy::Minimax, value, best_move))
    }
}
