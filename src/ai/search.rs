use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::game::{GameState, Player};

use super::alphabeta::AlphaBeta;
use super::heuristic::Heuristic;
use super::minimax::Minimax;

/// Score of a terminal position won by the searching player.
pub const WIN_SCORE: f64 = 1_000_000.0;
pub const DRAW_SCORE: f64 = 0.0;

/// Which tree search picks the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Minimax,
    #[default]
    #[value(name = "alphabeta")]
    AlphaBeta,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "Minimax",
            Strategy::AlphaBeta => "Alpha-Beta",
        }
    }

    pub fn toggled(self) -> Strategy {
        match self {
            Strategy::Minimax => Strategy::AlphaBeta,
            Strategy::AlphaBeta => Strategy::Minimax,
        }
    }

    /// Build the agent for this strategy with the default heuristic.
    pub fn agent(self) -> Box<dyn SearchAgent> {
        match self {
            Strategy::Minimax => Box::new(Minimax::new()),
            Strategy::AlphaBeta => Box::new(AlphaBeta::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Search parameters chosen per game or per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: usize,
    pub strategy: Strategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 5,
            strategy: Strategy::AlphaBeta,
        }
    }
}

/// Statistics for one top-level search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMetrics {
    pub strategy: Strategy,
    pub nodes_explored: u64,
    pub max_depth_reached: usize,
    pub elapsed: Duration,
    /// From the searching player's perspective.
    pub best_score: f64,
    pub best_move: Option<usize>,
    /// Number of cutoffs; `None` for strategies that never prune.
    pub prune_count: Option<u64>,
}

impl SearchMetrics {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Picks the best column for `player` by searching `depth` plies ahead.
pub trait SearchAgent: Send + Sync {
    fn strategy(&self) -> Strategy;

    /// Returns `None` when the state is terminal or `depth` is zero.
    fn best_move(&self, state: &GameState, player: Player, depth: usize) -> (Option<usize>, SearchMetrics);
}

/// Run the search described by `config`.
pub fn search(state: &GameState, player: Player, config: &SearchConfig) -> (Option<usize>, SearchMetrics) {
    config.strategy.agent().best_move(state, player, config.depth)
}

/// Valid moves sorted by distance from the center column, ties by column.
pub fn ordered_moves(state: &GameState) -> Vec<usize> {
    let center = state.board().center_column();
    let mut moves = state.valid_moves();
    moves.sort_by_key(|&col| col.abs_diff(center));
    moves
}

/// Successor states in search order.
pub(crate) fn children(state: &GameState) -> impl Iterator<Item = (usize, GameState)> + '_ {
    ordered_moves(state)
        .into_iter()
        .filter_map(move |col| state.play(col).ok().map(|child| (col, child)))
}

/// Score of a terminal position for `player`.
pub fn terminal_score(state: &GameState, player: Player) -> f64 {
    match state.check_winner() {
        Some(winner) if winner == player => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => DRAW_SCORE,
    }
}

/// Bookkeeping shared by one top-level search call.
///
/// Values inside the tree are kept from the first player's side: the first
/// player maximizes and the second minimizes, whoever is searching.
pub(crate) struct SearchContext<'a> {
    heuristic: &'a dyn Heuristic,
    player: Player,
    budget: usize,
    started: Instant,
    nodes: u64,
    max_depth_reached: usize,
    pub prunes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(heuristic: &'a dyn Heuristic, player: Player, budget: usize) -> Self {
        SearchContext {
            heuristic,
            player,
            budget,
            started: Instant::now(),
            nodes: 0,
            max_depth_reached: 0,
            prunes: 0,
        }
    }

    /// Whether the root ply maximizes.
    pub fn root_maximizing(&self) -> bool {
        self.player == Player::FIRST
    }

    pub fn visit(&mut self, remaining: usize) {
        self.nodes += 1;
        self.max_depth_reached = self.max_depth_reached.max(self.budget - remaining);
    }

    pub fn is_leaf(state: &GameState, remaining: usize) -> bool {
        remaining == 0 || state.is_terminal()
    }

    /// Leaf value for the searching player, mapped into the tree's frame.
    pub fn leaf_value(&self, state: &GameState) -> f64 {
        let score = if state.is_terminal() {
            terminal_score(state, self.player)
        } else {
            self.heuristic.evaluate(state.board(), self.player)
        };
        self.player.polarity() * score
    }

    pub fn finish(self, strategy: Strategy, value: f64, best_move: Option<usize>) -> SearchMetrics {
        let best_score = if value == 0.0 {
            0.0
        } else {
            self.player.polarity() * value
        };
        let metrics = SearchMetrics {
            strategy,
            nodes_explored: self.nodes,
            max_depth_reached: self.max_depth_reached,
            elapsed: self.started.elapsed(),
            best_score,
            best_move,
            prune_count: match strategy {
                Strategy::Minimax => None,
                Strategy::AlphaBeta => Some(self.prunes),
            },
        };
        log::debug!(
            "{} for {}: move {:?}, score {}, {} nodes, {} prunes, {:.3}s",
            strategy,
            self.player.name(),
            best_move,
            best_score,
            metrics.nodes_explored,
            self.prunes,
            metrics.elapsed_secs()
        );
        metrics
    }
}
