//! Move selection: the position heuristic, minimax and alpha-beta search,
//! and the agent trait used for headless play.

mod agent;
mod alphabeta;
mod heuristic;
mod minimax;
mod random;
mod search;

pub use agent::{Agent, SearchPlayer};
pub use alphabeta::AlphaBeta;
pub use heuristic::{Heuristic, WindowCounts, WindowHeuristic, HEURISTIC_WIN};
pub use minimax::Minimax;
pub use random::RandomAgent;
pub use search::{
    ordered_moves, search, terminal_score, SearchAgent, SearchConfig, SearchMetrics, Strategy, DRAW_SCORE,
    WIN_SCORE,
};
