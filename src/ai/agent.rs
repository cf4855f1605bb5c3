use crate::game::GameState;

use super::search::{search, SearchConfig, SearchMetrics};

/// Anything that can choose a column for the player to move.
pub trait Agent {
    /// Select a column for `state.current_player()`, or `None` if there is
    /// nothing to play.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Agent backed by a tree search with a fixed configuration.
#[derive(Debug, Clone)]
pub struct SearchPlayer {
    config: SearchConfig,
    last_metrics: Option<SearchMetrics>,
}

impl SearchPlayer {
    pub fn new(config: SearchConfig) -> Self {
        SearchPlayer {
            config,
            last_metrics: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Metrics of the most recent search.
    pub fn last_metrics(&self) -> Option<&SearchMetrics> {
        self.last_metrics.as_ref()
    }
}

impl Agent for SearchPlayer {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let (col, metrics) = search(state, state.current_player(), &self.config);
        self.last_metrics = Some(metrics);
        col
    }

    fn name(&self) -> &str {
        self.config.strategy.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Strategy;

    #[test]
    fn search_player_records_metrics() {
        let mut agent = SearchPlayer::new(SearchConfig {
            depth: 3,
            strategy: Strategy::AlphaBeta,
        });
        assert!(agent.last_metrics().is_none());

        let state = GameState::initial();
        let col = agent.select_action(&state);

        let metrics = agent.last_metrics().unwrap();
        assert_eq!(col, metrics.best_move);
        assert!(state.valid_moves().contains(&col.unwrap()));
        assert_eq!(agent.name(), "Alpha-Beta");
    }

    #[test]
    fn search_player_plays_for_the_side_to_move() {
        let mut agent = SearchPlayer::new(SearchConfig {
            depth: 2,
            strategy: Strategy::Minimax,
        });
        let mut state = GameState::initial();
        // Yellow to move with Red threatening the bottom row
        for col in [0, 6, 1, 6, 2] {
            state.apply_move(col).unwrap();
        }
        assert_eq!(agent.select_action(&state), Some(3));
    }
}
