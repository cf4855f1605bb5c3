use crate::game::{GameOutcome, Player};

/// Win/loss/draw tally across the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub human_wins: u64,
    pub ai_wins: u64,
    pub draws: u64,
    pub total_games: u64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game in which the human played `human`.
    pub fn record(&mut self, outcome: GameOutcome, human: Player) {
        self.total_games += 1;
        match outcome {
            GameOutcome::Winner(player) if player == human => self.human_wins += 1,
            GameOutcome::Winner(_) => self.ai_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Fraction of games won by the human.
    pub fn human_win_rate(&self) -> f32 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.human_wins as f32 / self.total_games as f32
    }
}
