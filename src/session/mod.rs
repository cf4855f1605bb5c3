//! Glue between the search core and its callers: background search jobs,
//! headless agent-vs-agent games and session statistics.

mod game;
mod job;
mod stats;

pub use game::{play_game, GameRecord};
pub use job::{JobStatus, SearchJob, SearchReply};
pub use stats::SessionStats;

/// Display name for a search depth.
pub fn difficulty_label(depth: usize) -> &'static str {
    match depth {
        3 => "Easy",
        4 => "Medium-Easy",
        5 => "Medium",
        6 => "Medium-Hard",
        7 => "Hard",
        _ => "Custom",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(difficulty_label(3), "Easy");
        assert_eq!(difficulty_label(5), "Medium");
        assert_eq!(difficulty_label(7), "Hard");
        assert_eq!(difficulty_label(9), "Custom");
    }
}
