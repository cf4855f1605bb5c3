use crate::ai::Agent;
use crate::game::{GameOutcome, GameState, Player};

/// Result of one complete game between two agents.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub moves: Vec<usize>,
    pub final_state: GameState,
}

/// Play one game to completion on a `rows` x `cols` board. Red moves first.
///
/// An agent that returns no move, or an invalid one, forfeits to its opponent.
pub fn play_game(red: &mut dyn Agent, yellow: &mut dyn Agent, rows: usize, cols: usize) -> GameRecord {
    let mut state = GameState::with_size(rows, cols);

    let outcome = loop {
        if let Some(outcome) = state.outcome() {
            break outcome;
        }

        let player = state.current_player();
        let agent: &mut dyn Agent = if player == Player::Red {
            &mut *red
        } else {
            &mut *yellow
        };

        let applied = agent.select_action(&state).map(|col| state.apply_move(col));
        match applied {
            Some(Ok(())) => {}
            Some(Err(err)) => {
                log::warn!("{} played an invalid move ({err}), forfeiting", agent.name());
                break GameOutcome::Winner(player.other());
            }
            None => {
                log::warn!("{} returned no move, forfeiting", agent.name());
                break GameOutcome::Winner(player.other());
            }
        }
    };

    GameRecord {
        outcome,
        moves: state.move_history().to_vec(),
        final_state: state,
    }
}
