use crate::ai::{SearchMetrics, Strategy};
use crate::config::{AppConfig, MAX_DEPTH};
use crate::game::{GameOutcome, GameState, MoveError, Player};
use crate::session::{difficulty_label, JobStatus, SearchJob, SessionStats};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// Human vs AI game state for the terminal UI.
pub struct App {
    config: AppConfig,
    game_state: GameState,
    human: Player,
    selected_column: usize,
    job: Option<SearchJob>,
    last_metrics: Option<SearchMetrics>,
    stats: SessionStats,
    result_recorded: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let game_state = GameState::with_size(config.board.rows, config.board.cols);
        let mut app = App {
            config,
            game_state,
            human: Player::Red,
            selected_column: 0,
            job: None,
            last_metrics: None,
            stats: SessionStats::new(),
            result_recorded: false,
            should_quit: false,
            message: None,
        };
        app.new_game();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.tick();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn last_metrics(&self) -> Option<&SearchMetrics> {
        self.last_metrics.as_ref()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_thinking(&self) -> bool {
        self.job.is_some()
    }

    pub fn difficulty(&self) -> String {
        format!(
            "{} (Depth: {})",
            difficulty_label(self.config.search.depth),
            self.config.search.depth
        )
    }

    /// Start a fresh game. An in-flight search is abandoned.
    fn new_game(&mut self) {
        self.game_state = GameState::with_size(self.config.board.rows, self.config.board.cols);
        self.human = if self.config.play.human_first {
            Player::Red
        } else {
            Player::Yellow
        };
        self.selected_column = self.game_state.board().center_column();
        self.job = None;
        self.last_metrics = None;
        self.result_recorded = false;
        self.message = Some("Your turn!".to_string());
        self.start_ai_if_due();
    }

    fn start_ai_if_due(&mut self) {
        if self.job.is_some() || self.game_state.is_terminal() {
            return;
        }
        let ai = self.human.other();
        if self.game_state.current_player() == ai {
            self.job = Some(SearchJob::spawn(self.game_state.clone(), ai, self.config.search));
            self.message = Some("AI is thinking...".to_string());
        }
    }

    /// Pick up a finished AI search, if any.
    fn tick(&mut self) {
        let Some(job) = self.job.as_mut() else {
            return;
        };
        match job.poll() {
            JobStatus::Running => {}
            JobStatus::Done(reply) => {
                self.job = None;
                self.complete_ai_move(reply.column, reply.metrics);
            }
            JobStatus::Lost => {
                self.job = None;
                self.message = Some("AI error!".to_string());
            }
        }
    }

    fn complete_ai_move(&mut self, column: Option<usize>, metrics: SearchMetrics) {
        let ai = self.human.other();
        match column.map(|col| self.game_state.apply_move_as(col, ai)) {
            Some(Ok(())) => {
                self.message = Some(format!(
                    "AI played column {} ({} nodes, {:.2}s)",
                    metrics.best_move.map_or(0, |c| c + 1),
                    metrics.nodes_explored,
                    metrics.elapsed_secs()
                ));
            }
            Some(Err(err)) => {
                log::error!("search returned an invalid column: {err}");
                self.message = Some("AI error!".to_string());
            }
            None => {}
        }
        self.last_metrics = Some(metrics);
        self.check_game_over();
    }

    fn check_game_over(&mut self) -> bool {
        let Some(outcome) = self.game_state.outcome() else {
            return false;
        };
        if !self.result_recorded {
            self.stats.record(outcome, self.human);
            self.result_recorded = true;
        }
        self.message = Some(match outcome {
            GameOutcome::Winner(player) if player == self.human => "You win!".to_string(),
            GameOutcome::Winner(_) => "AI wins!".to_string(),
            GameOutcome::Draw => "It's a draw!".to_string(),
        });
        true
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('s') => {
                self.config.search.strategy = self.config.search.strategy.toggled();
                self.message = Some(format!("Strategy: {}", self.config.search.strategy));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_depth(1),
            KeyCode::Char('-') => self.change_depth(-1),
            KeyCode::Char('r') => {
                self.new_game();
            }
            _ => {}
        }
    }

    fn change_depth(&mut self, delta: isize) {
        let depth = self.config.search.depth.saturating_add_signed(delta).clamp(1, MAX_DEPTH);
        self.config.search.depth = depth;
        self.message = Some(format!("Difficulty: {}", self.difficulty()));
    }

    /// Drop the human's piece in the selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.is_thinking() || self.game_state.current_player() != self.human {
            self.message = Some("Wait for the AI to move.".to_string());
            return;
        }

        match self.game_state.apply_move_as(self.selected_column, self.human) {
            Ok(()) => {
                if !self.check_game_over() {
                    self.start_ai_if_due();
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
