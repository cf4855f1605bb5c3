use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four_search::ai::Strategy;
use connect_four_search::config::AppConfig;
use connect_four_search::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four against a minimax / alpha-beta AI.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a search AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override search strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Let the AI move first
    #[arg(long)]
    ai_first: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(strategy) = cli.strategy {
        config.search.strategy = strategy;
    }
    if cli.ai_first {
        config.play.human_first = false;
    }
    config.validate().context("validating configuration")?;

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game")
}
