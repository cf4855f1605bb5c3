use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use connect_four_search::ai::{Agent, RandomAgent, SearchAgent, SearchConfig, SearchMetrics, SearchPlayer, Strategy};
use connect_four_search::config::{MAX_BOARD_DIM, MAX_DEPTH, MIN_BOARD_DIM};
use connect_four_search::game::{Board, GameOutcome, GameState, Player};
use connect_four_search::session::play_game;

/// Compare minimax and alpha-beta on one position, optionally followed by a
/// match against a random player.
#[derive(Parser)]
#[command(name = "compare", about = "Compare minimax and alpha-beta search")]
struct Cli {
    /// Position in board notation, top row first, rows separated by '/'
    /// (e.g. "......./......./......./......./......./...X...")
    #[arg(long)]
    position: Option<String>,

    /// Player to move in the given position
    #[arg(long, value_enum, default_value = "red")]
    to_move: Player,

    /// Search depth in plies
    #[arg(long, default_value_t = 5)]
    depth: usize,

    /// Play this many alpha-beta vs random games after the comparison
    #[arg(long, default_value_t = 0)]
    games: usize,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    position: String,
    to_move: Player,
    depth: usize,
    minimax: SearchMetrics,
    alphabeta: SearchMetrics,
    /// Fraction of minimax nodes alpha-beta skipped.
    node_reduction: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<MatchSummary>,
}

#[derive(Serialize, Default)]
struct MatchSummary {
    games: usize,
    wins: usize,
    losses: usize,
    draws: usize,
    win_rate: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.depth == 0 || cli.depth > MAX_DEPTH {
        bail!("depth must be in [1, {MAX_DEPTH}], got {}", cli.depth);
    }

    let board = match &cli.position {
        Some(text) => text.parse::<Board>().context("parsing --position")?,
        None => Board::new(),
    };
    let (rows, cols) = (board.rows(), board.cols());
    let state = GameState::from_board(board, cli.to_move);

    let (minimax_move, minimax) = Strategy::Minimax.agent().best_move(&state, cli.to_move, cli.depth);
    let (alphabeta_move, alphabeta) = Strategy::AlphaBeta.agent().best_move(&state, cli.to_move, cli.depth);

    if minimax_move != alphabeta_move || minimax.best_score != alphabeta.best_score {
        bail!(
            "searches disagree: minimax {:?} ({}), alpha-beta {:?} ({})",
            minimax_move,
            minimax.best_score,
            alphabeta_move,
            alphabeta.best_score
        );
    }

    let matches = if cli.games > 0 {
        if !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&rows) || !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&cols) {
            bail!("board must be between {MIN_BOARD_DIM} and {MAX_BOARD_DIM} on each side to play games");
        }
        Some(play_matches(&cli, rows, cols))
    } else {
        None
    };

    let node_reduction = if minimax.nodes_explored == 0 {
        0.0
    } else {
        1.0 - alphabeta.nodes_explored as f64 / minimax.nodes_explored as f64
    };

    let report = Report {
        position: state.board().to_string(),
        to_move: cli.to_move,
        depth: cli.depth,
        minimax,
        alphabeta,
        node_reduction,
        matches,
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{json}");
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Alpha-beta against a random player, swapping colors every game.
fn play_matches(cli: &Cli, rows: usize, cols: usize) -> MatchSummary {
    let mut search = SearchPlayer::new(SearchConfig {
        depth: cli.depth,
        strategy: Strategy::AlphaBeta,
    });
    let mut random = match cli.seed {
        Some(seed) => RandomAgent::seeded(seed),
        None => RandomAgent::new(),
    };

    let mut summary = MatchSummary {
        games: cli.games,
        ..MatchSummary::default()
    };
    for game in 0..cli.games {
        let search_side = if game % 2 == 0 { Player::Red } else { Player::Yellow };
        let record = if search_side == Player::Red {
            play_game(&mut search, &mut random, rows, cols)
        } else {
            play_game(&mut random, &mut search, rows, cols)
        };
        match record.outcome {
            GameOutcome::Winner(winner) if winner == search_side => summary.wins += 1,
            GameOutcome::Winner(_) => summary.losses += 1,
            GameOutcome::Draw => summary.draws += 1,
        }
        log::info!(
            "game {}/{}: {} as {} -> {:?} in {} moves",
            game + 1,
            cli.games,
            search.name(),
            search_side.name(),
            record.outcome,
            record.moves.len()
        );
    }
    summary.win_rate = summary.wins as f64 / cli.games as f64;
    summary
}

fn print_report(report: &Report) {
    println!("Board ({} to move):", report.to_move.name());
    println!("{}", report.position);
    println!();
    println!("Depth: {}", report.depth);
    for metrics in [&report.minimax, &report.alphabeta] {
        println!(
            "{:<11} move {:>4}  score {:>10}  nodes {:>9}  depth {:>2}  prunes {:>7}  {:.3}s",
            metrics.strategy.name(),
            metrics.best_move.map_or("-".to_string(), |c| c.to_string()),
            metrics.best_score,
            metrics.nodes_explored,
            metrics.max_depth_reached,
            metrics.prune_count.map_or("-".to_string(), |p| p.to_string()),
            metrics.elapsed_secs()
        );
    }
    println!("Alpha-beta explored {:.1}% fewer nodes", report.node_reduction * 100.0);

    if let Some(m) = &report.matches {
        println!();
        println!(
            "Alpha-beta vs random: {} games, {} won, {} lost, {} drawn ({:.1}% win rate)",
            m.games,
            m.wins,
            m.losses,
            m.draws,
            m.win_rate * 100.0
        );
    }
}
