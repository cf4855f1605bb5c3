use super::App;
use crate::game::{Board, Cell, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board + side panel
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(34)])
        .split(chunks[1]);

    render_header(frame, app, chunks[0]);
    render_board(frame, app.game_state().board(), app.selected_column(), body[0]);
    render_side_panel(frame, app, body[1]);
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.game_state();
    let current = state.current_player();

    let status = if state.is_terminal() {
        "Game Over".to_string()
    } else if current == app.human() {
        format!("Your turn ({})", current.name())
    } else {
        format!("AI is thinking ({})", current.name())
    };
    let search = app.config().search;
    let text = format!("{status}  |  {}  |  {}", search.strategy, app.difficulty());

    let header = Paragraph::new(text)
        .style(
            Style::default()
                .fg(player_color(current))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four - AI Challenge"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..cols {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_side_panel(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(6)])
        .split(area);

    let metrics_lines = match app.last_metrics() {
        Some(m) => {
            let mut lines = vec![
                Line::from(format!("Algorithm: {}", m.strategy)),
                Line::from(format!("Nodes:     {}", m.nodes_explored)),
                Line::from(format!("Depth:     {}", m.max_depth_reached)),
                Line::from(format!("Time:      {:.3}s", m.elapsed_secs())),
                Line::from(format!("Score:     {}", m.best_score)),
            ];
            if let Some(prunes) = m.prune_count {
                lines.push(Line::from(format!("Prunes:    {prunes}")));
            }
            lines
        }
        None => vec![Line::from("No search yet")],
    };
    let metrics = Paragraph::new(metrics_lines).block(Block::default().borders(Borders::ALL).title("Last Search"));
    frame.render_widget(metrics, chunks[0]);

    let stats = app.stats();
    let stats_lines = vec![
        Line::from(format!("You:    {}", stats.human_wins)),
        Line::from(format!("AI:     {}", stats.ai_wins)),
        Line::from(format!("Draws:  {}", stats.draws)),
        Line::from(format!(
            "Games:  {} ({:.0}% won)",
            stats.total_games,
            stats.human_win_rate() * 100.0
        )),
    ];
    let stats_widget = Paragraph::new(stats_lines).block(Block::default().borders(Borders::ALL).title("Statistics"));
    frame.render_widget(stats_widget, chunks[1]);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  S: Strategy  |  +/-: Depth  |  R: New Game  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
