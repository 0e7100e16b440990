use crate::config::DisplayConfig;
use crate::game::{Board, GameOutcome, GameState, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    display: &DisplayConfig,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state.board(), display, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => (
            format!("Game Over  |  Player {} wins", player.id()),
            player_color(player),
        ),
        Some(GameOutcome::Draw) => ("Game Over  |  Draw".to_string(), Color::White),
        None => {
            let player = game_state.current_player();
            (
                format!("Current Player: {} ({})", player.id(), player.name()),
                player_color(player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

/// The rack as styled lines: column numbers, framed rows, and a marker under
/// the selected column
fn board_lines(board: &Board, display: &DisplayConfig, selected_column: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for column in 1..=COLS {
        if column == selected_column {
            col_line.push(Span::styled(
                format!(" {column} "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {column} ")));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(COLS * 3 + 1))));

    for row in 1..=ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for column in 1..=COLS {
            let (symbol, color) = match board.owner(column, row) {
                None => (display.empty_marker.as_str(), Color::DarkGray),
                Some(Player::Red) => (display.red_marker.as_str(), Color::Red),
                Some(Player::Yellow) => (display.yellow_marker.as_str(), Color::Yellow),
            };
            row_spans.push(Span::styled(format!(" {symbol} "), Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(COLS * 3 + 1))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for column in 1..=COLS {
        if column == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    display: &DisplayConfig,
    selected_column: usize,
    area: Rect,
) {
    let board_widget =
        Paragraph::new(board_lines(board, display, selected_column)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter/1-7: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
