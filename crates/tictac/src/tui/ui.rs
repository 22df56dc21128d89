//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tictac_core::{Board, GameMode, Marker, Position, Square, winning_line};

use super::app::{App, Screen};

/// Renders the whole application.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let session = app.session();
    draw_board(frame, chunks[1], session.board(), app.cursor());

    let status = match app.message() {
        Some(message) => format!("{}  ({})", session.status_line(), message),
        None => session.status_line(),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = match app.screen() {
        Screen::ModeSelect => "↑↓: Choose | Enter: Select | 1/2: Quick pick | q: Quit",
        Screen::Board => "Arrows: Move | Enter/Space or 1-9: Play | r: Reset | e: End game | q: Quit",
        Screen::Stats => "c / Esc: Close and start over | q: Quit",
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    match app.screen() {
        Screen::ModeSelect => draw_mode_popup(frame, area, app.mode_choice()),
        Screen::Stats => draw_stats_popup(frame, area, app),
        Screen::Board => {}
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 40, 11);
    let winning = winning_line(board);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if let Some(pos) = Position::at(row, col) {
                let highlighted = winning.is_some_and(|line| line.contains(&pos.to_index()));
                draw_cell(frame, cols[col * 2], board, cursor, pos, highlighted);
            }
            if col < 2 {
                draw_separator(frame, cols[col * 2 + 1], "│");
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1], "──────────────────────────────────────");
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    pos: Position,
    highlighted: bool,
) {
    let label = (pos.to_index() + 1).to_string();
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (label, Style::default().fg(Color::DarkGray)),
        Square::Occupied(Marker::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Marker::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if highlighted {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, glyph: &'static str) {
    let sep = Paragraph::new(glyph)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn draw_mode_popup(frame: &mut Frame, area: Rect, choice: GameMode) {
    let popup = center_rect(area, 36, 6);
    frame.render_widget(Clear, popup);

    let modes: Vec<GameMode> = GameMode::iter().collect();
    let items: Vec<ListItem> = modes
        .iter()
        .enumerate()
        .map(|(i, mode)| ListItem::new(format!("{}. {}", i + 1, mode)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select game mode"),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(modes.iter().position(|m| *m == choice));
    frame.render_stateful_widget(list, popup, &mut state);
}

fn draw_stats_popup(frame: &mut Frame, area: Rect, app: &App) {
    let popup = center_rect(area, 36, 8);
    frame.render_widget(Clear, popup);

    let stats = app.session().stats();
    let mut lines: Vec<Line> = Marker::iter()
        .map(|marker| Line::from(format!("{} wins: {}", marker, stats.wins(marker))))
        .collect();
    lines.push(Line::from(format!("Draws:  {}", stats.draws())));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "c: Close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Game statistics")
                .style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
