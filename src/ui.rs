//! Terminal UI rendering with ratatui

use crate::settings::Settings;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use swipetris::board::{BOARD_HEIGHT, BOARD_WIDTH, Board, Cell};
use swipetris::game::{Game, GameState};
use swipetris::piece::Piece;

const EMPTY: &str = "  ";

/// Total width needed: board(22) + stats(20) = 42
const GAME_WIDTH: u16 = 42;
/// Board rows plus 2 for borders
const GAME_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;
const BOARD_WIDTH_CELLS: u16 = BOARD_WIDTH as u16 * 2 + 2;

/// Render the whole game screen
pub fn render_game(frame: &mut Frame, game: &Game, settings: &Settings, game_over_toast: bool) {
    let area = frame.area();
    let game_area = center_rect(area, GAME_WIDTH, GAME_HEIGHT);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BOARD_WIDTH_CELLS),
            Constraint::Min(18), // Stats + controls
        ])
        .split(game_area);

    render_board(frame, layout[0], &game.board, &game.current_piece, settings);
    render_stats(frame, layout[1], game);

    if game_over_toast {
        render_overlay(frame, area, "GAME OVER", "New game started");
        return;
    }
    match game.state() {
        GameState::Stopped => render_overlay(frame, area, "SWIPETRIS", "Enter to start"),
        GameState::Paused => render_overlay(frame, area, "PAUSED", "Press P to resume"),
        GameState::Running => {}
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn render_board(frame: &mut Frame, area: Rect, board: &Board, piece: &Piece, settings: &Settings) {
    let (block_char, ghost_char) = settings.visual.block_chars();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let color = piece.piece_type.color();
    let ghost_y = settings.visual.show_ghost.then(|| piece.ghost_y(board));
    let piece_at = |y: i32, row: i32, col: i32| {
        piece
            .shape
            .occupied()
            .any(|(dr, dc)| y + dr == row && piece.x + dc == col)
    };

    let lines: Vec<Line> = board
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            let row = row as i32;
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let col = col as i32;
                    if piece_at(piece.y, row, col) {
                        Span::styled(block_char, Style::default().fg(color))
                    } else if ghost_y.is_some_and(|gy| piece_at(gy, row, col)) {
                        Span::styled(ghost_char, Style::default().fg(color).dim())
                    } else if let Cell::Filled(locked) = cell {
                        Span::styled(block_char, Style::default().fg(*locked))
                    } else {
                        Span::raw(EMPTY)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_stats(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default()
        .title(" STATS ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).bold();

    let mut lines = vec![
        Line::styled("Score", label),
        Line::styled(game.score.points.to_string(), value),
        Line::raw(""),
        Line::styled("Lines", label),
        Line::styled(game.score.lines.to_string(), value),
        Line::raw(""),
        Line::styled("Gravity", label),
        Line::styled(format!("{} ms", game.score.gravity_ms()), value),
        Line::raw(""),
    ];
    if let Some(name) = game.score.last_clear {
        lines.push(Line::styled(name, Style::default().fg(Color::Yellow).bold()));
        lines.push(Line::raw(""));
    }
    lines.extend([
        Line::styled("Tap: rotate", label),
        Line::styled("Swipe: move", label),
        Line::styled("Swipe up: drop", label),
        Line::styled("P pause R restart", label),
    ]);

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_overlay(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let overlay_area = center_rect(area, 24, 5);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let text = vec![
        Line::styled(title.to_string(), Style::default().fg(Color::Yellow).bold()),
        Line::raw(""),
        Line::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
