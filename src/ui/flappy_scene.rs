//! Terminal rendering for the flappy game screen.

use super::game_common::{render_modal, render_panel, render_status_bar, StatusBar};
use super::pixel_grid::PixelGrid;
use super::TerminalFrontend;
use crate::game::{GamePhase, GameSession};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, ui: &TerminalFrontend, session: &GameSession) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Horizontal split: play column (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    // Play column: playfield (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(h_chunks[0]);

    let field = playfield_area(v_chunks[0], session);
    render_play_area(frame, field, ui, session);

    if ui.start_visible() {
        render_start_overlay(frame, field);
    }
    if ui.game_over_visible() {
        render_game_over_overlay(frame, field, ui.final_score().unwrap_or(ui.score()));
    }

    render_status_bar(frame, v_chunks[1], &status_bar(ui, session.phase()));
    render_info_panel(frame, h_chunks[1], ui, session);
}

/// Largest area inside `area` with the playfield's aspect ratio, centered
/// horizontally. A cell is two pixels tall, so pixels are roughly square.
fn playfield_area(area: Rect, session: &GameSession) -> Rect {
    let field = session.config().playfield;
    if field.height == 0 || area.height == 0 || area.width == 0 {
        return area;
    }
    let ideal_cols = (area.height as f64 * 2.0 * field.width as f64 / field.height as f64).round();
    let width = (ideal_cols as u16).clamp(1, area.width.max(1));
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

fn render_play_area(frame: &mut Frame, area: Rect, ui: &TerminalFrontend, session: &GameSession) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let field = session.config().playfield;
    let mut grid = PixelGrid::new(
        area.width,
        area.height,
        field.width as f64,
        field.height as f64,
    );
    grid.paint(ui.scene().commands());
    frame.render_widget(Paragraph::new(grid.to_lines()), area);
}

fn render_start_overlay(frame: &mut Frame, area: Rect) {
    let body = [
        Line::from(Span::styled(
            "Dodge the pipes!",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Space] to flap",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_modal(frame, area, "GET READY", Color::Yellow, &body);
}

fn render_game_over_overlay(frame: &mut Frame, area: Rect, final_score: u32) {
    let body = [
        Line::from(Span::styled(
            format!("Score: {}", final_score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Restart  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_modal(frame, area, "GAME OVER", Color::Red, &body);
}

const FLY_CONTROLS: &[(&str, &str)] = &[("[Space/Up/Enter]", "Flap"), ("[Q]", "Quit")];
const CRASHED_CONTROLS: &[(&str, &str)] = &[("[R]", "Restart"), ("[Q]", "Quit")];

fn status_bar(ui: &TerminalFrontend, phase: GamePhase) -> StatusBar {
    match phase {
        GamePhase::Start => StatusBar {
            message: "Press Space to start!".to_string(),
            color: Color::Yellow,
            controls: FLY_CONTROLS,
        },
        GamePhase::Playing => StatusBar {
            message: format!("Score: {}", ui.score()),
            color: Color::Green,
            controls: FLY_CONTROLS,
        },
        GamePhase::GameOver => StatusBar {
            message: format!("Crashed! Final score: {}", ui.final_score().unwrap_or(0)),
            color: Color::Red,
            controls: CRASHED_CONTROLS,
        },
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, ui: &TerminalFrontend, session: &GameSession) {
    let inner = render_panel(frame, area, "Flight", Color::DarkGray);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (phase_text, phase_color) = match session.phase() {
        GamePhase::Start => ("Ready", Color::Yellow),
        GamePhase::Playing => ("Flying", Color::Green),
        GamePhase::GameOver => ("Crashed", Color::Red),
    };

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", phase_text),
            Style::default()
                .fg(phase_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            label(" Score: "),
            Span::styled(
                format!("{}", ui.score()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label(" Pipes: "),
            Span::styled(
                format!("{}", session.pipes().len()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            label(" Frame: "),
            Span::styled(
                format!("{}", session.frames()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label(" Velocity: "),
            Span::styled(
                format!("{:+.2}", session.bird().velocity),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
