//! Shared UI building blocks: status bar, side panel, centered modal.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Bottom bar of the play column: a message line above a key legend.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBar {
    pub message: String,
    pub color: Color,
    /// (keys, action) pairs, e.g. `("[Space]", "Flap")`.
    pub controls: &'static [(&'static str, &'static str)],
}

/// Key legend as one line: bright keys, dim actions, two spaces between pairs.
pub fn controls_line(controls: &[(&'static str, &'static str)]) -> Line<'static> {
    let spans: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, &(keys, action))| {
            let sep = (i > 0).then(|| Span::raw("  "));
            sep.into_iter().chain([
                Span::styled(keys, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    Line::from(spans)
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, bar: &StatusBar) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let message = Paragraph::new(bar.message.as_str())
        .style(Style::default().fg(bar.color))
        .alignment(Alignment::Center);
    frame.render_widget(message, rows[0]);

    if rows[1].height > 0 && !bar.controls.is_empty() {
        let legend = Paragraph::new(controls_line(bar.controls)).alignment(Alignment::Center);
        frame.render_widget(legend, rows[1]);
    }
}

/// Draw a titled side panel border and hand back its content area.
pub fn render_panel(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Area of a `width × height` box centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render a bordered modal centered in `area`: bold title, then body lines.
pub fn render_modal(frame: &mut Frame, area: Rect, title: &str, color: Color, body: &[Line]) {
    let height = body.len() as u16 + 4;
    let width = body
        .iter()
        .map(|line| line.width() as u16)
        .chain(std::iter::once(title.chars().count() as u16))
        .max()
        .unwrap_or(0)
        + 6;
    let modal_area = centered_rect(area, width, height);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(body.iter().cloned());

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(10, 5, 40, 20);
        assert_eq!(centered_rect(area, 20, 10), Rect::new(20, 10, 20, 10));
    }

    #[test]
    fn test_controls_line_separates_pairs() {
        let line = controls_line(&[("[R]", "Restart"), ("[Q]", "Quit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[R] Restart  [Q] Quit");
    }

    #[test]
    fn test_controls_line_empty() {
        assert_eq!(controls_line(&[]).width(), 0);
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered_rect(area, 30, 30), area);
    }
}
