//! Layout components (header bar, status bar)

use crate::app::App;
use crate::state::{ui_area, SubmitStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, main content, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ui_area::HEADER_HEIGHT), // Header bar
            Constraint::Min(0),                         // Form + action panel
            Constraint::Length(1),                      // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header bar with the host connection state
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let host_status = if app.state.host_connected {
        Span::styled("Host: connected", Style::default().fg(Color::Green))
    } else {
        Span::styled("Host: unreachable", Style::default().fg(Color::Red))
    };

    let block = Block::default()
        .title(" Quick Deal Intake ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let content = Paragraph::new(Line::from(vec![Span::raw(" "), host_status])).block(block);
    frame.render_widget(content, area);
}

/// Draw the bottom status line: submit progress or key help
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.state.submit_status {
        SubmitStatus::Failed(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )),
        SubmitStatus::InFlight => Line::from(Span::styled(
            " Submitting...",
            Style::default().fg(Color::Yellow),
        )),
        SubmitStatus::Idle => Line::from(vec![
            Span::styled(" Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled(
                crate::platform::SUBMIT_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(": submit  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": cancel"),
        ]),
    };

    let style = Style::default().fg(Color::DarkGray);
    frame.render_widget(Paragraph::new(line).style(style), area);
}
