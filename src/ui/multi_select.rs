//! Rendering for the areas-of-interest selector

use crate::app::App;
use crate::state::{ui_area, AreaOfInterest, MultiSelectState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the collapsed selector box: placeholder or the tag line
///
/// Tag geometry must stay in step with `ui_area::tag_remove_at_col`:
/// `Label ×` separated by two spaces.
pub fn draw_collapsed(frame: &mut Frame, area: Rect, state: &MultiSelectState, is_active: bool) {
    let border_style = if is_active || state.is_open() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if state.selected().is_empty() {
        Line::from(Span::styled(
            "-- Select an option --",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = Vec::new();
        for (index, label) in state.labels().into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::raw(label));
            spans.push(Span::styled(" ×", Style::default().fg(Color::Red)));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .title(" Areas of Interest ▾ ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw the option panel as an overlay below the selector box
pub fn draw_dropdown(frame: &mut Frame, app: &App) {
    let screen = frame.area();
    let (start, end) = ui_area::dropdown_rows(screen.height);
    if end <= start {
        return;
    }

    let panel = Rect {
        x: screen.x + 1,
        y: start,
        width: ui_area::form_width(screen.width).saturating_sub(2),
        height: end - start,
    };

    let state = &app.state.form.area_of_interest;
    let lines: Vec<Line> = AreaOfInterest::ALL
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let marker = if state.is_selected(*option) {
                "✓ "
            } else {
                "  "
            };
            let mut style = if state.is_selected(*option) {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            if index == state.highlighted() {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(format!("{marker}{}", option.label()), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, panel);
    frame.render_widget(Paragraph::new(lines).block(block), panel);
}
