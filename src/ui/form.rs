//! Intake form rendering

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::{field_renderer, multi_select};
use crate::app::App;
use crate::state::{
    ui_area, FieldId, BUTTON_CANCEL, BUTTON_SUBMIT, FIELD_AREAS, FIELD_BUTTONS, FIELD_CONTACT,
    FIELD_DEAL_NAME, FIELD_EMAIL, FIELD_OFFICE,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the form block and the action panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                              // Form area
            Constraint::Length(ui_area::ACTION_PANEL_WIDTH), // Action panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Split a field band into its bordered box and the error line under it
fn split_band(band: Rect) -> (Rect, Rect) {
    let field_box = Rect {
        height: ui_area::FIELD_BOX_HEIGHT.min(band.height),
        ..band
    };
    let error_line = Rect {
        y: band.y + ui_area::FIELD_BOX_HEIGHT,
        height: band.height.saturating_sub(ui_area::FIELD_BOX_HEIGHT),
        ..band
    };
    (field_box, error_line)
}

/// Draw the five field bands inside the form block
fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let errors = &app.state.errors;

    let form_focused = form.active_field_index < FIELD_BUTTONS;
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" New Deal ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let bands = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ui_area::FIELD_HEIGHT), // Deal name
            Constraint::Length(ui_area::FIELD_HEIGHT), // Contact name
            Constraint::Length(ui_area::FIELD_HEIGHT), // Contact email
            Constraint::Length(ui_area::FIELD_HEIGHT), // Areas of interest
            Constraint::Length(ui_area::FIELD_HEIGHT), // Office
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let text_fields = [
        (FIELD_DEAL_NAME, &form.deal_name, FieldId::DealName),
        (FIELD_CONTACT, &form.contact, FieldId::Contact),
        (FIELD_EMAIL, &form.email, FieldId::Email),
    ];
    for (index, field, id) in text_fields {
        let (field_box, error_line) = split_band(bands[index]);
        field_renderer::draw_field(
            frame,
            field_box,
            &field.label,
            field.as_text(),
            form.active_field_index == index,
            None,
        );
        field_renderer::draw_error_line(frame, error_line, errors.get(id));
    }

    let (areas_box, areas_error) = split_band(bands[FIELD_AREAS]);
    multi_select::draw_collapsed(
        frame,
        areas_box,
        &form.area_of_interest,
        form.active_field_index == FIELD_AREAS,
    );
    field_renderer::draw_error_line(frame, areas_error, errors.get(FieldId::AreaOfInterest));

    let (office_box, office_error) = split_band(bands[FIELD_OFFICE]);
    field_renderer::draw_field(
        frame,
        office_box,
        "CLG Office",
        form.clg_office
            .map(|office| office.label())
            .unwrap_or_default(),
        form.active_field_index == FIELD_OFFICE,
        Some("-- Select an office --"),
    );
    field_renderer::draw_error_line(frame, office_error, errors.get(FieldId::ClgOffice));
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_buttons_row_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BUTTON_HEIGHT), // Cancel
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    render_action_button(
        frame,
        button_chunks[0],
        "Submit",
        is_focused && form.selected_button == BUTTON_SUBMIT,
        Color::Green,
    );
    render_action_button(
        frame,
        button_chunks[1],
        "Cancel",
        is_focused && form.selected_button == BUTTON_CANCEL,
        Color::Gray,
    );
}
