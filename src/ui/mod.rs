//! UI module for rendering the widget

pub mod components;
mod field_renderer;
mod form;
mod layout;
mod multi_select;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);
    form::draw(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // The option panel overlays the fields below the selector, so it is
    // drawn after everything else
    if app.state.form.area_of_interest.is_open() {
        multi_select::draw_dropdown(frame, app);
    }
}
