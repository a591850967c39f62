//! UI area positioning for mouse event handling
//!
//! The widget layout is fixed, so mouse targets can be computed from
//! constant offsets instead of threading rects out of the render pass.
//!
//! # Layout
//!
//! ```text
//! Row 0-2:  Header bar (3 rows with borders)
//! Row 3+:   Form block (left) and action panel (right, 20 cols)
//!           - Field bands of 4 rows each: 3-row box + 1 error line
//!           - Selector dropdown overlays the rows below its box while open
//! Bottom:   Status bar (1 row)
//! ```

use super::form::{FIELD_AREAS, FOCUS_COUNT};
use super::options::AreaOfInterest;

/// Height of the header bar (top border + content + bottom border)
pub const HEADER_HEIGHT: u16 = 3;

/// Width of the action panel on the right edge
pub const ACTION_PANEL_WIDTH: u16 = 20;

/// Rows per field band: bordered box plus the error line beneath it
pub const FIELD_HEIGHT: u16 = 4;

/// Rows of the bordered box within a band
pub const FIELD_BOX_HEIGHT: u16 = 3;

/// First row of form content (header plus the form block's top border)
pub const FORM_CONTENT_START: u16 = HEADER_HEIGHT + 1;

/// Number of clickable field bands (buttons row lives in the action panel)
const FIELD_BAND_COUNT: usize = FOCUS_COUNT - 1;

/// First row of the dropdown overlay (directly under the selector's box)
pub const DROPDOWN_START: u16 =
    FORM_CONTENT_START + FIELD_AREAS as u16 * FIELD_HEIGHT + FIELD_BOX_HEIGHT;

/// Dropdown height when nothing clamps it: all options plus borders
pub const DROPDOWN_FULL_HEIGHT: u16 = AreaOfInterest::ALL.len() as u16 + 2;

/// Width of the form column for a given terminal width
#[inline]
pub fn form_width(term_width: u16) -> u16 {
    term_width.saturating_sub(ACTION_PANEL_WIDTH)
}

/// Field band index for an absolute mouse row, if any
pub fn field_index_at_row(row: u16) -> Option<usize> {
    if row < FORM_CONTENT_START {
        return None;
    }
    let index = ((row - FORM_CONTENT_START) / FIELD_HEIGHT) as usize;
    (index < FIELD_BAND_COUNT).then_some(index)
}

/// Absolute rows of the selector's collapsed box (start inclusive, end exclusive)
#[inline]
pub const fn areas_box_rows() -> (u16, u16) {
    let start = FORM_CONTENT_START + FIELD_AREAS as u16 * FIELD_HEIGHT;
    (start, start + FIELD_BOX_HEIGHT)
}

/// Absolute row of the selector's tag line (inside the box borders)
#[inline]
pub const fn areas_content_row() -> u16 {
    areas_box_rows().0 + 1
}

/// Absolute rows of the dropdown overlay, clamped above the status bar
pub fn dropdown_rows(term_height: u16) -> (u16, u16) {
    let bottom = term_height.saturating_sub(1);
    let end = (DROPDOWN_START + DROPDOWN_FULL_HEIGHT).min(bottom);
    (DROPDOWN_START, end.max(DROPDOWN_START))
}

/// Option index under an absolute mouse row in the open dropdown
pub fn dropdown_option_at_row(row: u16, term_height: u16) -> Option<usize> {
    let (start, end) = dropdown_rows(term_height);
    // First and last rows are the overlay borders
    if row <= start || row + 1 >= end {
        return None;
    }
    let index = (row - start - 1) as usize;
    (index < AreaOfInterest::ALL.len()).then_some(index)
}

/// Whether a pointer position falls inside the selector's bounding region:
/// the collapsed box, plus the dropdown overlay while open
pub fn selector_contains(
    column: u16,
    row: u16,
    term_width: u16,
    term_height: u16,
    open: bool,
) -> bool {
    if column >= form_width(term_width) {
        return false;
    }
    let (box_start, box_end) = areas_box_rows();
    if row >= box_start && row < box_end {
        return true;
    }
    if open {
        let (start, end) = dropdown_rows(term_height);
        return row >= start && row < end;
    }
    false
}

/// Whether a pointer column falls on the action panel
#[inline]
pub fn in_action_panel(column: u16, term_width: u16) -> bool {
    column >= form_width(term_width)
}

/// Action-panel button index (0 = Submit, 1 = Cancel) under a mouse row
pub fn action_button_at_row(row: u16) -> Option<usize> {
    const BUTTON_HEIGHT: u16 = 3;
    let start = HEADER_HEIGHT + 1; // panel border
    if row < start {
        return None;
    }
    let index = ((row - start) / BUTTON_HEIGHT) as usize;
    (index < 2).then_some(index)
}

/// Index of the tag whose remove affordance sits under `column`, where
/// `column` is relative to the tag line's first content cell. Tags render as
/// `Label ×` separated by two spaces.
pub fn tag_remove_at_col(labels: &[&str], column: u16) -> Option<usize> {
    let mut start = 0u16;
    for (index, label) in labels.iter().enumerate() {
        let width = label.chars().count() as u16 + 2;
        if column == start + width - 1 {
            return Some(index);
        }
        if column < start + width {
            return None;
        }
        start += width + 2;
    }
    None
}
