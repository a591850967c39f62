//! State for the areas-of-interest selector
//!
//! An ordered, duplicate-free subset of a fixed option list, edited through
//! an open/closed dropdown panel. Selecting an already-chosen option is a
//! silent no-op; removal of a non-member is likewise a no-op.

use super::options::AreaOfInterest;

/// Dropdown selector state: the current selection plus panel visibility
#[derive(Debug, Clone, Default)]
pub struct MultiSelectState {
    selected: Vec<AreaOfInterest>,
    open: bool,
    highlighted: usize,
}

impl MultiSelectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected options in selection order
    pub fn selected(&self) -> &[AreaOfInterest] {
        &self.selected
    }

    /// Selected option labels in selection order
    pub fn labels(&self) -> Vec<&'static str> {
        self.selected.iter().map(AreaOfInterest::label).collect()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the option row the keyboard highlight is on
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn is_selected(&self, option: AreaOfInterest) -> bool {
        self.selected.contains(&option)
    }

    /// Append `option` unless it is already selected
    pub fn select(&mut self, option: AreaOfInterest) {
        if !self.selected.contains(&option) {
            self.selected.push(option);
        }
    }

    /// Remove `option` from the selection if present
    pub fn remove(&mut self, option: AreaOfInterest) {
        self.selected.retain(|o| *o != option);
    }

    /// Remove the most recently added option
    pub fn remove_last(&mut self) {
        self.selected.pop();
    }

    /// Flip panel visibility
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Explicit open request
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the panel; selection is untouched
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % AreaOfInterest::ALL.len();
    }

    pub fn highlight_prev(&mut self) {
        if self.highlighted == 0 {
            self.highlighted = AreaOfInterest::ALL.len() - 1;
        } else {
            self.highlighted -= 1;
        }
    }

    /// Select the highlighted option; the panel stays open
    pub fn select_highlighted(&mut self) {
        self.select(AreaOfInterest::ALL[self.highlighted]);
    }

    /// Reset to an empty, closed selector
    pub fn clear(&mut self) {
        self.selected.clear();
        self.open = false;
        self.highlighted = 0;
    }
}
