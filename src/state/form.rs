//! Deal intake form state

use super::field::FormField;
use super::multi_select::MultiSelectState;
use super::options::ClgOffice;

/// Focus index of the deal name field
pub const FIELD_DEAL_NAME: usize = 0;
/// Focus index of the contact name field
pub const FIELD_CONTACT: usize = 1;
/// Focus index of the contact email field
pub const FIELD_EMAIL: usize = 2;
/// Focus index of the areas-of-interest selector
pub const FIELD_AREAS: usize = 3;
/// Focus index of the office select
pub const FIELD_OFFICE: usize = 4;
/// Focus index of the buttons row
pub const FIELD_BUTTONS: usize = 5;

/// Number of focus stops (five fields plus the buttons row)
pub const FOCUS_COUNT: usize = 6;

/// Buttons on the action panel (0 = Submit, 1 = Cancel)
pub const BUTTON_SUBMIT: usize = 0;
pub const BUTTON_CANCEL: usize = 1;
const BUTTON_COUNT: usize = 2;

/// The single source of truth for all intake field values
#[derive(Debug, Clone)]
pub struct DealForm {
    pub deal_name: FormField,
    pub contact: FormField,
    pub email: FormField,
    pub area_of_interest: MultiSelectState,
    pub clg_office: Option<ClgOffice>,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl DealForm {
    pub fn new() -> Self {
        Self {
            deal_name: FormField::text("dealName", "Deal Name"),
            contact: FormField::text("contact", "Contact Name"),
            email: FormField::text("email", "Contact Email"),
            area_of_interest: MultiSelectState::new(),
            clg_office: None,
            active_field_index: 0,
            selected_button: BUTTON_SUBMIT,
        }
    }

    /// Move to the next focus stop (wraps around)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % FOCUS_COUNT;
    }

    /// Move to the previous focus stop (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = FOCUS_COUNT - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Focus a specific stop; out-of-range indices clamp to the buttons row
    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FOCUS_COUNT - 1);
    }

    /// True if the buttons row is currently focused
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == FIELD_BUTTONS
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Mutable access to the focused text field, if a text field is focused
    pub fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            FIELD_DEAL_NAME => Some(&mut self.deal_name),
            FIELD_CONTACT => Some(&mut self.contact),
            FIELD_EMAIL => Some(&mut self.email),
            _ => None,
        }
    }

    /// Route a typed character to the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_text_field_mut() {
            field.push_char(c);
        }
    }

    /// Route a backspace to the focused text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_text_field_mut() {
            field.pop_char();
        }
    }

    /// Cycle the office selection forward: none, then each office, then none
    pub fn cycle_office(&mut self) {
        self.clg_office = match self.clg_office {
            None => Some(ClgOffice::ALL[0]),
            Some(current) => {
                let idx = ClgOffice::ALL.iter().position(|o| *o == current).unwrap_or(0);
                if idx + 1 < ClgOffice::ALL.len() {
                    Some(ClgOffice::ALL[idx + 1])
                } else {
                    None
                }
            }
        };
    }

    /// Cycle the office selection backward
    pub fn cycle_office_back(&mut self) {
        self.clg_office = match self.clg_office {
            None => Some(ClgOffice::ALL[ClgOffice::ALL.len() - 1]),
            Some(current) => {
                let idx = ClgOffice::ALL.iter().position(|o| *o == current).unwrap_or(0);
                if idx == 0 {
                    None
                } else {
                    Some(ClgOffice::ALL[idx - 1])
                }
            }
        };
    }

    /// Reset every field and the focus position
    pub fn clear(&mut self) {
        self.deal_name.clear();
        self.contact.clear();
        self.email.clear();
        self.area_of_interest.clear();
        self.clg_office = None;
        self.active_field_index = 0;
        self.selected_button = BUTTON_SUBMIT;
    }
}

impl Default for DealForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AreaOfInterest;

    #[test]
    fn test_new_has_correct_defaults() {
        let form = DealForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected_button, BUTTON_SUBMIT);
        assert_eq!(form.deal_name.name, "dealName");
        assert_eq!(form.contact.name, "contact");
        assert_eq!(form.email.name, "email");
        assert!(form.clg_office.is_none());
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = DealForm::new();
        for _ in 0..FOCUS_COUNT {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0); // Wrapped back
    }

    #[test]
    fn test_prev_field_cycles() {
        let mut form = DealForm::new();
        form.prev_field();
        assert_eq!(form.active_field_index, FIELD_BUTTONS); // Wrapped to last
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = DealForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, FIELD_BUTTONS);
    }

    #[test]
    fn test_is_buttons_row_active() {
        let mut form = DealForm::new();
        assert!(!form.is_buttons_row_active());
        form.set_active_field(FIELD_BUTTONS);
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn test_button_navigation_wraps() {
        let mut form = DealForm::new();
        form.next_button();
        assert_eq!(form.selected_button, BUTTON_CANCEL);
        form.next_button();
        assert_eq!(form.selected_button, BUTTON_SUBMIT);
        form.prev_button();
        assert_eq!(form.selected_button, BUTTON_CANCEL);
    }

    #[test]
    fn test_input_char_routes_to_active_field() {
        let mut form = DealForm::new();
        form.input_char('T');
        form.next_field();
        form.input_char('J');
        assert_eq!(form.deal_name.as_text(), "T");
        assert_eq!(form.contact.as_text(), "J");
    }

    #[test]
    fn test_input_char_ignored_on_selector_and_buttons() {
        let mut form = DealForm::new();
        form.set_active_field(FIELD_AREAS);
        form.input_char('x');
        form.set_active_field(FIELD_BUTTONS);
        form.input_char('y');
        assert_eq!(form.deal_name.as_text(), "");
        assert_eq!(form.contact.as_text(), "");
        assert_eq!(form.email.as_text(), "");
    }

    #[test]
    fn test_backspace() {
        let mut form = DealForm::new();
        form.input_char('a');
        form.input_char('b');
        form.backspace();
        assert_eq!(form.deal_name.as_text(), "a");
    }

    #[test]
    fn test_cycle_office_full_loop() {
        let mut form = DealForm::new();
        for office in ClgOffice::ALL {
            form.cycle_office();
            assert_eq!(form.clg_office, Some(office));
        }
        form.cycle_office();
        assert!(form.clg_office.is_none());
    }

    #[test]
    fn test_cycle_office_back_from_none() {
        let mut form = DealForm::new();
        form.cycle_office_back();
        assert_eq!(form.clg_office, Some(ClgOffice::SanAntonio));
        form.cycle_office_back();
        assert_eq!(form.clg_office, Some(ClgOffice::Sacramento));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = DealForm::new();
        form.input_char('x');
        form.area_of_interest.select(AreaOfInterest::AssetProtection);
        form.cycle_office();
        form.set_active_field(FIELD_BUTTONS);
        form.clear();
        assert_eq!(form.deal_name.as_text(), "");
        assert!(form.area_of_interest.selected().is_empty());
        assert!(form.clg_office.is_none());
        assert_eq!(form.active_field_index, 0);
    }
}
