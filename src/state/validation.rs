//! Client-side validation for the intake form
//!
//! Validation runs on every submit attempt and fully replaces the error
//! mapping, so stale messages from earlier attempts never linger.

use super::form::DealForm;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Identifies a form field in the error mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    DealName,
    Contact,
    Email,
    AreaOfInterest,
    ClgOffice,
}

/// Per-field validation messages; empty means the form is valid
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors(HashMap<FieldId, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

fn email_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Validate the form. Pure function of the current field values; every rule
/// is evaluated, nothing short-circuits.
///
/// Areas of interest and office are intentionally optional.
pub fn validate(form: &DealForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.deal_name.is_blank() {
        errors.insert(FieldId::DealName, "Deal name is required.");
    }
    if !form.contact.is_blank() && form.email.is_blank() {
        errors.insert(FieldId::Email, "Email is required.");
    }
    if !form.email.is_blank() && !email_shape().is_match(form.email.as_text()) {
        errors.insert(FieldId::Email, "Invalid email format.");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(deal: &str, contact: &str, email: &str) -> DealForm {
        let mut form = DealForm::new();
        form.deal_name.set_text(deal);
        form.contact.set_text(contact);
        form.email.set_text(email);
        form
    }

    #[test]
    fn test_deal_name_required() {
        let form = form_with("", "", "");
        let errors = validate(&form);
        assert_eq!(errors.get(FieldId::DealName), Some("Deal name is required."));
    }

    #[test]
    fn test_deal_name_whitespace_only_is_required() {
        // Trimming applies, so whitespace does not count as a name
        let form = form_with("   ", "Jane Doe", "jane@example.com");
        let errors = validate(&form);
        assert_eq!(errors.get(FieldId::DealName), Some("Deal name is required."));
    }

    #[test]
    fn test_email_required_when_contact_given() {
        let form = form_with("Trust Setup", "Jane Doe", "");
        let errors = validate(&form);
        assert_eq!(errors.get(FieldId::Email), Some("Email is required."));
    }

    #[test]
    fn test_email_not_required_without_contact() {
        let form = form_with("Trust Setup", "", "");
        let errors = validate(&form);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_format_rejected() {
        let form = form_with("Trust Setup", "Jane Doe", "not-an-email");
        let errors = validate(&form);
        assert_eq!(errors.get(FieldId::Email), Some("Invalid email format."));
    }

    #[test]
    fn test_email_format_accepted() {
        let form = form_with("Trust Setup", "Jane Doe", "a@b.co");
        let errors = validate(&form);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_without_tld_rejected() {
        let form = form_with("Trust Setup", "", "a@b");
        let errors = validate(&form);
        assert_eq!(errors.get(FieldId::Email), Some("Invalid email format."));
    }

    #[test]
    fn test_all_rules_evaluated() {
        // Both deal name and email fail together
        let form = form_with("", "Jane Doe", "bad");
        let errors = validate(&form);
        assert!(errors.get(FieldId::DealName).is_some());
        assert_eq!(errors.get(FieldId::Email), Some("Invalid email format."));
    }

    #[test]
    fn test_areas_and_office_optional() {
        let form = form_with("Trust Setup", "", "");
        let errors = validate(&form);
        assert!(errors.get(FieldId::AreaOfInterest).is_none());
        assert!(errors.get(FieldId::ClgOffice).is_none());
    }

    #[test]
    fn test_valid_form_yields_empty_mapping() {
        let mut form = form_with("Trust Setup", "John Smith", "john@example.com");
        form.cycle_office();
        let errors = validate(&form);
        assert!(errors.is_empty());
    }
}
