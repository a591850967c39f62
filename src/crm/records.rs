//! Record payloads exchanged with the CRM host

use crate::state::DealForm;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Pipeline stage assigned to every deal this widget creates
pub const INITIAL_DEAL_STAGE: &str = "Start";

/// Workflow trigger name passed on every upsert
pub const WORKFLOW_TRIGGER: &str = "workflow";

/// Host record collections this widget touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Contacts,
    Deals,
}

impl Entity {
    pub fn api_name(&self) -> &'static str {
        match self {
            Self::Contacts => "Contacts",
            Self::Deals => "Deals",
        }
    }
}

/// Match-field kinds accepted by the host search endpoint
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Email,
    Phone,
    Word,
}

impl SearchField {
    pub fn api_name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Word => "word",
        }
    }
}

/// Field map for one record in an upsert batch
pub type FieldMap = Map<String, Value>;

/// Summary row returned by a record search
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct RecordSummary {
    pub id: String,
    #[serde(rename = "Full_Name")]
    pub full_name: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Created_Time")]
    pub created_time: Option<DateTime<Utc>>,
}

/// What the host did with one upserted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertAction {
    Insert,
    Update,
}

/// Descriptor for one successfully upserted record
#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    pub id: String,
    pub action: UpsertAction,
}

/// Split a free-text contact name into (first, last).
///
/// The last whitespace token becomes the last name; every preceding token is
/// concatenated with no separator into the first name. Lossy for multi-word
/// first names and single-token input (the whole name lands in last name),
/// but it matches what the host already stores.
pub fn split_contact_name(name: &str) -> (String, String) {
    let mut tokens: Vec<&str> = name.split_whitespace().collect();
    let last = tokens.pop().unwrap_or_default().to_string();
    let first = tokens.concat();
    (first, last)
}

/// Contact field map derived from the form's free-text fields
pub fn contact_payload(contact: &str, email: &str) -> FieldMap {
    let (first_name, last_name) = split_contact_name(contact);
    let mut record = FieldMap::new();
    record.insert("Email".to_string(), Value::String(email.to_string()));
    record.insert("Last_Name".to_string(), Value::String(last_name));
    record.insert("First_Name".to_string(), Value::String(first_name));
    record
}

/// Deal field map for the current form values.
///
/// Areas_of_Interest is a one-element outer list wrapping the full ordered
/// selection; that nesting is the shape the host field currently receives,
/// so it is kept as-is.
pub fn deal_payload(form: &DealForm, contact_id: &str) -> FieldMap {
    let areas: Vec<Value> = form
        .area_of_interest
        .labels()
        .into_iter()
        .map(|label| Value::String(label.to_string()))
        .collect();

    let mut record = FieldMap::new();
    record.insert(
        "Deal_Name".to_string(),
        Value::String(form.deal_name.as_text().to_string()),
    );
    record.insert(
        "Stage".to_string(),
        Value::String(INITIAL_DEAL_STAGE.to_string()),
    );
    record.insert(
        "Deal_Email".to_string(),
        Value::String(form.email.as_text().to_string()),
    );
    record.insert(
        "Contact_Name".to_string(),
        Value::String(contact_id.to_string()),
    );
    record.insert(
        "Quick_Contact".to_string(),
        Value::String(form.contact.as_text().to_string()),
    );
    record.insert(
        "CLG_Office".to_string(),
        Value::String(
            form.clg_office
                .map(|office| office.label())
                .unwrap_or_default()
                .to_string(),
        ),
    );
    record.insert(
        "Areas_of_Interest".to_string(),
        Value::Array(vec![Value::Array(areas)]),
    );
    record
}
