//! Application state definitions

use super::form::DealForm;
use super::validation::ValidationErrors;

/// Outcome of the most recent submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    /// No submission in progress
    #[default]
    Idle,
    /// Remote calls are being issued
    InFlight,
    /// The deal upsert failed; the form keeps its values for a retry
    Failed(String),
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The intake form, the single source of truth for field values
    pub form: DealForm,
    /// Validation messages from the last submit attempt
    pub errors: ValidationErrors,
    /// Remote submission progress
    pub submit_status: SubmitStatus,
    /// Whether the host embed bridge answered the startup probe
    pub host_connected: bool,
}
