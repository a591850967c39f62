//! CRM host integration: record payloads, client trait, HTTP bridge client

mod client;
mod records;
mod traits;

pub use client::{CrmError, CrmHost};
pub use records::{
    contact_payload, deal_payload, split_contact_name, Entity, FieldMap, RecordSummary,
    SearchField, UpsertAction, UpsertOutcome, INITIAL_DEAL_STAGE, WORKFLOW_TRIGGER,
};
pub use traits::CrmHostTrait;

#[cfg(test)]
pub use traits::MockCrmHostTrait;
