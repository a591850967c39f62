//! Trait abstraction for the CRM host client to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

use super::records::{Entity, FieldMap, RecordSummary, SearchField, UpsertOutcome};

/// Capabilities the host exposes to an embedded widget
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrmHostTrait: Send + Sync {
    /// Check if the host embed bridge is reachable
    async fn check_connection(&self) -> bool;

    /// Search a record collection by an exact field match
    async fn search_records(
        &mut self,
        entity: Entity,
        field: SearchField,
        query: &str,
    ) -> Result<Vec<RecordSummary>>;

    /// Create-or-update records, keyed by the given dedup fields, with the
    /// named workflow triggers enabled
    async fn upsert_records(
        &mut self,
        entity: Entity,
        records: Vec<FieldMap>,
        dedup_fields: Vec<String>,
        triggers: Vec<String>,
    ) -> Result<Vec<UpsertOutcome>>;

    /// Ask the host to close the widget and reload the underlying view
    async fn close_and_reload(&mut self) -> Result<()>;
}
