//! HTTP client for the CRM host's embed bridge
//!
//! The host exposes a small JSON bridge to embedded widgets: record search,
//! batch upsert with dedup fields and workflow triggers, and a UI control
//! channel for closing the widget.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::records::{Entity, FieldMap, RecordSummary, SearchField, UpsertAction, UpsertOutcome};
use super::traits::CrmHostTrait;

/// Default embed bridge address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:7800";

/// Environment variable overriding the bridge address
const ADDRESS_ENV: &str = "DEAL_WIDGET_HOST_ADDRESS";

/// Errors surfaced by the embed bridge client
#[derive(Debug, Error)]
pub enum CrmError {
    #[error("host bridge request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("host returned HTTP {0}")]
    Status(StatusCode),
    #[error("host rejected {entity} record: {message}")]
    Rejected {
        entity: &'static str,
        message: String,
    },
}

/// Client for the CRM host's embed bridge
pub struct CrmHost {
    http: reqwest::Client,
    address: String,
}

impl CrmHost {
    /// Create a new bridge client. The address comes from config, then the
    /// `DEAL_WIDGET_HOST_ADDRESS` environment variable, then the default.
    pub fn new(address: Option<String>, timeout: Duration) -> Result<Self> {
        let address = address
            .or_else(|| std::env::var(ADDRESS_ENV).ok())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, address })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address.trim_end_matches('/'), path)
    }
}

#[derive(Debug, Serialize)]
struct UpsertRequest {
    data: Vec<FieldMap>,
    duplicate_check_fields: Vec<String>,
    trigger: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<RecordSummary>,
}

#[derive(Debug, Deserialize)]
struct UpsertResponse {
    #[serde(default)]
    data: Vec<UpsertRow>,
}

#[derive(Debug, Deserialize)]
struct UpsertRow {
    code: String,
    #[serde(default)]
    message: Option<String>,
    details: Option<UpsertDetails>,
    action: Option<UpsertAction>,
}

#[derive(Debug, Deserialize)]
struct UpsertDetails {
    id: String,
}

/// Map one host response row to an outcome, or the host's rejection
fn outcome_from_row(row: UpsertRow, entity: Entity) -> Result<UpsertOutcome, CrmError> {
    if row.code == "SUCCESS" {
        if let Some(details) = row.details {
            return Ok(UpsertOutcome {
                id: details.id,
                action: row.action.unwrap_or(UpsertAction::Insert),
            });
        }
    }
    Err(CrmError::Rejected {
        entity: entity.api_name(),
        message: row.message.unwrap_or(row.code),
    })
}

#[async_trait]
impl CrmHostTrait for CrmHost {
    async fn check_connection(&self) -> bool {
        match self.http.get(self.url("/api/v1/ping")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn search_records(
        &mut self,
        entity: Entity,
        field: SearchField,
        query: &str,
    ) -> Result<Vec<RecordSummary>> {
        let url = self.url(&format!("/api/v1/records/{}/search", entity.api_name()));
        let resp = self
            .http
            .get(&url)
            .query(&[("field", field.api_name()), ("query", query)])
            .send()
            .await
            .map_err(CrmError::Transport)?;

        // The host answers an empty search with 204 and no body
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        if !resp.status().is_success() {
            return Err(CrmError::Status(resp.status()).into());
        }

        let body: SearchResponse = resp.json().await.map_err(CrmError::Transport)?;
        Ok(body.data)
    }

    async fn upsert_records(
        &mut self,
        entity: Entity,
        records: Vec<FieldMap>,
        dedup_fields: Vec<String>,
        triggers: Vec<String>,
    ) -> Result<Vec<UpsertOutcome>> {
        let url = self.url(&format!("/api/v1/records/{}/upsert", entity.api_name()));
        let request = UpsertRequest {
            data: records,
            duplicate_check_fields: dedup_fields,
            trigger: triggers,
        };

        let resp = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(CrmError::Transport)?;
        if !resp.status().is_success() {
            return Err(CrmError::Status(resp.status()).into());
        }

        let body: UpsertResponse = resp.json().await.map_err(CrmError::Transport)?;
        body.data
            .into_iter()
            .map(|row| outcome_from_row(row, entity).map_err(Into::into))
            .collect()
    }

    async fn close_and_reload(&mut self) -> Result<()> {
        let resp = self
            .http
            .post(self.url("/api/v1/ui/close-reload"))
            .send()
            .await
            .map_err(CrmError::Transport)?;
        if !resp.status().is_success() {
            return Err(CrmError::Status(resp.status()).into());
        }
        Ok(())
    }
}
