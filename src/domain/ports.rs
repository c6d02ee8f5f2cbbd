use crate::domain::model::{ArtifactRef, BatchPayload, Report, SourceRecord};
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Reads the full record set from the source system. A failure here is
/// fatal to the run.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourceRecord>>;
}

/// Delivers one batch payload to the target system and names the artifact
/// it produced. Errors are opaque to the core; only their message is kept.
#[async_trait]
pub trait SubmissionChannel: Send + Sync {
    async fn submit(&self, payload: &BatchPayload) -> Result<ArtifactRef>;
}

/// Source of timestamps for injected fields and of timed suspensions for
/// inter-batch pacing. Injectable so tests run without real sleeps.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
    async fn pause(&self, duration: Duration);
}

/// Receives the final report, or the fatal notice when extraction fails
/// before any batch is produced.
pub trait ReportSink: Send + Sync {
    fn emit_report(&self, report: &Report);
    fn emit_fatal(&self, error: &EtlError);
}
