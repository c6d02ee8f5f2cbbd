use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A record as read from the source system. No schema is enforced here;
/// only the fields named in the mapping table are carried forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceRecord {
    pub data: HashMap<String, serde_json::Value>,
}

impl SourceRecord {
    pub fn new(data: HashMap<String, serde_json::Value>) -> Self {
        Self { data }
    }
}

/// A record remapped into the target system's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetRecord {
    pub fields: HashMap<String, serde_json::Value>,
}

impl TargetRecord {
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.fields.get(field)
    }
}

/// One source-field to target-field pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMap {
    pub source: String,
    pub target: String,
}

/// Ordered mapping table driving the transformation. Fixed at configuration
/// time; fields not listed here are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping {
    entries: Vec<FieldMap>,
}

impl FieldMapping {
    pub fn new(entries: Vec<FieldMap>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldMap> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An ordered group of target records submitted as one unit. Numbered 1..N
/// in split order.
#[derive(Debug, Clone)]
pub struct Batch {
    pub number: usize,
    pub records: Vec<TargetRecord>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Opaque reference to the artifact a submission produced on the target side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactRef(String);

impl ArtifactRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Deterministic artifact name for a batch number, zero-padded to at
    /// least three digits so repeated runs stay traceable.
    pub fn for_batch(number: usize) -> Self {
        Self(format!("import_batch_{:03}.json", number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Envelope handed to the submission channel for one batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchPayload {
    pub meta: PayloadMeta,
    pub records: Vec<TargetRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayloadMeta {
    pub batch: usize,
    pub processed_at: DateTime<Utc>,
    pub total_records: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    Success,
    Error,
}

/// Recorded result of submitting one batch. Immutable after creation.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub batch: usize,
    pub records: usize,
    pub status: BatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<ArtifactRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BatchOutcome {
    pub fn success(batch: usize, records: usize, artifact: ArtifactRef) -> Self {
        Self {
            batch,
            records,
            status: BatchStatus::Success,
            artifact: Some(artifact),
            message: None,
        }
    }

    pub fn failure(batch: usize, records: usize, message: impl Into<String>) -> Self {
        Self {
            batch,
            records,
            status: BatchStatus::Error,
            artifact: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == BatchStatus::Success
    }
}

/// End-of-run aggregate over all batch outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total_records: usize,
    pub total_batches: usize,
    pub successful: usize,
    pub failed: usize,
    pub outcomes: Vec<BatchOutcome>,
}

impl Report {
    pub fn from_outcomes(total_records: usize, outcomes: Vec<BatchOutcome>) -> Self {
        let successful = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total_records,
            total_batches: outcomes.len(),
            successful,
            failed: outcomes.len() - successful,
            outcomes,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }
}
