use crate::domain::model::{FieldMapping, SourceRecord, TargetRecord};
use crate::domain::ports::Clock;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::collections::HashMap;

/// Target field carrying the run timestamp, injected into every record.
pub const IMPORTED_AT_FIELD: &str = "imported_at";
/// Target field carrying the origin tag, injected into every record.
pub const ORIGIN_FIELD: &str = "source_system";

/// Remaps source records into the target schema, one output per input.
///
/// Mapping is permissive: a source field missing from a record maps to an
/// explicit null, and a date value that does not split into three slash
/// components passes through unchanged. Transformation never fails, so
/// dirty data cannot abort a run.
#[derive(Debug)]
pub struct FieldMapper {
    mapping: FieldMapping,
    origin_tag: String,
    date_field: String,
}

impl FieldMapper {
    pub fn new(
        mapping: FieldMapping,
        origin_tag: impl Into<String>,
        date_field: impl Into<String>,
    ) -> Self {
        Self {
            mapping,
            origin_tag: origin_tag.into(),
            date_field: date_field.into(),
        }
    }

    pub fn transform(&self, records: &[SourceRecord], clock: &dyn Clock) -> Vec<TargetRecord> {
        records
            .iter()
            .map(|record| self.map_record(record, clock.now()))
            .collect()
    }

    fn map_record(&self, record: &SourceRecord, now: DateTime<Utc>) -> TargetRecord {
        let mut fields = HashMap::with_capacity(self.mapping.len() + 2);

        for entry in self.mapping.iter() {
            let value = record.data.get(&entry.source).cloned().unwrap_or(Value::Null);
            fields.insert(entry.target.clone(), value);
        }

        fields.insert(
            IMPORTED_AT_FIELD.to_string(),
            Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        fields.insert(
            ORIGIN_FIELD.to_string(),
            Value::String(self.origin_tag.clone()),
        );

        let reformatted = match fields.get(&self.date_field) {
            Some(Value::String(raw)) => reformat_slash_date(raw),
            _ => None,
        };
        if let Some(iso) = reformatted {
            fields.insert(self.date_field.clone(), Value::String(iso));
        }

        TargetRecord { fields }
    }
}

/// Rewrites `D/M/Y` into zero-padded `Y-MM-DD`. Returns `None` for anything
/// that does not split into exactly three components; the caller keeps the
/// original value in that case.
fn reformat_slash_date(raw: &str) -> Option<String> {
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    Some(format!("{}-{:0>2}-{:0>2}", parts[2], parts[1], parts[0]))
}
