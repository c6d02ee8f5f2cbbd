use crate::domain::model::SourceRecord;
use crate::domain::ports::Extractor;
use crate::utils::error::Result;
use async_trait::async_trait;
use rand::Rng;
use serde_json::Value;
use std::collections::HashMap;

/// Stand-in for a real source connector: generates legacy-shaped records
/// the way the upstream application would hand them over. Birth dates are
/// deliberately unpadded `D/M/YYYY` strings, the format the mapper has to
/// normalize.
pub struct SyntheticExtractor {
    record_count: usize,
}

impl SyntheticExtractor {
    pub fn new(record_count: usize) -> Self {
        Self { record_count }
    }
}

#[async_trait]
impl Extractor for SyntheticExtractor {
    async fn extract(&self) -> Result<Vec<SourceRecord>> {
        tracing::info!(
            count = self.record_count,
            "Generating sample records from the legacy system"
        );

        let mut rng = rand::thread_rng();
        let mut records = Vec::with_capacity(self.record_count);

        for i in 1..=self.record_count {
            let birth_date = format!(
                "{}/{}/{}",
                rng.gen_range(1..=28),
                rng.gen_range(1..=12),
                rng.gen_range(1970..2000)
            );
            let amount = (rng.gen::<f64>() * 10_000.0 * 100.0).round() / 100.0;
            let status = if rng.gen_bool(0.8) { "ACTIVE" } else { "INACTIVE" };

            let data = HashMap::from([
                (
                    "legacy_id".to_string(),
                    Value::String(format!("L{:05}", i)),
                ),
                (
                    "full_name".to_string(),
                    Value::String(format!("Sample User {}", i)),
                ),
                ("birth_date".to_string(), Value::String(birth_date)),
                ("amount".to_string(), Value::from(amount)),
                ("status".to_string(), Value::String(status.to_string())),
            ]);
            records.push(SourceRecord::new(data));
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generates_requested_number_of_records() {
        let records = SyntheticExtractor::new(25).extract().await.unwrap();
        assert_eq!(records.len(), 25);
    }

    #[tokio::test]
    async fn records_carry_the_legacy_schema() {
        let records = SyntheticExtractor::new(1).extract().await.unwrap();
        let data = &records[0].data;

        assert_eq!(data.get("legacy_id"), Some(&Value::String("L00001".to_string())));
        assert!(data.contains_key("full_name"));
        assert!(data.contains_key("amount"));
        assert!(data.contains_key("status"));

        let birth_date = data.get("birth_date").unwrap().as_str().unwrap();
        assert_eq!(birth_date.split('/').count(), 3);
    }

    #[tokio::test]
    async fn zero_count_yields_no_records() {
        let records = SyntheticExtractor::new(0).extract().await.unwrap();
        assert!(records.is_empty());
    }
}
