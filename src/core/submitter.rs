use crate::domain::model::{Batch, BatchOutcome, BatchPayload, PayloadMeta};
use crate::domain::ports::SubmissionChannel;
use chrono::{DateTime, Utc};

/// Submits one batch at a time over the channel, converting every channel
/// failure into an `ERROR` outcome. One bad batch never aborts the run or
/// touches the outcomes of other batches.
#[derive(Debug)]
pub struct BatchSubmitter<C: SubmissionChannel> {
    channel: C,
}

impl<C: SubmissionChannel> BatchSubmitter<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    pub async fn submit(&self, batch: &Batch, processed_at: DateTime<Utc>) -> BatchOutcome {
        tracing::info!(
            batch = batch.number,
            records = batch.len(),
            "Submitting batch"
        );

        let payload = BatchPayload {
            meta: PayloadMeta {
                batch: batch.number,
                processed_at,
                total_records: batch.len(),
            },
            records: batch.records.clone(),
        };

        match self.channel.submit(&payload).await {
            Ok(artifact) => {
                tracing::debug!(batch = batch.number, artifact = %artifact, "Batch accepted");
                BatchOutcome::success(batch.number, batch.len(), artifact)
            }
            Err(e) => {
                tracing::warn!(batch = batch.number, error = %e, "Batch submission failed");
                BatchOutcome::failure(batch.number, batch.len(), e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ArtifactRef, BatchStatus, TargetRecord};
    use crate::utils::error::{EtlError, Result};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::collections::HashMap;

    struct OkChannel;

    #[async_trait]
    impl SubmissionChannel for OkChannel {
        async fn submit(&self, payload: &BatchPayload) -> Result<ArtifactRef> {
            Ok(ArtifactRef::for_batch(payload.meta.batch))
        }
    }

    struct FailingChannel;

    #[async_trait]
    impl SubmissionChannel for FailingChannel {
        async fn submit(&self, _payload: &BatchPayload) -> Result<ArtifactRef> {
            Err(EtlError::Submission("target rejected the payload".to_string()))
        }
    }

    fn batch(number: usize, count: usize) -> Batch {
        Batch {
            number,
            records: (0..count)
                .map(|i| TargetRecord {
                    fields: HashMap::from([("seq".to_string(), Value::from(i as u64))]),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn successful_submission_carries_artifact_ref() {
        let submitter = BatchSubmitter::new(OkChannel);
        let outcome = submitter.submit(&batch(7, 3), Utc::now()).await;

        assert_eq!(outcome.status, BatchStatus::Success);
        assert_eq!(outcome.batch, 7);
        assert_eq!(outcome.records, 3);
        assert_eq!(
            outcome.artifact.unwrap().as_str(),
            "import_batch_007.json"
        );
        assert!(outcome.message.is_none());
    }

    #[tokio::test]
    async fn channel_failure_becomes_error_outcome() {
        let submitter = BatchSubmitter::new(FailingChannel);
        let outcome = submitter.submit(&batch(3, 100), Utc::now()).await;

        assert_eq!(outcome.status, BatchStatus::Error);
        assert_eq!(outcome.batch, 3);
        assert_eq!(outcome.records, 100);
        assert!(outcome.artifact.is_none());
        assert_eq!(
            outcome.message.as_deref(),
            Some("Submission failed: target rejected the payload")
        );
    }
}
