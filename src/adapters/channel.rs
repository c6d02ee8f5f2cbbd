use crate::domain::model::{ArtifactRef, BatchPayload};
use crate::domain::ports::SubmissionChannel;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Stand-in for the target system's write channel. Serializes the payload
/// as a real connector would, waits out a configurable latency, and names
/// the artifact after the batch number.
pub struct SimulatedChannel {
    latency: Duration,
}

impl SimulatedChannel {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SubmissionChannel for SimulatedChannel {
    async fn submit(&self, payload: &BatchPayload) -> Result<ArtifactRef> {
        let body = serde_json::to_vec(payload)?;

        tokio::time::sleep(self.latency).await;

        let artifact = ArtifactRef::for_batch(payload.meta.batch);
        tracing::debug!(
            artifact = %artifact,
            bytes = body.len(),
            "Simulated submission accepted"
        );
        Ok(artifact)
    }
}
