use crate::config::PipelineConfig;
use crate::core::batcher;
use crate::core::mapper::FieldMapper;
use crate::core::submitter::BatchSubmitter;
use crate::domain::model::Report;
use crate::domain::ports::{Clock, Extractor, ReportSink, SubmissionChannel};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;

/// Orchestrates one import run: extract, transform, batch, submit each batch
/// in order with pacing, then aggregate and emit the report.
///
/// Batches are submitted strictly sequentially; no submission starts before
/// the previous outcome is recorded, so report order matches batch order.
#[derive(Debug)]
pub struct ImportPipeline<X, C, K, S>
where
    X: Extractor,
    C: SubmissionChannel,
    K: Clock,
    S: ReportSink,
{
    config: PipelineConfig,
    mapper: FieldMapper,
    extractor: X,
    submitter: BatchSubmitter<C>,
    clock: K,
    sink: S,
}

impl<X, C, K, S> ImportPipeline<X, C, K, S>
where
    X: Extractor,
    C: SubmissionChannel,
    K: Clock,
    S: ReportSink,
{
    /// Validates the configuration up front; no extraction happens for an
    /// invalid batch size or mapping table.
    pub fn new(config: PipelineConfig, extractor: X, channel: C, clock: K, sink: S) -> Result<Self> {
        config.validate()?;

        let mapper = FieldMapper::new(
            config.mapping.clone(),
            config.origin_tag.clone(),
            config.date_field.clone(),
        );

        Ok(Self {
            config,
            mapper,
            extractor,
            submitter: BatchSubmitter::new(channel),
            clock,
            sink,
        })
    }

    pub async fn run(&self) -> Result<Report> {
        tracing::info!("Starting batch import run");

        let source_records = match self.extractor.extract().await {
            Ok(records) => records,
            Err(e) => {
                let err = match e {
                    EtlError::Extraction(_) => e,
                    other => EtlError::Extraction(other.to_string()),
                };
                tracing::error!(error = %err, "Extraction failed, aborting run");
                self.sink.emit_fatal(&err);
                return Err(err);
            }
        };
        tracing::info!(records = source_records.len(), "Extraction complete");

        let transformed = self.mapper.transform(&source_records, &self.clock);
        tracing::info!(records = transformed.len(), "Transformation complete");

        let batches = batcher::split(transformed, self.config.batch_size)?;
        tracing::info!(
            batches = batches.len(),
            batch_size = self.config.batch_size,
            "Records partitioned into batches"
        );

        let last = batches.len();
        let mut outcomes = Vec::with_capacity(last);
        for batch in &batches {
            let outcome = self.submitter.submit(batch, self.clock.now()).await;
            outcomes.push(outcome);

            // Throttle between batches so the target system is never hit
            // back to back. No pause after the final batch.
            if batch.number < last {
                self.clock.pause(self.config.pause).await;
            }
        }

        let report = Report::from_outcomes(source_records.len(), outcomes);
        tracing::info!(
            total_records = report.total_records,
            total_batches = report.total_batches,
            successful = report.successful,
            failed = report.failed,
            "Import run complete"
        );
        self.sink.emit_report(&report);

        Ok(report)
    }
}
