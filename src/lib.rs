pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{default_mapping, CliConfig, PipelineConfig};
pub use crate::core::pipeline::ImportPipeline;
pub use crate::core::{batcher, mapper::FieldMapper, submitter::BatchSubmitter};
pub use domain::model::{
    ArtifactRef, Batch, BatchOutcome, BatchPayload, BatchStatus, FieldMap, FieldMapping, Report,
    SourceRecord, TargetRecord,
};
pub use domain::ports::{Clock, Extractor, ReportSink, SubmissionChannel};
pub use utils::error::{EtlError, Result};
