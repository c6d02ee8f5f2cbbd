pub mod batcher;
pub mod mapper;
pub mod pipeline;
pub mod submitter;

pub use crate::domain::model::{Batch, BatchOutcome, Report, SourceRecord, TargetRecord};
pub use crate::domain::ports::{Clock, Extractor, ReportSink, SubmissionChannel};
pub use crate::utils::error::Result;
