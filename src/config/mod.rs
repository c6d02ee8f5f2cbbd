pub mod mapping;

use crate::domain::model::{FieldMap, FieldMapping};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_field_mapping, validate_non_empty_string, validate_positive_number, Validate,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "batch-etl")]
#[command(about = "Batch import pipeline: extract, remap and submit records in paced batches")]
pub struct CliConfig {
    /// Maximum records per batch
    #[arg(long, default_value = "100")]
    pub batch_size: usize,

    /// Number of synthetic source records to generate
    #[arg(long, default_value = "350")]
    pub record_count: usize,

    /// Pause between consecutive batch submissions, in milliseconds
    #[arg(long, default_value = "200")]
    pub pause_ms: u64,

    /// Simulated latency of each submission, in milliseconds
    #[arg(long, default_value = "500")]
    pub latency_ms: u64,

    /// Origin tag injected into every target record
    #[arg(long, default_value = "LEGACY_APP")]
    pub origin_tag: String,

    /// Target field holding a D/M/Y date to normalize
    #[arg(long, default_value = "date_of_birth")]
    pub date_field: String,

    /// TOML file overriding the built-in field mapping
    #[arg(long)]
    pub mapping_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves the mapping table (file override or built-in default) and
    /// folds the CLI flags into a pipeline configuration.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let (mapping, date_field) = match &self.mapping_file {
            Some(path) => {
                let loaded = mapping::load_mapping(path)?;
                (
                    loaded.mapping,
                    loaded.date_field.unwrap_or_else(|| self.date_field.clone()),
                )
            }
            None => (default_mapping(), self.date_field.clone()),
        };

        Ok(PipelineConfig {
            batch_size: self.batch_size,
            pause: Duration::from_millis(self.pause_ms),
            origin_tag: self.origin_tag.clone(),
            date_field,
            mapping,
        })
    }
}

/// Everything the orchestrator needs for one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub batch_size: usize,
    pub pause: Duration,
    pub origin_tag: String,
    pub date_field: String,
    pub mapping: FieldMapping,
}

impl Validate for PipelineConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("batch_size", self.batch_size, 1)?;
        validate_non_empty_string("origin_tag", &self.origin_tag)?;
        validate_non_empty_string("date_field", &self.date_field)?;
        validate_field_mapping("field_mapping", &self.mapping)?;
        Ok(())
    }
}

/// Mapping from the legacy application's schema to the target system's.
pub fn default_mapping() -> FieldMapping {
    FieldMapping::new(vec![
        FieldMap {
            source: "legacy_id".to_string(),
            target: "code".to_string(),
        },
        FieldMap {
            source: "full_name".to_string(),
            target: "name".to_string(),
        },
        FieldMap {
            source: "birth_date".to_string(),
            target: "date_of_birth".to_string(),
        },
        FieldMap {
            source: "amount".to_string(),
            target: "total_amount".to_string(),
        },
    ])
}
