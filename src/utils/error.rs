use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Configuration error: {field}={value}: {reason}")]
    Configuration {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Mapping file error: {0}")]
    MappingFile(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EtlError {
    pub fn configuration(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        EtlError::Configuration {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_display() {
        let err = EtlError::configuration("batch_size", 0, "must be a positive integer");
        assert_eq!(
            err.to_string(),
            "Configuration error: batch_size=0: must be a positive integer"
        );
    }

    #[test]
    fn extraction_error_display() {
        let err = EtlError::Extraction("source connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Extraction failed: source connection refused"
        );
    }
}
