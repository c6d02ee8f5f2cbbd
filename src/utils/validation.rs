use crate::domain::model::FieldMapping;
use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(EtlError::configuration(
            field_name,
            value,
            format!("value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::configuration(
            field_name,
            value,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// A mapping table must pair non-empty names and be a bijection: no source
/// name and no target name may appear twice.
pub fn validate_field_mapping(field_name: &str, mapping: &FieldMapping) -> Result<()> {
    if mapping.is_empty() {
        return Err(EtlError::configuration(
            field_name,
            "[]",
            "mapping table cannot be empty",
        ));
    }

    let mut sources: HashSet<&str> = HashSet::new();
    let mut targets: HashSet<&str> = HashSet::new();

    for entry in mapping.iter() {
        if entry.source.trim().is_empty() || entry.target.trim().is_empty() {
            return Err(EtlError::configuration(
                field_name,
                format!("{} -> {}", entry.source, entry.target),
                "field names cannot be empty",
            ));
        }
        if !sources.insert(entry.source.as_str()) {
            return Err(EtlError::configuration(
                field_name,
                entry.source.clone(),
                "duplicate source field name",
            ));
        }
        if !targets.insert(entry.target.as_str()) {
            return Err(EtlError::configuration(
                field_name,
                entry.target.clone(),
                "duplicate target field name",
            ));
        }
    }

    Ok(())
}
