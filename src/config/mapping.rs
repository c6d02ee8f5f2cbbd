use crate::domain::model::{FieldMap, FieldMapping};
use crate::utils::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Field-mapping table loaded from a TOML file:
///
/// ```toml
/// date_field = "date_of_birth"
///
/// [[fields]]
/// source = "legacy_id"
/// target = "code"
/// ```
///
/// The `[[fields]]` tables keep their declaration order, which is the order
/// the mapper applies them in.
#[derive(Debug, Deserialize)]
pub struct MappingFile {
    #[serde(default)]
    pub date_field: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldMap>,
}

#[derive(Debug)]
pub struct LoadedMapping {
    pub mapping: FieldMapping,
    pub date_field: Option<String>,
}

pub fn load_mapping(path: &Path) -> Result<LoadedMapping> {
    let raw = std::fs::read_to_string(path)?;
    let parsed: MappingFile = toml::from_str(&raw)?;
    Ok(LoadedMapping {
        mapping: FieldMapping::new(parsed.fields),
        date_field: parsed.date_field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_mapping(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_fields_in_declaration_order() {
        let file = write_mapping(
            r#"
            [[fields]]
            source = "b"
            target = "two"

            [[fields]]
            source = "a"
            target = "one"
            "#,
        );

        let loaded = load_mapping(file.path()).unwrap();
        let sources: Vec<&str> = loaded.mapping.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, vec!["b", "a"]);
        assert!(loaded.date_field.is_none());
    }

    #[test]
    fn honors_date_field_override() {
        let file = write_mapping(
            r#"
            date_field = "hired_on"

            [[fields]]
            source = "hire_date"
            target = "hired_on"
            "#,
        );

        let loaded = load_mapping(file.path()).unwrap();
        assert_eq!(loaded.date_field.as_deref(), Some("hired_on"));
        assert_eq!(loaded.mapping.len(), 1);
    }

    #[test]
    fn invalid_toml_is_a_mapping_file_error() {
        let file = write_mapping("fields = not toml");
        let err = load_mapping(file.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::EtlError::MappingFile(_)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_mapping(Path::new("/nonexistent/mapping.toml")).unwrap_err();
        assert!(matches!(err, crate::utils::error::EtlError::Io(_)));
    }
}
