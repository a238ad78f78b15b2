// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Catalog loading from YAML and JSON files
//!
//! Schemas deserialize from the shape `{ tables: [{ name, fields: [{ name,
//! type }] }] }`; function catalogs from a flat definition list. The format
//! is picked by file extension (`.yaml`/`.yml`/`.json`).

use std::fs;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use compoundql_ir::{DbSchema, FunctionDefinition};
use tracing::debug;

/// Parse a schema from a YAML string
pub fn schema_from_yaml_str(source: &str) -> CatalogResult<DbSchema> {
    serde_yaml::from_str(source).map_err(|e| CatalogError::Serialization(e.to_string()))
}

/// Parse a schema from a JSON string
pub fn schema_from_json_str(source: &str) -> CatalogResult<DbSchema> {
    serde_json::from_str(source).map_err(|e| CatalogError::Serialization(e.to_string()))
}

/// Parse a function catalog from a YAML string
pub fn functions_from_yaml_str(source: &str) -> CatalogResult<Vec<FunctionDefinition>> {
    serde_yaml::from_str(source).map_err(|e| CatalogError::Serialization(e.to_string()))
}

/// Parse a function catalog from a JSON string
pub fn functions_from_json_str(source: &str) -> CatalogResult<Vec<FunctionDefinition>> {
    serde_json::from_str(source).map_err(|e| CatalogError::Serialization(e.to_string()))
}

/// Load a schema from a file, picking the format by extension
pub fn schema_from_file(path: impl AsRef<Path>) -> CatalogResult<DbSchema> {
    let path = path.as_ref();
    let format = extension(path)?;
    let source = read(path)?;
    let schema = match format {
        Format::Yaml => schema_from_yaml_str(&source)?,
        Format::Json => schema_from_json_str(&source)?,
    };
    debug!(tables = schema.tables.len(), path = %path.display(), "loaded schema");
    Ok(schema)
}

/// Load a function catalog from a file, picking the format by extension
pub fn functions_from_file(path: impl AsRef<Path>) -> CatalogResult<Vec<FunctionDefinition>> {
    let path = path.as_ref();
    let format = extension(path)?;
    let source = read(path)?;
    let functions = match format {
        Format::Yaml => functions_from_yaml_str(&source)?,
        Format::Json => functions_from_json_str(&source)?,
    };
    debug!(functions = functions.len(), path = %path.display(), "loaded function catalog");
    Ok(functions)
}

enum Format {
    Yaml,
    Json,
}

fn extension(path: &Path) -> CatalogResult<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        other => Err(CatalogError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn read(path: &Path) -> CatalogResult<String> {
    fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use compoundql_ir::FieldType;

    #[test]
    fn test_schema_from_yaml() {
        let schema = schema_from_yaml_str(
            r#"
tables:
  - name: users
    fields:
      - name: id
        type: integer
      - name: name
        type: string
"#,
        )
        .unwrap();
        assert_eq!(schema.tables.len(), 1);
        assert_eq!(
            schema.table("users").unwrap().field("id").unwrap().field_type,
            FieldType::Integer
        );
    }

    #[test]
    fn test_schema_from_json() {
        let schema = schema_from_json_str(
            r#"{"tables":[{"name":"orders","fields":[{"name":"total","type":"decimal"}]}]}"#,
        )
        .unwrap();
        assert_eq!(schema.tables[0].name, "orders");
    }

    #[test]
    fn test_functions_from_yaml_with_overloads() {
        let functions = functions_from_yaml_str(
            r##"
- name: month
  signature: month()
  category: date
  description: Month of the current date
- name: month
  signature: month(field)
  category: date
  description: Month of a date field
  arguments: ["#field"]
"##,
        )
        .unwrap();
        assert_eq!(functions.len(), 2);
        assert!(functions[0].arguments.is_empty());
        assert_eq!(functions[1].arguments, vec!["#field"]);
    }

    #[test]
    fn test_invalid_yaml_reports_serialization_error() {
        let err = schema_from_yaml_str("tables: 3").unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = schema_from_file("schema.toml").unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
    }
}
