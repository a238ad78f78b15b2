// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Metadata types for schema and function catalog information
//!
//! This module defines the types used to represent the database schema
//! (tables and fields) and the function catalog consumed by the suggestion
//! engine and the compiler. Both are supplied as already-validated data and
//! never mutated by the core.

use serde::{Deserialize, Serialize};

/// Semantic field types (closed set)
///
/// `Text` keeps the original `string` tag on the wire for compatibility with
/// existing schema files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Integer,
    Decimal,
    #[serde(rename = "string")]
    Text,
    Timestamp,
    Date,
    Boolean,
}

impl FieldType {
    /// Lower-case tag used in suggestion labels
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Decimal => "decimal",
            FieldType::Text => "string",
            FieldType::Timestamp => "timestamp",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
        }
    }
}

/// A single field of a database table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbField {
    /// Field name
    pub name: String,
    /// Semantic field type
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl DbField {
    /// Create a new field
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// A database table with its ordered field list
///
/// Fields are assumed unique by name within a table; this is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbTable {
    /// Table name (preserved verbatim for output)
    pub name: String,
    /// Ordered field definitions
    pub fields: Vec<DbField>,
}

impl DbTable {
    /// Create a new table without fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder method: set fields
    pub fn with_fields(mut self, fields: Vec<DbField>) -> Self {
        self.fields = fields;
        self
    }

    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&DbField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// An ordered collection of tables
///
/// Table names are matched case-insensitively but preserved verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DbSchema {
    /// Ordered table definitions
    pub tables: Vec<DbTable>,
}

impl DbSchema {
    /// Create a schema from a table list
    pub fn new(tables: Vec<DbTable>) -> Self {
        Self { tables }
    }

    /// Case-insensitive table lookup
    pub fn table(&self, name: &str) -> Option<&DbTable> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

/// Function catalog categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionCategory {
    Math,
    String,
    Date,
}

impl FunctionCategory {
    /// Lower-case tag used in suggestion descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionCategory::Math => "math",
            FunctionCategory::String => "string",
            FunctionCategory::Date => "date",
        }
    }
}

/// A function catalog entry
///
/// Several entries may share a `name` with different argument counts; those
/// are overloads, disambiguated by arity alone. An argument descriptor
/// starting with `#` signals that the slot expects a field reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Case-insensitive lookup key
    pub name: String,
    /// Display signature, e.g. `month(field)`
    pub signature: String,
    /// Catalog category
    pub category: FunctionCategory,
    /// Human-readable description
    pub description: String,
    /// Ordered argument descriptors; empty for zero-argument overloads
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,
    /// SQL identifier override; defaults to the uppercased name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_name: Option<String>,
}

impl FunctionDefinition {
    /// Create a new definition with builder pattern
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            category: FunctionCategory::Math,
            description: String::new(),
            arguments: Vec::new(),
            sql_name: None,
        }
    }

    /// Builder method: set category
    pub fn with_category(mut self, category: FunctionCategory) -> Self {
        self.category = category;
        self
    }

    /// Builder method: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method: set argument descriptors
    pub fn with_arguments(mut self, arguments: &[&str]) -> Self {
        self.arguments = arguments.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Builder method: set the emitted SQL identifier
    pub fn with_sql_name(mut self, sql_name: impl Into<String>) -> Self {
        self.sql_name = Some(sql_name.into());
        self
    }

    /// SQL identifier to emit for this function
    pub fn sql_name(&self) -> String {
        self.sql_name
            .clone()
            .unwrap_or_else(|| self.name.to_uppercase())
    }

    /// Whether the argument at `index` expects a field reference
    pub fn expects_field(&self, index: usize) -> bool {
        self.arguments
            .get(index)
            .is_some_and(|a| a.starts_with('#'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_serde_tags() {
        let json = serde_json::to_string(&FieldType::Text).unwrap();
        assert_eq!(json, "\"string\"");
        let back: FieldType = serde_json::from_str("\"timestamp\"").unwrap();
        assert_eq!(back, FieldType::Timestamp);
    }

    #[test]
    fn test_schema_table_lookup_case_insensitive() {
        let schema = DbSchema::new(vec![
            DbTable::new("Users").with_fields(vec![DbField::new("id", FieldType::Integer)]),
        ]);
        let table = schema.table("users").unwrap();
        // Verbatim name preserved
        assert_eq!(table.name, "Users");
        assert!(schema.table("orders").is_none());
    }

    #[test]
    fn test_function_sql_name_fallback() {
        let plain = FunctionDefinition::new("month", "month(field)");
        assert_eq!(plain.sql_name(), "MONTH");

        let overridden =
            FunctionDefinition::new("length", "length(field)").with_sql_name("CHAR_LENGTH");
        assert_eq!(overridden.sql_name(), "CHAR_LENGTH");
    }

    #[test]
    fn test_expects_field() {
        let def = FunctionDefinition::new("round", "round(field, precision)")
            .with_arguments(&["#field", "precision"]);
        assert!(def.expects_field(0));
        assert!(!def.expects_field(1));
        assert!(!def.expects_field(2));
    }

    #[test]
    fn test_field_deserializes_from_schema_file_shape() {
        let field: DbField = serde_json::from_str(r#"{"name":"total","type":"decimal"}"#).unwrap();
        assert_eq!(field, DbField::new("total", FieldType::Decimal));
    }
}
