// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Suggestion rendering
//!
//! Converts schema and catalog entries into [`Suggestion`] value objects.
//! The `value` field is the literal text spliced into the expression; the
//! `label` adds display-only detail such as the field type.

use compoundql_ir::{DbField, DbTable, EntityType, FunctionDefinition, Suggestion};

/// Suggestion renderer
///
/// Free constructors for each suggestion shape.
pub struct SuggestionRenderer;

impl SuggestionRenderer {
    /// Render a table completion (`!name`)
    pub fn table(table: &DbTable) -> Suggestion {
        let value = format!("!{}", table.name);
        Suggestion::new(EntityType::Table, value.clone(), value, "Database table")
    }

    /// Render an unqualified field completion (`#name`)
    pub fn unqualified_field(field: &DbField, table: &DbTable) -> Suggestion {
        let value = format!("#{}", field.name);
        let label = format!("{} ({})", value, field.field_type.as_str());
        Suggestion::new(
            EntityType::Field,
            value,
            label,
            format!("Field of table {}", table.name),
        )
    }

    /// Render a qualified field completion (`#table.name`)
    ///
    /// `scoped` marks suggestions produced inside a `!table.` context, where
    /// the table is already known and the description names it.
    pub fn qualified_field(field: &DbField, table: &DbTable, scoped: bool) -> Suggestion {
        let value = format!("#{}.{}", table.name, field.name);
        let label = format!("{} ({})", value, field.field_type.as_str());
        let description = if scoped {
            format!("Field of table {}", table.name)
        } else {
            "Qualified field".to_string()
        };
        Suggestion::new(EntityType::Field, value, label, description)
    }

    /// Render a function completion (`$signature`)
    pub fn function(definition: &FunctionDefinition) -> Suggestion {
        let value = format!("${}", definition.signature);
        Suggestion::new(
            EntityType::Function,
            value.clone(),
            value,
            format!(
                "{}: {}",
                definition.category.as_str(),
                definition.description
            ),
        )
    }

    /// Render a reserved-prefix completion
    pub fn reserved(prefix: &str, query: &str) -> Suggestion {
        Suggestion::new(
            EntityType::Reserved,
            format!("{prefix}{query}"),
            prefix,
            "Reserved prefix",
        )
    }
}
