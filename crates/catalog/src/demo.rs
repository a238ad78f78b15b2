// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Demo schema
//!
//! A small predefined schema used by playgrounds and tests, so nothing has
//! to reach a real database.

use compoundql_ir::{DbField, DbSchema, DbTable, FieldType};

/// Get the demo schema (`users` and `orders`)
pub fn demo_schema() -> DbSchema {
    DbSchema::new(vec![
        DbTable::new("users").with_fields(vec![
            DbField::new("id", FieldType::Integer),
            DbField::new("name", FieldType::Text),
            DbField::new("email", FieldType::Text),
            DbField::new("created_at", FieldType::Timestamp),
        ]),
        DbTable::new("orders").with_fields(vec![
            DbField::new("id", FieldType::Integer),
            DbField::new("user_id", FieldType::Integer),
            DbField::new("total", FieldType::Decimal),
            DbField::new("created_at", FieldType::Timestamp),
        ]),
    ])
}
