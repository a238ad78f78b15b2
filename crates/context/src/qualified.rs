// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Qualified-field context detection
//!
//! Recognizes an in-progress `!table.field` reference immediately left of
//! the cursor. A literal `.` after a table token is the trigger; this
//! narrows the suggestion universe to that table's fields only.

/// An in-progress qualified field reference
#[derive(Debug, Clone, PartialEq)]
pub struct TableFieldContext {
    /// Table named before the dot (verbatim, matched case-insensitively)
    pub table_name: String,
    /// Partial field text after the dot; may be empty
    pub field_query: String,
}

fn is_name_char(c: char) -> bool {
    // Unlike generic token characters, table/field names exclude '.'
    c.is_ascii_alphanumeric() || c == '_'
}

/// Detect a `!table.field` pattern anchored at the cursor
///
/// Matches `!` + identifier + `.` + zero-or-more identifier characters,
/// ending exactly at the (clamped) cursor.
pub fn extract_table_field_context(text: &str, cursor: usize) -> Option<TableFieldContext> {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let mut field_start = cursor;
    while field_start > 0 && is_name_char(chars[field_start - 1]) {
        field_start -= 1;
    }
    if field_start == 0 || chars[field_start - 1] != '.' {
        return None;
    }

    let dot = field_start - 1;
    let mut table_start = dot;
    while table_start > 0 && is_name_char(chars[table_start - 1]) {
        table_start -= 1;
    }
    if table_start == dot || table_start == 0 || chars[table_start - 1] != '!' {
        return None;
    }

    Some(TableFieldContext {
        table_name: chars[table_start..dot].iter().collect(),
        field_query: chars[field_start..cursor].iter().collect(),
    })
}
