// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Active-token extraction and entity classification

use compoundql_ir::EntityType;

/// The prefixed token under the caret
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveToken {
    /// Token text including its prefix character
    pub text: String,
    /// Start of the token, as a character offset into the expression
    pub start: usize,
}

/// Check whether `c` may appear in a prefixed token after the prefix
pub(crate) fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

pub(crate) fn is_prefix_char(c: char) -> bool {
    matches!(c, '!' | '#' | '$' | '@')
}

/// Extract the prefixed token ending exactly at the cursor
///
/// Scans left from the (clamped) cursor over the longest run of
/// `[A-Za-z0-9_.]` characters, then requires a prefix character (`!`, `#`,
/// `$` or `@`) immediately before the run. Returns `None` when the caret is
/// not inside or immediately after such a token.
pub fn extract_active_token(text: &str, cursor: usize) -> Option<ActiveToken> {
    if text.is_empty() {
        return None;
    }

    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let mut start = cursor;
    while start > 0 && is_token_char(chars[start - 1]) {
        start -= 1;
    }
    if start == 0 || !is_prefix_char(chars[start - 1]) {
        return None;
    }
    start -= 1;

    Some(ActiveToken {
        text: chars[start..cursor].iter().collect(),
        start,
    })
}

/// Classify a token by its first character
///
/// Empty tokens classify as [`EntityType::Unknown`].
pub fn detect_entity_type(token: &str) -> EntityType {
    token
        .chars()
        .next()
        .map(EntityType::from_prefix)
        .unwrap_or(EntityType::Unknown)
}
