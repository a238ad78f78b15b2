// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Function-call context detection
//!
//! Finds the innermost `$name(` call enclosing the cursor by scanning the
//! left-hand text right to left over an integer parenthesis-depth counter.
//! No structural parse and no backtracking: a single linear pass.

/// An enclosing function call and the argument slot being typed
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCallContext {
    /// Name of the enclosing function (without the `$` prefix)
    pub function_name: String,
    /// Zero-based index of the argument currently being typed
    pub current_argument_index: usize,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Detect the innermost enclosing `$name(` call
///
/// Each `)` seen while scanning backward enters an already-closed nested
/// call; each `(` either closes one (depth > 0) or, at depth 0, is the
/// opening parenthesis of the enclosing call. The run of identifier
/// characters before that opener (whitespace skipped) must be preceded by
/// `$`, otherwise there is no enclosing call.
///
/// The argument index is the literal comma count of the text between the
/// opener and the cursor, zero when that text is blank.
pub fn extract_function_call_context(text: &str, cursor: usize) -> Option<FunctionCallContext> {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let mut depth = 0usize;
    for index in (0..cursor).rev() {
        match chars[index] {
            ')' => depth += 1,
            '(' if depth > 0 => depth -= 1,
            '(' => {
                let mut name_end = index;
                while name_end > 0 && chars[name_end - 1].is_whitespace() {
                    name_end -= 1;
                }

                let mut name_start = name_end;
                while name_start > 0 && is_name_char(chars[name_start - 1]) {
                    name_start -= 1;
                }

                if name_start == name_end
                    || name_start == 0
                    || chars[name_start - 1] != '$'
                {
                    return None;
                }

                let function_name: String = chars[name_start..name_end].iter().collect();
                let raw_arguments: String = chars[index + 1..cursor].iter().collect();
                let current_argument_index = if raw_arguments.trim().is_empty() {
                    0
                } else {
                    raw_arguments.matches(',').count()
                };

                return Some(FunctionCallContext {
                    function_name,
                    current_argument_index,
                });
            }
            _ => {}
        }
    }

    None
}
