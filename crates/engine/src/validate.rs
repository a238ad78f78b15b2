// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Raw-expression validation
//!
//! Surface-level checks on the raw text, surfaced as user-visible messages
//! by the editing layer. The compiler itself never rejects input; these
//! checks are a separate, optional pass.

use compoundql_catalog::FunctionRegistry;
use thiserror::Error;

/// A user-facing problem with the raw expression
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A reserved prefix character appears in the expression
    #[error("The '{0}' character is reserved and cannot be used in an expression")]
    ReservedCharacter(String),

    /// Parentheses do not balance
    #[error("Unbalanced parentheses in the expression")]
    UnbalancedParentheses,

    /// A `$name` token does not match any catalog entry
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}

/// Validate a raw expression against the registry and reserved prefixes
///
/// Checks run in order (reserved characters, parenthesis balance, function
/// names) and the first violation is returned.
pub fn validate_expression(
    text: &str,
    reserved_prefixes: &[String],
    registry: &FunctionRegistry,
) -> Result<(), ValidationError> {
    for prefix in reserved_prefixes {
        if !prefix.is_empty() && text.contains(prefix.as_str()) {
            return Err(ValidationError::ReservedCharacter(prefix.clone()));
        }
    }

    let mut balance = 0i64;
    for c in text.chars() {
        match c {
            '(' => balance += 1,
            ')' => {
                balance -= 1;
                if balance < 0 {
                    return Err(ValidationError::UnbalancedParentheses);
                }
            }
            _ => {}
        }
    }
    if balance != 0 {
        return Err(ValidationError::UnbalancedParentheses);
    }

    for name in function_tokens(text) {
        if !registry.contains(&name) {
            return Err(ValidationError::UnknownFunction(format!("${name}")));
        }
    }

    Ok(())
}

/// Collect the names of all `$name` tokens in the text
fn function_tokens(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut names = Vec::new();
    let mut index = 0;

    while index < chars.len() {
        if chars[index] == '$'
            && index + 1 < chars.len()
            && (chars[index + 1].is_ascii_alphabetic() || chars[index + 1] == '_')
        {
            let start = index + 1;
            let mut end = start;
            while end < chars.len() && (chars[end].is_ascii_alphanumeric() || chars[end] == '_') {
                end += 1;
            }
            names.push(chars[start..end].iter().collect());
            index = end;
        } else {
            index += 1;
        }
    }

    names
}
