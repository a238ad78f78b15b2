// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Combined context classification
//!
//! Applies the individual detectors in priority order and folds the result
//! into a single enum the suggestion engine can match on.

use crate::call::{FunctionCallContext, extract_function_call_context};
use crate::qualified::{TableFieldContext, extract_table_field_context};
use crate::token::{detect_entity_type, extract_active_token};
use compoundql_ir::EntityType;
use tracing::debug;

/// Classification of the cursor position
///
/// Variants are ordered by detection priority: a qualified field wins over
/// an enclosing function call, which wins over plain token classification.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionContext {
    /// Cursor is completing `!table.field`
    QualifiedField(TableFieldContext),

    /// Cursor is inside a `$name(...)` call
    FunctionArgument(FunctionCallContext),

    /// Cursor touches a prefixed token outside any richer context
    Token {
        /// Entity classification from the token's prefix character
        entity: EntityType,
        /// Token text with the prefix stripped
        query: String,
    },

    /// Cursor does not touch a prefixed token
    Unknown,
}

impl ExpressionContext {
    /// Check if this is a qualified-field context
    pub fn is_qualified_field(&self) -> bool {
        matches!(self, ExpressionContext::QualifiedField(_))
    }

    /// Check if this is a function-argument context
    pub fn is_function_argument(&self) -> bool {
        matches!(self, ExpressionContext::FunctionArgument(_))
    }

    /// Check if this is a plain token context
    pub fn is_token(&self) -> bool {
        matches!(self, ExpressionContext::Token { .. })
    }
}

/// Detect the expression context at the cursor
///
/// Priority order: qualified field, enclosing function call, active token,
/// otherwise [`ExpressionContext::Unknown`].
pub fn detect_expression_context(text: &str, cursor: usize) -> ExpressionContext {
    if let Some(ctx) = extract_table_field_context(text, cursor) {
        debug!(table = %ctx.table_name, query = %ctx.field_query, "qualified field context");
        return ExpressionContext::QualifiedField(ctx);
    }

    if let Some(ctx) = extract_function_call_context(text, cursor) {
        debug!(
            function = %ctx.function_name,
            argument = ctx.current_argument_index,
            "function call context"
        );
        return ExpressionContext::FunctionArgument(ctx);
    }

    match extract_active_token(text, cursor) {
        Some(token) => {
            let entity = detect_entity_type(&token.text);
            let query: String = token.text.chars().skip(1).collect();
            ExpressionContext::Token { entity, query }
        }
        None => ExpressionContext::Unknown,
    }
}
