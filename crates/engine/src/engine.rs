// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Engine
//!
//! Orchestrates context detection, suggestion rendering, argument hints,
//! suggestion application and compilation over read-only schema/catalog
//! data. The caret and text are explicit parameters on every call; the
//! engine itself holds no cursor state.

use std::collections::HashSet;

use compoundql_catalog::FunctionRegistry;
use compoundql_compiler::Compiler;
use compoundql_context::{
    ExpressionContext, detect_entity_type, detect_expression_context, extract_active_token,
    extract_function_call_context,
};
use compoundql_ir::{
    DbSchema, DbTable, EntityType, FunctionArgumentHint, FunctionDefinition, Suggestion,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::SuggestionRenderer;
use crate::validate::{ValidationError, validate_expression};

/// Construction options for an [`Engine`]
///
/// Only the schema is required; the function catalog defaults to the
/// builtin set and the reserved prefixes default to `@`.
pub struct EngineOptions {
    schema: DbSchema,
    functions: Option<Vec<FunctionDefinition>>,
    reserved_prefixes: Option<Vec<String>>,
}

impl EngineOptions {
    /// Start options from a schema
    pub fn new(schema: DbSchema) -> Self {
        Self {
            schema,
            functions: None,
            reserved_prefixes: None,
        }
    }

    /// Builder method: replace the function catalog
    pub fn with_functions(mut self, functions: Vec<FunctionDefinition>) -> Self {
        self.functions = Some(functions);
        self
    }

    /// Builder method: replace the reserved prefixes
    pub fn with_reserved_prefixes(mut self, prefixes: &[&str]) -> Self {
        self.reserved_prefixes = Some(prefixes.iter().map(|p| p.to_string()).collect());
        self
    }
}

/// Result of splicing a suggestion into the expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedSuggestion {
    /// Updated expression text
    pub text: String,
    /// New cursor position (character offset), just after the inserted value
    pub cursor: usize,
}

/// Expression engine
///
/// Holds the read-only schema, function registry and reserved prefixes, and
/// answers pure queries about caller-owned expression text.
pub struct Engine {
    schema: DbSchema,
    registry: FunctionRegistry,
    reserved_prefixes: Vec<String>,
}

impl Engine {
    /// Create an engine from options
    pub fn new(options: EngineOptions) -> Self {
        let registry = match options.functions {
            Some(functions) => FunctionRegistry::new(functions),
            None => FunctionRegistry::builtin(),
        };
        Self {
            schema: options.schema,
            registry,
            reserved_prefixes: options
                .reserved_prefixes
                .unwrap_or_else(|| vec!["@".to_string()]),
        }
    }

    /// Create an engine over a schema with builtin functions and defaults
    pub fn with_schema(schema: DbSchema) -> Self {
        Self::new(EngineOptions::new(schema))
    }

    /// The schema this engine was built with
    pub fn schema(&self) -> &DbSchema {
        &self.schema
    }

    /// The function registry this engine was built with
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Get ordered, de-duplicated completions for the cursor position
    ///
    /// Priority: a qualified `!table.` context narrows to that table's
    /// fields; a function-argument context expecting a field reference
    /// yields annotated field suggestions; otherwise the active token's
    /// prefix decides. Matching is always case-insensitive substring
    /// containment.
    pub fn suggestions(&self, text: &str, cursor: usize) -> Vec<Suggestion> {
        match detect_expression_context(text, cursor) {
            ExpressionContext::QualifiedField(ctx) => {
                self.field_suggestions(&ctx.field_query, Some(&ctx.table_name))
            }
            ExpressionContext::FunctionArgument(call) => {
                let expects_field = self
                    .registry
                    .resolve(&call.function_name, call.current_argument_index)
                    .map(|d| d.expects_field(call.current_argument_index))
                    .unwrap_or(false);
                if expects_field {
                    let query: String = extract_active_token(text, cursor)
                        .filter(|t| t.text.starts_with('#'))
                        .map(|t| t.text.chars().skip(1).collect())
                        .unwrap_or_default();
                    debug!(
                        function = %call.function_name,
                        argument = call.current_argument_index,
                        "field-argument suggestions"
                    );
                    self.field_suggestions(&query, None)
                        .into_iter()
                        .map(|s| {
                            let description = format!(
                                "{} (argument {} for ${})",
                                s.description,
                                call.current_argument_index + 1,
                                call.function_name
                            );
                            s.with_description(description)
                        })
                        .collect()
                } else {
                    // The slot does not take a field; fall back to plain
                    // token classification under the cursor.
                    self.token_suggestions(text, cursor)
                }
            }
            ExpressionContext::Token { entity, query } => self.entity_suggestions(entity, &query),
            ExpressionContext::Unknown => Vec::new(),
        }
    }

    /// Get positional feedback for the enclosing function call
    ///
    /// An unrecognized function still yields a degenerate hint with a
    /// synthesized `name()` signature and no argument descriptors.
    pub fn function_argument_hint(&self, text: &str, cursor: usize) -> Option<FunctionArgumentHint> {
        let ctx = extract_function_call_context(text, cursor)?;
        let hint = match self
            .registry
            .resolve(&ctx.function_name, ctx.current_argument_index)
        {
            Some(definition) => FunctionArgumentHint {
                function_name: definition.name.clone(),
                signature: definition.signature.clone(),
                current_argument_index: ctx.current_argument_index,
                arguments: definition.arguments.clone(),
            },
            None => FunctionArgumentHint {
                function_name: ctx.function_name.clone(),
                signature: format!("{}()", ctx.function_name),
                current_argument_index: ctx.current_argument_index,
                arguments: Vec::new(),
            },
        };
        Some(hint)
    }

    /// Human-readable rendering of [`Engine::function_argument_hint`]
    pub fn function_argument_hint_text(&self, text: &str, cursor: usize) -> Option<String> {
        let hint = self.function_argument_hint(text, cursor)?;

        if hint.arguments.is_empty() {
            return Some(format!("${}: takes no arguments", hint.signature));
        }

        match hint.arguments.get(hint.current_argument_index) {
            Some(argument) => Some(format!(
                "${}: argument {} is {}",
                hint.signature,
                hint.current_argument_index + 1,
                argument
            )),
            None => Some(format!(
                "${}: expects {} arguments",
                hint.signature,
                hint.arguments.len()
            )),
        }
    }

    /// Splice a suggestion over the active token
    ///
    /// Replaces the token ending at the cursor with `suggestion.value` and
    /// places the cursor just after it. A no-op (returning the input text
    /// unchanged) when the caret does not touch a prefixed token.
    pub fn apply_suggestion(
        &self,
        text: &str,
        cursor: usize,
        suggestion: &Suggestion,
    ) -> AppliedSuggestion {
        let chars: Vec<char> = text.chars().collect();
        let cursor = cursor.min(chars.len());

        match extract_active_token(text, cursor) {
            None => AppliedSuggestion {
                text: text.to_string(),
                cursor,
            },
            Some(token) => {
                let before: String = chars[..token.start].iter().collect();
                let after: String = chars[cursor..].iter().collect();
                AppliedSuggestion {
                    text: format!("{before}{}{after}", suggestion.value),
                    cursor: token.start + suggestion.value.chars().count(),
                }
            }
        }
    }

    /// Compile the expression into a SQL `WHERE` fragment
    pub fn compile(&self, text: &str) -> String {
        Compiler::new(&self.registry).compile(text)
    }

    /// Validate the raw expression (reserved characters, parenthesis
    /// balance, known function names)
    pub fn validate(&self, text: &str) -> Result<(), ValidationError> {
        validate_expression(text, &self.reserved_prefixes, &self.registry)
    }

    fn token_suggestions(&self, text: &str, cursor: usize) -> Vec<Suggestion> {
        match extract_active_token(text, cursor) {
            Some(token) => {
                let entity = detect_entity_type(&token.text);
                let query: String = token.text.chars().skip(1).collect();
                self.entity_suggestions(entity, &query)
            }
            None => Vec::new(),
        }
    }

    fn entity_suggestions(&self, entity: EntityType, query: &str) -> Vec<Suggestion> {
        let query = query.to_lowercase();
        match entity {
            EntityType::Table => self
                .schema
                .tables
                .iter()
                .filter(|t| t.name.to_lowercase().contains(&query))
                .map(SuggestionRenderer::table)
                .collect(),
            EntityType::Field => self.field_suggestions(&query, None),
            EntityType::Function => {
                // Overloads sharing a signature collapse to one entry
                let mut seen = HashSet::new();
                self.registry
                    .matching(&query)
                    .into_iter()
                    .map(SuggestionRenderer::function)
                    .filter(|s| seen.insert(s.value.clone()))
                    .collect()
            }
            EntityType::Reserved => self
                .reserved_prefixes
                .iter()
                .map(|prefix| SuggestionRenderer::reserved(prefix, &query))
                .collect(),
            EntityType::Unknown => Vec::new(),
        }
    }

    /// Field suggestions matching `#query`, optionally scoped to one table
    ///
    /// Unscoped matching is anchored on the rendered value (`#` + query),
    /// so a bare field query never surfaces qualified forms unless the
    /// query itself spells the table. Scoped matching filters on the field
    /// name and emits both forms for every hit. Either way the unqualified
    /// form precedes the qualified form per table, tables in schema order,
    /// de-duplicated by value with first-wins metadata.
    fn field_suggestions(&self, query: &str, table_name: Option<&str>) -> Vec<Suggestion> {
        let query = query.to_lowercase();
        let anchored = format!("#{query}");
        let scoped = table_name.is_some();
        let tables: Vec<&DbTable> = match table_name {
            Some(name) => self
                .schema
                .tables
                .iter()
                .filter(|t| t.name.eq_ignore_ascii_case(name))
                .collect(),
            None => self.schema.tables.iter().collect(),
        };

        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();
        for table in tables {
            for field in &table.fields {
                let name_matches = field.name.to_lowercase().contains(&query);

                let unqualified = SuggestionRenderer::unqualified_field(field, table);
                let keep = if scoped {
                    name_matches
                } else {
                    unqualified.value.to_lowercase().contains(&anchored)
                };
                if keep && seen.insert(unqualified.value.clone()) {
                    suggestions.push(unqualified);
                }

                let qualified = SuggestionRenderer::qualified_field(field, table, scoped);
                let keep = if scoped {
                    name_matches
                } else {
                    qualified.value.to_lowercase().contains(&anchored)
                };
                if keep && seen.insert(qualified.value.clone()) {
                    suggestions.push(qualified);
                }
            }
        }
        suggestions
    }
}
