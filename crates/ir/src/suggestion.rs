// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Suggestion and argument-hint value types
//!
//! Both types are pure outputs: they are recomputed on every query and never
//! persisted. A suggestion list is order-significant (schema order, then
//! catalog order) and de-duplicated by `value`.

use crate::entity::EntityType;
use serde::{Deserialize, Serialize};

/// A candidate completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Entity classification of the completion
    pub entity: EntityType,
    /// Literal text spliced into the expression when applied
    pub value: String,
    /// Display text
    pub label: String,
    /// Display description
    pub description: String,
}

impl Suggestion {
    /// Create a new suggestion
    pub fn new(
        entity: EntityType,
        value: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            entity,
            value: value.into(),
            label: label.into(),
            description: description.into(),
        }
    }

    /// Builder method: replace the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Positional feedback for an in-progress function call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionArgumentHint {
    /// Name of the enclosing function
    pub function_name: String,
    /// Display signature of the resolved overload
    pub signature: String,
    /// Zero-based index of the argument being typed
    pub current_argument_index: usize,
    /// Argument descriptors of the resolved overload; empty when the
    /// function is unknown or takes no arguments
    pub arguments: Vec<String>,
}
