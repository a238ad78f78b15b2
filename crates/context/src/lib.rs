// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # compoundql - Cursor Context Detection
//!
//! This crate analyzes a `(text, cursor)` pair to determine what kind of
//! entity is being typed at the caret. There is no syntax tree: the
//! expression language is four prefixes plus balanced parentheses, so every
//! detector is a single linear character scan.
//!
//! ## Core concepts
//!
//! ### Active token
//!
//! The prefixed token, if any, whose span ends exactly at the cursor
//! ([`extract_active_token`]). Its first character classifies the entity
//! being typed ([`detect_entity_type`]).
//!
//! ### Qualified field context
//!
//! An in-progress `!table.field` pattern immediately left of the cursor
//! ([`extract_table_field_context`]). Takes priority over generic token
//! classification, since it narrows the suggestion universe to one table.
//!
//! ### Function call context
//!
//! The innermost enclosing `$name(` call and the index of the argument
//! being typed ([`extract_function_call_context`]), found by a backward
//! scan over an integer parenthesis-depth counter.
//!
//! ### Combined classification
//!
//! [`detect_expression_context`] applies the three detectors in priority
//! order and returns an [`ExpressionContext`] for the engine to match on.
//!
//! ## Cursor positions
//!
//! All cursor positions are **character** offsets and are clamped to
//! `[0, char_len]`; no operation can panic on out-of-range or multi-byte
//! input.

pub mod call;
pub mod completion;
pub mod qualified;
pub mod token;

// Re-export commonly used types
pub use call::{FunctionCallContext, extract_function_call_context};
pub use completion::{ExpressionContext, detect_expression_context};
pub use qualified::{TableFieldContext, extract_table_field_context};
pub use token::{ActiveToken, detect_entity_type, extract_active_token};
