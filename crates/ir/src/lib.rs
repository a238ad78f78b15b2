// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # compoundql - Core Data Model
//!
//! This crate defines the value types shared by the compoundql crates:
//!
//! - Schema metadata ([`DbSchema`], [`DbTable`], [`DbField`], [`FieldType`])
//! - Function catalog entries ([`FunctionDefinition`], [`FunctionCategory`])
//! - Entity classification for prefixed tokens ([`EntityType`])
//! - Suggestion and hint value types ([`Suggestion`], [`FunctionArgumentHint`])
//!
//! All types are immutable value objects with structural equality. They are
//! supplied once to the engine and treated as read-only for its lifetime.
//!
//! ## Prefixed tokens
//!
//! The expression language tags references with a single prefix character:
//!
//! | Prefix | Meaning         | Example       |
//! |--------|-----------------|---------------|
//! | `!`    | table reference | `!users`      |
//! | `#`    | field reference | `#created_at` |
//! | `$`    | function call   | `$month(...)` |
//! | `@`    | reserved        | `@`           |

pub mod entity;
pub mod metadata;
pub mod suggestion;

// Re-export commonly used types
pub use entity::EntityType;
pub use metadata::{DbField, DbSchema, DbTable, FieldType, FunctionCategory, FunctionDefinition};
pub use suggestion::{FunctionArgumentHint, Suggestion};
