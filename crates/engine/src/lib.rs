// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # compoundql - Engine
//!
//! The facade crate tying the pipelines together. An [`Engine`] is built
//! once from a schema and a function catalog, then answers pure queries:
//!
//! ```text
//! (text, cursor) ──► suggestions() ──────► Vec<Suggestion>
//! (text, cursor) ──► function_argument_hint() ──► FunctionArgumentHint
//! (text, cursor, suggestion) ──► apply_suggestion() ──► new text + cursor
//! text ──► compile() ──► SQL WHERE fragment
//! text ──► validate() ──► Result<(), ValidationError>
//! ```
//!
//! Every operation is a synchronous, side-effect-free function of its
//! arguments plus the read-only schema/catalog data; repeated or concurrent
//! calls are trivially safe. The expression text is owned by the caller;
//! the engine never mutates it except through the explicit
//! [`Engine::apply_suggestion`] splice, which returns a fresh string.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use compoundql_catalog::demo::demo_schema;
//! use compoundql_engine::Engine;
//!
//! let engine = Engine::with_schema(demo_schema());
//! let sql = engine.compile("#total > 100 AND $month(#created_at) = 2");
//! let suggestions = engine.suggestions("!users.", 7);
//! ```

pub mod engine;
pub mod render;
pub mod validate;

// Re-export commonly used types
pub use engine::{AppliedSuggestion, Engine, EngineOptions};
pub use render::SuggestionRenderer;
pub use validate::ValidationError;

// Convenience re-exports from the data model
pub use compoundql_ir::{
    DbField, DbSchema, DbTable, EntityType, FieldType, FunctionArgumentHint, FunctionCategory,
    FunctionDefinition, Suggestion,
};
