// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # compoundql - Expression Compiler
//!
//! Compiles the prefix-tagged expression language into a SQL `WHERE`
//! fragment. Only prefixed tokens and function calls are transformed;
//! everything else passes through verbatim.
//!
//! - `#field` becomes a double-quoted identifier (dotted segments quoted
//!   individually, embedded quotes doubled)
//! - `$func(args)` compiles its arguments recursively, then renders the
//!   call: `now`/`today` as `CURRENT_TIMESTAMP`/`CURRENT_DATE`,
//!   `month`/`year` as `EXTRACT(... FROM ...)`, and anything else as
//!   `SQL_NAME(args)` via the function registry
//! - any other character is copied unchanged
//!
//! ## Error Handling
//!
//! Compilation never fails. Malformed tokens (`#` without an identifier,
//! `$name` without a following `(`) degrade to literal passthrough, and an
//! unknown function name falls back to its uppercased rendering. Validation
//! of the raw expression is a caller concern.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use compoundql_catalog::FunctionRegistry;
//! use compoundql_compiler::Compiler;
//!
//! let registry = FunctionRegistry::builtin();
//! let compiler = Compiler::new(&registry);
//! let sql = compiler.compile("#total > 100 AND $month(#created_at) = 2");
//! assert_eq!(sql, r#""total" > 100 AND EXTRACT(MONTH FROM "created_at") = 2"#);
//! ```

mod compile;

pub use compile::{Compiler, quote_identifier};
