// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # compoundql - Catalog Layer
//!
//! This crate holds the read-only data the engine and compiler consult:
//!
//! - [`FunctionRegistry`]: ordered function definitions with
//!   case-insensitive lookup and arity-based overload resolution
//! - [`builtin::default_functions`]: the builtin function catalog
//! - [`demo::demo_schema`]: a small schema for tests and playgrounds
//! - [`loader`]: YAML/JSON catalog loading
//!
//! ## Overloads
//!
//! The catalog may carry several definitions sharing a name with different
//! argument counts. There is no type information; an overload is selected
//! purely by the index of the argument being typed:
//!
//! 1. prefer the first overload with a slot at that index,
//! 2. else the zero-argument overload when the index is 0,
//! 3. else the first overload with arguments, else the first overall.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use compoundql_catalog::FunctionRegistry;
//!
//! let registry = FunctionRegistry::builtin();
//! let month = registry.resolve("month", 0);
//! assert_eq!(month.unwrap().arguments.len(), 1);
//! ```

pub mod builtin;
pub mod demo;
pub mod error;
pub mod loader;
pub mod registry;

// Re-exports
pub use error::{CatalogError, CatalogResult};
pub use registry::FunctionRegistry;
