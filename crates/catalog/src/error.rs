// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for catalog loading
//!
//! The query operations of the engine never fail; errors exist only at the
//! seam where schema and function catalogs are read from files.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading catalog data
#[derive(Debug, Error, Clone, Serialize)]
pub enum CatalogError {
    /// Failed to read a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(String),

    /// Failed to deserialize catalog data
    #[error("Failed to deserialize catalog data: {0}")]
    Serialization(String),

    /// File extension does not map to a supported format
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}
