// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Entity classification for prefixed tokens

use serde::{Deserialize, Serialize};

/// Kind of entity a prefixed token refers to
///
/// Derived purely from the token's first character; anything that is not a
/// known prefix classifies as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Table,
    Field,
    Function,
    Reserved,
    Unknown,
}

impl EntityType {
    /// Map a prefix character to its entity type
    pub fn from_prefix(prefix: char) -> Self {
        match prefix {
            '!' => EntityType::Table,
            '#' => EntityType::Field,
            '$' => EntityType::Function,
            '@' => EntityType::Reserved,
            _ => EntityType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prefix() {
        assert_eq!(EntityType::from_prefix('!'), EntityType::Table);
        assert_eq!(EntityType::from_prefix('#'), EntityType::Field);
        assert_eq!(EntityType::from_prefix('$'), EntityType::Function);
        assert_eq!(EntityType::from_prefix('@'), EntityType::Reserved);
        assert_eq!(EntityType::from_prefix('x'), EntityType::Unknown);
    }

    #[test]
    fn test_serde_tag() {
        assert_eq!(
            serde_json::to_string(&EntityType::Field).unwrap(),
            "\"field\""
        );
    }
}
