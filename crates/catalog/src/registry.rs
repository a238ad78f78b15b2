// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Function registry with arity-based overload resolution

use crate::builtin;
use compoundql_ir::FunctionDefinition;

/// Ordered collection of function definitions
///
/// Catalog order is significant: suggestion lists preserve it, and overload
/// resolution prefers earlier entries among equally good candidates.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    definitions: Vec<FunctionDefinition>,
}

impl FunctionRegistry {
    /// Create a registry from an explicit definition list
    pub fn new(definitions: Vec<FunctionDefinition>) -> Self {
        Self { definitions }
    }

    /// Create a registry with the builtin function catalog loaded
    pub fn builtin() -> Self {
        Self::new(builtin::default_functions())
    }

    /// All definitions in catalog order
    pub fn definitions(&self) -> &[FunctionDefinition] {
        &self.definitions
    }

    /// Definitions whose name contains `query` (case-insensitive)
    pub fn matching<'a>(&'a self, query: &str) -> Vec<&'a FunctionDefinition> {
        let query = query.to_lowercase();
        self.definitions
            .iter()
            .filter(|d| d.name.to_lowercase().contains(&query))
            .collect()
    }

    /// First definition matching `name` exactly (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&FunctionDefinition> {
        self.definitions
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// Check whether any definition carries `name`
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Pick the best overload of `name` for the argument slot being typed
    ///
    /// Returns `None` only when the name is unknown; otherwise some overload
    /// always resolves, even if the index is past every declared slot.
    pub fn resolve(&self, name: &str, argument_index: usize) -> Option<&FunctionDefinition> {
        let overloads: Vec<&FunctionDefinition> = self
            .definitions
            .iter()
            .filter(|d| d.name.eq_ignore_ascii_case(name))
            .collect();
        if overloads.is_empty() {
            return None;
        }

        let with_arguments: Vec<&FunctionDefinition> = overloads
            .iter()
            .copied()
            .filter(|d| !d.arguments.is_empty())
            .collect();

        if let Some(exact) = with_arguments
            .iter()
            .find(|d| argument_index < d.arguments.len())
        {
            return Some(exact);
        }

        if argument_index == 0 {
            if let Some(zero) = overloads.iter().find(|d| d.arguments.is_empty()) {
                return Some(zero);
            }
        }

        with_arguments
            .first()
            .copied()
            .or_else(|| overloads.first().copied())
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compoundql_ir::FunctionCategory;

    fn month_overloads() -> FunctionRegistry {
        FunctionRegistry::new(vec![
            FunctionDefinition::new("month", "month()")
                .with_category(FunctionCategory::Date)
                .with_description("Month of the current date"),
            FunctionDefinition::new("month", "month(field)")
                .with_category(FunctionCategory::Date)
                .with_description("Month of a date field")
                .with_arguments(&["#field"]),
        ])
    }

    #[test]
    fn test_find_case_insensitive() {
        let registry = FunctionRegistry::builtin();
        assert!(registry.find("MONTH").is_some());
        assert!(registry.find("Month").is_some());
        assert!(registry.find("nonexistent").is_none());
    }

    #[test]
    fn test_resolve_prefers_overload_with_slot() {
        let registry = month_overloads();
        // Typing inside $month( must offer the 1-argument overload even
        // though a zero-argument month() is listed first.
        let resolved = registry.resolve("month", 0).unwrap();
        assert_eq!(resolved.arguments, vec!["#field"]);
    }

    #[test]
    fn test_resolve_zero_argument_fallback() {
        let registry = FunctionRegistry::new(vec![
            FunctionDefinition::new("now", "now()").with_category(FunctionCategory::Date),
        ]);
        let resolved = registry.resolve("now", 0).unwrap();
        assert!(resolved.arguments.is_empty());
    }

    #[test]
    fn test_resolve_past_last_slot_falls_back() {
        let registry = month_overloads();
        // Index 3 is past the only declared slot; the first overload with
        // arguments still resolves.
        let resolved = registry.resolve("month", 3).unwrap();
        assert_eq!(resolved.arguments.len(), 1);
    }

    #[test]
    fn test_resolve_unknown_name() {
        let registry = FunctionRegistry::builtin();
        assert!(registry.resolve("frobnicate", 0).is_none());
    }

    #[test]
    fn test_matching_substring() {
        let registry = FunctionRegistry::builtin();
        let hits = registry.matching("oun");
        assert!(hits.iter().any(|d| d.name == "count"));
        assert!(registry.matching("").len() >= registry.matching("oun").len());
    }
}
