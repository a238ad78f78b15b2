// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builtin function catalog
//!
//! The default set of functions offered by the suggestion engine. `now`,
//! `today`, `month` and `year` additionally have dedicated SQL renderings in
//! the compiler; everything else is emitted as `SQL_NAME(args)`.

use compoundql_ir::FunctionCategory::{Date, Math, String as Str};
use compoundql_ir::FunctionDefinition;

/// Get the default function catalog
pub fn default_functions() -> Vec<FunctionDefinition> {
    vec![
        // Date functions
        FunctionDefinition::new("now", "now()")
            .with_category(Date)
            .with_description("Current date and time"),
        FunctionDefinition::new("today", "today()")
            .with_category(Date)
            .with_description("Current date"),
        FunctionDefinition::new("month", "month()")
            .with_category(Date)
            .with_description("Month of the current date"),
        FunctionDefinition::new("month", "month(field)")
            .with_category(Date)
            .with_description("Month of a date field")
            .with_arguments(&["#field"]),
        FunctionDefinition::new("year", "year()")
            .with_category(Date)
            .with_description("Year of the current date"),
        FunctionDefinition::new("year", "year(field)")
            .with_category(Date)
            .with_description("Year of a date field")
            .with_arguments(&["#field"]),
        FunctionDefinition::new("day", "day(field)")
            .with_category(Date)
            .with_description("Day of month of a date field")
            .with_arguments(&["#field"]),
        // Math functions
        FunctionDefinition::new("sum", "sum(field)")
            .with_category(Math)
            .with_description("Sum of values")
            .with_arguments(&["#field"]),
        FunctionDefinition::new("avg", "avg(field)")
            .with_category(Math)
            .with_description("Average of values")
            .with_arguments(&["#field"]),
        FunctionDefinition::new("min", "min(field)")
            .with_category(Math)
            .with_description("Minimum value")
            .with_arguments(&["#field"]),
        FunctionDefinition::new("max", "max(field)")
            .with_category(Math)
            .with_description("Maximum value")
            .with_arguments(&["#field"]),
        FunctionDefinition::new("count", "count(field)")
            .with_category(Math)
            .with_description("Count of non-null values")
            .with_arguments(&["#field"]),
        FunctionDefinition::new("abs", "abs(field)")
            .with_category(Math)
            .with_description("Absolute value")
            .with_arguments(&["#field"]),
        FunctionDefinition::new("round", "round(field, precision)")
            .with_category(Math)
            .with_description("Round to the given number of decimal places")
            .with_arguments(&["#field", "precision"]),
        // String functions
        FunctionDefinition::new("upper", "upper(field)")
            .with_category(Str)
            .with_description("Convert to uppercase")
            .with_arguments(&["#field"]),
        FunctionDefinition::new("lower", "lower(field)")
            .with_category(Str)
            .with_description("Convert to lowercase")
            .with_arguments(&["#field"]),
        FunctionDefinition::new("trim", "trim(field)")
            .with_category(Str)
            .with_description("Remove leading and trailing whitespace")
            .with_arguments(&["#field"]),
        FunctionDefinition::new("length", "length(field)")
            .with_category(Str)
            .with_description("String length")
            .with_arguments(&["#field"])
            .with_sql_name("CHAR_LENGTH"),
        FunctionDefinition::new("concat", "concat(field, field)")
            .with_category(Str)
            .with_description("Concatenate two values")
            .with_arguments(&["#field", "#field"]),
    ]
}
