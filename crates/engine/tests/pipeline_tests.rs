// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Compile, hint, apply and validate integration tests
//!
//! End-to-end checks of the non-suggestion operations through the engine
//! facade.

use compoundql_engine::{
    DbField, DbSchema, DbTable, Engine, EntityType, FieldType, Suggestion, ValidationError,
};

fn orders_engine() -> Engine {
    Engine::with_schema(DbSchema::new(vec![DbTable::new("orders").with_fields(
        vec![
            DbField::new("total", FieldType::Decimal),
            DbField::new("created_at", FieldType::Timestamp),
        ],
    )]))
}

#[test]
fn test_compile_scenario() {
    let engine = orders_engine();
    assert_eq!(
        engine.compile("#total > 100 AND $month(#created_at) = 2"),
        "\"total\" > 100 AND EXTRACT(MONTH FROM \"created_at\") = 2"
    );
}

#[test]
fn test_compile_without_tokens_is_trimmed_passthrough() {
    let engine = orders_engine();
    assert_eq!(engine.compile("  total > 100 AND x = 1  "), "total > 100 AND x = 1");
}

#[test]
fn test_compile_quotes_dotted_identifiers() {
    let engine = orders_engine();
    assert_eq!(
        engine.compile("#orders.total > 100"),
        "\"orders\".\"total\" > 100"
    );
    // The quoting helper itself doubles embedded quotes.
    assert_eq!(compoundql_compiler::quote_identifier("a\"b"), "\"a\"\"b\"");
}

#[test]
fn test_compile_nested_calls_resolve_independently() {
    let engine = orders_engine();
    assert_eq!(
        engine.compile("$sum(#a, $avg(#b, #c))"),
        "SUM(\"a\", AVG(\"b\", \"c\"))"
    );
}

#[test]
fn test_compile_temporal_functions() {
    let engine = orders_engine();
    assert_eq!(engine.compile("$now()"), "CURRENT_TIMESTAMP");
    assert_eq!(engine.compile("$now(#created_at)"), "CURRENT_TIMESTAMP");
    assert_eq!(engine.compile("$today()"), "CURRENT_DATE");
    assert_eq!(engine.compile("$month()"), "EXTRACT(MONTH FROM CURRENT_DATE)");
    assert_eq!(
        engine.compile("$year(#created_at)"),
        "EXTRACT(YEAR FROM \"created_at\")"
    );
}

#[test]
fn test_compile_never_consults_cursor_or_schema() {
    // Unknown fields and tables still compile; only the catalog matters.
    let engine = orders_engine();
    assert_eq!(engine.compile("#no_such_field = 1"), "\"no_such_field\" = 1");
}

#[test]
fn test_hint_prefers_overload_with_slot() {
    let engine = orders_engine();

    let hint = engine.function_argument_hint("$month(", 7).unwrap();

    assert_eq!(hint.signature, "month(field)");
    assert_eq!(hint.current_argument_index, 0);
    assert_eq!(hint.arguments, vec!["#field"]);
}

#[test]
fn test_hint_without_enclosing_call_is_none() {
    let engine = orders_engine();
    assert!(engine.function_argument_hint("#total > 100", 12).is_none());
    assert!(engine.function_argument_hint("$month(#a)", 10).is_none());
}

#[test]
fn test_hint_counts_nested_commas_literally() {
    let engine = orders_engine();

    // The comma inside the closed inner call still advances the index.
    let text = "$sum($avg(#a, #b), ";
    let hint = engine
        .function_argument_hint(text, text.chars().count())
        .unwrap();

    assert_eq!(hint.function_name, "sum");
    assert_eq!(hint.current_argument_index, 2);
}

#[test]
fn test_apply_suggestion_is_pure() {
    let engine = orders_engine();
    let text = "x AND #tot".to_string();
    let suggestion = Suggestion::new(EntityType::Field, "#total", "#total (decimal)", "");

    let first = engine.apply_suggestion(&text, 10, &suggestion);
    let second = engine.apply_suggestion(&text, 10, &suggestion);

    assert_eq!(text, "x AND #tot");
    assert_eq!(first, second);
    assert_eq!(first.text, "x AND #total");
    assert_eq!(first.cursor, 12);
}

#[test]
fn test_apply_suggestion_midline_keeps_tail() {
    let engine = orders_engine();
    let suggestion = Suggestion::new(EntityType::Table, "!orders", "!orders", "");

    let applied = engine.apply_suggestion("!ord AND #total > 1", 4, &suggestion);

    assert_eq!(applied.text, "!orders AND #total > 1");
    assert_eq!(applied.cursor, 7);
}

#[test]
fn test_validate_accepts_well_formed_expression() {
    let engine = orders_engine();
    assert_eq!(
        engine.validate("#total > 100 AND $month(#created_at) = 2"),
        Ok(())
    );
}

#[test]
fn test_validate_reports_reserved_character_first() {
    let engine = orders_engine();
    assert_eq!(
        engine.validate("@x AND $unknown("),
        Err(ValidationError::ReservedCharacter("@".to_string()))
    );
}

#[test]
fn test_validate_reports_unbalanced_parentheses() {
    let engine = orders_engine();
    assert_eq!(
        engine.validate("$sum(#total"),
        Err(ValidationError::UnbalancedParentheses)
    );
}

#[test]
fn test_validate_reports_unknown_function() {
    let engine = orders_engine();
    assert_eq!(
        engine.validate("$frobnicate(#total)"),
        Err(ValidationError::UnknownFunction("$frobnicate".to_string()))
    );
}
