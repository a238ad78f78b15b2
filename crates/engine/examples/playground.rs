// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Interactive pipeline walkthrough over the demo schema
//!
//! Run with `RUST_LOG=debug` to see the context-detection decisions.

use compoundql_catalog::demo::demo_schema;
use compoundql_engine::Engine;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let engine = Engine::with_schema(demo_schema());

    let inputs = ["!us", "!users.", "#cre", "$mo", "$round(#total, "];
    for text in inputs {
        let cursor = text.chars().count();
        println!("input: {text:?}");
        for suggestion in engine.suggestions(text, cursor) {
            println!("  {:<28} {}", suggestion.label, suggestion.description);
        }
        if let Some(hint) = engine.function_argument_hint_text(text, cursor) {
            println!("  hint: {hint}");
        }
        println!();
    }

    let expression = "#total > 100 AND $month(#created_at) = 2";
    println!("expression: {expression}");
    match engine.validate(expression) {
        Ok(()) => println!("sql:        {}", engine.compile(expression)),
        Err(error) => println!("invalid:    {error}"),
    }
}
