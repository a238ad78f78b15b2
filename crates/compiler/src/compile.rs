// Copyright (c) 2026 compoundql contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Recursive-descent expression compiler

use compoundql_catalog::FunctionRegistry;
use tracing::trace;

/// Expression to SQL compiler
///
/// A pure function of the expression text and the function registry; it
/// never consults the schema or a cursor position.
pub struct Compiler<'a> {
    registry: &'a FunctionRegistry,
}

/// Output of one segment pass: compiled text plus the resume position
struct Segment {
    output: String,
    next: usize,
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Quote an identifier for SQL output
///
/// Dotted paths are quoted per segment; embedded double quotes are doubled.
pub fn quote_identifier(identifier: &str) -> String {
    identifier
        .split('.')
        .map(|part| format!("\"{}\"", part.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}

impl<'a> Compiler<'a> {
    /// Create a compiler over a function registry
    pub fn new(registry: &'a FunctionRegistry) -> Self {
        Self { registry }
    }

    /// Compile an expression into a SQL `WHERE` fragment
    pub fn compile(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let segment = self.compile_segment(&chars, 0, None);
        segment.output.trim().to_string()
    }

    /// Compile one segment, stopping at the first unmatched `stop` character
    ///
    /// Nested calls recurse with `stop = ')'`; each level terminates at its
    /// own stop character, so nesting depth is carried by the recursion
    /// rather than a counter.
    fn compile_segment(&self, chars: &[char], start: usize, stop: Option<char>) -> Segment {
        let mut index = start;
        let mut output = String::new();

        while index < chars.len() {
            let c = chars[index];

            if stop == Some(c) {
                return Segment {
                    output,
                    next: index + 1,
                };
            }

            match c {
                '#' => {
                    let (field, next) = read_identifier(chars, index + 1);
                    if field.is_empty() {
                        // Malformed token: pass the '#' through
                        output.push('#');
                        index += 1;
                    } else {
                        output.push_str(&quote_identifier(&field));
                        index = next;
                    }
                }
                '$' => {
                    let (name, next) = read_identifier(chars, index + 1);
                    if name.is_empty() || chars.get(next) != Some(&'(') {
                        output.push('$');
                        index += 1;
                    } else {
                        let arguments = self.compile_segment(chars, next + 1, Some(')'));
                        output.push_str(&self.render_function(&name, &arguments.output));
                        index = arguments.next;
                    }
                }
                _ => {
                    output.push(c);
                    index += 1;
                }
            }
        }

        Segment {
            output,
            next: index,
        }
    }

    /// Render a compiled function call
    fn render_function(&self, name: &str, compiled_arguments: &str) -> String {
        let normalized = name.to_lowercase();
        let trimmed = compiled_arguments.trim();
        trace!(function = %normalized, "rendering function call");

        match normalized.as_str() {
            // Argument text is deliberately ignored for now/today
            "now" => "CURRENT_TIMESTAMP".to_string(),
            "today" => "CURRENT_DATE".to_string(),
            "month" if trimmed.is_empty() => "EXTRACT(MONTH FROM CURRENT_DATE)".to_string(),
            "month" => format!("EXTRACT(MONTH FROM {trimmed})"),
            "year" if trimmed.is_empty() => "EXTRACT(YEAR FROM CURRENT_DATE)".to_string(),
            "year" => format!("EXTRACT(YEAR FROM {trimmed})"),
            _ => {
                let sql_name = self
                    .registry
                    .find(&normalized)
                    .map(|d| d.sql_name())
                    .unwrap_or_else(|| normalized.to_uppercase());
                format!("{sql_name}({compiled_arguments})")
            }
        }
    }
}

/// Read a maximal identifier run starting at `from`
fn read_identifier(chars: &[char], from: usize) -> (String, usize) {
    let mut index = from;
    while index < chars.len() && is_identifier_char(chars[index]) {
        index += 1;
    }
    (chars[from..index].iter().collect(), index)
}
