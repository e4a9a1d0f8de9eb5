//! YAML error diagnostics pointing at the offending manifest line

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// YAML syntax or shape error with source location
#[derive(Debug, Error, Diagnostic)]
#[error("invalid manifest YAML: {message}")]
#[diagnostic(code(mechworks::yaml::syntax))]
pub struct YamlSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    message: String,
}

impl YamlSyntaxError {
    /// Build from a serde_yml error, locating it inside `source`
    pub fn from_serde_error(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));

        let offset = line_col_to_offset(source, line, column);
        let message = err.to_string();
        let help = suggest_fix(&message);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help,
            message,
        }
    }

    /// The underlying parser message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convert a 1-based line/column pair to a byte offset, clamped to the source
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum::<usize>();

    if line_start >= source.len() {
        return source.len().saturating_sub(1);
    }

    let line_text = source[line_start..].lines().next().unwrap_or("");
    let column_offset = line_text
        .char_indices()
        .nth(column.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(line_text.len());

    line_start + column_offset
}

/// Hints for mistakes commonly made when hand-writing a manifest
fn suggest_fix(message: &str) -> Option<String> {
    const HINTS: &[(&str, &str)] = &[
        (
            "tab",
            "YAML requires spaces for indentation, not tabs. Replace tabs with spaces.",
        ),
        (
            "duplicate key",
            "Each key can only appear once per part or robot.",
        ),
        (
            "missing field",
            "Robots need machine_name, cpu, model and speed; parts need partno and price.",
        ),
        (
            "invalid type",
            "partno and speed are integers, price is a number, type is text.",
        ),
        (
            "unknown field",
            "Allowed part keys are partno, price and type.",
        ),
        (
            "mapping values are not allowed",
            "You may be missing a space after ':' or have incorrect indentation.",
        ),
    ];

    let lower = message.to_lowercase();
    HINTS
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, hint)| hint.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_to_offset() {
        let source = "line1\nline2\nline3";
        assert_eq!(line_col_to_offset(source, 1, 1), 0);
        assert_eq!(line_col_to_offset(source, 2, 1), 6);
        assert_eq!(line_col_to_offset(source, 3, 3), 14);
    }

    #[test]
    fn test_line_col_past_end_is_clamped() {
        let source = "a: 1\n";
        assert_eq!(line_col_to_offset(source, 9, 1), 4);
    }

    #[test]
    fn test_suggest_fix() {
        assert!(suggest_fix("found tab character").is_some());
        assert!(suggest_fix("parts[0]: missing field `price`").is_some());
        assert!(suggest_fix("some random error").is_none());
    }
}
