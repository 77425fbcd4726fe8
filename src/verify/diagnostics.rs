//! Source-span diagnostics for malformed exception catalogs.

// The miette/thiserror derives trip `unused_assignments` on some toolchains
// only, so `#[expect]` is not usable here.
#![allow(clippy::allow_attributes, clippy::allow_attributes_without_reason)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_saphyr::{Error as YamlError, Location};
use thiserror::Error;

/// A catalog file that is not valid YAML or does not match the catalog shape.
#[allow(unused_assignments)]
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(glossa::catalog::parse))]
pub struct CatalogParseError {
    #[source_code]
    src: NamedSource<String>,
    #[label("catalog error here")]
    span: Option<SourceSpan>,
    #[help]
    help: Option<String>,
    #[source]
    source: YamlError,
    message: String,
}

impl CatalogParseError {
    /// Wrap a YAML error raised while reading `src`, displayed as `name`.
    #[must_use]
    pub fn new(source: YamlError, src: &str, name: &str) -> Self {
        let location = source.location();
        let (line, column, span) = location.map_or((1, 1, None), |at| {
            (at.line(), at.column(), Some(to_span(src, at)))
        });
        let help = hint_for(src, location);
        let message = format!("catalog {name}: line {line}, column {column}: {source}");
        Self {
            src: NamedSource::new(name, src.to_owned()),
            span,
            help,
            source,
            message,
        }
    }

    /// Byte span of the offending token, when known.
    #[must_use]
    pub const fn span(&self) -> Option<SourceSpan> {
        self.span
    }
}

/// Byte offset of a one-based line and column, clamped to the line end.
fn byte_index(src: &str, line: u64, column: u64) -> usize {
    let target_line = usize::try_from(line.saturating_sub(1)).unwrap_or(usize::MAX);
    let target_column = usize::try_from(column.saturating_sub(1)).unwrap_or(usize::MAX);
    let mut offset = 0usize;
    for (idx, segment) in src.split_inclusive('\n').enumerate() {
        if idx == target_line {
            let text = segment.trim_end_matches(['\n', '\r']);
            let column_offset = text
                .char_indices()
                .nth(target_column)
                .map_or(text.len(), |(byte_idx, _)| byte_idx);
            return offset + column_offset;
        }
        offset += segment.len();
    }
    src.len()
}

fn to_span(src: &str, location: Location) -> SourceSpan {
    let at = byte_index(src, location.line(), location.column());
    let len = src
        .get(at..)
        .and_then(|rest| rest.chars().next())
        .filter(|c| *c != '\n' && *c != '\r')
        .map_or(0, char::len_utf8);
    SourceSpan::new(at.into(), len)
}

fn hint_for(src: &str, location: Option<Location>) -> Option<String> {
    let at = location?;
    let line_idx = usize::try_from(at.line().saturating_sub(1)).unwrap_or(usize::MAX);
    let line = src.lines().nth(line_idx)?;
    line.chars()
        .take_while(|c| c.is_whitespace())
        .any(|c| c == '\t')
        .then(|| "Use spaces for indentation; tabs are invalid in YAML.".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a: 1\nb: 2\n", 2, 1, 5)]
    #[case("a: 1\r\nb: 2\r\n", 2, 4, 9)]
    #[case("a: 1\n", 9, 1, 5)]
    #[case("é: 1\n", 1, 2, 2)]
    fn offsets(#[case] src: &str, #[case] line: u64, #[case] column: u64, #[case] expected: usize) {
        assert_eq!(byte_index(src, line, column), expected);
    }

    #[test]
    fn malformed_yaml_gets_a_span() {
        let src = "domain: currency\nentities: [unclosed\n";
        let Err(err) = serde_saphyr::from_str::<serde_json::Value>(src) else {
            panic!("expected a parse failure");
        };
        let diagnostic = CatalogParseError::new(err, src, "catalog.yaml");
        assert!(diagnostic.to_string().starts_with("catalog catalog.yaml"));
        assert!(diagnostic.span().is_some());
    }
}
