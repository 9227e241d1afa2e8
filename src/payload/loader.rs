use std::io::Read;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use tracing::debug;

use super::types::RelationshipPayload;
use crate::error::{OrbitError, PayloadParseError};

/// Name used for diagnostics when the payload comes from stdin
pub const STDIN_SOURCE_NAME: &str = "<stdin>";

impl RelationshipPayload {
    /// Parse a payload from JSON text, labelling errors with `source_name`
    pub fn from_json_str(content: &str, source_name: &str) -> Result<Self, OrbitError> {
        serde_json::from_str(content).map_err(|e| {
            let span = error_offset(content, e.line(), e.column())
                .map(|offset| SourceSpan::new(offset.into(), 1));

            OrbitError::PayloadParseError(Box::new(PayloadParseError {
                file: source_name.to_string(),
                source_code: NamedSource::new(source_name, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    pub fn parse_file(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(|e| OrbitError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "Read relationship payload");
        Self::from_json_str(&content, &path.display().to_string())
    }

    /// Read a payload from any reader, e.g. stdin
    pub fn read_from(reader: &mut dyn Read, source_name: &str) -> Result<Self, OrbitError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json_str(&content, source_name)
    }
}

/// Convert serde_json's 1-based line/column into a byte offset
fn error_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);

    if content.is_empty() {
        None
    } else {
        Some(offset.min(content.len() - 1))
    }
}
