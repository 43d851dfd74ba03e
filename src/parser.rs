//! Metadata parser for domain documents
//!
//! Handles extraction and parsing of the YAML metadata block at the top of
//! Markdown domain files.

use std::path::Path;

use tracing::warn;

use crate::models::DomainMeta;

/// Delimiter for metadata blocks
const METADATA_DELIMITER: &str = "---";

/// Result of splitting a document into metadata block and body
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDocument {
    /// The raw YAML content of the metadata block
    pub metadata: String,
    /// The content body after the block
    pub body: String,
    /// Line number where the block ends (for diagnostics)
    pub end_line: usize,
}

/// Split a document into its metadata block and body.
///
/// The block must start on the first line, delimited by `---` lines:
///
/// ```text
/// ---
/// extends: testing
/// ---
/// # Domain content here
/// ```
///
/// Returns `None` when the document does not begin with a delimiter line
/// or the block is never closed.
pub fn split_metadata(content: &str) -> Option<SplitDocument> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.is_empty() || lines[0].trim() != METADATA_DELIMITER {
        return None;
    }

    let closing_line = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == METADATA_DELIMITER)
        .map(|(i, _)| i)?;

    let metadata = lines[1..closing_line].join("\n");

    let body = if closing_line + 1 < lines.len() {
        lines[closing_line + 1..].join("\n")
    } else {
        String::new()
    };

    Some(SplitDocument {
        metadata,
        body,
        end_line: closing_line + 1, // 1-indexed line number
    })
}

/// Parse a domain document into metadata and body.
///
/// Never fails. A document without a metadata block, with an unclosed
/// block, or with a block that does not parse as a key-value mapping is
/// treated as plain body with no inheritance declared; the malformed case
/// is reported through a `tracing` warning rather than an error, so one
/// broken header cannot abort composition of unrelated domains. `origin`
/// is only used to label that warning.
pub fn parse_document(content: &str, origin: &Path) -> (DomainMeta, String) {
    let Some(split) = split_metadata(content) else {
        return (DomainMeta::default(), content.to_string());
    };

    // An empty block deserializes as null, not as a mapping.
    match serde_yaml_ng::from_str::<Option<DomainMeta>>(&split.metadata) {
        Ok(meta) => (meta.unwrap_or_default(), split.body.trim().to_string()),
        Err(err) => {
            warn!(
                file = %origin.display(),
                line = split.end_line,
                error = %err,
                "malformed metadata block, treating document as plain body"
            );
            (DomainMeta::default(), content.to_string())
        }
    }
}
