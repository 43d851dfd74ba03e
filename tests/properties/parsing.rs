//! Property tests for metadata splitting and lenient document parsing.

use std::path::Path;

use proptest::prelude::*;

use weft::{parse_document, split_metadata};

fn small_line() -> impl Strategy<Value = String> {
    // Keep generated content small and printable to avoid pathological YAML
    // cases. Exclude lines that trim to "---" so constructed documents keep
    // their delimiters unambiguous.
    proptest::string::string_regex("[A-Za-z0-9 _:#\\-]{0,40}")
        .unwrap()
        .prop_filter("not a delimiter", |s| s.trim() != "---")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: well-formed metadata blocks always split back into their parts.
    #[test]
    fn property_split_metadata_round_trip(
        metadata_lines in proptest::collection::vec(small_line(), 0..=8),
        body_lines in proptest::collection::vec(small_line(), 0..=12),
    ) {
        let metadata = metadata_lines.join("\n");
        // `str::lines()` drops a single trailing empty line, so a final
        // empty body line cannot round-trip.
        let mut body = body_lines.join("\n");
        if body.ends_with('\n') {
            body.pop();
        }

        let mut content_lines = Vec::new();
        content_lines.push("---".to_string());
        content_lines.extend(metadata_lines.clone());
        content_lines.push("---".to_string());
        if !body_lines.is_empty() {
            content_lines.extend(body_lines.clone());
        }
        let content = content_lines.join("\n");

        let split = split_metadata(&content)
            .expect("expected split_metadata to succeed for constructed content");

        prop_assert_eq!(split.metadata, metadata);
        prop_assert_eq!(split.body, body);
        prop_assert_eq!(split.end_line, 2 + metadata_lines.len());
    }

    /// PROPERTY: `split_metadata` never panics on arbitrary small input.
    #[test]
    fn property_split_metadata_never_panics(
        content in "(?s).{0,512}"
    ) {
        let _ = split_metadata(&content);
    }

    /// PROPERTY: `parse_document` never panics and never fails; every
    /// input produces some (meta, body) pair.
    #[test]
    fn property_parse_document_never_panics(
        content in "(?s).{0,512}"
    ) {
        let _ = parse_document(&content, Path::new("fuzz.md"));
    }

    /// PROPERTY: documents without a leading delimiter pass through
    /// untouched, with no inheritance declared.
    #[test]
    fn property_plain_documents_are_identity(
        body_lines in proptest::collection::vec(small_line(), 0..=12),
    ) {
        let content = body_lines.join("\n");

        let (meta, body) = parse_document(&content, Path::new("plain.md"));

        prop_assert_eq!(meta.extends, None);
        prop_assert_eq!(body, content);
    }
}
