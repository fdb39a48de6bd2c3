//! YAML frontmatter extraction.

use serde_yaml::{Mapping, Value};

use crate::error::{FmError, Result};

/// The line that opens and closes a header block.
pub const DELIMITER: &str = "---";

/// Result of splitting a document into header and body.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontmatterResult {
    /// Parsed header, in source key order
    pub header: Mapping,
    /// Everything after the closing delimiter, rejoined with `\n`
    pub body: String,
}

/// Split a document's lines into its parsed header and opaque body.
///
/// The first line must be `---`. Lines up to the next `---` form the header;
/// every line after it belongs to the body, including further `---` lines.
/// Trailing whitespace is stripped from every line.
///
/// A header with no closing `---` is rejected as malformed rather than read
/// as a header with an empty body.
pub fn extract_frontmatter<'a, I>(lines: I) -> Result<FrontmatterResult>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = lines.into_iter();

    match lines.next() {
        Some(first) if first.trim_end() == DELIMITER => {}
        Some(first) => {
            return Err(FmError::Malformed {
                message: format!("first line must be ---, found {:?}", first.trim_end()),
                help: Some("Documents start with a ---\\nkey: value\\n--- header".to_string()),
            });
        }
        None => {
            return Err(FmError::Malformed {
                message: "document is empty".to_string(),
                help: Some("Documents start with a ---\\nkey: value\\n--- header".to_string()),
            });
        }
    }

    let mut header_lines = Vec::new();
    let mut body_lines = Vec::new();
    let mut in_body = false;

    for line in lines {
        let line = line.trim_end();
        if in_body {
            body_lines.push(line);
        } else if line == DELIMITER {
            in_body = true;
        } else {
            header_lines.push(line);
        }
    }

    if !in_body {
        return Err(FmError::Malformed {
            message: "unclosed header: missing closing ---".to_string(),
            help: Some("Add --- after the YAML header".to_string()),
        });
    }

    // A final block scalar keeps its trailing line break only if the text
    // ends with one.
    let mut header_text = header_lines.join("\n");
    header_text.push('\n');
    let header = parse_header(&header_text)?;

    Ok(FrontmatterResult {
        header,
        body: body_lines.join("\n"),
    })
}

/// Parse header text into an ordered mapping.
///
/// An empty or comment-only header is the empty mapping.
pub fn parse_header(text: &str) -> Result<Mapping> {
    let parsed: Value = serde_yaml::from_str(text).map_err(|e| FmError::HeaderParse {
        message: format!("invalid YAML in header: {}", e),
        help: None,
    })?;

    match parsed {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(FmError::HeaderParse {
            message: "header must be a YAML mapping".to_string(),
            help: Some("Use key: value format".to_string()),
        }),
    }
}

/// Serialize a header back to YAML text.
///
/// Keys are emitted in the mapping's order. The empty mapping renders as an
/// empty string so the header block stays empty.
pub fn render_header(header: &Mapping) -> Result<String> {
    if header.is_empty() {
        return Ok(String::new());
    }

    serde_yaml::to_string(header).map_err(|e| FmError::Serialize {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_frontmatter() {
        let source = "---\ntitle: Alice\nrole: convener\n---\nBody line one.\nBody line two.";

        let result = extract_frontmatter(source.lines()).unwrap();

        assert_eq!(
            result.header.get("title").and_then(Value::as_str),
            Some("Alice")
        );
        assert_eq!(result.body, "Body line one.\nBody line two.");
    }

    #[test]
    fn test_extract_frontmatter_no_opening() {
        let source = "title: Alice\n---\nbody";

        let result = extract_frontmatter(source.lines());

        assert!(matches!(result, Err(FmError::Malformed { .. })));
    }

    #[test]
    fn test_extract_frontmatter_empty_document() {
        let result = extract_frontmatter("".lines());

        assert!(matches!(result, Err(FmError::Malformed { .. })));
    }

    #[test]
    fn test_extract_frontmatter_unclosed() {
        let source = "---\ntitle: Alice\nbody content";

        let result = extract_frontmatter(source.lines());

        assert!(matches!(result, Err(FmError::Malformed { .. })));
    }

    #[test]
    fn test_extract_empty_frontmatter() {
        let result = extract_frontmatter("---\n---\nbody".lines()).unwrap();

        assert!(result.header.is_empty());
        assert_eq!(result.body, "body");
    }

    #[test]
    fn test_extract_braces_frontmatter() {
        let result = extract_frontmatter("---\n{}\n---\n".lines()).unwrap();

        assert!(result.header.is_empty());
        assert_eq!(result.body, "");
    }

    #[test]
    fn test_opening_delimiter_allows_trailing_whitespace() {
        let result = extract_frontmatter("---  \r\ntitle: x\r\n---\t\r\nbody  \r\n".lines()).unwrap();

        assert_eq!(result.header.get("title").and_then(Value::as_str), Some("x"));
        assert_eq!(result.body, "body");
    }

    #[test]
    fn test_body_keeps_later_delimiters_and_blank_lines() {
        let source = "---\ntitle: x\n---\n\nintro\n---\nmore\n\n";

        let result = extract_frontmatter(source.lines()).unwrap();

        assert_eq!(result.body, "\nintro\n---\nmore\n");
    }

    #[test]
    fn test_nested_header_keeps_indentation() {
        let source = "---\nname: Bob\nsocial:\n  github: bob\n  mastodon: '@bob'\ntags:\n  - a\n  - b\n---\n";

        let result = extract_frontmatter(source.lines()).unwrap();

        let social = result.header.get("social").and_then(Value::as_mapping).unwrap();
        assert_eq!(social.get("github").and_then(Value::as_str), Some("bob"));
        let tags = result.header.get("tags").and_then(Value::as_sequence).unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_last_block_scalar_keeps_trailing_newline() {
        let source = "---\ntitle: Alice\nbio: |\n  Line one\n---\nbody";

        let result = extract_frontmatter(source.lines()).unwrap();

        assert_eq!(
            result.header.get("bio").and_then(Value::as_str),
            Some("Line one\n")
        );
    }

    #[test]
    fn test_last_keep_block_scalar_keeps_blank_lines() {
        let source = "---\nbio: |+\n  a\n\n---\n";

        let result = extract_frontmatter(source.lines()).unwrap();

        assert_eq!(result.header.get("bio").and_then(Value::as_str), Some("a\n\n"));
    }

    #[test]
    fn test_last_quoted_value_ending_in_newline() {
        let source = "---\ntitle: Alice\nbio: \"Line one\\n\"\n---\nbody";

        let result = extract_frontmatter(source.lines()).unwrap();

        assert_eq!(
            result.header.get("bio").and_then(Value::as_str),
            Some("Line one\n")
        );
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let result = extract_frontmatter("---\ntitle: [unclosed\n---\n".lines());

        assert!(matches!(result, Err(FmError::HeaderParse { .. })));
    }

    #[test]
    fn test_non_mapping_header_is_error() {
        let result = extract_frontmatter("---\n- a\n- b\n---\n".lines());

        assert!(matches!(result, Err(FmError::HeaderParse { .. })));
    }

    #[test]
    fn test_render_preserves_key_order() {
        let header = parse_header("zeta: 1\nalpha: 2\nmid: 3").unwrap();

        let text = render_header(&header).unwrap();

        assert_eq!(text, "zeta: 1\nalpha: 2\nmid: 3\n");
    }

    #[test]
    fn test_render_empty_header() {
        assert_eq!(render_header(&Mapping::new()).unwrap(), "");
    }
}
