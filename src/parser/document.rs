//! Whole-document parsing and rendering.
//!
//! A document is a `---` delimited YAML header followed by an opaque body.
//! Rendering writes the header back through the YAML serializer, so the
//! round trip is semantic rather than byte-for-byte.

use serde_yaml::Mapping;

use crate::error::Result;

use super::frontmatter::{extract_frontmatter, render_header, DELIMITER};

/// A parsed document held for one read-transform-write cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub header: Mapping,
    pub body: String,
}

impl Document {
    pub fn new(header: Mapping, body: impl Into<String>) -> Self {
        Self {
            header,
            body: body.into(),
        }
    }

    /// Parse document text.
    pub fn parse(source: &str) -> Result<Self> {
        let result = extract_frontmatter(source.lines())?;
        Ok(Self::new(result.header, result.body))
    }

    /// Replace the header with the output of `f`, leaving the body alone.
    pub fn map_header(self, f: impl FnOnce(Mapping) -> Mapping) -> Self {
        Self {
            header: f(self.header),
            body: self.body,
        }
    }

    /// Render back to document text.
    pub fn render(&self) -> Result<String> {
        let header = render_header(&self.header)?;

        let mut out = String::with_capacity(header.len() + self.body.len() + 8);
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&header);
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&self.body);
        Ok(out)
    }
}

/// Parse document text (see [`Document::parse`]).
pub fn parse_document(source: &str) -> Result<Document> {
    Document::parse(source)
}
