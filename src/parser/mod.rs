//! Parser for front-matter documents.
//!
//! # Document Structure
//!
//! Each document has:
//! - YAML header between two `---` lines
//! - A free-form body, kept verbatim apart from trailing whitespace
//!
//! # Usage
//!
//! ```ignore
//! use fmedit::parser::parse_document;
//!
//! let source = std::fs::read_to_string("_educators/alice.md")?;
//! let doc = parse_document(&source)?;
//!
//! for key in doc.header.keys() {
//!     println!("{:?}", key);
//! }
//! ```

mod document;
mod frontmatter;

pub use document::{parse_document, Document};
pub use frontmatter::{extract_frontmatter, parse_header, render_header, FrontmatterResult, DELIMITER};
