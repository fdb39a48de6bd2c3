//! Show command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::parser::render_header;
use crate::rewrite::read_document;

/// Print the parsed header of one document as YAML
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Document to read
    pub file: PathBuf,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let doc = read_document(&args.file)?;
    print!("{}", render_header(&doc.header)?);
    Ok(())
}
