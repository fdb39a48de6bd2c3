//! Check command implementation.
//!
//! Parses every document and reports all malformed ones, writing nothing.

use clap::Args;

use crate::batch::check_directory;
use crate::error::{FmError, Result};
use crate::output::{display_path, plural, Printer};

use super::DirectoryArgs;

/// Parse every document in a directory without writing
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub dir: DirectoryArgs,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let manifest = args.dir.manifest()?;
    let directory = args.dir.resolve_directory(&manifest)?;
    let filter = args.dir.entry_filter(&manifest);
    let printer = Printer::new(args.dir.quiet);

    let failures = check_directory(&directory, &filter)?;

    for (path, err) in &failures {
        printer.error("Invalid", &format!("{}: {}", display_path(path), err));
    }

    if failures.is_empty() {
        printer.status("Checked", &display_path(&directory));
        Ok(())
    } else {
        Err(FmError::Config {
            message: format!(
                "{} in {}",
                plural(failures.len(), "invalid document", "invalid documents"),
                display_path(&directory)
            ),
            help: None,
        })
    }
}
