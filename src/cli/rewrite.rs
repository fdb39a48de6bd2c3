//! Rewrite command implementation.
//!
//! Builds one edit list from the manifest and flags, then runs the batch.

use clap::Args;

use crate::batch::{run_batch_with, BatchOptions};
use crate::error::{FmError, Result};
use crate::output::{display_path, plural, Printer};
use crate::transform::{EditList, EditOp};

use super::DirectoryArgs;

/// Apply header edits to every document in a directory
#[derive(Args, Debug)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub dir: DirectoryArgs,

    /// Rename a key in place (OLD=NEW, repeatable)
    #[arg(long, value_name = "OLD=NEW")]
    pub rename: Vec<String>,

    /// Set a key to a YAML value (KEY=VALUE, repeatable)
    #[arg(long, value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Remove a key (repeatable)
    #[arg(long, value_name = "KEY")]
    pub remove: Vec<String>,

    /// Rewrite headers without edits, normalizing their formatting
    #[arg(long)]
    pub identity: bool,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl RewriteArgs {
    /// Manifest edits first, then renames, sets and removals from flags.
    pub fn edit_list(&self, manifest_edits: &[EditOp]) -> Result<EditList> {
        let mut edits = EditList::from(manifest_edits.to_vec());

        for arg in &self.rename {
            edits.push(EditOp::parse_rename(arg)?);
        }
        for arg in &self.set {
            edits.push(EditOp::parse_set(arg)?);
        }
        edits.extend(self.remove.iter().map(|key| EditOp::Remove { key: key.clone() }));

        if edits.is_empty() && !self.identity {
            return Err(FmError::Config {
                message: "no edits given".to_string(),
                help: Some(
                    "Pass --set, --remove or --rename, list edits in fmedit.yaml, or use --identity"
                        .to_string(),
                ),
            });
        }

        Ok(edits)
    }
}

pub fn run(args: RewriteArgs) -> Result<()> {
    let manifest = args.dir.manifest()?;
    let directory = args.dir.resolve_directory(&manifest)?;
    let edits = args.edit_list(&manifest.edits)?;

    let options = BatchOptions {
        filter: args.dir.entry_filter(&manifest),
        dry_run: args.dry_run,
    };

    let mut printer = Printer::new(args.dir.quiet).dry_run(args.dry_run);
    printer.info(
        "Editing",
        &format!(
            "{} with {}",
            display_path(&directory),
            plural(edits.len(), "edit", "edits")
        ),
    );

    let report = match run_batch_with(&directory, &edits, &options, &mut printer) {
        Ok(report) => report,
        Err(err) => {
            printer.error("Aborted", &display_path(&directory));
            return Err(err);
        }
    };

    let verb = if args.dry_run { "Checked" } else { "Finished" };
    printer.status(
        verb,
        &format!(
            "{}, {} changed, {} skipped",
            plural(report.processed.len(), "document", "documents"),
            report.changed.len(),
            report.skipped.len()
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn rewrite_args(args: &[&str]) -> RewriteArgs {
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Rewrite(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_edit_list_order() {
        let args = rewrite_args(&[
            "fmedit", "rewrite", "dir", "--remove", "old", "--set", "a=1", "--rename", "x=y",
        ]);
        let manifest_edits = vec![EditOp::Remove {
            key: "first".to_string(),
        }];

        let edits = args.edit_list(&manifest_edits).unwrap();

        assert_eq!(
            edits,
            EditList::from(vec![
                EditOp::Remove {
                    key: "first".to_string()
                },
                EditOp::parse_rename("x=y").unwrap(),
                EditOp::parse_set("a=1").unwrap(),
                EditOp::Remove {
                    key: "old".to_string()
                },
            ])
        );
    }

    #[test]
    fn test_no_edits_requires_identity() {
        let args = rewrite_args(&["fmedit", "rewrite", "dir"]);
        assert!(matches!(args.edit_list(&[]), Err(FmError::Config { .. })));

        let args = rewrite_args(&["fmedit", "rewrite", "dir", "--identity"]);
        assert!(args.edit_list(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_bad_set_argument() {
        let args = rewrite_args(&["fmedit", "rewrite", "dir", "--set", "missing-equals"]);

        assert!(args.edit_list(&[]).is_err());
    }
}
