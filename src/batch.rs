//! Batch driver: one transform over every document in a directory.
//!
//! Documents are processed one at a time in file-name order. The first
//! failure stops the run; the returned error lists what was already written.

use std::path::{Path, PathBuf};

use crate::discovery::{scan_directory, EntryFilter, SkipReason};
use crate::error::{FmError, Result};
use crate::rewrite::{preview, read_transform_write};
use crate::transform::Transform;

/// Summary of a completed batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Every document written (or, in a dry run, every document checked).
    pub processed: Vec<PathBuf>,
    /// Documents whose text changed (or would change).
    pub changed: Vec<PathBuf>,
    /// Directory entries left out by the filter.
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

/// Options for a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub filter: EntryFilter,
    /// Compute changes without writing.
    pub dry_run: bool,
}

/// Per-document progress notifications.
pub trait BatchObserver {
    fn on_document(&mut self, _path: &Path, _changed: bool) {}
    fn on_skipped(&mut self, _path: &Path, _reason: SkipReason) {}
}

/// Observer that ignores everything.
pub struct Silent;

impl BatchObserver for Silent {}

/// Apply `transform` to every document in `dir`.
pub fn run_batch<T: Transform + ?Sized>(
    dir: &Path,
    transform: &T,
    options: &BatchOptions,
) -> Result<BatchReport> {
    run_batch_with(dir, transform, options, &mut Silent)
}

/// Like [`run_batch`], reporting progress to `observer`.
pub fn run_batch_with<T, O>(
    dir: &Path,
    transform: &T,
    options: &BatchOptions,
    observer: &mut O,
) -> Result<BatchReport>
where
    T: Transform + ?Sized,
    O: BatchObserver + ?Sized,
{
    let scan = scan_directory(dir, &options.filter)?;

    for (path, reason) in &scan.skipped {
        observer.on_skipped(path, *reason);
    }

    let mut report = BatchReport {
        skipped: scan.skipped,
        ..Default::default()
    };

    for path in scan.documents {
        let changed = if options.dry_run {
            preview(&path, transform).map(|p| p.changed())
        } else {
            read_transform_write(&path, transform).map(|r| r.changed)
        };

        let changed = match changed {
            Ok(changed) => changed,
            Err(err) => {
                let completed = if options.dry_run {
                    Vec::new()
                } else {
                    report.processed
                };
                return Err(FmError::batch(path, completed, err));
            }
        };

        observer.on_document(&path, changed);
        if changed {
            report.changed.push(path.clone());
        }
        report.processed.push(path);
    }

    Ok(report)
}

/// Parse every document in `dir` without writing, collecting all failures.
pub fn check_directory(dir: &Path, filter: &EntryFilter) -> Result<Vec<(PathBuf, FmError)>> {
    let scan = scan_directory(dir, filter)?;

    Ok(scan
        .documents
        .into_iter()
        .filter_map(|path| match crate::rewrite::read_document(&path) {
            Ok(_) => None,
            Err(err) => Some((path, err)),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{identity, EditList, EditOp};
    use std::fs;
    use tempfile::tempdir;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(String, bool)>,
        skipped: usize,
    }

    impl BatchObserver for Recorder {
        fn on_document(&mut self, path: &Path, changed: bool) {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            self.seen.push((name, changed));
        }

        fn on_skipped(&mut self, _path: &Path, _reason: SkipReason) {
            self.skipped += 1;
        }
    }

    #[test]
    fn test_batch_rewrites_every_document() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "---\ntitle: A\n---\nbody a").unwrap();
        fs::write(dir.path().join("b.md"), "---\ntitle: B\nactive: true\n---\nbody b").unwrap();

        let edits = EditList::from(vec![EditOp::parse_set("active=true").unwrap()]);
        let mut recorder = Recorder::default();
        let report =
            run_batch_with(dir.path(), &edits, &BatchOptions::default(), &mut recorder).unwrap();

        assert_eq!(report.processed.len(), 2);
        assert_eq!(report.changed.len(), 1);
        assert_eq!(
            recorder.seen,
            vec![("a.md".to_string(), true), ("b.md".to_string(), false)]
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("a.md")).unwrap(),
            "---\ntitle: A\nactive: true\n---\nbody a"
        );
    }

    #[test]
    fn test_batch_stops_at_malformed_document() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "---\ntitle: A\n---\n").unwrap();
        fs::write(dir.path().join("b.md"), "title: B\n").unwrap();
        fs::write(dir.path().join("c.md"), "---\ntitle: C\n---\n").unwrap();

        let result = run_batch(dir.path(), &identity, &BatchOptions::default());

        match result {
            Err(FmError::Batch {
                path,
                completed,
                source,
                ..
            }) => {
                assert_eq!(path, dir.path().join("b.md"));
                assert_eq!(completed, vec![dir.path().join("a.md")]);
                assert!(matches!(*source, FmError::Malformed { .. }));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.md");
        fs::write(&path, "---\ntitle: A\n---\n").unwrap();

        let edits = EditList::from(vec![EditOp::Remove {
            key: "title".to_string(),
        }]);
        let options = BatchOptions {
            dry_run: true,
            ..Default::default()
        };
        let report = run_batch(dir.path(), &edits, &options).unwrap();

        assert_eq!(report.changed, vec![path.clone()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "---\ntitle: A\n---\n");
    }

    #[test]
    fn test_skipped_entries_reported() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "---\n---\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "plain").unwrap();

        let options = BatchOptions {
            filter: EntryFilter {
                extensions: vec!["md".to_string()],
                ..Default::default()
            },
            dry_run: false,
        };
        let mut recorder = Recorder::default();
        let report = run_batch_with(dir.path(), &identity, &options, &mut recorder).unwrap();

        assert_eq!(report.processed.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(recorder.skipped, 1);
        assert_eq!(fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "plain");
    }

    #[test]
    fn test_check_directory_lists_all_failures() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "no header").unwrap();
        fs::write(dir.path().join("b.md"), "---\nok: true\n---\n").unwrap();
        fs::write(dir.path().join("c.md"), "---\ntitle: [unclosed\n---\n").unwrap();

        let failures = check_directory(dir.path(), &EntryFilter::default()).unwrap();

        assert_eq!(failures.len(), 2);
        assert!(matches!(failures[0].1, FmError::Malformed { .. }));
        assert!(matches!(failures[1].1, FmError::HeaderParse { .. }));
    }
}
