//! Directory rename pass.
//!
//! Clears the target directory, then copies every `.sol` file from the
//! source directory into the target, renamed after the file's last
//! `contract` declaration. Files with no declaration are skipped, not
//! failed. Candidates are processed in lexicographic file-name order, so
//! when two files resolve to the same output name the later one wins.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::scan;

/// Selection filter for candidate files. Case-sensitive literal suffix.
pub const SOL_SUFFIX: &str = ".sol";

/// Per-file outcome of a rename pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Renamed { output_name: String },
    Skipped { reason: SkipReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoDeclarationFound,
}

/// Summary of a full rename pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub source: String,
    pub target: String,
    pub copied: u32,
    pub skipped: u32,
    pub files: Vec<FileReport>,
}

/// Individual file result within a rename pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl RunReport {
    fn new(source: &Path, target: &Path) -> Self {
        Self {
            source: source.display().to_string(),
            target: target.display().to_string(),
            copied: 0,
            skipped: 0,
            files: Vec::new(),
        }
    }

    fn record_copied(&mut self, file: String, output: String) {
        self.copied += 1;
        self.files.push(FileReport {
            file,
            status: "copied".to_string(),
            output: Some(output),
        });
    }

    fn record_skipped(&mut self, file: String) {
        self.skipped += 1;
        self.files.push(FileReport {
            file,
            status: "skipped".to_string(),
            output: None,
        });
    }
}

/// Remove every entry directly inside the target directory.
///
/// Files are unlinked individually, subdirectories removed recursively.
/// Destructive, no confirmation or backup. Fails if the directory does not
/// exist or an entry cannot be removed.
pub fn clear_target(target: &Path) -> Result<()> {
    if !target.is_dir() {
        return Err(Error::TargetNotFound(target.display().to_string()));
    }

    for entry in fs::read_dir(target)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }

    Ok(())
}

/// List `.sol` files directly inside the source directory, sorted by name.
///
/// Non-recursive. The lexicographic order pins which candidate wins when
/// two files resolve to the same output name.
fn candidate_files(source: &Path) -> Result<Vec<PathBuf>> {
    if !source.is_dir() {
        return Err(Error::SourceNotFound(source.display().to_string()));
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if name.to_str().is_some_and(|n| n.ends_with(SOL_SUFFIX)) {
            candidates.push(entry.path());
        }
    }

    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(candidates)
}

/// Process one candidate: read, scan for declarations, copy under the
/// chosen name. Returns `Skipped` when the file declares nothing.
fn process_file(path: &Path, target: &Path) -> Result<FileOutcome> {
    let content = fs::read_to_string(path)?;
    let names = scan::extract_declaration_names(&content);

    match scan::choose_output_name(&names) {
        Some(name) => {
            let output_name = format!("{}{}", name, SOL_SUFFIX);
            fs::copy(path, target.join(&output_name))?;
            Ok(FileOutcome::Renamed { output_name })
        }
        None => Ok(FileOutcome::Skipped {
            reason: SkipReason::NoDeclarationFound,
        }),
    }
}

/// Run a full rename pass: clear the target, then copy each candidate
/// under its new name.
///
/// Single linear batch pass. Any filesystem error aborts the whole run;
/// there is no per-file error isolation or partial-completion recovery.
pub fn run(source: &Path, target: &Path) -> Result<RunReport> {
    clear_target(target)?;

    let mut report = RunReport::new(source, target);
    for path in candidate_files(source)? {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match process_file(&path, target)? {
            FileOutcome::Renamed { output_name } => report.record_copied(file, output_name),
            FileOutcome::Skipped { .. } => report.record_skipped(file),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn read(dir: &Path, name: &str) -> String {
        fs::read_to_string(dir.join(name)).unwrap()
    }

    fn target_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_single_contract_is_renamed_with_identical_content() {
        let source = tempdir().unwrap();
        let target = tempdir().unwrap();
        let content = "pragma solidity ^0.8.0;\ncontract Foo {\n}\n";
        write(source.path(), "original.sol", content);

        let report = run(source.path(), target.path()).unwrap();

        assert_eq!(report.copied, 1);
        assert_eq!(report.skipped, 0);
        assert_eq!(target_names(target.path()), vec!["Foo.sol"]);
        assert_eq!(read(target.path(), "Foo.sol"), content);
    }

    #[test]
    fn test_last_declaration_wins_and_full_content_is_kept() {
        let source = tempdir().unwrap();
        let target = tempdir().unwrap();
        let content = "contract A {\n}\ncontract B {\n}\n";
        write(source.path(), "Multi.sol", content);

        run(source.path(), target.path()).unwrap();

        assert_eq!(target_names(target.path()), vec!["B.sol"]);
        assert_eq!(read(target.path(), "B.sol"), content);
    }

    #[test]
    fn test_file_without_declaration_is_skipped() {
        let source = tempdir().unwrap();
        let target = tempdir().unwrap();
        write(source.path(), "Empty.sol", "pragma solidity ^0.8.0;\n");

        let report = run(source.path(), target.path()).unwrap();

        assert_eq!(report.copied, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.files[0].file, "Empty.sol");
        assert_eq!(report.files[0].status, "skipped");
        assert!(target_names(target.path()).is_empty());
    }

    #[test]
    fn test_non_sol_files_are_ignored() {
        let source = tempdir().unwrap();
        let target = tempdir().unwrap();
        write(source.path(), "notes.txt", "contract Decoy {\n");
        write(source.path(), "upper.SOL", "contract Decoy {\n");
        write(source.path(), "real.sol", "contract Real {\n}\n");

        let report = run(source.path(), target.path()).unwrap();

        assert_eq!(report.copied, 1);
        assert_eq!(report.files.len(), 1);
        assert_eq!(target_names(target.path()), vec!["Real.sol"]);
    }

    #[test]
    fn test_stale_target_contents_are_removed() {
        let source = tempdir().unwrap();
        let target = tempdir().unwrap();
        write(target.path(), "stale.sol", "contract Stale {\n}\n");
        fs::create_dir(target.path().join("stale_dir")).unwrap();
        write(&target.path().join("stale_dir"), "inner.txt", "x");
        write(source.path(), "fresh.sol", "contract Fresh {\n}\n");

        run(source.path(), target.path()).unwrap();

        assert_eq!(target_names(target.path()), vec!["Fresh.sol"]);
    }

    #[test]
    fn test_double_run_is_idempotent() {
        let source = tempdir().unwrap();
        let target = tempdir().unwrap();
        write(source.path(), "a.sol", "contract A {\n}\n");
        write(source.path(), "b.sol", "pragma solidity ^0.8.0;\n");

        let first = run(source.path(), target.path()).unwrap();
        let after_first = target_names(target.path());
        let second = run(source.path(), target.path()).unwrap();

        assert_eq!(target_names(target.path()), after_first);
        assert_eq!(first.copied, second.copied);
        assert_eq!(first.skipped, second.skipped);
    }

    #[test]
    fn test_output_name_collision_last_candidate_wins() {
        let source = tempdir().unwrap();
        let target = tempdir().unwrap();
        write(source.path(), "first.sol", "contract Same { uint a;\n}\n");
        write(source.path(), "second.sol", "contract Same { uint b;\n}\n");

        let report = run(source.path(), target.path()).unwrap();

        // Both candidates are copied; "second.sol" sorts later and overwrites.
        assert_eq!(report.copied, 2);
        assert_eq!(target_names(target.path()), vec!["Same.sol"]);
        assert_eq!(read(target.path(), "Same.sol"), "contract Same { uint b;\n}\n");
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let target = tempdir().unwrap();
        let err = run(Path::new("/nonexistent/source"), target.path()).unwrap_err();
        assert_eq!(err.code(), "SOURCE_NOT_FOUND");
    }

    #[test]
    fn test_missing_target_is_fatal() {
        let source = tempdir().unwrap();
        let err = run(source.path(), Path::new("/nonexistent/target")).unwrap_err();
        assert_eq!(err.code(), "TARGET_NOT_FOUND");
    }

    #[test]
    fn test_clear_target_rejects_missing_directory() {
        let err = clear_target(Path::new("/nonexistent/target")).unwrap_err();
        assert_eq!(err.code(), "TARGET_NOT_FOUND");
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let source = tempdir().unwrap();
        let target = tempdir().unwrap();
        write(source.path(), "a.sol", "contract A {\n}\n");

        let report = run(source.path(), target.path()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["copied"], 1);
        assert_eq!(json["files"][0]["status"], "copied");
        assert_eq!(json["files"][0]["output"], "A.sol");
    }
}
