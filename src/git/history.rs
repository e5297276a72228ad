use std::path::Path;
use std::process::Command;

use chrono::NaiveDate;
use log::debug;

use crate::error::{CommitplotError, Result};
use crate::types::CommitRecord;

/// Date layout `git log --date=short` emits, one per line.
const LOG_DATE_FORMAT: &str = "%Y-%m-%d";

/// Collect one record per commit from an existing working copy.
///
/// Shells out to `git log --pretty=format:%ad --date=short` with the child's
/// working directory set to `workdir`; this process never changes its own
/// current directory. Records come back in the order git reports them
/// (newest first). The working copy is only read, never mutated.
///
/// A non-zero exit (for example 128 on a directory that is not a repository)
/// or an unrunnable `git` fails with `Extraction`; output that is not UTF-8 or
/// contains a line that is not a `YYYY-MM-DD` date fails with `Parse`. There
/// is no partial recovery: one bad line aborts the whole extraction.
pub fn extract_commit_dates(workdir: &Path) -> Result<Vec<CommitRecord>> {
    let output = Command::new("git")
        .current_dir(workdir)
        .args(["log", "--pretty=format:%ad", "--date=short"])
        .output()
        .map_err(|e| CommitplotError::Extraction(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CommitplotError::Extraction(format!(
            "git log failed ({}): {}",
            output.status,
            stderr.trim()
        )));
    }

    let records = parse_log(&output.stdout)?;
    debug!(
        "extracted {} commits from {}",
        records.len(),
        workdir.display()
    );
    Ok(records)
}

/// Strict parse of raw log output: the bytes must decode as UTF-8 and every
/// line must be a `YYYY-MM-DD` date. Empty output means a history with zero
/// commits, not an error.
fn parse_log(bytes: &[u8]) -> Result<Vec<CommitRecord>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| CommitplotError::Parse(format!("git log output is not valid UTF-8: {e}")))?;

    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim_end();
        let date = NaiveDate::parse_from_str(line, LOG_DATE_FORMAT).map_err(|_| {
            CommitplotError::Parse(format!("line {}: expected YYYY-MM-DD, got `{line}`", idx + 1))
        })?;
        records.push(CommitRecord::new(date));
    }
    Ok(records)
}
