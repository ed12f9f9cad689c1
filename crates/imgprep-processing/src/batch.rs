//! Batch runner - apply the preparer to every file in a directory
//!
//! Per-file failures are recorded and the batch keeps going; only setup
//! problems (missing directories) abort the run. Files are visited in
//! filesystem enumeration order, which is not guaranteed stable across runs.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use imgprep_core::PrepError;

use crate::image::ImagePreparer;

/// One failed file with a structured error kind plus message.
#[derive(Debug, Clone)]
pub struct BatchFailure {
    pub file_name: String,
    pub kind: &'static str,
    pub message: String,
}

/// Accounting of a single batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub successes: Vec<String>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Render the two-part summary: successes first, then failures with
    /// their messages, or "No failures".
    pub fn summary(&self) -> String {
        let mut out = String::from("Successes...:\n");
        for name in &self.successes {
            let _ = writeln!(out, "{}", name);
        }
        if self.failures.is_empty() {
            out.push_str("\nNo failures\n");
        } else {
            out.push_str("\nFailures...:\n");
            for failure in &self.failures {
                let _ = writeln!(out, "{}: [{}] {}", failure.file_name, failure.kind, failure.message);
            }
        }
        out
    }
}

/// Applies [`ImagePreparer`] to every file in a source directory, writing
/// JPEG outputs into a destination directory that must already exist.
pub struct BatchRunner {
    out_dir: PathBuf,
    side: u32,
}

impl BatchRunner {
    pub fn new(out_dir: impl Into<PathBuf>, side: u32) -> Self {
        Self {
            out_dir: out_dir.into(),
            side,
        }
    }

    /// Process every file directly inside `in_dir` (non-recursive).
    ///
    /// Output names are `<stem>.jpg`; two sources that share a stem silently
    /// overwrite each other, which is accepted behavior for this tool.
    pub fn run(&self, in_dir: &Path) -> Result<BatchReport, PrepError> {
        if !in_dir.is_dir() {
            return Err(PrepError::Setup(format!(
                "input directory {} does not exist or is not a directory",
                in_dir.display()
            )));
        }
        if !self.out_dir.is_dir() {
            return Err(PrepError::Setup(format!(
                "output directory {} does not exist or is not a directory",
                self.out_dir.display()
            )));
        }

        let entries = fs::read_dir(in_dir)
            .map_err(|e| PrepError::Setup(format!("{}: {}", in_dir.display(), e)))?;

        let mut report = BatchReport::default();
        for entry in entries {
            let entry =
                entry.map_err(|e| PrepError::Setup(format!("{}: {}", in_dir.display(), e)))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| file_name.clone());
            let out_path = self.out_dir.join(format!("{}.jpg", stem));

            tracing::info!(source = %path.display(), dest = %out_path.display(), "Processing");
            match ImagePreparer::prepare_and_save(&path, &out_path, self.side) {
                Ok(()) => report.successes.push(file_name),
                Err(err) => {
                    tracing::warn!(file = %file_name, error = %err, "Skipping file");
                    report.failures.push(BatchFailure {
                        file_name,
                        kind: err.kind(),
                        message: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            successes = report.successes.len(),
            failures = report.failures.len(),
            "Batch complete"
        );
        Ok(report)
    }
}
