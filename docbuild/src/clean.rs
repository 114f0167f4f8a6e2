//! `docbuild clean`: drop compiler artifacts, keep PDFs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

const PDF_SUFFIX: &str = ".pdf";

/// What `clean_outputs` did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub removed: Vec<PathBuf>,
    pub kept: usize,
}

impl CleanSummary {
    pub fn notice(&self) -> &'static str {
        "Build artifacts cleaned."
    }
}

/// Remove every file in `output_dir` whose name does not end in `.pdf`.
///
/// Subdirectories are skipped. Any filesystem error aborts the clean.
pub fn clean_outputs(output_dir: &Path) -> Result<CleanSummary> {
    let mut summary = CleanSummary::default();
    let entries =
        fs::read_dir(output_dir).with_context(|| format!("read {}", output_dir.display()))?;

    for entry in entries {
        let entry = entry.context("read entry")?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("stat {}", path.display()))?;
        if file_type.is_dir() {
            debug!(path = %path.display(), "skipping directory");
            continue;
        }
        if is_pdf(&entry.file_name().to_string_lossy()) {
            summary.kept += 1;
            continue;
        }
        fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        debug!(path = %path.display(), "removed artifact");
        summary.removed.push(path);
    }

    summary.removed.sort();
    Ok(summary)
}

fn is_pdf(name: &str) -> bool {
    name.ends_with(PDF_SUFFIX)
}
