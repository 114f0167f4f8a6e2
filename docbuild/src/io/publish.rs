//! Publishing the compiled PDF into the web directory.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What happens to the PDF in the output directory after publishing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PublishMode {
    /// Leave the original in place.
    #[default]
    Copy,
    /// Remove the original once the copy is written.
    Move,
}

impl PublishMode {
    /// Past-tense verb for notices ("copied", "moved").
    pub fn verb(self) -> &'static str {
        match self {
            Self::Copy => "copied",
            Self::Move => "moved",
        }
    }
}

/// Write `source` into `web_dir` under the same file name, overwriting any
/// previous copy. `web_dir` is created if missing. The copy keeps the
/// source's permissions and modification time.
///
/// In [`PublishMode::Move`], failing to remove the source after a successful
/// copy is only logged; the destination is already in place.
pub fn publish_pdf(source: &Path, web_dir: &Path, mode: PublishMode) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| anyhow!("publish source has no file name: {}", source.display()))?;
    fs::create_dir_all(web_dir)
        .with_context(|| format!("create web directory {}", web_dir.display()))?;

    let destination = web_dir.join(file_name);
    fs::copy(source, &destination).with_context(|| {
        format!(
            "copy {} to {}",
            source.display(),
            destination.display()
        )
    })?;
    copy_modified_time(source, &destination)?;
    debug!(source = %source.display(), destination = %destination.display(), "pdf copied");

    if mode == PublishMode::Move
        && let Err(err) = fs::remove_file(source)
    {
        warn!(source = %source.display(), err = %err, "published pdf but could not remove source");
    }

    Ok(destination)
}

fn copy_modified_time(source: &Path, destination: &Path) -> Result<()> {
    let modified = fs::metadata(source)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("read modified time of {}", source.display()))?;
    File::options()
        .write(true)
        .open(destination)
        .and_then(|file| file.set_modified(modified))
        .with_context(|| format!("set modified time of {}", destination.display()))
}
