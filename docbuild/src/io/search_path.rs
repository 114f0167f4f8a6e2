//! `PATH` wiring for the compiler child process.
//!
//! latexmk can shell out to helper scripts that need an interpreter on
//! `PATH`. On Windows that interpreter usually lives under the user profile
//! rather than in a system location, so its directory is prepended to the
//! child's `PATH`. The docbuild process environment itself is never touched.

use std::env;
use std::ffi::OsString;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::config::InterpreterConfig;

/// Prepend the directory holding `candidate` to `existing` if `candidate` exists.
///
/// Returns `None` when the candidate is absent, so callers leave `PATH` alone.
pub fn augment_search_path(
    existing: Option<OsString>,
    candidate: &Path,
) -> Result<Option<OsString>> {
    if !candidate.is_file() {
        return Ok(None);
    }
    let Some(dir) = candidate.parent() else {
        return Ok(None);
    };

    let mut paths = vec![dir.to_path_buf()];
    if let Some(existing) = existing {
        paths.extend(env::split_paths(&existing));
    }
    let joined = env::join_paths(paths).context("join PATH entries")?;
    Ok(Some(joined))
}

/// Search-path override for the compiler, if any applies on this host.
pub fn interpreter_search_path(config: &InterpreterConfig) -> Result<Option<OsString>> {
    if !cfg!(windows) {
        return Ok(None);
    }
    let (Some(relative), Some(profile)) = (
        config.windows_profile_relative.as_deref(),
        env::var_os("USERPROFILE"),
    ) else {
        return Ok(None);
    };

    let candidate = Path::new(&profile).join(relative);
    let augmented = augment_search_path(env::var_os("PATH"), &candidate)?;
    if augmented.is_some() {
        debug!(interpreter = %candidate.display(), "prepending interpreter directory to PATH");
    }
    Ok(augmented)
}
