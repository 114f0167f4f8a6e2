//! Compile-and-publish flow for the default (no argument) invocation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::exit_codes;
use crate::io::compiler::{CompileOutcome, CompileRequest, Compiler};
use crate::io::config::{BuildPaths, DocConfig};
use crate::io::publish::{PublishMode, publish_pdf};
use crate::io::search_path::interpreter_search_path;

/// Result of a build, including the domain failures that end the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The PDF landed in the web directory.
    Published {
        destination: PathBuf,
        mode: PublishMode,
    },
    /// The compiler succeeded but left no PDF behind.
    NoPdf,
    /// Publishing failed; the PDF is still in the output directory.
    PublishFailed { output_dir: PathBuf },
    CompilerMissing { program: String },
    CompileFailed {
        code: Option<i32>,
        log_path: PathBuf,
    },
}

impl BuildOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Published { .. } | Self::NoPdf | Self::PublishFailed { .. } => exit_codes::OK,
            Self::CompilerMissing { .. } => exit_codes::TOOL_MISSING,
            Self::CompileFailed { code, .. } => code.unwrap_or(exit_codes::COMPILE_SIGNALED),
        }
    }

    /// Lines to show the user for this outcome.
    pub fn notices(&self) -> Vec<String> {
        match self {
            Self::Published { destination, mode } => {
                vec![format!("PDF {} to {}", mode.verb(), destination.display())]
            }
            Self::NoPdf => vec!["No PDF file found to copy.".to_string()],
            Self::PublishFailed { output_dir } => vec![format!(
                "Error copying PDF to web directory. File remains in \"{}\".",
                output_dir.display()
            )],
            Self::CompilerMissing { program } => vec![format!(
                "Error: {program} not found. Please install TeX Live or MikTeX with latexmk."
            )],
            Self::CompileFailed { code, log_path } => {
                let code = match code {
                    Some(code) => code.to_string(),
                    None => "none (terminated by signal)".to_string(),
                };
                vec![
                    format!("Compilation failed. Exit code: {code}"),
                    format!(
                        "You might need to check for errors in the LaTeX log ({}).",
                        log_path.display()
                    ),
                ]
            }
        }
    }
}

/// Compile `config.main_tex` in `root` and publish the resulting PDF.
///
/// The output directory is created before the compiler runs. Nothing is
/// published unless the compiler exits successfully.
pub fn run_build<C: Compiler>(
    root: &Path,
    config: &DocConfig,
    compiler: &C,
) -> Result<BuildOutcome> {
    let paths = BuildPaths::new(root, config)?;
    paths.ensure_output_dir()?;

    let request = CompileRequest {
        workdir: paths.root.clone(),
        output_dir: config.output_dir.clone(),
        main_tex: config.main_tex.clone(),
        search_path: interpreter_search_path(&config.interpreter)
            .context("compute compiler search path")?,
    };

    info!(main_tex = %config.main_tex.display(), "compiling");
    match compiler.compile(&request)? {
        CompileOutcome::Success => {}
        CompileOutcome::NotFound => {
            info!(program = compiler.program(), "compiler not found");
            return Ok(BuildOutcome::CompilerMissing {
                program: compiler.program().to_string(),
            });
        }
        CompileOutcome::Failed { code } => {
            info!(exit_code = ?code, "compilation failed");
            return Ok(BuildOutcome::CompileFailed {
                code,
                log_path: paths.relative(&paths.log_path),
            });
        }
    }

    if !paths.pdf_path.is_file() {
        info!(pdf = %paths.pdf_path.display(), "compiler produced no pdf");
        return Ok(BuildOutcome::NoPdf);
    }

    match publish_pdf(&paths.pdf_path, &paths.web_dir, config.publish_mode) {
        Ok(destination) => {
            debug!(destination = %destination.display(), "published");
            Ok(BuildOutcome::Published {
                destination: paths.relative(&destination),
                mode: config.publish_mode,
            })
        }
        Err(err) => {
            info!(err = ?err, "publish failed");
            Ok(BuildOutcome::PublishFailed {
                output_dir: config.output_dir.clone(),
            })
        }
    }
}
