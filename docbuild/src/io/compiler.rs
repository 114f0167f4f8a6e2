//! Compiler adapter for `latexmk`.
//!
//! The compiler is a black box: docbuild hands it fixed flags, waits for it
//! to exit and only looks at the exit status. Its stdout/stderr go straight
//! to the terminal.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::{debug, error, instrument};

use super::config::CompilerConfig;

/// One compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    /// Working directory for the compiler (the project root).
    pub workdir: PathBuf,
    /// Output directory as passed on the command line, relative to `workdir`.
    pub output_dir: PathBuf,
    /// Main source as passed on the command line, relative to `workdir`.
    pub main_tex: PathBuf,
    /// Replacement `PATH` for the child, if any.
    pub search_path: Option<OsString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileOutcome {
    Success,
    /// The compiler ran and exited non-zero. `None` means it was killed by a signal.
    Failed { code: Option<i32> },
    /// The executable was not found on the search path.
    NotFound,
}

pub trait Compiler {
    /// Name shown to the user when the compiler is missing.
    fn program(&self) -> &str;

    fn compile(&self, request: &CompileRequest) -> Result<CompileOutcome>;
}

/// Runs the configured `latexmk` executable.
#[derive(Debug, Clone)]
pub struct Latexmk {
    program: String,
    args: Vec<String>,
}

impl Latexmk {
    pub fn new(config: &CompilerConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    /// Full argument list: fixed flags, then output directory, then source.
    pub fn command_args(&self, output_dir: &Path, main_tex: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        let mut output_flag = OsString::from("-output-directory=");
        output_flag.push(output_dir);
        args.push(output_flag);
        args.push(main_tex.as_os_str().to_os_string());
        args
    }
}

impl Compiler for Latexmk {
    fn program(&self) -> &str {
        &self.program
    }

    #[instrument(skip_all, fields(program = %self.program))]
    fn compile(&self, request: &CompileRequest) -> Result<CompileOutcome> {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.command_args(&request.output_dir, &request.main_tex))
            .current_dir(&request.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(search_path) = &request.search_path {
            cmd.env("PATH", search_path);
        }

        debug!(args = ?cmd.get_args().collect::<Vec<_>>(), "spawning compiler");
        let status = match cmd.status() {
            Ok(status) => status,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("compiler executable not found");
                return Ok(CompileOutcome::NotFound);
            }
            Err(err) => {
                error!(err = %err, "failed to spawn compiler");
                return Err(err).with_context(|| format!("spawn {}", self.program));
            }
        };

        debug!(exit_code = ?status.code(), "compiler finished");
        if status.success() {
            Ok(CompileOutcome::Success)
        } else {
            Ok(CompileOutcome::Failed {
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_end_with_output_dir_and_source() {
        let latexmk = Latexmk::new(&CompilerConfig::default());
        let args = latexmk.command_args(Path::new("output"), Path::new("main.tex"));
        let args: Vec<String> = args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        assert!(args.contains(&"-interaction=nonstopmode".to_string()));
        assert!(args.contains(&"-f".to_string()));
        assert_eq!(
            &args[args.len() - 2..],
            ["-output-directory=output", "main.tex"]
        );
    }

    #[test]
    fn missing_program_reports_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let latexmk = Latexmk::new(&CompilerConfig {
            program: "docbuild-no-such-compiler".to_string(),
            args: Vec::new(),
        });
        let request = CompileRequest {
            workdir: temp.path().to_path_buf(),
            output_dir: PathBuf::from("output"),
            main_tex: PathBuf::from("main.tex"),
            search_path: Some(OsString::from(temp.path())),
        };

        let outcome = latexmk.compile(&request).expect("compile");
        assert_eq!(outcome, CompileOutcome::NotFound);
    }
}
