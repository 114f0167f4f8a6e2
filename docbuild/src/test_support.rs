//! Test-only helpers: a scripted in-process compiler and a fake `latexmk`
//! executable for driving the binary end to end.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::compiler::{CompileOutcome, CompileRequest, Compiler};

/// In-process [`Compiler`] with a fixed outcome.
///
/// Records every request, and whether the output directory already existed
/// when `compile` was called.
#[derive(Debug)]
pub struct FakeCompiler {
    outcome: CompileOutcome,
    write_pdf: bool,
    requests: RefCell<Vec<CompileRequest>>,
    saw_output_dir: Cell<bool>,
}

impl FakeCompiler {
    fn new(outcome: CompileOutcome, write_pdf: bool) -> Self {
        Self {
            outcome,
            write_pdf,
            requests: RefCell::new(Vec::new()),
            saw_output_dir: Cell::new(false),
        }
    }

    /// Succeeds and writes `<output_dir>/<stem>.pdf`.
    pub fn producing_pdf() -> Self {
        Self::new(CompileOutcome::Success, true)
    }

    /// Succeeds without producing anything.
    pub fn succeeding() -> Self {
        Self::new(CompileOutcome::Success, false)
    }

    pub fn failing(code: Option<i32>) -> Self {
        Self::new(CompileOutcome::Failed { code }, false)
    }

    pub fn missing() -> Self {
        Self::new(CompileOutcome::NotFound, false)
    }

    pub fn requests(&self) -> Vec<CompileRequest> {
        self.requests.borrow().clone()
    }

    pub fn saw_output_dir(&self) -> bool {
        self.saw_output_dir.get()
    }
}

impl Compiler for FakeCompiler {
    fn program(&self) -> &str {
        "latexmk"
    }

    fn compile(&self, request: &CompileRequest) -> Result<CompileOutcome> {
        let output_dir = request.workdir.join(&request.output_dir);
        self.saw_output_dir.set(output_dir.is_dir());
        self.requests.borrow_mut().push(request.clone());

        if self.write_pdf {
            let pdf = request.main_tex.with_extension("pdf");
            let name = pdf.file_name().unwrap_or_default();
            fs::write(output_dir.join(name), b"%PDF-1.5\n")?;
        }
        Ok(self.outcome)
    }
}

/// Write an executable `latexmk` stand-in into `bin_dir`.
///
/// The script honours `-output-directory=<dir>`. When `write_pdf` is set it
/// writes `<dir>/main.pdf`, `<dir>/main.log` and `<dir>/main.aux`, then exits
/// with `exit_code`. It only uses shell builtins, so it works with a `PATH`
/// that contains nothing but `bin_dir`.
#[cfg(unix)]
pub fn write_fake_latexmk(bin_dir: &Path, write_pdf: bool, exit_code: i32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(bin_dir)?;
    let produce = if write_pdf {
        "printf '%%PDF-1.5\\n' > \"$out/main.pdf\"\nprintf 'log\\n' > \"$out/main.log\"\nprintf 'aux\\n' > \"$out/main.aux\"\n"
    } else {
        ""
    };
    let script = format!(
        "#!/bin/sh\nout=.\nfor arg in \"$@\"; do\n  case \"$arg\" in\n    -output-directory=*) out=\"${{arg#-output-directory=}}\" ;;\n  esac\ndone\nprintf '%s\\n' \"$*\" > \"$out/args.txt\"\n{produce}exit {exit_code}\n"
    );
    let path = bin_dir.join("latexmk");
    fs::write(&path, script)?;
    let mut perms = fs::metadata(&path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms)?;
    Ok(())
}

/// Throwaway project root with a `docbuild.toml` that publishes into
/// `<root>/public` instead of the default sibling web app.
#[derive(Debug)]
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp project")?;
        let project = Self { dir };
        project.write_config("web_dir = \"public\"\n")?;
        Ok(project)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("output")
    }

    pub fn web_dir(&self) -> PathBuf {
        self.root().join("public")
    }

    /// Directory for fake executables; use it as the only `PATH` entry.
    pub fn bin_dir(&self) -> PathBuf {
        self.root().join("bin")
    }

    /// Replace `docbuild.toml` with `contents`.
    pub fn write_config(&self, contents: &str) -> Result<()> {
        let path = self.root().join(crate::io::config::DEFAULT_CONFIG_FILE);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }
}
