//! Build configuration stored in `docbuild.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use super::publish::PublishMode;

/// Default config file name, looked up in the project root.
pub const DEFAULT_CONFIG_FILE: &str = "docbuild.toml";

/// Build configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults
/// below, so a project without `docbuild.toml` behaves like the plain script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DocConfig {
    /// Scratch directory for compiler artifacts, relative to the project root.
    pub output_dir: PathBuf,

    /// Main LaTeX source, relative to the project root.
    pub main_tex: PathBuf,

    /// Directory served by the web app; receives the published PDF.
    pub web_dir: PathBuf,

    /// Whether the PDF stays in `output_dir` after publishing.
    pub publish_mode: PublishMode,

    pub compiler: CompilerConfig,

    pub interpreter: InterpreterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompilerConfig {
    /// Executable name or path, resolved through `PATH`.
    pub program: String,

    /// Fixed flags. `-output-directory=<output_dir>` and the main source are
    /// appended after these.
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Interpreter executable relative to `%USERPROFILE%`. On Windows, its
    /// directory is prepended to the compiler's `PATH` when it exists.
    pub windows_profile_relative: Option<PathBuf>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "latexmk".to_string(),
            args: [
                "-pdf",
                "-f",
                "-silent",
                "-use-make",
                "-interaction=nonstopmode",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            windows_profile_relative: Some(PathBuf::from(
                ".pyenv/pyenv-win/versions/3.10.11/python.exe",
            )),
        }
    }
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            main_tex: PathBuf::from("main.tex"),
            web_dir: PathBuf::from("../web_example/public"),
            publish_mode: PublishMode::Copy,
            compiler: CompilerConfig::default(),
            interpreter: InterpreterConfig::default(),
        }
    }
}

impl DocConfig {
    pub fn validate(&self) -> Result<()> {
        if self.compiler.program.trim().is_empty() {
            return Err(anyhow!("compiler.program must be non-empty"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(anyhow!("output_dir must be non-empty"));
        }
        if self.web_dir.as_os_str().is_empty() {
            return Err(anyhow!("web_dir must be non-empty"));
        }
        if self.main_tex.file_stem().is_none() {
            return Err(anyhow!(
                "main_tex must name a file (got '{}')",
                self.main_tex.display()
            ));
        }
        Ok(())
    }

    /// File name of the PDF the compiler produces for `main_tex`.
    pub fn pdf_file_name(&self) -> Result<String> {
        let stem = self
            .main_tex
            .file_stem()
            .ok_or_else(|| anyhow!("main_tex has no file stem"))?;
        Ok(format!("{}.pdf", stem.to_string_lossy()))
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DocConfig::default()`.
pub fn load_config(path: &Path) -> Result<DocConfig> {
    if !path.exists() {
        let cfg = DocConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DocConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Every path docbuild touches, resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub web_dir: PathBuf,
    /// PDF the compiler writes into `output_dir`.
    pub pdf_path: PathBuf,
    /// Compiler log next to `pdf_path`.
    pub log_path: PathBuf,
}

impl BuildPaths {
    pub fn new(root: impl Into<PathBuf>, config: &DocConfig) -> Result<Self> {
        let root = root.into();
        let pdf_name = config.pdf_file_name()?;
        let log_name = Path::new(&pdf_name).with_extension("log");
        let output_dir = root.join(&config.output_dir);
        let web_dir = root.join(&config.web_dir);
        Ok(Self {
            pdf_path: output_dir.join(&pdf_name),
            log_path: output_dir.join(log_name),
            output_dir,
            web_dir,
            root,
        })
    }

    /// `path` as the user configured it, i.e. with the root prefix removed.
    /// Paths outside the root are returned unchanged.
    pub fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("create directory {}", self.output_dir.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, DocConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            "web_dir = \"public\"\npublish_mode = \"move\"\n\n[compiler]\nprogram = \"mylatexmk\"\n",
        )
        .expect("write config");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.web_dir, PathBuf::from("public"));
        assert_eq!(cfg.publish_mode, PublishMode::Move);
        assert_eq!(cfg.compiler.program, "mylatexmk");
        assert_eq!(cfg.compiler.args, CompilerConfig::default().args);
        assert_eq!(cfg.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn empty_program_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[compiler]\nprogram = \"  \"\n").expect("write config");

        let err = load_config(&path).expect_err("load should fail");
        assert!(format!("{err:#}").contains("compiler.program"));
    }

    #[test]
    fn pdf_name_follows_main_tex_stem() {
        let cfg = DocConfig {
            main_tex: PathBuf::from("thesis/report.tex"),
            ..DocConfig::default()
        };
        assert_eq!(cfg.pdf_file_name().expect("pdf name"), "report.pdf");
    }

    #[test]
    fn build_paths_resolve_against_root() {
        let paths = BuildPaths::new("/proj/docs", &DocConfig::default()).expect("paths");
        assert_eq!(paths.output_dir, PathBuf::from("/proj/docs/output"));
        assert_eq!(paths.pdf_path, PathBuf::from("/proj/docs/output/main.pdf"));
        assert_eq!(paths.log_path, PathBuf::from("/proj/docs/output/main.log"));
        assert_eq!(
            paths.web_dir,
            PathBuf::from("/proj/docs/../web_example/public")
        );
    }

    #[test]
    fn relative_strips_root_only() {
        let paths = BuildPaths::new("/proj/docs", &DocConfig::default()).expect("paths");
        assert_eq!(
            paths.relative(&paths.web_dir.join("main.pdf")),
            PathBuf::from("../web_example/public/main.pdf")
        );
        assert_eq!(
            paths.relative(&paths.log_path),
            PathBuf::from("output/main.log")
        );
        assert_eq!(
            paths.relative(Path::new("/elsewhere/main.pdf")),
            PathBuf::from("/elsewhere/main.pdf")
        );
    }

    #[test]
    fn ensure_output_dir_creates_missing_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = BuildPaths::new(temp.path(), &DocConfig::default()).expect("paths");
        assert!(!paths.output_dir.exists());

        paths.ensure_output_dir().expect("ensure");
        assert!(paths.output_dir.is_dir());
        paths.ensure_output_dir().expect("ensure is idempotent");
    }
}
