//! `docbuild` CLI entry point.
//!
//! With no argument, compiles the document and publishes the PDF. With
//! `clean`, removes non-PDF build artifacts. Any other argument is reported
//! and ignored.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use docbuild::build::run_build;
use docbuild::clean::clean_outputs;
use docbuild::command::{Invocation, UNKNOWN_COMMAND_NOTICE};
use docbuild::exit_codes;
use docbuild::io::compiler::Latexmk;
use docbuild::io::config::{BuildPaths, DEFAULT_CONFIG_FILE, load_config};
use docbuild::io::publish::PublishMode;
use docbuild::logging;
use docbuild::notice::{ColorChoice, apply_color_choice, notice, notices};

#[derive(Parser)]
#[command(
    name = "docbuild",
    version,
    about = "Compile the LaTeX document with latexmk and publish the PDF"
)]
struct Cli {
    /// `clean` removes non-PDF files from the output directory. Omit to build.
    #[arg(value_name = "COMMAND", allow_hyphen_values = true)]
    command: Option<String>,

    /// Words after the command; accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,

    /// Config file, relative to the working directory.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override `publish_mode` from the config file.
    #[arg(long, value_enum)]
    publish_mode: Option<PublishMode>,

    /// Control colored output (auto, always, never).
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorChoice,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    apply_color_choice(cli.color);

    let invocation = Invocation::from_arg(cli.command.as_deref());
    debug!(?invocation, ignored = ?cli.rest, "dispatching");
    if let Invocation::Unknown(_) = invocation {
        notice(UNKNOWN_COMMAND_NOTICE);
        return Ok(exit_codes::OK);
    }

    let root = std::env::current_dir().context("read current directory")?;
    let mut config = load_config(&root.join(&cli.config))?;
    if let Some(mode) = cli.publish_mode {
        config.publish_mode = mode;
    }

    match invocation {
        Invocation::Build => {
            let compiler = Latexmk::new(&config.compiler);
            let outcome = run_build(&root, &config, &compiler)?;
            notices(outcome.notices());
            Ok(outcome.exit_code())
        }
        Invocation::Clean => {
            let paths = BuildPaths::new(&root, &config)?;
            paths.ensure_output_dir()?;
            let summary = clean_outputs(&paths.output_dir)?;
            debug!(removed = summary.removed.len(), kept = summary.kept, "clean finished");
            notice(summary.notice());
            Ok(exit_codes::OK)
        }
        Invocation::Unknown(_) => Ok(exit_codes::OK),
    }
}
