//! Build helper for a LaTeX document served by a web app.
//!
//! `docbuild` runs `latexmk` on the project's main source and publishes the
//! resulting PDF into the web app's public directory. `docbuild clean` drops
//! the intermediate artifacts.
//!
//! - **[`io`]**: side-effecting pieces (config file, compiler process,
//!   publishing, `PATH` wiring). The compiler sits behind the
//!   [`io::compiler::Compiler`] trait so the flows can run against a fake.
//! - **[`build`]**, **[`clean`]**: the two flows, returning structured
//!   outcomes that the binary turns into notices and exit codes.

pub mod build;
pub mod clean;
pub mod command;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod notice;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
