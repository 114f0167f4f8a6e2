//! User-facing status lines, printed to stdout in yellow.

use clap::ValueEnum;
use colored::Colorize;

/// When to colour notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Install the process-wide colour override for `choice`.
pub fn apply_color_choice(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => colored::control::unset_override(),
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }
}

/// Print a single notice line.
pub fn notice(message: &str) {
    println!("{}", message.yellow());
}

/// Print each line from `messages` as a notice.
pub fn notices<I, S>(messages: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for message in messages {
        notice(message.as_ref());
    }
}
