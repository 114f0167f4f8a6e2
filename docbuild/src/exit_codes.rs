//! Stable exit codes for the docbuild CLI.
//!
//! A failed compilation exits with the compiler's own status instead of a
//! fixed code, so it has no constant here.

/// Build published, nothing to publish, clean finished, or unknown command.
pub const OK: i32 = 0;
/// Unexpected error (bad config, filesystem failure during clean, ...).
pub const INVALID: i32 = 1;
/// The compiler executable could not be found on the search path.
pub const TOOL_MISSING: i32 = 1;
/// Used for a failed compile when the compiler reported no exit code (killed by a signal).
pub const COMPILE_SIGNALED: i32 = 1;
