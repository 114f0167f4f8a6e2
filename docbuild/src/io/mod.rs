//! I/O helpers for docbuild commands.

pub mod compiler;
pub mod config;
pub mod publish;
pub mod search_path;
