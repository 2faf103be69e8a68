//! renamer - A batch file renaming utility
//!
//! This library provides the file name transformation pipeline (trimming,
//! substring replacement, diacritic stripping, separator collapsing,
//! lowercasing), the rename executor with dry-run support, and the batch
//! driver that expands glob patterns and keeps going past per-file failures.

pub mod cli;
pub mod file_renamer;
pub mod options;
pub mod output;
pub mod transform;

pub use file_renamer::{FileRenamer, FileTarget, RenameError, RenameOutcome, RenameResult};
pub use options::RenameOptions;
pub use transform::transform;

pub use cli::{BatchReport, Cli, rename_paths, run};
