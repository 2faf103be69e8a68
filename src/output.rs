//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output. Rename mappings go to
//! stdout uncolored so they can be piped; diagnostics go to stderr with
//! colored markers.

use colored::*;
use std::path::Path;

/// Manages all CLI output with consistent styling and formatting.
///
/// This struct provides methods for:
/// - Rename mappings (`old -> new`, plain, stdout)
/// - Error messages (red with ✗, stderr)
/// - Warning messages (yellow with ⚠, stderr)
/// - Dry-run notices (yellow, stderr)
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a rename mapping as `old -> new`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use renamer::output::OutputFormatter;
    /// use std::path::Path;
    /// OutputFormatter::mapping(Path::new("IMG 1.JPG"), Path::new("img-1.jpg"));
    /// ```
    pub fn mapping(old_path: &Path, new_path: &Path) {
        println!("{}", Self::format_mapping(old_path, new_path));
    }

    /// Formats a rename mapping without printing it.
    pub fn format_mapping(old_path: &Path, new_path: &Path) -> String {
        format!("{} -> {}", old_path.display(), new_path.display())
    }

    /// Prints an error message in red with an X mark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use renamer::output::OutputFormatter;
    /// OutputFormatter::error("Error renaming 'a.txt': Permission denied");
    /// ```
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        eprintln!("{}", format!("[DRY RUN] {}", message).yellow());
    }
}
