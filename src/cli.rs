//! Command-line interface module for renamer.
//!
//! This module handles all CLI-related functionality including:
//! - Flag parsing into [`RenameOptions`]
//! - Glob expansion of the file patterns, pattern by pattern
//! - Running every match through the transformer and the renamer
//! - Collecting per-file failures without stopping the batch

use crate::file_renamer::{FileRenamer, FileTarget, RenameError, RenameOutcome, RenameResult};
use crate::options::RenameOptions;
use crate::output::OutputFormatter;
use crate::transform::transform;
use clap::Parser;
use glob::{MatchOptions, glob_with};
use std::path::{Path, PathBuf};

/// Batch-rename files: trim, replace, strip diacritics, collapse spaces, lowercase.
#[derive(Parser, Debug, Clone)]
#[command(name = "renamer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Convert the filename to lowercase
    #[arg(short = 'l', long)]
    pub lowercase: bool,

    /// Remove diacritics from filename
    #[arg(short = 'd', long)]
    pub diacritics: bool,

    /// Remove spaces from filename
    #[arg(short = 's', long)]
    pub spaces: bool,

    /// Trims NUM of characters from the front of the filename
    #[arg(short = 'f', long = "trim-front", value_name = "NUM")]
    pub trim_front: Option<usize>,

    /// Trims NUM of characters from the back of the filename
    #[arg(short = 'b', long = "trim-back", value_name = "NUM")]
    pub trim_back: Option<usize>,

    /// Replaces OLD with NEW in the filename (repeatable, applied in order)
    #[arg(
        short = 'r',
        long = "replace",
        num_args = 2,
        value_names = ["OLD", "NEW"],
        action = clap::ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub replace: Vec<String>,

    /// Only dry test, without renaming files
    #[arg(short = 't', long = "test")]
    pub test: bool,

    /// Files to rename (glob patterns)
    #[arg(required = true, value_name = "FILE")]
    pub patterns: Vec<String>,
}

impl Cli {
    /// Returns the `--replace` values grouped into `(old, new)` pairs.
    pub fn replacement_pairs(&self) -> Vec<(String, String)> {
        self.replace
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect()
    }
}

impl From<&Cli> for RenameOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            trim_front: cli.trim_front,
            trim_back: cli.trim_back,
            replacements: cli.replacement_pairs(),
            strip_diacritics: cli.diacritics,
            collapse_whitespace: cli.spaces,
            lowercase: cli.lowercase,
            verbose: cli.verbose,
            dry_run: cli.test,
        }
    }
}

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of files renamed on disk.
    pub renamed_files: usize,
    /// Number of renames computed during a dry run.
    pub simulated_files: usize,
    /// Paths (or patterns) that failed, with the reason.
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of files and patterns processed.
    pub fn total_processed(&self) -> usize {
        self.renamed_files + self.simulated_files + self.failures.len()
    }

    /// Returns true if nothing failed.
    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line summary of the failures, or `None` if everything went through.
    pub fn failure_summary(&self) -> Option<String> {
        if self.is_complete_success() {
            return None;
        }
        Some(format!(
            "{} of {} could not be renamed. Please review errors above.",
            self.failures.len(),
            self.total_processed()
        ))
    }

    fn record_outcome(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed { .. } => self.renamed_files += 1,
            RenameOutcome::DryRun { .. } => self.simulated_files += 1,
        }
    }

    fn record_error(&mut self, error: RenameError) {
        OutputFormatter::error(&error.to_string());
        self.failures.push((error.subject(), error.to_string()));
    }
}

/// Runs the parsed command line and returns the batch report.
///
/// Per-file errors are printed and collected; they never abort the run.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use renamer::cli::{Cli, run};
///
/// let cli = Cli::parse_from(["renamer", "-s", "-l", "*.JPG"]);
/// let report = run(&cli);
/// println!("Renamed {} files", report.renamed_files);
/// ```
pub fn run(cli: &Cli) -> BatchReport {
    let options = RenameOptions::from(cli);
    if !options.has_transformations() {
        OutputFormatter::warning("No transformations selected; file names will not change.");
    }

    let report = rename_paths(&cli.patterns, &options);

    if let Some(summary) = report.failure_summary() {
        OutputFormatter::warning(&summary);
    }

    if options.dry_run {
        OutputFormatter::dry_run_notice(&format!(
            "{} {} would be renamed. No files were modified.",
            report.simulated_files,
            if report.simulated_files == 1 {
                "file"
            } else {
                "files"
            }
        ));
    }

    report
}

/// Expands each pattern in order and renames every match.
///
/// All matches of one pattern are handled before the next pattern is expanded.
pub fn rename_paths<S: AsRef<str>>(patterns: &[S], options: &RenameOptions) -> BatchReport {
    let mut report = BatchReport::new();

    for pattern in patterns {
        let matches = match expand_pattern(pattern.as_ref()) {
            Ok(matches) => matches,
            Err(e) => {
                report.record_error(e);
                continue;
            }
        };

        for entry in matches {
            match entry.and_then(|path| rename_file(&path, options)) {
                Ok(outcome) => report.record_outcome(&outcome),
                Err(e) => report.record_error(e),
            }
        }
    }

    report
}

/// Transforms the name of a single path and renames it.
pub fn rename_file(path: &Path, options: &RenameOptions) -> RenameResult<RenameOutcome> {
    let target = FileTarget::from_path(path)?;
    let new_name = transform(&target.base_name, options);
    FileRenamer::execute_target(&target, &new_name, options.verbose, options.dry_run)
}

/// Expands a glob pattern into its matches.
///
/// The whole pattern is expanded before anything is renamed, so renames
/// cannot feed back into the same expansion. `*` does not match hidden files.
pub fn expand_pattern(pattern: &str) -> RenameResult<Vec<RenameResult<PathBuf>>> {
    let match_options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let paths = glob_with(pattern, match_options).map_err(|e| RenameError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    Ok(paths
        .map(|entry| {
            entry.map_err(|e| RenameError::GlobEntry {
                path: e.path().to_path_buf(),
                source_error: e.into_error(),
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("renamer").chain(args.iter().copied()))
            .expect("Failed to parse arguments")
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli = parse(&["-v", "-l", "-d", "-s", "-f", "2", "-b", "3", "-t", "*.txt"]);
        let options = RenameOptions::from(&cli);

        assert!(options.verbose);
        assert!(options.lowercase);
        assert!(options.strip_diacritics);
        assert!(options.collapse_whitespace);
        assert_eq!(options.trim_front, Some(2));
        assert_eq!(options.trim_back, Some(3));
        assert!(options.dry_run);
        assert_eq!(cli.patterns, vec!["*.txt".to_string()]);
    }

    #[test]
    fn test_long_flags() {
        let cli = parse(&[
            "--verbose",
            "--lowercase",
            "--diacritics",
            "--spaces",
            "--trim-front",
            "1",
            "--trim-back",
            "1",
            "--test",
            "a",
            "b",
        ]);
        let options = RenameOptions::from(&cli);

        assert!(options.has_transformations());
        assert!(options.dry_run);
        assert_eq!(cli.patterns, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_no_flags_means_no_transformations() {
        let cli = parse(&["file.txt"]);
        assert_eq!(RenameOptions::from(&cli), RenameOptions::default());
    }

    #[test]
    fn test_repeated_replace_keeps_order() {
        let cli = parse(&["-r", "a", "b", "--replace", "b", "c", "x.txt"]);
        assert_eq!(
            cli.replacement_pairs(),
            vec![
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "c".to_string())
            ]
        );
        assert_eq!(cli.patterns, vec!["x.txt".to_string()]);
    }

    #[test]
    fn test_replace_accepts_hyphen_values() {
        let cli = parse(&["-r", "-", "_", "x.txt"]);
        assert_eq!(
            cli.replacement_pairs(),
            vec![("-".to_string(), "_".to_string())]
        );
    }

    #[test]
    fn test_missing_patterns_is_usage_error() {
        let result = Cli::try_parse_from(["renamer", "-l"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_trim_is_rejected() {
        let result = Cli::try_parse_from(["renamer", "-f", "-1", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_pattern_invalid_pattern() {
        let result = expand_pattern("[unclosed");
        assert!(matches!(result, Err(RenameError::InvalidPattern { .. })));
    }

    #[test]
    fn test_expand_pattern_skips_hidden_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join(".hidden"), "x").expect("Failed to write file");
        fs::write(temp_dir.path().join("visible"), "x").expect("Failed to write file");

        let pattern = format!("{}/*", temp_dir.path().display());
        let matches: Vec<PathBuf> = expand_pattern(&pattern)
            .expect("Pattern should be valid")
            .into_iter()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(matches, vec![temp_dir.path().join("visible")]);
    }

    #[test]
    fn test_rename_file_applies_transform() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("Café Menu.PDF");
        fs::write(&path, "x").expect("Failed to write file");

        let options = RenameOptions::new()
            .with_strip_diacritics(true)
            .with_collapse_whitespace(true)
            .with_lowercase(true);
        let outcome = rename_file(&path, &options).expect("Rename failed");

        assert_eq!(outcome.new_path(), temp_dir.path().join("cafe-menu.pdf"));
        assert!(temp_dir.path().join("cafe-menu.pdf").exists());
    }

    #[test]
    fn test_batch_report_counts() {
        let mut report = BatchReport::new();
        report.record_outcome(&RenameOutcome::Renamed {
            from: PathBuf::from("a"),
            to: PathBuf::from("b"),
        });
        report.record_outcome(&RenameOutcome::DryRun {
            from: PathBuf::from("c"),
            to: PathBuf::from("d"),
        });
        assert_eq!(report.total_processed(), 2);
        assert!(report.is_complete_success());
        assert_eq!(report.failure_summary(), None);

        report.record_error(RenameError::InvalidTarget {
            path: PathBuf::from(".."),
        });
        assert_eq!(report.total_processed(), 3);
        assert!(!report.is_complete_success());
        assert_eq!(report.failures[0].0, PathBuf::from(".."));
        assert_eq!(
            report.failure_summary().as_deref(),
            Some("1 of 3 could not be renamed. Please review errors above.")
        );
    }
}
