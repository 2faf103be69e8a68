/// Rename execution for transformed file names.
///
/// This module turns a matched path into a [`FileTarget`], joins the directory
/// with the old and new base names, and performs (or simulates) the rename.
/// Failures are returned as [`RenameError`] values so the caller can report
/// them and carry on with the rest of the batch.
use crate::output::OutputFormatter;
use std::fs;
use std::path::{Path, PathBuf};

/// A matched path split into its directory and its mutable base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    /// The directory holding the file. Empty for bare names like `a.txt`.
    pub directory: PathBuf,
    /// The final path component, the part that gets renamed.
    pub base_name: String,
}

impl FileTarget {
    /// Splits a path into directory and base name.
    ///
    /// Fails for paths without a final name component (`..`, `/`) and for
    /// base names that are not valid Unicode.
    ///
    /// # Examples
    ///
    /// ```
    /// use renamer::file_renamer::FileTarget;
    /// use std::path::Path;
    ///
    /// let target = FileTarget::from_path(Path::new("photos/IMG 1.JPG")).unwrap();
    /// assert_eq!(target.directory, Path::new("photos"));
    /// assert_eq!(target.base_name, "IMG 1.JPG");
    /// ```
    pub fn from_path(path: &Path) -> RenameResult<Self> {
        let file_name = path
            .file_name()
            .ok_or_else(|| RenameError::InvalidTarget {
                path: path.to_path_buf(),
            })?;

        let base_name = file_name
            .to_str()
            .ok_or_else(|| RenameError::NonUnicodeName {
                path: path.to_path_buf(),
            })?
            .to_string();

        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(Self {
            directory,
            base_name,
        })
    }
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was renamed on disk.
    Renamed { from: PathBuf, to: PathBuf },
    /// Dry run: the rename was computed but not performed.
    DryRun { from: PathBuf, to: PathBuf },
}

impl RenameOutcome {
    /// The path the file had before the rename.
    pub fn original_path(&self) -> &Path {
        match self {
            Self::Renamed { from, .. } | Self::DryRun { from, .. } => from,
        }
    }

    /// The path the file has (or would have) after the rename.
    pub fn new_path(&self) -> &Path {
        match self {
            Self::Renamed { to, .. } | Self::DryRun { to, .. } => to,
        }
    }
}

/// Errors that can occur while resolving or renaming a file.
#[derive(Debug)]
pub enum RenameError {
    /// The path has no final component to rename.
    InvalidTarget { path: PathBuf },
    /// The base name is not valid Unicode and cannot be transformed.
    NonUnicodeName { path: PathBuf },
    /// The filesystem refused the rename.
    RenameFailed {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
    /// A glob pattern could not be parsed.
    InvalidPattern { pattern: String, reason: String },
    /// A path matched by a glob pattern could not be read.
    GlobEntry {
        path: PathBuf,
        source_error: std::io::Error,
    },
}

impl RenameError {
    /// The path (or pattern) the error is about.
    pub fn subject(&self) -> PathBuf {
        match self {
            Self::InvalidTarget { path }
            | Self::NonUnicodeName { path }
            | Self::GlobEntry { path, .. } => path.clone(),
            Self::RenameFailed { source, .. } => source.clone(),
            Self::InvalidPattern { pattern, .. } => PathBuf::from(pattern),
        }
    }
}

impl std::fmt::Display for RenameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTarget { path } => {
                write!(
                    f,
                    "Error renaming '{}': path has no file name component",
                    path.display()
                )
            }
            Self::NonUnicodeName { path } => {
                write!(
                    f,
                    "Error renaming '{}': file name is not valid Unicode",
                    path.display()
                )
            }
            Self::RenameFailed {
                source,
                source_error,
                ..
            } => {
                write!(f, "Error renaming '{}': {}", source.display(), source_error)
            }
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid file pattern '{}': {}", pattern, reason)
            }
            Self::GlobEntry { path, source_error } => {
                write!(f, "Error reading '{}': {}", path.display(), source_error)
            }
        }
    }
}

impl std::error::Error for RenameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RenameFailed { source_error, .. } | Self::GlobEntry { source_error, .. } => {
                Some(source_error)
            }
            _ => None,
        }
    }
}

/// Result type for rename operations.
pub type RenameResult<T> = Result<T, RenameError>;

/// Performs the filesystem side of a rename.
pub struct FileRenamer;

impl FileRenamer {
    /// Renames `directory/old_base_name` to `directory/new_base_name`.
    ///
    /// When `verbose` is set, `old -> new` is printed before anything is
    /// attempted. When `dry_run` is set the filesystem is left alone and a
    /// [`RenameOutcome::DryRun`] is returned. Identical or empty target names
    /// are passed straight to the OS.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use renamer::file_renamer::FileRenamer;
    /// use std::path::Path;
    ///
    /// match FileRenamer::execute(Path::new("photos"), "IMG 1.JPG", "img-1.jpg", true, false) {
    ///     Ok(outcome) => println!("Renamed to {}", outcome.new_path().display()),
    ///     Err(e) => eprintln!("{}", e),
    /// }
    /// ```
    pub fn execute(
        directory: &Path,
        old_base_name: &str,
        new_base_name: &str,
        verbose: bool,
        dry_run: bool,
    ) -> RenameResult<RenameOutcome> {
        let old_path = directory.join(old_base_name);
        let new_path = directory.join(new_base_name);

        if verbose {
            OutputFormatter::mapping(&old_path, &new_path);
        }

        if dry_run {
            return Ok(RenameOutcome::DryRun {
                from: old_path,
                to: new_path,
            });
        }

        fs::rename(&old_path, &new_path).map_err(|e| RenameError::RenameFailed {
            source: old_path.clone(),
            destination: new_path.clone(),
            source_error: e,
        })?;

        Ok(RenameOutcome::Renamed {
            from: old_path,
            to: new_path,
        })
    }

    /// Renames a resolved target to `new_base_name` in the same directory.
    pub fn execute_target(
        target: &FileTarget,
        new_base_name: &str,
        verbose: bool,
        dry_run: bool,
    ) -> RenameResult<RenameOutcome> {
        Self::execute(
            &target.directory,
            &target.base_name,
            new_base_name,
            verbose,
            dry_run,
        )
    }
}
