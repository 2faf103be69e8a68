//! Rename configuration.
//!
//! `RenameOptions` is the fully typed form of the command-line flags. Every
//! field defaults to "do nothing", so `RenameOptions::default()` leaves file
//! names untouched.

/// Which transformations to apply to each file name, and how to run the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameOptions {
    /// Number of characters to remove from the front of the name.
    pub trim_front: Option<usize>,
    /// Number of characters to remove from the back of the name.
    pub trim_back: Option<usize>,
    /// `(old, new)` substring replacements, applied in order.
    pub replacements: Vec<(String, String)>,
    /// Remove combining marks after canonical decomposition ("é" -> "e").
    pub strip_diacritics: bool,
    /// Collapse runs of whitespace, `-` and `_` into a single `-`.
    pub collapse_whitespace: bool,
    /// Fold the name to lowercase.
    pub lowercase: bool,
    /// Print `old -> new` for every file.
    pub verbose: bool,
    /// Compute and report, but never touch the filesystem.
    pub dry_run: bool,
}

impl RenameOptions {
    /// Creates options with every transformation disabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trim_front(mut self, count: usize) -> Self {
        self.trim_front = Some(count);
        self
    }

    pub fn with_trim_back(mut self, count: usize) -> Self {
        self.trim_back = Some(count);
        self
    }

    /// Appends a replacement pair after the ones already configured.
    pub fn with_replacement(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.replacements.push((old.into(), new.into()));
        self
    }

    pub fn with_strip_diacritics(mut self, enabled: bool) -> Self {
        self.strip_diacritics = enabled;
        self
    }

    pub fn with_collapse_whitespace(mut self, enabled: bool) -> Self {
        self.collapse_whitespace = enabled;
        self
    }

    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    pub fn with_dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Returns true if at least one name transformation is enabled.
    ///
    /// `verbose` and `dry_run` only affect how the batch runs, not the names.
    pub fn has_transformations(&self) -> bool {
        self.trim_front.is_some()
            || self.trim_back.is_some()
            || !self.replacements.is_empty()
            || self.strip_diacritics
            || self.collapse_whitespace
            || self.lowercase
    }
}
