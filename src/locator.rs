//! Domain document location
//!
//! Maps a domain name to its backing document by probing an ordered list
//! of naming conventions under the domains root.

use std::fs;
use std::path::{Path, PathBuf};

/// Basename of a domain directory's primary document
pub(crate) const CORE_BASENAME: &str = "core";

/// Default document extension (without the dot)
pub(crate) const DEFAULT_EXTENSION: &str = "md";

type LocateRule = fn(&DomainLocator, &str) -> Option<PathBuf>;

/// Locates domain documents under a root directory.
///
/// Candidate rules are probed in order; the first existing path wins:
///
/// 1. `<root>/<name>/core.<ext>`
/// 2. `<root>/<name>.<ext>`
/// 3. `<root>/<subdir>/<name>.<ext>` for each immediate subdirectory
#[derive(Debug, Clone)]
pub struct DomainLocator {
    root: PathBuf,
    extension: String,
}

impl DomainLocator {
    /// Rules probed in order. New naming conventions slot in here without
    /// touching resolver logic.
    const RULES: &'static [LocateRule] = &[
        Self::core_in_named_dir,
        Self::file_at_root,
        Self::file_in_subdirs,
    ];

    /// Create a locator over the given domains directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Override the document extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The domains directory this locator probes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find the document backing `name`.
    ///
    /// Returns `None` when no candidate exists; a missing or unreadable
    /// root degrades the same way rather than erroring.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        Self::RULES.iter().find_map(|rule| rule(self, name))
    }

    fn document(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension)
    }

    fn core_in_named_dir(&self, name: &str) -> Option<PathBuf> {
        let candidate = self.root.join(name).join(self.document(CORE_BASENAME));
        candidate.is_file().then_some(candidate)
    }

    fn file_at_root(&self, name: &str) -> Option<PathBuf> {
        let candidate = self.root.join(self.document(name));
        candidate.is_file().then_some(candidate)
    }

    fn file_in_subdirs(&self, name: &str) -> Option<PathBuf> {
        let mut subdirs: Vec<PathBuf> = fs::read_dir(&self.root)
            .ok()?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();

        // Sorted so duplicate leaf names resolve identically on every platform.
        subdirs.sort();

        subdirs
            .into_iter()
            .map(|subdir| subdir.join(self.document(name)))
            .find(|candidate| candidate.is_file())
    }
}
