//! Whole-graph validation
//!
//! Scans a domains directory, builds the name -> direct-parents map, and
//! resolves every domain so repository linting can report each broken
//! inheritance chain in one pass instead of stopping at the first.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{WeftError, WeftResult};
use crate::locator::{CORE_BASENAME, DEFAULT_EXTENSION};
use crate::parser::parse_document;
use crate::resolver::InheritanceResolver;

/// Validates the inheritance graph of a domains directory.
pub struct GraphValidator {
    root: PathBuf,
}

impl GraphValidator {
    /// Create a validator over the given domains directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Build the direct-inheritance map for every domain document under
    /// the root.
    ///
    /// Records direct parents only; transitive ancestors are not expanded.
    /// Domains that extend nothing appear with an empty list. When two
    /// documents map to the same name, the first in sorted traversal wins,
    /// matching the locator's first-candidate semantics.
    pub fn inheritance_map(&self) -> WeftResult<BTreeMap<String, Vec<String>>> {
        if !self.root.is_dir() {
            return Err(WeftError::DirectoryNotFound {
                path: self.root.clone(),
            });
        }

        let mut map = BTreeMap::new();
        self.scan_directory(&self.root, &mut map)?;

        debug!(domains = map.len(), "built inheritance map");
        Ok(map)
    }

    /// Resolve every mapped domain, collecting cycle errors as messages.
    ///
    /// Returns an empty list iff the scanned graph is acyclic. Missing
    /// parents never show up here; resolution degrades them to
    /// placeholders. Non-cycle failures (unreadable files) propagate.
    pub fn validate_all(&self) -> WeftResult<Vec<String>> {
        let map = self.inheritance_map()?;
        let mut resolver = InheritanceResolver::new(self.root.clone());
        let mut errors = Vec::new();

        for name in map.keys() {
            match resolver.resolve(name) {
                Ok(_) => {}
                Err(err) if err.is_circular() => errors.push(err.to_string()),
                Err(err) => return Err(err),
            }
        }

        Ok(errors)
    }

    fn scan_directory(
        &self,
        dir: &Path,
        map: &mut BTreeMap<String, Vec<String>>,
    ) -> WeftResult<()> {
        let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();

        // Sorted traversal keeps duplicate-name resolution deterministic.
        entries.sort();

        for path in entries {
            if path.is_dir() {
                if !is_hidden(&path) {
                    self.scan_directory(&path, map)?;
                }
            } else if path
                .extension()
                .map(|ext| ext == DEFAULT_EXTENSION)
                .unwrap_or(false)
            {
                if path.file_name() == Some(std::ffi::OsStr::new("README.md")) {
                    continue;
                }

                let Some(name) = domain_name(&path) else {
                    continue;
                };

                let content = fs::read_to_string(&path)?;
                let (meta, _) = parse_document(&content, &path);

                map.entry(name)
                    .or_insert_with(|| meta.parent_names().to_vec());
            }
        }

        Ok(())
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Domain name for a document: the file stem, except `core` documents,
/// which take their directory's name.
fn domain_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    if stem == CORE_BASENAME {
        path.parent()?
            .file_name()?
            .to_str()
            .map(|name| name.to_string())
    } else {
        Some(stem.to_string())
    }
}
