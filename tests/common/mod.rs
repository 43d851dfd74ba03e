//! Common test utilities for Weft integration tests.
//!
//! Provides `DomainTree`, an isolated domains directory in a tempdir,
//! plus reusable document fixtures.

#![allow(dead_code)]


use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Isolated domains directory on disk.
pub struct DomainTree {
    dir: TempDir,
}

impl DomainTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create tempdir"),
        }
    }

    /// Root of the domains directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a document at `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("document has a parent")).expect("create parents");
        fs::write(&path, content).expect("write document");
        path
    }

    /// Conventional layout: the domain's `core.md` in its own directory.
    pub fn write_domain(&self, name: &str, content: &str) -> PathBuf {
        self.write(&format!("{name}/core.md"), content)
    }
}

impl Default for DomainTree {
    fn default() -> Self {
        Self::new()
    }
}
