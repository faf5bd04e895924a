use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// File access for a target project, always through project-relative paths.
///
/// The generation flow only ever needs these three operations, and taking
/// them as a capability keeps the whole flow testable against an in-memory
/// tree.
pub trait ProjectTree {
    /// Returns the file's contents, or `None` when it does not exist.
    fn read(&self, path: &str) -> Result<Option<String>>;
    fn write(&mut self, path: &str, contents: &str) -> Result<()>;
    fn exists(&self, path: &str) -> bool;
}

/// The real project tree, rooted at the target project directory.
pub struct DiskTree {
    root: PathBuf,
}

impl DiskTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(Path::new(path))
    }
}

impl ProjectTree for DiskTree {
    fn read(&self, path: &str) -> Result<Option<String>> {
        let full = self.full_path(path);
        if !full.exists() {
            return Ok(None);
        }
        fs::read_to_string(&full)
            .map(Some)
            .with_context(|| format!("Failed to read {}", full.display()))
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<()> {
        let full = self.full_path(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&full, contents).with_context(|| format!("Failed to write {}", full.display()))
    }

    fn exists(&self, path: &str) -> bool {
        self.full_path(path).exists()
    }
}

/// In-memory tree used by tests.
#[cfg(test)]
pub struct MemTree {
    files: std::collections::BTreeMap<String, String>,
    writes: usize,
}

#[cfg(test)]
impl MemTree {
    pub fn new() -> Self {
        Self {
            files: std::collections::BTreeMap::new(),
            writes: 0,
        }
    }

    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.to_string());
        self
    }

    pub fn contents(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }
}

#[cfg(test)]
impl ProjectTree for MemTree {
    fn read(&self, path: &str) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<()> {
        self.files.insert(path.to_string(), contents.to_string());
        self.writes += 1;
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }
}
