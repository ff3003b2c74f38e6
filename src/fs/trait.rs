//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    /// Dot-prefixed entries (`.git`, `.init`, `.hidden`)
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Read-only view of the project tree.
///
/// Detection and service enumeration go through this trait so they can run
/// against an in-memory tree in tests. Nothing in the crate writes source
/// files; output documents go through [`crate::store::ConfigStore`].
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List directory contents (one level, unordered)
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Canonicalize a path
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// List immediate subdirectories sorted by name
    fn subdirectories(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut dirs: Vec<DirEntry> = self
            .read_dir(path)?
            .into_iter()
            .filter(DirEntry::is_dir)
            .collect();
        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(dirs)
    }
}
