//! Persistence of daab documents
//!
//! Documents land in an output subdirectory (`.init` unless configured
//! otherwise) of the directory they describe. Writes always replace what is
//! there.

use crate::model::Document;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_OUTPUT_DIR: &str = ".init";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            StoreError::CreateDir { path, .. }
            | StoreError::Serialize { path, .. }
            | StoreError::Write { path, .. }
            | StoreError::Read { path, .. }
            | StoreError::Parse { path, .. } => path,
        }
    }
}

pub trait ConfigStore {
    /// Persists `document` for the unit rooted at `directory`, returning the
    /// written file
    fn write(&self, document: &Document, directory: &Path) -> Result<PathBuf, StoreError>;
}

#[derive(Debug, Clone)]
pub struct YamlConfigStore {
    output_dir: String,
}

impl Default for YamlConfigStore {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl YamlConfigStore {
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    /// Where a document for `directory` is written
    pub fn document_path(&self, document: &Document, directory: &Path) -> PathBuf {
        directory.join(&self.output_dir).join(document.file_name())
    }

    /// Loads a previously written document
    pub fn read<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ConfigStore for YamlConfigStore {
    fn write(&self, document: &Document, directory: &Path) -> Result<PathBuf, StoreError> {
        let out_dir = directory.join(&self.output_dir);
        fs::create_dir_all(&out_dir).map_err(|source| StoreError::CreateDir {
            path: out_dir.clone(),
            source,
        })?;

        let path = out_dir.join(document.file_name());
        let yaml = document.to_yaml().map_err(|source| StoreError::Serialize {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, yaml).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "Wrote document");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MicroserviceRootConfig, MonolithConfig};
    use crate::stack::LanguageId;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn monolith() -> MonolithConfig {
        let now = Utc.with_ymd_and_hms(2026, 2, 2, 10, 0, 0).unwrap();
        let mut config = MonolithConfig::new(now);
        config.app.base.project_name = "shop".to_string();
        config.app.language = Some(LanguageId::Rust);
        config.app.detected_files = vec!["Cargo.toml".to_string()];
        config.app.port = 8080;
        config.region = "us-east-1".to_string();
        config.environment = "production".to_string();
        config.namespace = "default".to_string();
        config
    }

    #[test]
    fn test_write_creates_output_dir() {
        let temp = TempDir::new().unwrap();
        let store = YamlConfigStore::default();

        let path = store.write(&monolith().into(), temp.path()).unwrap();

        assert_eq!(path, temp.path().join(".init").join("daab.yaml"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("project_name: shop"));
        assert!(content.contains("language: rust"));
    }

    #[test]
    fn test_root_document_name() {
        let temp = TempDir::new().unwrap();
        let store = YamlConfigStore::default();
        let root = MicroserviceRootConfig::new(Utc::now());

        let path = store.write(&root.into(), temp.path()).unwrap();
        assert!(path.ends_with(".init/daab.root.yaml"));
    }

    #[test]
    fn test_custom_output_dir() {
        let temp = TempDir::new().unwrap();
        let store = YamlConfigStore::new("deploy");
        let doc: Document = monolith().into();

        let path = store.write(&doc, temp.path()).unwrap();
        assert_eq!(path, store.document_path(&doc, temp.path()));
        assert!(temp.path().join("deploy/daab.yaml").is_file());
    }

    #[test]
    fn test_rewrite_replaces_content() {
        let temp = TempDir::new().unwrap();
        let store = YamlConfigStore::default();
        let mut config = monolith();
        store.write(&config.clone().into(), temp.path()).unwrap();

        config.app.base.project_name = "renamed".to_string();
        let path = store.write(&config.clone().into(), temp.path()).unwrap();

        let loaded: MonolithConfig = YamlConfigStore::read(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_output_dir_blocked_by_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".init"), "not a dir").unwrap();
        let store = YamlConfigStore::default();

        let err = store.write(&monolith().into(), temp.path()).unwrap_err();
        assert!(matches!(err, StoreError::CreateDir { .. }));
        assert_eq!(err.path(), temp.path().join(".init"));
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = YamlConfigStore::read::<MonolithConfig>(&temp.path().join("nope.yaml"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }
}
