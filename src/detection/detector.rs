//! Signature-based project detector
//!
//! Detection runs in two passes. The first scans [`SIGNATURE_RULES`] in order
//! and stops at the first rule whose marker exists; failures in this pass are
//! real errors. The second pass sniffs the matched manifest for a framework
//! and is best-effort: a manifest that cannot be read or parsed leaves the
//! framework empty.

use super::signatures::{Markers, SignatureRule, SIGNATURE_RULES};
use super::DetectionResult;
use crate::fs::FileSystem;
use crate::stack::FrameworkId;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DetectError {
    /// The path to inspect is missing or is a file
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Listing the directory for a pattern rule failed
    #[error("Failed to list {}: {error:#}", .path.display())]
    Io { path: PathBuf, error: anyhow::Error },

    #[error("Invalid marker pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: &'static str,
        #[source]
        source: glob::PatternError,
    },
}

pub struct Detector<'a> {
    fs: &'a dyn FileSystem,
    project_path: PathBuf,
}

impl<'a> Detector<'a> {
    pub fn new(fs: &'a dyn FileSystem, project_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            project_path: project_path.into(),
        }
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Returns `Ok(None)` when no rule matches.
    pub fn detect(&self) -> Result<Option<DetectionResult>, DetectError> {
        if !self.fs.is_dir(&self.project_path) {
            return Err(DetectError::NotADirectory(self.project_path.clone()));
        }

        for rule in SIGNATURE_RULES {
            if let Some(marker) = self.find_marker(rule)? {
                debug!(
                    path = %self.project_path.display(),
                    language = %rule.language,
                    marker = %marker,
                    "Matched signature rule"
                );
                let framework = self.sniff_framework(rule, &marker);
                return Ok(Some(DetectionResult {
                    language: rule.language.clone(),
                    framework,
                    detected_files: vec![marker],
                }));
            }
        }

        debug!(path = %self.project_path.display(), "No signature rule matched");
        Ok(None)
    }

    fn find_marker(&self, rule: &SignatureRule) -> Result<Option<String>, DetectError> {
        match rule.markers {
            Markers::Files(names) => Ok(names
                .iter()
                .find(|name| self.fs.is_file(&self.project_path.join(name)))
                .map(|name| name.to_string())),
            Markers::Globs(patterns) => self.find_glob_marker(patterns),
        }
    }

    fn find_glob_marker(&self, patterns: &[&'static str]) -> Result<Option<String>, DetectError> {
        let mut names: Vec<String> = self
            .fs
            .read_dir(&self.project_path)
            .map_err(|error| DetectError::Io {
                path: self.project_path.clone(),
                error,
            })?
            .into_iter()
            .filter(|entry| !entry.is_dir())
            .map(|entry| entry.name)
            .collect();
        names.sort();

        for &pattern in patterns {
            let matcher = glob::Pattern::new(pattern)
                .map_err(|source| DetectError::InvalidPattern { pattern, source })?;
            if let Some(name) = names.iter().find(|name| matcher.matches(name)) {
                return Ok(Some(name.clone()));
            }
        }

        Ok(None)
    }

    fn sniff_framework(&self, rule: &SignatureRule, marker: &str) -> Option<FrameworkId> {
        let content = if rule.frameworks.needs_content() {
            let manifest = self.project_path.join(marker);
            match self.fs.read_to_string(&manifest) {
                Ok(content) => Some(content),
                Err(e) => {
                    debug!(
                        manifest = %manifest.display(),
                        error = %e,
                        "Skipping framework detection, manifest unreadable"
                    );
                    None
                }
            }
        } else {
            None
        };

        rule.frameworks.sniff(marker, content.as_deref())
    }
}
