//! Fields shared by every daab document

use super::{CloudProvider, ProjectType, ValidationError};
use crate::detection::DetectionResult;
use crate::stack::{FrameworkId, LanguageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: &str = "1.0";

/// Document metadata, project identity and cloud target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseConfig {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub project_name: String,
    pub project_type: ProjectType,
    pub cloud_provider: CloudProvider,
}

impl BaseConfig {
    /// Empty document stamped with `now`
    pub fn new(project_type: ProjectType, now: DateTime<Utc>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            created_at: now,
            updated_at: now,
            project_name: String::new(),
            project_type,
            cloud_provider: CloudProvider::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_name.trim().is_empty() {
            return Err(ValidationError::EmptyProjectName);
        }
        if self.created_at > self.updated_at {
            return Err(ValidationError::TimestampsOutOfOrder {
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }

    pub(crate) fn expect_type(&self, expected: ProjectType) -> Result<(), ValidationError> {
        if self.project_type != expected {
            return Err(ValidationError::ProjectTypeMismatch {
                expected,
                found: self.project_type,
            });
        }
        Ok(())
    }
}

/// A single deployable unit: what was detected and how it runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseConfigApp {
    #[serde(flatten)]
    pub base: BaseConfig,

    /// Always emitted; `null` when nothing was detected
    #[serde(default)]
    pub language: Option<LanguageId>,
    #[serde(default)]
    pub framework: Option<FrameworkId>,
    #[serde(default)]
    pub detected_files: Vec<String>,
    #[serde(default)]
    pub port: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_registry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_endpoint: Option<String>,
}

impl BaseConfigApp {
    pub fn new(project_type: ProjectType, now: DateTime<Utc>) -> Self {
        Self {
            base: BaseConfig::new(project_type, now),
            language: None,
            framework: None,
            detected_files: Vec::new(),
            port: 0,
            container_registry: None,
            build_command: None,
            start_command: None,
            health_endpoint: None,
        }
    }

    pub fn apply_detection(&mut self, detection: DetectionResult) {
        self.language = Some(detection.language);
        self.framework = detection.framework;
        self.detected_files = detection.detected_files;
    }

    /// Empty or whitespace-only registries are stored as absent
    pub fn set_container_registry(&mut self, registry: &str) {
        let registry = registry.trim();
        self.container_registry = (!registry.is_empty()).then(|| registry.to_string());
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.base.validate()?;
        if self.language.is_none() {
            return Err(ValidationError::MissingLanguage);
        }
        if self.port == 0 {
            return Err(ValidationError::InvalidPort(0));
        }
        Ok(())
    }
}

/// Narrows a prompted number to a TCP port (1–65535)
pub fn port_from(value: i64) -> Result<u16, ValidationError> {
    match u16::try_from(value) {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ValidationError::InvalidPort(value)),
    }
}
