use super::{BaseConfig, BaseConfigApp, ProjectType, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project-wide document for a microservice layout.
///
/// Carries no language or port; those live in each service's own
/// [`MicroserviceConfig`]. `detected_microservices` lists service directories
/// relative to the project root, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroserviceRootConfig {
    #[serde(flatten)]
    pub base: BaseConfig,
    #[serde(default)]
    pub detected_microservices: Vec<String>,
    pub environment: String,
    pub region: String,
    pub namespace: String,
}

impl MicroserviceRootConfig {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            base: BaseConfig::new(ProjectType::Microservice, now),
            detected_microservices: Vec::new(),
            environment: String::new(),
            region: String::new(),
            namespace: String::new(),
        }
    }

    /// Identity checks only; the service count is checked by [`Self::validate`]
    pub fn validate_identity(&self) -> Result<(), ValidationError> {
        self.base.expect_type(ProjectType::Microservice)?;
        self.base.validate()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_identity()?;
        if self.detected_microservices.is_empty() {
            return Err(ValidationError::NoServices);
        }
        Ok(())
    }
}

/// One service's document, stored inside the service directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroserviceConfig {
    #[serde(flatten)]
    pub app: BaseConfigApp,
}

impl MicroserviceConfig {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            app: BaseConfigApp::new(ProjectType::Microservice, now),
        }
    }

    /// Child of `root`: inherits its timestamps and cloud provider
    pub fn for_service(root: &MicroserviceRootConfig, service_name: &str) -> Self {
        let mut config = Self::new(root.base.created_at);
        config.app.base.updated_at = root.base.updated_at;
        config.app.base.project_name = service_name.to_string();
        config.app.base.cloud_provider = root.base.cloud_provider;
        config
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.app.base.expect_type(ProjectType::Microservice)?;
        self.app.validate()
    }
}
