//! Persisted configuration documents
//!
//! Every document is a flat YAML mapping built by composition: a
//! [`BaseConfig`] core, [`BaseConfigApp`] for anything that runs, and the
//! concrete monolith and microservice documents on top.

mod base;
mod microservice;
mod monolith;

pub use base::{port_from, BaseConfig, BaseConfigApp, SCHEMA_VERSION};
pub use microservice::{MicroserviceConfig, MicroserviceRootConfig};
pub use monolith::MonolithConfig;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MONOLITH_FILE: &str = "daab.yaml";
pub const MICROSERVICE_FILE: &str = "daab.yaml";
pub const ROOT_FILE: &str = "daab.root.yaml";

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Project name must not be empty")]
    EmptyProjectName,

    #[error("No language detected")]
    MissingLanguage,

    #[error("Invalid port {0}: must be between 1 and 65535")]
    InvalidPort(i64),

    #[error("created_at ({created_at}) is later than updated_at ({updated_at})")]
    TimestampsOutOfOrder {
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    },

    #[error("Expected a {expected} document, found project_type {found}")]
    ProjectTypeMismatch {
        expected: ProjectType,
        found: ProjectType,
    },

    #[error("No microservices detected")]
    NoServices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Monolith,
    Microservice,
}

impl ProjectType {
    pub const ALL: [ProjectType; 2] = [ProjectType::Monolith, ProjectType::Microservice];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Monolith => "monolith",
            ProjectType::Microservice => "microservice",
        }
    }

    pub fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown project type: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    #[default]
    Aws,
    Gcp,
    Azure,
}

impl CloudProvider {
    pub const ALL: [CloudProvider; 3] = [CloudProvider::Aws, CloudProvider::Gcp, CloudProvider::Azure];

    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Gcp => "gcp",
            CloudProvider::Azure => "azure",
        }
    }

    pub fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.as_str()).collect()
    }

    /// Region offered when the user has no preference
    pub fn default_region(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "us-east-1",
            CloudProvider::Gcp => "us-central1",
            CloudProvider::Azure => "eastus",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown cloud provider: {}", s))
    }
}

/// Any document the store can persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Monolith(MonolithConfig),
    MicroserviceRoot(MicroserviceRootConfig),
    Microservice(MicroserviceConfig),
}

impl Document {
    pub fn file_name(&self) -> &'static str {
        match self {
            Document::Monolith(_) => MONOLITH_FILE,
            Document::MicroserviceRoot(_) => ROOT_FILE,
            Document::Microservice(_) => MICROSERVICE_FILE,
        }
    }

    pub fn base(&self) -> &BaseConfig {
        match self {
            Document::Monolith(c) => &c.app.base,
            Document::MicroserviceRoot(c) => &c.base,
            Document::Microservice(c) => &c.app.base,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Document::Monolith(c) => c.validate(),
            Document::MicroserviceRoot(c) => c.validate(),
            Document::Microservice(c) => c.validate(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        match self {
            Document::Monolith(c) => serde_yaml::to_string(c),
            Document::MicroserviceRoot(c) => serde_yaml::to_string(c),
            Document::Microservice(c) => serde_yaml::to_string(c),
        }
    }
}

impl From<MonolithConfig> for Document {
    fn from(config: MonolithConfig) -> Self {
        Document::Monolith(config)
    }
}

impl From<MicroserviceRootConfig> for Document {
    fn from(config: MicroserviceRootConfig) -> Self {
        Document::MicroserviceRoot(config)
    }
}

impl From<MicroserviceConfig> for Document {
    fn from(config: MicroserviceConfig) -> Self {
        Document::Microservice(config)
    }
}
