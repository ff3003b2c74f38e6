//! Interactive project initialization
//!
//! The [`Initializer`] asks for the project topology, then either writes one
//! monolith document for the project root or walks the root's immediate
//! subdirectories and writes one document per detected service plus a root
//! document listing them.

mod initializer;

pub use initializer::Initializer;

use crate::config::ConfigError;
use crate::detection::{DetectError, DetectionResult};
use crate::model::{ProjectType, ValidationError};
use crate::prompt::PromptError;
use crate::store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Question texts, also the keys a `ScriptedPrompter` answers by
pub mod questions {
    pub const PROJECT_TYPE: &str = "Project type";
    pub const PROJECT_NAME: &str = "Project name";
    pub const CLOUD_PROVIDER: &str = "Cloud provider";
    pub const ENVIRONMENT: &str = "Environment";
    pub const REGION: &str = "Region";
    pub const NAMESPACE: &str = "Kubernetes namespace";
    pub const CONTAINER_REGISTRY: &str = "Container registry (leave empty for default)";
    pub const PORT: &str = "Application port";

    /// Per-service variant of a question, e.g. `Application port [svc-a]`
    pub fn for_service(question: &str, service: &str) -> String {
        format!("{} [{}]", question, service)
    }
}

pub const DEFAULT_PROJECT_NAME: &str = "my-app";

#[derive(Debug, Error)]
pub enum InitError {
    #[error("Project path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No supported project detected in {}", .0.display())]
    NotDetected(PathBuf),

    #[error("No microservices detected under {} ({skipped} skipped)", .path.display())]
    NoServices { path: PathBuf, skipped: usize },

    #[error("Failed to list services in {}: {error:#}", .path.display())]
    ListServices { path: PathBuf, error: anyhow::Error },

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl InitError {
    /// Errors that abort only the service being processed in a microservice run
    pub fn is_service_local(&self) -> bool {
        match self {
            InitError::Prompt(e) => e.is_input_error(),
            InitError::Validation(_) | InitError::Detect(_) => true,
            _ => false,
        }
    }

    /// Returns a user-friendly error message with troubleshooting hints
    pub fn help_message(&self) -> String {
        match self {
            InitError::NotADirectory(path) => format!(
                "Error: Project path is not a directory\nPath: {}\n\n\
                Help: Pass the project root with --project-path.",
                path.display()
            ),
            InitError::NotDetected(path) => format!(
                "Error: No supported project detected\nPath: {}\n\n\
                Help: daab looks for one of these markers in the project root:\n\
                go.mod, package.json, requirements.txt, Pipfile, pyproject.toml, setup.py,\n\
                pom.xml, build.gradle, build.gradle.kts, Gemfile, composer.json,\n\
                *.csproj, *.fsproj, *.vbproj, Cargo.toml\n\n\
                If this is a repository of services, choose the microservice project type.",
                path.display()
            ),
            InitError::NoServices { path, skipped } => format!(
                "Error: No microservices detected\nPath: {}\n\n\
                Help: Each service must live in its own immediate subdirectory\n\
                with a recognized project marker. {} subdirectories were skipped;\n\
                rerun with -v to see why.",
                path.display(),
                skipped
            ),
            InitError::Prompt(PromptError::Closed { .. }) => format!(
                "Error: {}\n\n\
                Help: Input ended before all questions were answered.\n\
                Use --non-interactive to accept every default.",
                self
            ),
            InitError::Store(e) => format!(
                "Error: {}\n\n\
                Help: Check that you can write to {}.",
                e,
                e.path().display()
            ),
            InitError::Config(e) => format!(
                "Error: Configuration error\n\n\
                Help: Check the DAAB_* environment variables.\n\n\
                Details: {}",
                e
            ),
            other => format!("Error: {}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedService {
    pub name: String,
    pub reason: String,
}

/// What one run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub project_type: ProjectType,
    pub project_name: String,
    /// Written documents, in write order
    pub written: Vec<PathBuf>,
    /// Monolith detection outcome
    pub detection: Option<DetectionResult>,
    /// Services written, in processing order
    pub services: Vec<String>,
    pub skipped: Vec<SkippedService>,
}

impl InitReport {
    fn new(project_type: ProjectType, project_name: String) -> Self {
        Self {
            project_type,
            project_name,
            written: Vec::new(),
            detection: None,
            services: Vec::new(),
            skipped: Vec::new(),
        }
    }
}
