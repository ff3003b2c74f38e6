use super::{BaseConfigApp, ProjectType, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single document describing a monolith project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonolithConfig {
    #[serde(flatten)]
    pub app: BaseConfigApp,
    pub region: String,
    pub environment: String,
    pub namespace: String,
}

impl MonolithConfig {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            app: BaseConfigApp::new(ProjectType::Monolith, now),
            region: String::new(),
            environment: String::new(),
            namespace: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.app.base.expect_type(ProjectType::Monolith)?;
        self.app.validate()
    }
}
