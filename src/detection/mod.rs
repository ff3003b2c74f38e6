//! Project language and framework detection

pub mod detector;
pub mod signatures;
mod sniff;

pub use detector::{DetectError, Detector};
pub use signatures::{FrameworkSignatures, Markers, SignatureRule, SIGNATURE_RULES};

use crate::stack::{FrameworkId, LanguageId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a successful detection pass over one directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub language: LanguageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<FrameworkId>,
    /// Marker files that decided the outcome, in evaluation order
    pub detected_files: Vec<String>,
}

impl DetectionResult {
    pub fn default_port(&self) -> u16 {
        self.language.default_port()
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(framework) = &self.framework {
            write!(f, " ({})", framework)?;
        }
        Ok(())
    }
}
