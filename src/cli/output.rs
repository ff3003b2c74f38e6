//! Output formatting for detection results and init summaries
//!
//! Detection results render as JSON, YAML, or human-readable text. Init
//! summaries are always human-readable.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

use crate::detection::DetectionResult;
use crate::init::InitReport;
use crate::model::ProjectType;

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Detection result as printed by `daab detect`
#[derive(Debug, Serialize)]
struct DetectionOutput<'a> {
    path: &'a Path,
    #[serde(flatten)]
    result: &'a DetectionResult,
    default_port: u16,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, path: &Path, result: &DetectionResult) -> Result<String> {
        let output = DetectionOutput {
            path,
            result,
            default_port: result.default_port(),
        };
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&output)
                .context("Failed to serialize detection result to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(&output)
                .context("Failed to serialize detection result to YAML"),
            OutputFormat::Human => Ok(self.format_human(&output)),
        }
    }

    fn format_human(&self, output: &DetectionOutput<'_>) -> String {
        let result = output.result;
        let mut out = String::new();

        out.push_str("\u{2713} Project Detected\n");
        out.push_str(RULE);
        out.push_str("\n\n");

        let _ = writeln!(out, "Path:          {}", output.path.display());
        let _ = writeln!(out, "Language:      {}", result.language.name());
        match &result.framework {
            Some(framework) => {
                let _ = writeln!(out, "Framework:     {}", framework.name());
            }
            None => out.push_str("Framework:     (none detected)\n"),
        }
        let _ = writeln!(out, "Default Port:  {}", output.default_port);

        if !result.detected_files.is_empty() {
            out.push_str("\nDetected Files:\n");
            for (i, file) in result.detected_files.iter().enumerate() {
                let connector = if i + 1 == result.detected_files.len() {
                    "\u{2514}"
                } else {
                    "\u{251C}"
                };
                let _ = writeln!(out, "{}\u{2500} {}", connector, file);
            }
        }

        out
    }

    /// Summary printed after a successful `daab init`
    pub fn format_report(&self, report: &InitReport) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "\u{2713} Initialized {} project '{}'",
            report.project_type, report.project_name
        );
        out.push_str(RULE);
        out.push_str("\n\n");

        if let Some(detection) = &report.detection {
            let _ = writeln!(out, "Detected:  {}\n", detection);
        }

        if report.project_type == ProjectType::Microservice {
            let _ = writeln!(out, "Services ({}):", report.services.len());
            for service in &report.services {
                let _ = writeln!(out, "\u{251C}\u{2500} {}", service);
            }
            if !report.skipped.is_empty() {
                let _ = writeln!(out, "\nSkipped ({}):", report.skipped.len());
                for skipped in &report.skipped {
                    let _ = writeln!(out, "\u{251C}\u{2500} {}: {}", skipped.name, skipped.reason);
                }
            }
            out.push('\n');
        }

        out.push_str("Written:\n");
        for path in &report.written {
            let _ = writeln!(out, "\u{251C}\u{2500} {}", path.display());
        }

        out.push_str("\nNext steps:\n");
        out.push_str("  1. Review the generated configuration\n");
        out.push_str("  2. Commit the .init directories alongside your code\n");

        out
    }
}
