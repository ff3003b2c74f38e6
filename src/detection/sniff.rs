//! Framework sniffing over manifest contents
//!
//! Sniffing never fails: unparsable manifests simply match nothing.

use super::signatures::FrameworkSignatures;
use crate::stack::FrameworkId;
use tracing::debug;

impl FrameworkSignatures {
    /// Returns the first signature that matches `marker` / `content`.
    ///
    /// `content` is `None` when the manifest was not read, either because the
    /// signatures don't need it or because reading failed.
    pub fn sniff(&self, marker: &str, content: Option<&str>) -> Option<FrameworkId> {
        match self {
            Self::None => None,
            Self::ByMarker(table) => first_match(table, |key| key == marker),
            Self::Text(table) => {
                let haystack = content?.to_lowercase();
                first_match(table, |needle| haystack.contains(&needle.to_lowercase()))
            }
            Self::JsonDependencies(table) => {
                let manifest: serde_json::Value = match serde_json::from_str(content?) {
                    Ok(value) => value,
                    Err(e) => {
                        debug!(marker, error = %e, "Manifest is not valid JSON");
                        return None;
                    }
                };
                let deps = manifest.get("dependencies")?.as_object()?;
                first_match(table, |name| deps.contains_key(name))
            }
            Self::TomlDependencies(table) => {
                let manifest: toml::Table = match content?.parse() {
                    Ok(value) => value,
                    Err(e) => {
                        debug!(marker, error = %e, "Manifest is not valid TOML");
                        return None;
                    }
                };
                let deps = manifest.get("dependencies")?.as_table()?;
                first_match(table, |name| deps.contains_key(name))
            }
        }
    }
}

fn first_match(
    table: &[(&'static str, FrameworkId)],
    mut predicate: impl FnMut(&str) -> bool,
) -> Option<FrameworkId> {
    table
        .iter()
        .find(|(key, _)| predicate(key))
        .map(|(_, framework)| framework.clone())
}
