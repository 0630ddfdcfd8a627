//! Batch rendering to structured text.

use std::path::Path;

use fixturelab_core::HumanRecord;

use crate::errors::GenerationError;

/// Target text format for a rendered batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Block-style YAML document (a list of mappings).
    Yaml,
    /// JSON array with 2-space indentation.
    Json,
}

impl OutputFormat {
    pub const SUPPORTED: &'static str = ".yaml, .yml, .json";

    /// Thin boundary adapter mapping a file extension to a format.
    pub fn from_path(path: &Path) -> Result<Self, GenerationError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(GenerationError::UnsupportedFormat {
                requested: format!(".{other}"),
                supported: Self::SUPPORTED.to_string(),
            }),
        }
    }
}

/// Render a batch as deterministic structured text.
///
/// Both formats keep each record's field insertion order and pass non-ASCII
/// characters through literally.
pub fn render(records: &[HumanRecord], format: OutputFormat) -> Result<String, GenerationError> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(records)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}
