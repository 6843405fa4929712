use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Plain text lines (default)
    #[default]
    Human,
    /// Single JSON report for machine processing
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" | "default" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown format: {}. Valid formats: human, json", s),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }
}
