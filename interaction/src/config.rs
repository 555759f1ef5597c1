#[cfg(feature = "json")]
use anyhow::{Context, Result};
#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    buttons::ButtonAnchor, constants::DWELL_THRESHOLD_SECS, host::ContentCatalog, mode::Mode, session::HandFilter,
};

// ============================================================================
// Viewer Configuration
// ============================================================================

/// Runtime choices, fixed for the lifetime of a `ViewerContext`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize), serde(default))]
pub struct ViewerConfig {
    pub anchor: ButtonAnchor,
    pub hand_filter: HandFilter,
    pub initial_mode: Mode,
    pub dwell_threshold_secs: f32,
    pub content: ContentCatalog,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            anchor: ButtonAnchor::default(),
            hand_filter: HandFilter::default(),
            initial_mode: Mode::default(),
            dwell_threshold_secs: DWELL_THRESHOLD_SECS,
            content: ContentCatalog::default(),
        }
    }
}

#[cfg(feature = "json")]
impl ViewerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse viewer config")?;
        if !(config.dwell_threshold_secs.is_finite() && config.dwell_threshold_secs > 0.0) {
            anyhow::bail!("dwell_threshold_secs must be positive, got {}", config.dwell_threshold_secs);
        }
        Ok(config)
    }

    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json_str(&json)
    }
}
