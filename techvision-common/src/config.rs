//! Site configuration

use crate::error::{ContentError, Result};
use serde::{Deserialize, Serialize};

/// Height of the fixed navigation bar plus margin, in CSS pixels.
pub const DEFAULT_FOCUS_OFFSET: f64 = 100.0;

/// Tunables for the page, read from the `config` object of the content
/// document. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Offset added to the scroll position before deciding which section is in view
    pub focus_offset: f64,
    /// Use smooth scrolling for navigation clicks
    pub smooth_scroll: bool,
    /// Maximum level written to the browser console (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            focus_offset: DEFAULT_FOCUS_OFFSET,
            smooth_scroll: true,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.focus_offset.is_finite() || self.focus_offset < 0.0 {
            return Err(ContentError::InvalidConfig(format!(
                "focus_offset must be a non-negative number, got {}",
                self.focus_offset
            )));
        }
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
            other => Err(ContentError::InvalidConfig(format!(
                "unknown log_level {other}"
            ))),
        }
    }
}
