//! Named visual presets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Style literal that switches the quality tags to full-colour art.
pub const COLOR_STYLE: &str = "color";

/// Style literal that permits several panels in one image.
pub const MULTI_PANEL_STYLE: &str = "multi_panel";

/// Model name recorded for styles without an entry.
pub const DEFAULT_MODEL: &str = "default";

/// Mapping from style names to backend checkpoints.
///
/// # Examples
///
/// ```
/// use mangaka_core::StyleCatalog;
///
/// let styles = StyleCatalog::default();
/// assert_eq!(styles.default_style, "shounen");
/// assert_eq!(styles.model_for("shoujo"), "meinamix_meina-v11");
/// assert_eq!(styles.model_for("watercolor"), "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleCatalog {
    /// Style used when the caller names none
    #[serde(rename = "default")]
    pub default_style: String,
    /// Style name to checkpoint name
    pub models: BTreeMap<String, String>,
}

impl Default for StyleCatalog {
    fn default() -> Self {
        let models = [
            ("shounen", "anythingV5_PrtRE"),
            ("shoujo", "meinamix_meina-v11"),
            ("seinen", "realisticVision_v60b1"),
            ("comedy", "toonyou_beta-6"),
            ("horror", "deliberate_v2"),
        ]
        .into_iter()
        .map(|(style, model)| (style.to_string(), model.to_string()))
        .collect();

        Self {
            default_style: "shounen".to_string(),
            models,
        }
    }
}

impl StyleCatalog {
    /// Checkpoint associated with a style, [`DEFAULT_MODEL`] when unknown.
    pub fn model_for(&self, style: &str) -> &str {
        self.models
            .get(style)
            .map(String::as_str)
            .unwrap_or(DEFAULT_MODEL)
    }

    /// The caller's style, or the default when none was given.
    pub fn resolve<'a>(&'a self, style: Option<&'a str>) -> &'a str {
        match style {
            Some(style) if !style.trim().is_empty() => style,
            _ => &self.default_style,
        }
    }
}
