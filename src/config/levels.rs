//! Top-level overlay configuration

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::ladder::{CORE_LADDER, LadderConfig, SECONDARY_LADDER};
use crate::domain::LineColor;
use crate::models::AnchorSet;

/// Pivot line presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotLinesConfig {
    /// When false the pivots are still tracked but not handed to the renderer.
    pub show_pivot_lines: bool,
    pub pivot_color: LineColor,
    pub resistance_color: LineColor,
    pub support_color: LineColor,
}

pub const PIVOT_LINES: PivotLinesConfig = PivotLinesConfig {
    show_pivot_lines: true,
    pivot_color: LineColor::from_rgb(255, 215, 0),  // Gold
    resistance_color: LineColor::from_rgb(200, 0, 0), // Red
    support_color: LineColor::from_rgb(0, 200, 0),    // Green
};

/// Everything the host configures for one overlay instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelsConfig {
    pub core: LadderConfig,
    pub secondary: LadderConfig,

    /// Horizontal pixel inset of ladder labels. Passed through to the renderer untouched.
    pub label_offset: i32,

    /// Subtracted from the rounded reference price to get the bottom of the window.
    pub price_lower_offset: i64,
    /// Height of the window above its bottom (not above the reference price).
    pub price_upper_offset: i64,

    pub pivots: PivotLinesConfig,

    /// Symbol whose daily history feeds the pivot calculation.
    pub symbol: String,
    /// Daily bars requested from the host per pivot check. Needs at least two.
    pub pivot_lookback_days: u32,
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            core: LadderConfig::from(&CORE_LADDER),
            secondary: LadderConfig::from(&SECONDARY_LADDER),
            label_offset: 10,
            price_lower_offset: 500,
            price_upper_offset: 1000,
            pivots: PIVOT_LINES,
            symbol: "US30".to_string(),
            pivot_lookback_days: 5,
        }
    }
}

impl LevelsConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: LevelsConfig = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Check everything that can be wrong with a configuration and return the
    /// parsed anchor sets in ladder order (core first).
    pub fn validate(&self) -> Result<Vec<AnchorSet>> {
        if self.pivot_lookback_days < 2 {
            bail!(
                "pivot_lookback_days must be at least 2 (got {})",
                self.pivot_lookback_days
            );
        }
        if self.symbol.trim().is_empty() {
            bail!("symbol must not be empty");
        }

        let core = AnchorSet::from_config("Core", &self.core)?;
        let secondary = AnchorSet::from_config("Secondary", &self.secondary)?;
        Ok(vec![core, secondary])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineStyle;

    #[test]
    fn defaults_validate() {
        let sets = LevelsConfig::default().validate().unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].name, "Core");
        assert_eq!(sets[0].anchors.len(), 2);
        assert_eq!(sets[1].anchors.len(), 5);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: LevelsConfig =
            serde_json::from_str(r#"{"price_lower_offset": 200, "symbol": "DE40"}"#).unwrap();
        assert_eq!(config.price_lower_offset, 200);
        assert_eq!(config.symbol, "DE40");
        assert_eq!(config.price_upper_offset, 1000);
        assert_eq!(config.core, LadderConfig::from(&CORE_LADDER));
    }

    #[test]
    fn ladder_block_parses_colors_and_styles() {
        let config: LevelsConfig = serde_json::from_str(
            r##"{"secondary": {"levels": "10-90", "color": "#ff0000", "label": " s", "width": 3, "style": "dot"}}"##,
        )
        .unwrap();
        assert_eq!(config.secondary.color, LineColor::from_rgb(255, 0, 0));
        assert_eq!(config.secondary.style, LineStyle::Dot);
    }

    #[test]
    fn malformed_anchor_is_fatal() {
        let mut config = LevelsConfig::default();
        config.core.levels = "20-eighty".to_string();
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("eighty"));
    }

    #[test]
    fn lookback_below_two_is_rejected() {
        let config = LevelsConfig {
            pivot_lookback_days: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn serialized_default_reads_back_identically() {
        let json = serde_json::to_string(&LevelsConfig::default()).unwrap();
        let back: LevelsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LevelsConfig::default());
    }
}
