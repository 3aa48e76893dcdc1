//! Level ladder presentation and anchor configuration

use serde::{Deserialize, Serialize};

use crate::domain::{LineColor, LineStyle};

/// Configuration of one ladder as supplied by the host.
///
/// A ladder block in a config file must be complete; missing ladders fall back
/// to [`CORE_LADDER`] / [`SECONDARY_LADDER`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderConfig {
    /// `-`-separated anchor offsets inside each 100-unit band, e.g. `"20-80"`.
    pub levels: String,
    pub color: LineColor,
    /// Appended to the anchor text to form the line label. `"-"` hides labels.
    pub label: String,
    pub width: u32,
    pub style: LineStyle,
}

/// Compile-time defaults for a ladder.
pub struct LadderDefaults {
    pub levels: &'static str,
    pub color: LineColor,
    pub label: &'static str,
    pub width: u32,
    pub style: LineStyle,
}

pub const CORE_LADDER: LadderDefaults = LadderDefaults {
    levels: "20-80",
    color: LineColor::from_rgb(30, 144, 255), // Dodger blue
    label: "",
    width: 2,
    style: LineStyle::Solid,
};

pub const SECONDARY_LADDER: LadderDefaults = LadderDefaults {
    levels: "33.5-46-66-93-3.5",
    color: LineColor::from_rgb(128, 128, 128), // Gray
    label: "-",
    width: 1,
    style: LineStyle::Dash,
};

impl From<&LadderDefaults> for LadderConfig {
    fn from(defaults: &LadderDefaults) -> Self {
        Self {
            levels: defaults.levels.to_string(),
            color: defaults.color,
            label: defaults.label.to_string(),
            width: defaults.width,
            style: defaults.style,
        }
    }
}
