use serde::Serialize;

use crate::domain::{LineColor, LineStyle};

/// A single horizontal line handed to the renderer.
/// Levels are never edited; the engine rebuilds the whole list on every update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Level {
    pub price: f64,
    pub color: LineColor,
    /// Empty when the owning anchor set suppresses labels.
    pub label: String,
    pub width: u32,
    pub style: LineStyle,
}

impl Level {
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }

    /// Distance from price to this level
    pub fn distance_to(&self, price: f64) -> f64 {
        (self.price - price).abs()
    }
}
