use chrono::NaiveDate;
use serde::Serialize;

use crate::analysis::PriceWindow;
use crate::config::PivotLinesConfig;
use crate::domain::LineColor;
use crate::models::{Level, PivotKind, PivotRole, PivotSet};

/// Lifecycle of an engine instance. There is no way back to `AwaitingFirstDay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngineState {
    /// No pivot set has been calculated yet.
    AwaitingFirstDay,
    /// Pivots have been calculated for at least one day.
    Ready,
}

/// One pivot line with its presentation resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PivotLine {
    pub kind: PivotKind,
    pub price: f64,
    pub color: LineColor,
}

/// Everything a renderer needs for one frame.
///
/// THE FRONT BUFFER. The engine publishes a fresh `Arc<LevelSnapshot>` per
/// update and never mutates a published one.
#[derive(Debug, Clone, Serialize)]
pub struct LevelSnapshot {
    pub state: EngineState,
    pub reference_price: f64,
    pub window: PriceWindow,
    pub levels: Vec<Level>,
    pub pivots: PivotSet,
    /// UTC date the pivots were calculated on.
    pub pivots_date: NaiveDate,
    pub pivot_presentation: PivotLinesConfig,
    /// Horizontal pixel inset for ladder labels.
    pub label_offset: i32,
}

impl LevelSnapshot {
    /// Pivot lines to draw, lowest first. Empty while pivots are hidden or not
    /// yet calculated.
    pub fn pivot_lines(&self) -> Vec<PivotLine> {
        if !self.pivot_presentation.show_pivot_lines || self.state == EngineState::AwaitingFirstDay
        {
            return Vec::new();
        }

        self.pivots
            .lines()
            .map(|(kind, price)| PivotLine {
                kind,
                price,
                color: self.pivot_color(kind),
            })
            .collect()
    }

    pub fn pivot_color(&self, kind: PivotKind) -> LineColor {
        let presentation = &self.pivot_presentation;
        match kind.role() {
            PivotRole::Support => presentation.support_color,
            PivotRole::Pivot => presentation.pivot_color,
            PivotRole::Resistance => presentation.resistance_color,
        }
    }

    /// Levels with `low <= price <= high`, in generation order.
    pub fn levels_between(&self, low: f64, high: f64) -> Vec<&Level> {
        self.levels
            .iter()
            .filter(|level| level.price >= low && level.price <= high)
            .collect()
    }

    /// The `count` levels closest to `price`, nearest first.
    pub fn nearest_levels(&self, price: f64, count: usize) -> Vec<&Level> {
        let mut by_distance: Vec<&Level> = self.levels.iter().collect();
        by_distance.sort_by(|a, b| a.distance_to(price).total_cmp(&b.distance_to(price)));
        by_distance.truncate(count);
        by_distance
    }
}
