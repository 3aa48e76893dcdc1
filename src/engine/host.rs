//! Seams to the charting host.
//!
//! The engine never talks to a drawing surface or a data feed directly; the
//! host implements these two traits and drives [`LevelEngine::on_update`].
//!
//! [`LevelEngine::on_update`]: crate::engine::LevelEngine::on_update

use chrono::NaiveDate;

use crate::domain::DailyBar;
use crate::engine::state::LevelSnapshot;

/// Market data the host exposes to the engine. Reads are expected to be cheap
/// in-memory lookups.
pub trait ChartHost {
    /// Daily bars ascending by date. The last bar is the current, still-forming day.
    fn daily_history(&self, symbol: &str, lookback_days: u32) -> Vec<DailyBar>;

    /// Latest close of the primary series, if any bar exists yet.
    fn reference_price(&self) -> Option<f64>;

    fn current_utc_date(&self) -> NaiveDate;
}

/// Consumer of published snapshots (a chart, a log, a test double).
pub trait LevelRenderer {
    fn render(&mut self, snapshot: &LevelSnapshot);
}
