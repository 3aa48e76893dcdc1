use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DailyBar;
use crate::engine::ChartHost;
use crate::utils::time_utils::utc_date;

/// A recorded price update.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ReplayTick {
    pub time: DateTime<Utc>,
    pub price: f64,
}

/// Daily history plus a stream of ticks for one symbol, as stored on disk.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReplayFile {
    pub symbol: String,
    pub daily_bars: Vec<DailyBar>,
    pub ticks: Vec<ReplayTick>,
}

impl ReplayFile {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open replay file: {:?}", path))?;
        let reader = BufReader::new(file);
        let replay: ReplayFile = serde_json::from_reader(reader)
            .context(format!("Failed to parse replay file: {:?}", path))?;
        replay.check_ordering()?;
        Ok(replay)
    }

    /// Bars must be strictly ascending by date and ticks must not go back in time.
    pub fn check_ordering(&self) -> Result<()> {
        if let Some(pair) = self.daily_bars.windows(2).find(|w| w[0].date >= w[1].date) {
            bail!(
                "Daily bars out of order: {} followed by {}",
                pair[0].date,
                pair[1].date
            );
        }
        if let Some(pair) = self.ticks.windows(2).find(|w| w[0].time > w[1].time) {
            bail!("Ticks out of order: {} followed by {}", pair[0].time, pair[1].time);
        }
        Ok(())
    }

    /// Host view of the market as of `tick`.
    pub fn host_at<'a>(&'a self, tick: &'a ReplayTick) -> ReplayHost<'a> {
        ReplayHost {
            symbol: &self.symbol,
            daily_bars: &self.daily_bars,
            tick,
        }
    }
}

/// Serves history as it looked when a given tick arrived: every bar dated on or
/// before the tick's UTC day, the tick's own day being the forming bar.
/// A tick on a day with no bar (weekend, data gap) sees no history at all.
pub struct ReplayHost<'a> {
    symbol: &'a str,
    daily_bars: &'a [DailyBar],
    tick: &'a ReplayTick,
}

impl ReplayHost<'_> {
    fn visible_bars(&self, today: NaiveDate) -> &[DailyBar] {
        let end = self.daily_bars.partition_point(|bar| bar.date <= today);
        let visible = &self.daily_bars[..end];
        match visible.last() {
            Some(forming) if forming.date == today => visible,
            _ => &[],
        }
    }
}

impl ChartHost for ReplayHost<'_> {
    fn daily_history(&self, symbol: &str, lookback_days: u32) -> Vec<DailyBar> {
        if symbol != self.symbol {
            log::warn!(
                "Replay holds {} but daily history for {} was requested",
                self.symbol,
                symbol
            );
            return Vec::new();
        }
        let visible = self.visible_bars(self.current_utc_date());
        let skip = visible.len().saturating_sub(lookback_days as usize);
        visible[skip..].to_vec()
    }

    fn reference_price(&self) -> Option<f64> {
        Some(self.tick.price)
    }

    fn current_utc_date(&self) -> NaiveDate {
        utc_date(self.tick.time)
    }
}
