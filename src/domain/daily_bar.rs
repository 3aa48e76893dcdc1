use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLC bar as handed over by the host.
/// The last bar of a history is the still-forming current day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
}

impl DailyBar {
    // A constructor for convenience
    pub fn new(
        date: NaiveDate,
        open_price: f64,
        high_price: f64,
        low_price: f64,
        close_price: f64,
    ) -> Self {
        DailyBar {
            date,
            open_price,
            high_price,
            low_price,
            close_price,
        }
    }

    /// Hosts fill gaps with NaN rather than dropping the bar.
    /// Such a bar carries no usable high/low/close.
    pub fn is_complete(&self) -> bool {
        self.high_price.is_finite() && self.low_price.is_finite() && self.close_price.is_finite()
    }

    pub fn range(&self) -> f64 {
        self.high_price - self.low_price
    }
}
