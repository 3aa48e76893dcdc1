use chrono::NaiveDate;

use crate::domain::DailyBar;
use crate::models::PivotSet;

/// True once the UTC calendar day has moved past the last calculation.
pub fn is_new_day(current_date: NaiveDate, last_calculation_date: NaiveDate) -> bool {
    current_date > last_calculation_date
}

/// Yesterday's bar: the second-to-last element of an ascending daily history.
/// The last element is today's forming bar and is never used.
pub fn previous_completed_bar(daily_history: &[DailyBar]) -> Option<&DailyBar> {
    let [.., previous, _today] = daily_history else {
        return None;
    };
    previous.is_complete().then_some(previous)
}

/// Recalculate the pivots at most once per UTC day.
///
/// Returns the new set together with the date it is valid for, or `None` when
/// the day has not changed or there is no usable completed bar yet. In the
/// latter case the caller keeps its previous set and tries again on the next
/// update, since the calculation date is not advanced.
pub fn maybe_recompute_pivots(
    daily_history: &[DailyBar],
    current_date: NaiveDate,
    last_calculation_date: NaiveDate,
) -> Option<(PivotSet, NaiveDate)> {
    if !is_new_day(current_date, last_calculation_date) {
        return None;
    }

    let bar = previous_completed_bar(daily_history)?;
    let pivots = PivotSet::from_hlc(bar.high_price, bar.low_price, bar.close_price);
    Some((pivots, current_date))
}
