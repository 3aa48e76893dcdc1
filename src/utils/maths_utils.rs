/// Width of one price band. Grid anchors are offsets inside a band.
pub const BAND_WIDTH: i64 = 100;

/// Round `value` to the nearest multiple of `step`.
/// Midpoints go to the even multiple, the same way the host platform rounds
/// (so 1250 with step 100 gives 1200, and 1350 gives 1400).
pub fn round_to_multiple(value: f64, step: i64) -> i64 {
    debug_assert!(step > 0);
    let bands = (value / step as f64).round_ties_even();
    if !bands.is_finite() {
        return 0;
    }
    (bands as i64).saturating_mul(step)
}

/// Inclusive arithmetic progression `start, start+step, ..` up to `end`.
/// Empty when `end < start`.
pub fn stepped_inclusive(start: i64, end: i64, step: i64) -> impl Iterator<Item = i64> + Clone {
    debug_assert!(step > 0);
    (start..=end).step_by(step as usize)
}

/// Floats are compared with a relative tolerance scaled to price magnitude.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
