//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. All of them are further gated by `cfg(debug_assertions)`.

/// Emit a summary line every time the level ladder is rebuilt (every update).
pub const PRINT_LEVEL_REBUILDS: bool = false;

/// Emit the reason a new day did not produce pivots (no completed daily bar yet).
/// Successful recalculations are always logged.
pub const PRINT_PIVOT_UPDATES: bool = true;

/// Emit every tick read from a replay file.
pub const PRINT_REPLAY_TICKS: bool = false;
