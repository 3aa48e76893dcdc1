//! Configuration module for the price grid overlay.

mod debug; // Private: callers go through the re-exports below
pub use debug::{PRINT_LEVEL_REBUILDS, PRINT_PIVOT_UPDATES, PRINT_REPLAY_TICKS};

pub mod ladder;
pub mod levels;

// Re-export commonly used items
pub use ladder::{CORE_LADDER, LadderConfig, LadderDefaults, SECONDARY_LADDER};
pub use levels::{LevelsConfig, PIVOT_LINES, PivotLinesConfig};
