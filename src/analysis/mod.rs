// Level generation and pivot calculation
pub mod level_ladder;
pub mod pivot_calc;

// Re-export commonly used types
pub use level_ladder::{PriceWindow, generate_levels};
pub use pivot_calc::{maybe_recompute_pivots, previous_completed_bar};
