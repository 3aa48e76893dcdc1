// Domain types and value objects
pub mod daily_bar;
pub mod line_style;

// Re-export commonly used types
pub use daily_bar::DailyBar;
pub use line_style::{LineColor, LineStyle};
