pub mod core;
pub mod host;
pub mod state;

// Re-export key components
pub use self::core::LevelEngine;
pub use host::{ChartHost, LevelRenderer};
pub use state::{EngineState, LevelSnapshot, PivotLine};
