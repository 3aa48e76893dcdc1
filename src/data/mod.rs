// Data loading for headless replays
pub mod replay;

// Re-export commonly used types
pub use replay::{ReplayFile, ReplayHost, ReplayTick};
