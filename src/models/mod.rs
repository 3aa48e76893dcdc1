// Domain models for the price overlay
// These modules contain pure value types independent of any rendering surface

pub mod anchor_set;
pub mod level;
pub mod pivots;

// Re-export key types for convenience
pub use anchor_set::{Anchor, AnchorSet, parse_anchors};
pub use level::Level;
pub use pivots::{PivotKind, PivotRole, PivotSet};
