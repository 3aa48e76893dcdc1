// Renderers that consume engine snapshots
pub mod log_renderer;

pub use log_renderer::LogRenderer;
