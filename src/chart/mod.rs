//! Chart data preparation: candle sources and dashboard assembly.
//!
//! Rendering is delegated to external tooling; this module only produces
//! the structured series a renderer consumes.

pub mod dashboard;
pub mod source;
pub mod synthetic;

// Re-exports for convenience
pub use dashboard::{DashboardConfig, DashboardData, OverlaySeries, Summary, VolumeColor};
pub use source::CandleSource;
pub use synthetic::SyntheticSource;
