pub mod api;
pub mod config;
pub mod error;
pub mod estimator;
pub mod export;
pub mod format;
pub mod input;
pub mod model;
// cmd and reports are binary modules (see main.rs).

pub use estimator::{estimate, estimate_named, EstimateResult};
pub use model::{DevelopmentMode, ModelConstants};
