//! Planner configuration loading.
//!
//! Settings are loaded from a single YAML file; every field has a
//! default so a partial document still yields a usable configuration.

mod defaults;
mod error;
mod planner;

pub use error::ConfigLoadError;
pub use planner::PlannerSettings;
