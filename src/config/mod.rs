//! Configuration for the Staffing Insight Engine.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::EngineConfig;
