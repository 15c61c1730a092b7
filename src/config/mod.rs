//! Engine settings for the calendar and aggregation engine.
//!
//! Settings are loaded from a YAML file, with sensible defaults when no
//! file is present.

mod loader;
mod types;

pub use types::EngineConfig;
