//! Configuration loading for the Timecard Engine.
//!
//! This module loads the overtime policy and startup holidays from a YAML
//! file. Every key is optional, so the engine runs with defaults when no
//! file is given.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./timecard.yaml").unwrap();
//! println!("Standard day: {} minutes", config.policy().standard_day_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::TimecardConfig;
