//! Configuration loading and management for the Shift Roster & Payroll
//! Engine.
//!
//! This module provides functionality to load the engine configuration from
//! a YAML file, currently the calendar grid geometry used by the layout
//! component. Built-in defaults match the production grid, so the engine is
//! fully usable without a configuration file.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Grid origin hour: {}", loader.grid().grid_start_hour);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, GridConfig};
