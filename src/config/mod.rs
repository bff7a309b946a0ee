//! Configuration loading and management for the compliance engine.
//!
//! This module provides functionality to load classifier policy
//! configuration from YAML files: policy metadata, the threshold table, and
//! the scoring table.
//!
//! # Example
//!
//! ```no_run
//! use compliance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/compliance").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ComplianceConfig, PolicyMetadata, ScoringConfig};
