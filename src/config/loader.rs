//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading compliance
//! policy configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::classification::{ScoreTable, StatusThresholds};
use crate::error::{EngineError, EngineResult};

use super::types::{ComplianceConfig, PolicyMetadata, ScoringConfig, ThresholdsConfig};

/// Loads and provides access to compliance policy configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the policy metadata, threshold table, and scoring
/// table. Loading validates both tables, so a loader that constructed
/// successfully always serves consistent configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/compliance/
/// ├── policy.yaml      # Policy pack metadata
/// ├── thresholds.yaml  # Classifier threshold table
/// └── scoring.yaml     # Status point values and slot count
/// ```
///
/// # Example
///
/// ```no_run
/// use compliance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/compliance").unwrap();
/// println!("Policy: {}", loader.metadata().name);
/// println!("Critical window: {} days", loader.thresholds().critical_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ComplianceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g.,
    ///   "./config/compliance")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The threshold or scoring tables fail validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use compliance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/compliance")?;
    /// # Ok::<(), compliance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let metadata = Self::load_yaml::<PolicyMetadata>(&policy_path)?;

        let thresholds_path = path.join("thresholds.yaml");
        let thresholds_config = Self::load_yaml::<ThresholdsConfig>(&thresholds_path)?;

        let scoring_path = path.join("scoring.yaml");
        let scoring = Self::load_yaml::<ScoringConfig>(&scoring_path)?;

        let config = ComplianceConfig::new(metadata, thresholds_config.thresholds, scoring)?;

        Ok(Self { config })
    }

    /// Builds a loader from an already-validated configuration.
    ///
    /// Used by callers that assemble configuration in code (tests, embedded
    /// defaults) instead of reading the YAML directory.
    pub fn from_config(config: ComplianceConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying compliance configuration.
    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        self.config.metadata()
    }

    /// Returns the classifier threshold table.
    pub fn thresholds(&self) -> &StatusThresholds {
        self.config.thresholds()
    }

    /// Returns the status point table.
    pub fn points(&self) -> &ScoreTable {
        &self.config.scoring().points
    }

    /// Returns the document slots every employee contributes to the
    /// compliance rate.
    pub fn document_slots_per_employee(&self) -> u32 {
        self.config.scoring().document_slots_per_employee
    }
}
