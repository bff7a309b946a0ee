//! Configuration types for the compliance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. The threshold and score
//! tables themselves live in the classification layer; this module wraps
//! them with metadata and validation.

use serde::Deserialize;

use crate::classification::{ScoreTable, StatusThresholds};
use crate::error::{EngineError, EngineResult};

/// Metadata about the compliance policy.
///
/// Identifies which policy pack is loaded, so operations can tell apart
/// e.g. the default corporate policy from a branch-specific override.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// Short identifier for the policy pack (e.g., "default").
    pub name: String,
    /// The version or effective date of the policy pack.
    pub version: String,
    /// A human-readable description of the policy pack.
    pub description: String,
}

/// Thresholds configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    /// The classifier threshold table.
    pub thresholds: StatusThresholds,
}

/// Scoring configuration from scoring.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Point values per detailed status.
    pub points: ScoreTable,
    /// Document slots every employee contributes to the compliance rate,
    /// regardless of submission state.
    pub document_slots_per_employee: u32,
}

impl ScoringConfig {
    /// Checks the point table and the slot count.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidScoring`] if the point table is
    /// inconsistent or the slot count is zero.
    pub fn validate(&self) -> EngineResult<()> {
        self.points.validate()?;
        if self.document_slots_per_employee == 0 {
            return Err(EngineError::InvalidScoring {
                message: "document_slots_per_employee must be nonzero".to_string(),
            });
        }
        Ok(())
    }
}

/// The complete compliance configuration loaded from YAML files.
///
/// Aggregates everything loaded from a policy configuration directory.
/// Construction validates the threshold ordering and the scoring table, so
/// a held `ComplianceConfig` is always internally consistent.
#[derive(Debug, Clone)]
pub struct ComplianceConfig {
    /// Policy metadata.
    metadata: PolicyMetadata,
    /// The classifier threshold table.
    thresholds: StatusThresholds,
    /// The scoring configuration.
    scoring: ScoringConfig,
}

impl ComplianceConfig {
    /// Creates a new ComplianceConfig from its component parts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidThresholds`] or
    /// [`EngineError::InvalidScoring`] if either table fails validation.
    pub fn new(
        metadata: PolicyMetadata,
        thresholds: StatusThresholds,
        scoring: ScoringConfig,
    ) -> EngineResult<Self> {
        thresholds.validate()?;
        scoring.validate()?;
        Ok(Self {
            metadata,
            thresholds,
            scoring,
        })
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the classifier threshold table.
    pub fn thresholds(&self) -> &StatusThresholds {
        &self.thresholds
    }

    /// Returns the scoring configuration.
    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }
}
