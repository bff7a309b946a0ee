//! Per-employee document health score.
//!
//! Maps each detailed status to a fixed point value and averages the points
//! over exactly the employee's documents, rounding to the nearest integer.
//! The mean runs through `rust_decimal` so the rounding strategy (midpoint
//! away from zero) is explicit rather than whatever integer division gives.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::DocumentStatus;

/// Point values per detailed status used by the health score.
///
/// Missing scores the same as expired: an unsubmitted document contributes
/// nothing to an employee's health.
///
/// # Example
///
/// ```
/// use compliance_engine::classification::ScoreTable;
/// use compliance_engine::models::DocumentStatus;
///
/// let table = ScoreTable::default();
/// assert_eq!(table.points(DocumentStatus::Valid), 100);
/// assert_eq!(table.points(DocumentStatus::Missing), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    /// Points for a valid document.
    pub valid: u32,
    /// Points for an upcoming document.
    pub upcoming: u32,
    /// Points for a warning document.
    pub warning: u32,
    /// Points for a critical document.
    pub critical: u32,
    /// Points for an expired document.
    pub expired: u32,
    /// Points for a missing document.
    pub missing: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            valid: 100,
            upcoming: 80,
            warning: 50,
            critical: 20,
            expired: 0,
            missing: 0,
        }
    }
}

impl ScoreTable {
    /// Returns the point value for a status.
    pub fn points(&self, status: DocumentStatus) -> u32 {
        match status {
            DocumentStatus::Valid => self.valid,
            DocumentStatus::Upcoming => self.upcoming,
            DocumentStatus::Warning => self.warning,
            DocumentStatus::Critical => self.critical,
            DocumentStatus::Expired => self.expired,
            DocumentStatus::Missing => self.missing,
        }
    }

    /// Checks that every point value fits the 0-100 score scale and that
    /// the table is ordered by severity.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidScoring`] if a point value exceeds 100
    /// or a worse status scores higher than a better one.
    pub fn validate(&self) -> EngineResult<()> {
        let ordered = [
            ("expired", self.expired),
            ("critical", self.critical),
            ("warning", self.warning),
            ("upcoming", self.upcoming),
            ("valid", self.valid),
        ];

        for (name, points) in ordered {
            if points > 100 {
                return Err(EngineError::InvalidScoring {
                    message: format!("{} points must not exceed 100, got {}", name, points),
                });
            }
        }
        if self.missing > 100 {
            return Err(EngineError::InvalidScoring {
                message: format!("missing points must not exceed 100, got {}", self.missing),
            });
        }

        for pair in ordered.windows(2) {
            let (worse_name, worse) = pair[0];
            let (better_name, better) = pair[1];
            if worse > better {
                return Err(EngineError::InvalidScoring {
                    message: format!(
                        "{} points ({}) must not exceed {} points ({})",
                        worse_name, worse, better_name, better
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Computes the 0-100 health score for one employee's document statuses.
///
/// The score is the arithmetic mean of the point values over exactly the
/// given statuses, rounded to the nearest integer with midpoints away from
/// zero. An empty slice scores zero.
///
/// # Examples
///
/// ```
/// use compliance_engine::classification::{ScoreTable, health_score};
/// use compliance_engine::models::DocumentStatus;
///
/// let table = ScoreTable::default();
///
/// // (20 + 80 + 100) / 3 = 66.67 -> 67
/// let statuses = [
///     DocumentStatus::Critical,
///     DocumentStatus::Upcoming,
///     DocumentStatus::Valid,
/// ];
/// assert_eq!(health_score(&statuses, &table), 67);
///
/// assert_eq!(health_score(&[], &table), 0);
/// ```
pub fn health_score(statuses: &[DocumentStatus], table: &ScoreTable) -> u8 {
    if statuses.is_empty() {
        return 0;
    }

    let total: u32 = statuses.iter().map(|&status| table.points(status)).sum();
    let mean = Decimal::from(total) / Decimal::from(statuses.len() as u32);

    mean.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(100)
}
