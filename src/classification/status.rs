//! Threshold status classifier.
//!
//! Maps a days-remaining value to exactly one status label under one of two
//! named policies. The strict policy produces the six detailed buckets used
//! by the documents dashboard; the simplified policy produces the coarse
//! labels used by summary tiles. The policies disagree at zero days
//! remaining (strict says expired, simplified says expiring), which is why
//! they are kept as distinct variants rather than one derived from the
//! other.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DocumentStatus, SummaryStatus};

/// Default upper bound (inclusive) of the critical window, in days.
pub const DEFAULT_CRITICAL_DAYS: i64 = 7;

/// Default upper bound (inclusive) of the warning window, in days.
pub const DEFAULT_WARNING_DAYS: i64 = 30;

/// Default upper bound (inclusive) of the upcoming window, in days.
pub const DEFAULT_UPCOMING_DAYS: i64 = 60;

/// Default upper bound (inclusive) of the simplified policy's expiring
/// window, in days.
pub const DEFAULT_SUMMARY_EXPIRING_DAYS: i64 = 30;

/// The named classifier policies.
///
/// Call sites select a policy explicitly instead of re-deriving thresholds
/// inline; the two are never merged because they classify the boundary
/// value `0` differently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Six-bucket policy: expired, critical, warning, upcoming, valid,
    /// missing. Zero days remaining is expired.
    #[default]
    Strict,
    /// Coarse policy for summary displays: expired, expiring, valid,
    /// missing. Expired means strictly negative days remaining, so zero is
    /// expiring.
    Simplified,
}

/// A status label tagged with the policy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy", content = "status")]
pub enum PolicyLabel {
    /// A label from the strict policy.
    Strict(DocumentStatus),
    /// A label from the simplified policy.
    Simplified(SummaryStatus),
}

/// The classifier threshold table.
///
/// Thresholds are inclusive upper bounds evaluated in ascending order,
/// first match wins. The defaults reproduce the dashboard windows: critical
/// within a week, warning within a month, upcoming within two months.
///
/// # Example
///
/// ```
/// use compliance_engine::classification::StatusThresholds;
///
/// let thresholds = StatusThresholds::default();
/// assert_eq!(thresholds.critical_days, 7);
/// assert_eq!(thresholds.warning_days, 30);
/// assert_eq!(thresholds.upcoming_days, 60);
/// assert!(thresholds.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusThresholds {
    /// Inclusive upper bound of the critical window.
    pub critical_days: i64,
    /// Inclusive upper bound of the warning window.
    pub warning_days: i64,
    /// Inclusive upper bound of the upcoming window.
    pub upcoming_days: i64,
    /// Inclusive upper bound of the simplified policy's expiring window.
    pub summary_expiring_days: i64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            critical_days: DEFAULT_CRITICAL_DAYS,
            warning_days: DEFAULT_WARNING_DAYS,
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            summary_expiring_days: DEFAULT_SUMMARY_EXPIRING_DAYS,
        }
    }
}

impl StatusThresholds {
    /// Checks that the windows are positive and properly nested.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidThresholds`] if any window is
    /// non-positive or the windows are not in ascending order.
    pub fn validate(&self) -> EngineResult<()> {
        if self.critical_days <= 0 {
            return Err(EngineError::InvalidThresholds {
                message: format!("critical_days must be positive, got {}", self.critical_days),
            });
        }
        if self.critical_days > self.warning_days {
            return Err(EngineError::InvalidThresholds {
                message: format!(
                    "critical_days ({}) must not exceed warning_days ({})",
                    self.critical_days, self.warning_days
                ),
            });
        }
        if self.warning_days > self.upcoming_days {
            return Err(EngineError::InvalidThresholds {
                message: format!(
                    "warning_days ({}) must not exceed upcoming_days ({})",
                    self.warning_days, self.upcoming_days
                ),
            });
        }
        if self.summary_expiring_days <= 0 {
            return Err(EngineError::InvalidThresholds {
                message: format!(
                    "summary_expiring_days must be positive, got {}",
                    self.summary_expiring_days
                ),
            });
        }
        Ok(())
    }
}

/// Classifies a days-remaining value under the strict six-bucket policy.
///
/// Thresholds are inclusive upper bounds, first match wins:
///
/// | days remaining | status |
/// |---|---|
/// | `None` | missing |
/// | `<= 0` | expired |
/// | `<= critical_days` | critical |
/// | `<= warning_days` | warning |
/// | `<= upcoming_days` | upcoming |
/// | otherwise | valid |
///
/// # Examples
///
/// ```
/// use compliance_engine::classification::{StatusThresholds, classify_strict};
/// use compliance_engine::models::DocumentStatus;
///
/// let thresholds = StatusThresholds::default();
/// assert_eq!(classify_strict(None, &thresholds), DocumentStatus::Missing);
/// assert_eq!(classify_strict(Some(0), &thresholds), DocumentStatus::Expired);
/// assert_eq!(classify_strict(Some(5), &thresholds), DocumentStatus::Critical);
/// assert_eq!(classify_strict(Some(45), &thresholds), DocumentStatus::Upcoming);
/// assert_eq!(classify_strict(Some(90), &thresholds), DocumentStatus::Valid);
/// ```
pub fn classify_strict(
    days_remaining: Option<i64>,
    thresholds: &StatusThresholds,
) -> DocumentStatus {
    let Some(days) = days_remaining else {
        return DocumentStatus::Missing;
    };

    if days <= 0 {
        DocumentStatus::Expired
    } else if days <= thresholds.critical_days {
        DocumentStatus::Critical
    } else if days <= thresholds.warning_days {
        DocumentStatus::Warning
    } else if days <= thresholds.upcoming_days {
        DocumentStatus::Upcoming
    } else {
        DocumentStatus::Valid
    }
}

/// Classifies a days-remaining value under the simplified summary policy.
///
/// Expired is strictly negative here: a document on its expiry day still
/// shows as expiring on summary tiles.
///
/// # Examples
///
/// ```
/// use compliance_engine::classification::{StatusThresholds, classify_simplified};
/// use compliance_engine::models::SummaryStatus;
///
/// let thresholds = StatusThresholds::default();
/// assert_eq!(classify_simplified(None, &thresholds), SummaryStatus::Missing);
/// assert_eq!(classify_simplified(Some(-1), &thresholds), SummaryStatus::Expired);
/// assert_eq!(classify_simplified(Some(0), &thresholds), SummaryStatus::Expiring);
/// assert_eq!(classify_simplified(Some(30), &thresholds), SummaryStatus::Expiring);
/// assert_eq!(classify_simplified(Some(31), &thresholds), SummaryStatus::Valid);
/// ```
pub fn classify_simplified(
    days_remaining: Option<i64>,
    thresholds: &StatusThresholds,
) -> SummaryStatus {
    let Some(days) = days_remaining else {
        return SummaryStatus::Missing;
    };

    if days < 0 {
        SummaryStatus::Expired
    } else if days <= thresholds.summary_expiring_days {
        SummaryStatus::Expiring
    } else {
        SummaryStatus::Valid
    }
}

/// Classifies a days-remaining value under the named policy.
///
/// The parameterized entry point for call sites that select a policy at
/// run time; the label comes back tagged with the policy that produced it.
///
/// # Example
///
/// ```
/// use compliance_engine::classification::{
///     PolicyLabel, StatusPolicy, StatusThresholds, classify,
/// };
/// use compliance_engine::models::{DocumentStatus, SummaryStatus};
///
/// let thresholds = StatusThresholds::default();
/// assert_eq!(
///     classify(StatusPolicy::Strict, Some(0), &thresholds),
///     PolicyLabel::Strict(DocumentStatus::Expired)
/// );
/// assert_eq!(
///     classify(StatusPolicy::Simplified, Some(0), &thresholds),
///     PolicyLabel::Simplified(SummaryStatus::Expiring)
/// );
/// ```
pub fn classify(
    policy: StatusPolicy,
    days_remaining: Option<i64>,
    thresholds: &StatusThresholds,
) -> PolicyLabel {
    match policy {
        StatusPolicy::Strict => PolicyLabel::Strict(classify_strict(days_remaining, thresholds)),
        StatusPolicy::Simplified => {
            PolicyLabel::Simplified(classify_simplified(days_remaining, thresholds))
        }
    }
}
