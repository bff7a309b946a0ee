//! Classification logic for the compliance engine.
//!
//! This module contains the pure calculation functions: the days-remaining
//! expiry calculator with lenient date parsing, the threshold status
//! classifier with its two named policies, the per-employee health score
//! aggregator, and the fleet-level roll-up that feeds the compliance
//! dashboard.

mod days_remaining;
mod fleet;
mod health_score;
mod status;

pub use days_remaining::{MILLIS_PER_DAY, days_until, days_until_opt, parse_expiry_date};
pub use fleet::{bucket_for, classify_employee, classify_fleet, compliance_rate};
pub use health_score::{ScoreTable, health_score};
pub use status::{
    DEFAULT_CRITICAL_DAYS, DEFAULT_SUMMARY_EXPIRING_DAYS, DEFAULT_UPCOMING_DAYS,
    DEFAULT_WARNING_DAYS, PolicyLabel, StatusPolicy, StatusThresholds, classify, classify_simplified,
    classify_strict,
};
