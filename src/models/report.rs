//! Classification result models.
//!
//! This module contains the output records produced by the classification
//! engine: per-document status records, per-employee reports, and the
//! fleet-level aggregates rendered by the compliance dashboard.

use serde::{Deserialize, Serialize};

use super::document::{DocumentStatus, DocumentType, SummaryStatus};

/// The roll-up bucket an employee falls into on the compliance dashboard.
///
/// Buckets are mutually exclusive and partition any fleet: every employee
/// lands in exactly one, so the three counts always sum to the employee
/// total. A missing document is expired-equivalent for bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceBucket {
    /// At least one document is expired or missing.
    Expired,
    /// No expired documents, but at least one critical or warning document.
    Expiring,
    /// Every document is valid or upcoming.
    Compliant,
}

impl std::fmt::Display for ComplianceBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ComplianceBucket::Expired => "expired",
            ComplianceBucket::Expiring => "expiring",
            ComplianceBucket::Compliant => "compliant",
        };
        write!(f, "{}", label)
    }
}

/// The classified state of a single document slot.
///
/// Carries both policies' labels so summary views and detail views read the
/// same record without re-deriving thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// The document slot this record describes.
    pub document_type: DocumentType,
    /// The detailed (strict policy) status.
    pub status: DocumentStatus,
    /// The coarse (simplified policy) status.
    pub summary_status: SummaryStatus,
    /// Whole days until expiry, negative if already expired. `None` if and
    /// only if no parseable expiry date is on file.
    pub days_remaining: Option<i64>,
    /// Whether a scanned copy is on file.
    pub has_image: bool,
}

/// The full classification result for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// The branch the employee is affiliated with.
    pub branch: String,
    /// Per-document records in canonical order (iqama, health certificate,
    /// contract).
    pub documents: Vec<DocumentReport>,
    /// Document health score in `[0, 100]`.
    pub health_score: u8,
    /// The dashboard roll-up bucket this employee falls into.
    pub bucket: ComplianceBucket,
}

/// Fleet-level aggregates for the compliance dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    /// Total number of employees classified.
    pub total_employees: usize,
    /// Employees with at least one expired or missing document.
    pub employees_with_expired: usize,
    /// Employees with expiring documents but nothing expired.
    pub employees_expiring: usize,
    /// Employees whose documents are all valid or upcoming.
    pub employees_compliant: usize,
    /// Number of individual documents in `valid` status.
    pub valid_documents: usize,
    /// Total document slots across the fleet (slots per employee times
    /// employee count, regardless of submission state).
    pub document_slots: usize,
    /// Percentage of document slots in `valid` status, in `[0, 100]`.
    pub compliance_rate: u8,
}

/// The complete classification result for a fleet of employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetReport {
    /// Per-employee reports in input order.
    pub employees: Vec<EmployeeReport>,
    /// Fleet-level aggregates.
    pub summary: FleetSummary,
}
