//! Per-employee assembly and fleet-level roll-ups.
//!
//! Composes the expiry calculator, status classifier, and health score into
//! the reports consumed by the documents dashboard: one record per document
//! slot, one bucket and score per employee, and the fleet partition plus
//! compliance rate across all employees.

use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    ComplianceBucket, DocumentReport, DocumentStatus, Employee, EmployeeReport, FleetReport,
    FleetSummary,
};

use super::days_remaining::days_until_opt;
use super::health_score::{ScoreTable, health_score};
use super::status::{StatusThresholds, classify_simplified, classify_strict};

/// Determines the roll-up bucket for one employee's document statuses.
///
/// A missing document is expired-equivalent here, so an employee with no
/// submissions at all lands in the expired bucket. The three buckets
/// partition every fleet.
///
/// # Example
///
/// ```
/// use compliance_engine::classification::bucket_for;
/// use compliance_engine::models::{ComplianceBucket, DocumentStatus};
///
/// let statuses = [
///     DocumentStatus::Critical,
///     DocumentStatus::Upcoming,
///     DocumentStatus::Valid,
/// ];
/// assert_eq!(bucket_for(&statuses), ComplianceBucket::Expiring);
/// ```
pub fn bucket_for(statuses: &[DocumentStatus]) -> ComplianceBucket {
    let has_expired = statuses
        .iter()
        .any(|s| matches!(s, DocumentStatus::Expired | DocumentStatus::Missing));
    if has_expired {
        return ComplianceBucket::Expired;
    }

    let has_expiring = statuses
        .iter()
        .any(|s| matches!(s, DocumentStatus::Critical | DocumentStatus::Warning));
    if has_expiring {
        ComplianceBucket::Expiring
    } else {
        ComplianceBucket::Compliant
    }
}

/// Computes the fleet-wide compliance percentage.
///
/// Every employee contributes exactly `slots_per_employee` document slots
/// regardless of submission state; only slots in `valid` status count
/// toward the rate. The percentage is rounded to the nearest integer with
/// midpoints away from zero. An empty fleet rates zero.
///
/// # Example
///
/// ```
/// use compliance_engine::classification::compliance_rate;
///
/// // 4 valid documents across 2 employees with 3 slots each: 4/6 -> 67%
/// assert_eq!(compliance_rate(4, 2, 3), 67);
/// assert_eq!(compliance_rate(0, 0, 3), 0);
/// ```
pub fn compliance_rate(valid_documents: usize, employee_count: usize, slots_per_employee: u32) -> u8 {
    let total_slots = employee_count as u64 * u64::from(slots_per_employee);
    if total_slots == 0 {
        return 0;
    }

    let rate = Decimal::from(100) * Decimal::from(valid_documents as u64)
        / Decimal::from(total_slots);
    rate.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(100)
}

/// Classifies all documents of one employee.
///
/// Produces one record per document slot in canonical order, each carrying
/// both policies' labels, plus the employee's health score and roll-up
/// bucket. `now` is the explicit reference instant for every day count.
///
/// # Example
///
/// ```
/// use compliance_engine::classification::{ScoreTable, StatusThresholds, classify_employee};
/// use compliance_engine::models::{ComplianceBucket, Document, DocumentSet, Employee};
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2026, 8, 6)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Huda Al-Qahtani".to_string(),
///     branch: "riyadh_main".to_string(),
///     documents: DocumentSet::default(),
/// };
///
/// let report = classify_employee(
///     &employee,
///     now,
///     &StatusThresholds::default(),
///     &ScoreTable::default(),
/// );
/// assert_eq!(report.health_score, 0);
/// assert_eq!(report.bucket, ComplianceBucket::Expired);
/// ```
pub fn classify_employee(
    employee: &Employee,
    now: NaiveDateTime,
    thresholds: &StatusThresholds,
    table: &ScoreTable,
) -> EmployeeReport {
    let documents: Vec<DocumentReport> = employee
        .documents
        .iter()
        .map(|(document_type, document)| {
            let days_remaining = days_until_opt(document.expiry_date, now);
            DocumentReport {
                document_type,
                status: classify_strict(days_remaining, thresholds),
                summary_status: classify_simplified(days_remaining, thresholds),
                days_remaining,
                has_image: document.has_image,
            }
        })
        .collect();

    let statuses: Vec<DocumentStatus> = documents.iter().map(|d| d.status).collect();

    EmployeeReport {
        employee_id: employee.id.clone(),
        name: employee.name.clone(),
        branch: employee.branch.clone(),
        health_score: health_score(&statuses, table),
        bucket: bucket_for(&statuses),
        documents,
    }
}

/// Classifies a whole fleet of employees.
///
/// Reports come back in input order; the summary carries the bucket
/// partition counts, the valid-document count, the total slot count, and
/// the compliance rate.
///
/// # Example
///
/// ```
/// use compliance_engine::classification::{ScoreTable, StatusThresholds, classify_fleet};
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2026, 8, 6)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let report = classify_fleet(
///     &[],
///     now,
///     &StatusThresholds::default(),
///     &ScoreTable::default(),
///     3,
/// );
/// assert_eq!(report.summary.total_employees, 0);
/// assert_eq!(report.summary.compliance_rate, 0);
/// ```
pub fn classify_fleet(
    employees: &[Employee],
    now: NaiveDateTime,
    thresholds: &StatusThresholds,
    table: &ScoreTable,
    slots_per_employee: u32,
) -> FleetReport {
    let reports: Vec<EmployeeReport> = employees
        .iter()
        .map(|employee| classify_employee(employee, now, thresholds, table))
        .collect();

    let mut employees_with_expired = 0;
    let mut employees_expiring = 0;
    let mut employees_compliant = 0;
    let mut valid_documents = 0;

    for report in &reports {
        match report.bucket {
            ComplianceBucket::Expired => employees_with_expired += 1,
            ComplianceBucket::Expiring => employees_expiring += 1,
            ComplianceBucket::Compliant => employees_compliant += 1,
        }
        valid_documents += report
            .documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Valid)
            .count();
    }

    let total_employees = reports.len();
    let summary = FleetSummary {
        total_employees,
        employees_with_expired,
        employees_expiring,
        employees_compliant,
        valid_documents,
        document_slots: total_employees * slots_per_employee as usize,
        compliance_rate: compliance_rate(valid_documents, total_employees, slots_per_employee),
    };

    FleetReport {
        employees: reports,
        summary,
    }
}
