//! Property tests for the classification invariants.
//!
//! Exercises the classifier over generated inputs: totality, the
//! missing/None equivalence, severity monotonicity, health score bounds,
//! and the fleet partition.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use compliance_engine::classification::{
    ScoreTable, StatusThresholds, bucket_for, classify_fleet, classify_simplified, classify_strict,
    days_until, health_score,
};
use compliance_engine::models::{
    ComplianceBucket, Document, DocumentSet, DocumentStatus, DocumentType, Employee, SummaryStatus,
};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

fn status_strategy() -> impl Strategy<Value = DocumentStatus> {
    prop_oneof![
        Just(DocumentStatus::Expired),
        Just(DocumentStatus::Critical),
        Just(DocumentStatus::Warning),
        Just(DocumentStatus::Upcoming),
        Just(DocumentStatus::Valid),
        Just(DocumentStatus::Missing),
    ]
}

fn employee_strategy() -> impl Strategy<Value = Employee> {
    // Each slot is either absent or expires within +/- 2 years of the base.
    let slot = proptest::option::of(-730i64..=730);
    (slot.clone(), slot.clone(), slot).prop_map(|(iqama, health, contract)| {
        let to_doc = |offset: Option<i64>| Document {
            expiry_date: offset.map(|days| base_date() + Duration::days(days)),
            has_image: false,
        };
        let mut documents = DocumentSet::default();
        documents.set(DocumentType::Iqama, to_doc(iqama));
        documents.set(DocumentType::HealthCertificate, to_doc(health));
        documents.set(DocumentType::Contract, to_doc(contract));
        Employee {
            id: "emp_prop".to_string(),
            name: "Generated".to_string(),
            branch: "riyadh_main".to_string(),
            documents,
        }
    })
}

proptest! {
    #[test]
    fn classification_is_total(days in proptest::option::of(-10_000i64..=10_000)) {
        let thresholds = StatusThresholds::default();
        // Every input maps to exactly one defined label under both policies;
        // missing if and only if the day count is absent.
        let strict = classify_strict(days, &thresholds);
        let simplified = classify_simplified(days, &thresholds);
        prop_assert_eq!(strict == DocumentStatus::Missing, days.is_none());
        prop_assert_eq!(simplified == SummaryStatus::Missing, days.is_none());
    }

    #[test]
    fn severity_never_improves_as_days_decrease(a in -10_000i64..=10_000, b in -10_000i64..=10_000) {
        let thresholds = StatusThresholds::default();
        let (fewer, more) = if a <= b { (a, b) } else { (b, a) };
        let fewer_severity = classify_strict(Some(fewer), &thresholds).severity();
        let more_severity = classify_strict(Some(more), &thresholds).severity();
        prop_assert!(fewer_severity <= more_severity);
    }

    #[test]
    fn days_until_ignores_time_of_day(offset in -1_000i64..=1_000, hour in 0u32..24, minute in 0u32..60) {
        let expiry = base_date() + Duration::days(offset);
        let now: NaiveDateTime = base_date().and_hms_opt(hour, minute, 0).unwrap();
        prop_assert_eq!(days_until(expiry, now), offset);
    }

    #[test]
    fn health_score_stays_in_bounds(statuses in proptest::collection::vec(status_strategy(), 0..=3)) {
        let score = health_score(&statuses, &ScoreTable::default());
        prop_assert!(score <= 100);
    }

    #[test]
    fn bucket_matches_worst_status(statuses in proptest::collection::vec(status_strategy(), 1..=3)) {
        let bucket = bucket_for(&statuses);
        let worst = statuses.iter().map(|s| s.severity()).min().unwrap();
        let expected = match worst {
            0 => ComplianceBucket::Expired,
            1 | 2 => ComplianceBucket::Expiring,
            _ => ComplianceBucket::Compliant,
        };
        prop_assert_eq!(bucket, expected);
    }

    #[test]
    fn fleet_partition_sums_to_total(employees in proptest::collection::vec(employee_strategy(), 0..=12)) {
        let now = base_date().and_hms_opt(10, 30, 0).unwrap();
        let report = classify_fleet(
            &employees,
            now,
            &StatusThresholds::default(),
            &ScoreTable::default(),
            3,
        );

        let summary = report.summary;
        prop_assert_eq!(
            summary.employees_with_expired + summary.employees_expiring
                + summary.employees_compliant,
            summary.total_employees
        );
        prop_assert_eq!(summary.total_employees, employees.len());
        prop_assert!(summary.compliance_rate <= 100);
        prop_assert!(summary.valid_documents <= summary.document_slots);
        for employee in &report.employees {
            prop_assert!(employee.health_score <= 100);
        }
    }
}
