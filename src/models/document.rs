//! Document model and status label types.
//!
//! This module defines the closed set of tracked document types, the two
//! status label sets produced by the classifier policies, and the
//! per-document record supplied by the HR data source.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The closed set of mandatory documents tracked per employee.
///
/// Every employee carries exactly one slot per document type; an absent
/// submission is a [`Document`] with no expiry date, not a missing slot.
///
/// # Example
///
/// ```
/// use compliance_engine::models::DocumentType;
///
/// assert_eq!(DocumentType::ALL.len(), 3);
/// assert_eq!(DocumentType::Iqama.as_str(), "iqama");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Residence permit (iqama).
    Iqama,
    /// Occupational health certificate.
    HealthCertificate,
    /// Employment contract.
    Contract,
}

impl DocumentType {
    /// All document types in canonical reporting order.
    pub const ALL: [DocumentType; 3] = [
        DocumentType::Iqama,
        DocumentType::HealthCertificate,
        DocumentType::Contract,
    ];

    /// Returns the snake_case identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Iqama => "iqama",
            DocumentType::HealthCertificate => "health_certificate",
            DocumentType::Contract => "contract",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detailed expiry status of a single document (the strict policy's labels).
///
/// Statuses are mutually exclusive and totally ordered by severity:
/// `Expired < Critical < Warning < Upcoming < Valid`. `Missing` is treated
/// as worst-case (expired-equivalent) wherever statuses are aggregated.
///
/// # Example
///
/// ```
/// use compliance_engine::models::DocumentStatus;
///
/// assert!(DocumentStatus::Expired.severity() < DocumentStatus::Valid.severity());
/// assert_eq!(DocumentStatus::Missing.severity(), DocumentStatus::Expired.severity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// The document has expired (zero or fewer days remaining).
    Expired,
    /// Expiry is imminent (within the critical window, 7 days by default).
    Critical,
    /// Expiry is near (within the warning window, 30 days by default).
    Warning,
    /// Expiry is approaching (within the upcoming window, 60 days by default).
    Upcoming,
    /// The document is in good standing.
    Valid,
    /// No expiry date is on file (absent or unparseable).
    Missing,
}

impl DocumentStatus {
    /// Returns the severity rank of this status, lower is worse.
    ///
    /// `Missing` shares the worst rank with `Expired`: a document that was
    /// never submitted is no more usable than one that has lapsed.
    pub fn severity(&self) -> u8 {
        match self {
            DocumentStatus::Expired | DocumentStatus::Missing => 0,
            DocumentStatus::Critical => 1,
            DocumentStatus::Warning => 2,
            DocumentStatus::Upcoming => 3,
            DocumentStatus::Valid => 4,
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DocumentStatus::Expired => "expired",
            DocumentStatus::Critical => "critical",
            DocumentStatus::Warning => "warning",
            DocumentStatus::Upcoming => "upcoming",
            DocumentStatus::Valid => "valid",
            DocumentStatus::Missing => "missing",
        };
        write!(f, "{}", label)
    }
}

/// Coarse expiry status used by summary displays (the simplified policy).
///
/// Unlike [`DocumentStatus`], `Expired` here means strictly negative days
/// remaining; a document expiring today is still `Expiring`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    /// The document expired before today.
    Expired,
    /// Expiry is today or within the expiring window (30 days by default).
    Expiring,
    /// The document is in good standing.
    Valid,
    /// No expiry date is on file (absent or unparseable).
    Missing,
}

impl std::fmt::Display for SummaryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SummaryStatus::Expired => "expired",
            SummaryStatus::Expiring => "expiring",
            SummaryStatus::Valid => "valid",
            SummaryStatus::Missing => "missing",
        };
        write!(f, "{}", label)
    }
}

/// A single tracked document as supplied by the HR data source.
///
/// # Example
///
/// ```
/// use compliance_engine::models::Document;
/// use chrono::NaiveDate;
///
/// let doc = Document {
///     expiry_date: Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()),
///     has_image: true,
/// };
/// assert!(doc.expiry_date.is_some());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The expiry date, if one is on file. `None` classifies as missing.
    pub expiry_date: Option<NaiveDate>,
    /// Whether a scanned copy is on file. Informational only, never part of
    /// status logic.
    #[serde(default)]
    pub has_image: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_canonical_order() {
        assert_eq!(
            DocumentType::ALL,
            [
                DocumentType::Iqama,
                DocumentType::HealthCertificate,
                DocumentType::Contract,
            ]
        );
    }

    #[test]
    fn test_document_type_serialization() {
        assert_eq!(
            serde_json::to_string(&DocumentType::Iqama).unwrap(),
            "\"iqama\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentType::HealthCertificate).unwrap(),
            "\"health_certificate\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentType::Contract).unwrap(),
            "\"contract\""
        );
    }

    #[test]
    fn test_document_type_display_matches_wire_format() {
        for doc_type in DocumentType::ALL {
            assert_eq!(doc_type.to_string(), doc_type.as_str());
        }
    }

    #[test]
    fn test_status_severity_is_totally_ordered() {
        assert!(DocumentStatus::Expired.severity() < DocumentStatus::Critical.severity());
        assert!(DocumentStatus::Critical.severity() < DocumentStatus::Warning.severity());
        assert!(DocumentStatus::Warning.severity() < DocumentStatus::Upcoming.severity());
        assert!(DocumentStatus::Upcoming.severity() < DocumentStatus::Valid.severity());
    }

    #[test]
    fn test_missing_shares_worst_severity_with_expired() {
        assert_eq!(
            DocumentStatus::Missing.severity(),
            DocumentStatus::Expired.severity()
        );
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&DocumentStatus::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&SummaryStatus::Expiring).unwrap(),
            "\"expiring\""
        );
    }

    #[test]
    fn test_document_deserialization_defaults_has_image() {
        let json = r#"{"expiry_date": "2026-09-01"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.expiry_date, NaiveDate::from_ymd_opt(2026, 9, 1));
        assert!(!doc.has_image);
    }

    #[test]
    fn test_document_default_is_missing() {
        let doc = Document::default();
        assert!(doc.expiry_date.is_none());
        assert!(!doc.has_image);
    }
}
