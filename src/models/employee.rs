//! Employee model and the fixed per-employee document record.
//!
//! This module defines the [`Employee`] projection supplied by the HR store
//! and the [`DocumentSet`] holding exactly one document slot per tracked
//! document type.

use serde::{Deserialize, Serialize};

use super::document::{Document, DocumentType};

/// The fixed three-slot document record carried by every employee.
///
/// One slot per [`DocumentType`]; a document that was never submitted is a
/// default [`Document`] (no expiry date, no image), which classifies as
/// missing. Keying the slots by the closed enum makes the "three slots per
/// employee" assumption in the compliance-rate formula a property of the
/// type rather than a convention.
///
/// # Example
///
/// ```
/// use compliance_engine::models::{Document, DocumentSet, DocumentType};
/// use chrono::NaiveDate;
///
/// let mut documents = DocumentSet::default();
/// documents.set(
///     DocumentType::Iqama,
///     Document {
///         expiry_date: Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()),
///         has_image: true,
///     },
/// );
/// assert!(documents.get(DocumentType::Iqama).has_image);
/// assert!(documents.get(DocumentType::Contract).expiry_date.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    /// Residence permit slot.
    #[serde(default)]
    pub iqama: Document,
    /// Health certificate slot.
    #[serde(default)]
    pub health_certificate: Document,
    /// Employment contract slot.
    #[serde(default)]
    pub contract: Document,
}

impl DocumentSet {
    /// Returns the document in the given slot.
    pub fn get(&self, document_type: DocumentType) -> &Document {
        match document_type {
            DocumentType::Iqama => &self.iqama,
            DocumentType::HealthCertificate => &self.health_certificate,
            DocumentType::Contract => &self.contract,
        }
    }

    /// Replaces the document in the given slot.
    pub fn set(&mut self, document_type: DocumentType, document: Document) {
        match document_type {
            DocumentType::Iqama => self.iqama = document,
            DocumentType::HealthCertificate => self.health_certificate = document,
            DocumentType::Contract => self.contract = document,
        }
    }

    /// Iterates the slots in canonical reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (DocumentType, &Document)> {
        DocumentType::ALL
            .iter()
            .map(move |&document_type| (document_type, self.get(document_type)))
    }
}

/// An employee as projected from the external HR store.
///
/// The engine treats this as a read-only input; documents have no lifecycle
/// of their own and are only created or updated alongside the employee
/// profile they belong to.
///
/// # Example
///
/// ```
/// use compliance_engine::models::{DocumentSet, Employee};
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Huda Al-Qahtani".to_string(),
///     branch: "riyadh_main".to_string(),
///     documents: DocumentSet::default(),
/// };
/// assert_eq!(employee.documents.iter().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The branch the employee is affiliated with.
    pub branch: String,
    /// The employee's tracked documents.
    #[serde(default)]
    pub documents: DocumentSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_document_set_get_and_set_round_trip() {
        let mut set = DocumentSet::default();
        let doc = Document {
            expiry_date: Some(date(2026, 9, 1)),
            has_image: true,
        };
        set.set(DocumentType::HealthCertificate, doc);
        assert_eq!(*set.get(DocumentType::HealthCertificate), doc);
        assert_eq!(*set.get(DocumentType::Iqama), Document::default());
    }

    #[test]
    fn test_document_set_iterates_in_canonical_order() {
        let set = DocumentSet::default();
        let order: Vec<DocumentType> = set.iter().map(|(t, _)| t).collect();
        assert_eq!(order, DocumentType::ALL.to_vec());
    }

    #[test]
    fn test_document_set_always_has_three_slots() {
        assert_eq!(DocumentSet::default().iter().count(), 3);
    }

    #[test]
    fn test_deserialize_employee_with_partial_documents() {
        let json = r#"{
            "id": "emp_002",
            "name": "Noura Al-Harbi",
            "branch": "jeddah_corniche",
            "documents": {
                "iqama": { "expiry_date": "2026-11-20", "has_image": true }
            }
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_002");
        assert_eq!(
            employee.documents.iqama.expiry_date,
            Some(date(2026, 11, 20))
        );
        assert!(employee.documents.iqama.has_image);
        // Unsubmitted slots still exist and read as missing
        assert!(employee.documents.health_certificate.expiry_date.is_none());
        assert!(employee.documents.contract.expiry_date.is_none());
    }

    #[test]
    fn test_deserialize_employee_without_documents() {
        let json = r#"{
            "id": "emp_003",
            "name": "Salem Al-Dossary",
            "branch": "dammam_west"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.documents, DocumentSet::default());
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let mut documents = DocumentSet::default();
        documents.set(
            DocumentType::Contract,
            Document {
                expiry_date: Some(date(2027, 1, 31)),
                has_image: false,
            },
        );
        let employee = Employee {
            id: "emp_004".to_string(),
            name: "Reem Al-Shehri".to_string(),
            branch: "riyadh_main".to_string(),
            documents,
        };

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
