//! Request types for the compliance engine API.
//!
//! This module defines the JSON request structures for the `/classify`
//! endpoint. Expiry dates arrive as raw strings and are parsed leniently on
//! conversion to domain types: an unparseable date becomes an absent one,
//! which downstream classifies as missing, so no date value can fail a
//! request.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::classification::{StatusThresholds, parse_expiry_date};
use crate::models::{Document, DocumentSet, Employee};

/// Request body for the `/classify` endpoint.
///
/// Contains the employee fleet to classify and an optional reference
/// instant; when `as_of` is omitted the server uses the current UTC time.
/// Callers may override the configured threshold table per request (e.g.
/// supervisor views with tighter windows); overrides are validated before
/// use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    /// The employees to classify.
    pub employees: Vec<EmployeeRequest>,
    /// The reference instant for all day counts. Defaults to now.
    #[serde(default)]
    pub as_of: Option<NaiveDateTime>,
    /// Optional per-request override of the classifier threshold table.
    #[serde(default)]
    pub thresholds: Option<StatusThresholds>,
}

/// Employee information in a classification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The branch the employee is affiliated with.
    pub branch: String,
    /// The employee's document slots. Omitted slots read as missing.
    #[serde(default)]
    pub documents: DocumentSetRequest,
}

/// Document slots in a classification request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSetRequest {
    /// Residence permit slot.
    #[serde(default)]
    pub iqama: DocumentRequest,
    /// Health certificate slot.
    #[serde(default)]
    pub health_certificate: DocumentRequest,
    /// Employment contract slot.
    #[serde(default)]
    pub contract: DocumentRequest,
}

/// A single document slot in a classification request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentRequest {
    /// The expiry date as a raw string. Parsed leniently; anything
    /// unparseable reads as no date on file.
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// Whether a scanned copy is on file.
    #[serde(default)]
    pub has_image: bool,
}

impl From<DocumentRequest> for Document {
    fn from(req: DocumentRequest) -> Self {
        Document {
            expiry_date: req.expiry_date.as_deref().and_then(parse_expiry_date),
            has_image: req.has_image,
        }
    }
}

impl From<DocumentSetRequest> for DocumentSet {
    fn from(req: DocumentSetRequest) -> Self {
        DocumentSet {
            iqama: req.iqama.into(),
            health_certificate: req.health_certificate.into(),
            contract: req.contract.into(),
        }
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            branch: req.branch,
            documents: req.documents.into(),
        }
    }
}
