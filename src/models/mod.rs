//! Core data models for the compliance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod document;
mod employee;
mod report;

pub use document::{Document, DocumentStatus, DocumentType, SummaryStatus};
pub use employee::{DocumentSet, Employee};
pub use report::{ComplianceBucket, DocumentReport, EmployeeReport, FleetReport, FleetSummary};
