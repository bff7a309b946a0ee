//! Document Expiry & Compliance Classification Engine
//!
//! This crate classifies the expiry state of mandatory employee documents
//! (residence permit, health certificate, employment contract), scores each
//! employee's document health on a 0-100 scale, and rolls a whole fleet of
//! employees up into dashboard-level compliance aggregates.

#![warn(missing_docs)]

pub mod api;
pub mod classification;
pub mod config;
pub mod error;
pub mod models;
