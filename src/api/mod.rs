//! HTTP API module for the compliance engine.
//!
//! This module provides the REST API endpoint for classifying a fleet of
//! employees' documents into the dashboard report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ClassificationRequest;
pub use response::ApiError;
pub use state::AppState;
