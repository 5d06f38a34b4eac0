//! Assistive services for preparing South African (CIPC) trademark filings.

pub mod classification;
pub mod config;
pub mod conflict;
pub mod documents;
pub mod error;
pub mod intake;
pub mod telemetry;
pub mod triage;
