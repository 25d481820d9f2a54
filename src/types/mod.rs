//! Core Types
//!
//! Shared data and error types used across the scan pipeline.

pub mod error;
pub mod record;

pub use error::{FailureStage, Result, SummaryError};
pub use record::FileMatchRecord;
