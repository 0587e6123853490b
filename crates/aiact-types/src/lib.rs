//! Stable DTOs and IDs used across the aiact workspace.
//!
//! This crate is intentionally boring:
//! - module ids, outcome labels, and schema ids
//! - the answer set handed to the evaluator and the determination it returns
//! - the error kinds surfaced to callers
//! - explain registry for outcome and module guidance

#![forbid(unsafe_code)]

pub mod answers;
pub mod determination;
pub mod error;
pub mod explain;
pub mod ids;
pub mod report;

pub use answers::{AnswerSet, AnswerValue};
pub use determination::{Determination, ModuleId, Outcome, Severity};
pub use error::AssessmentError;
pub use explain::{Explanation, banner_for, lookup_explanation};
pub use report::{AiactReportV1, Banner, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta};
