//! Use case orchestration for aiact.
//!
//! This crate provides the application layer: use cases that coordinate the catalog, evaluator,
//! settings, and render layers. It is intentionally thin and delegates heavy lifting to the
//! appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod answers;
mod config;
mod evaluate;
mod explain;
mod questions;
mod render;

pub use answers::{build_answer_set, parse_answer_flag, parse_answers_file};
pub use config::load_config;
pub use evaluate::{EvaluateInput, EvaluateOutput, run_evaluate};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use questions::{format_modules, questionnaire, render_questions};
pub use render::{export_obligations, render_determination, serialize_report, to_renderable};
