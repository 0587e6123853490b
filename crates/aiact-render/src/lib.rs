//! Rendering utilities for determinations and questionnaires (Markdown, plain text).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod questions;
mod text;

pub use markdown::render_markdown;
pub use model::{
    RenderableBanner, RenderableCriterion, RenderableDetermination, RenderableQuestionnaire,
    RenderableSeverity,
};
pub use questions::render_questionnaire;
pub use text::{render_obligations_export, render_text};
