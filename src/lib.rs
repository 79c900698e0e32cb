//! Resume rendering subsystem: a JSON resume model, seven named visual
//! templates mapping it to an engine-agnostic document tree, and the
//! dispatch glue that hands the tree plus page/font configuration to an
//! external layout engine.
//!
//! Rendering is a stateless single-pass transform. Missing or malformed
//! fields degrade to omission; only a root value that is not a JSON object
//! is an error. Unknown template ids fall back to the default template.

use anyhow::Result;
use serde_json::Value;

pub mod cli;
pub mod config;
pub mod doctree;
pub mod helpers;
pub mod renderer;
pub mod templates;
pub mod types;

pub use config::RenderConfig;
pub use renderer::{catalog, RenderedDocument, Renderer, TemplateId, TemplateInfo};
pub use types::ResumeDocument;

/// Convenience render with the default configuration.
pub fn render_resume(template_id: &str, data: &Value) -> Result<RenderedDocument> {
    Renderer::new(RenderConfig::default()).render_value(template_id, data)
}
