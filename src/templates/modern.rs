// src/templates/modern.rs
//! Teal sidebar template: identity and scannable meta on the left,
//! narrative content in the wide column.

use crate::doctree::{Node, PageBackground};
use crate::templates::sections::{self, SidebarTheme, SkillsMode};
use crate::templates::SECONDARY;
use crate::types::ResumeDocument;

pub const ACCENT: &str = "#0f766e";
pub const SIDEBAR_FILL: &str = "#eef4f4";

pub fn build(data: &ResumeDocument) -> Vec<Node> {
    sections::sidebar_layout(
        data,
        &SidebarTheme {
            accent: ACCENT,
            secondary: SECONDARY,
            name_color: ACCENT,
            avatar_width: Some(60.0),
            skills: SkillsMode::Plain,
        },
    )
}

pub fn background() -> PageBackground {
    PageBackground {
        color: SIDEBAR_FILL.to_string(),
        width: 208.0,
    }
}
