// src/templates/visual_impact.rs
//! Sidebar template with skill proficiency bars. A category whose first
//! item carries a numeric level renders as two-segment bars (filled
//! fraction level/10, clamped); categories without levels fall back to
//! plain text listing.

use crate::doctree::{Node, PageBackground};
use crate::templates::sections::{self, SidebarTheme, SkillsMode};
use crate::templates::SECONDARY;
use crate::types::ResumeDocument;

pub const ACCENT: &str = "#be123c";
pub const SIDEBAR_FILL: &str = "#fbf1f3";

pub fn build(data: &ResumeDocument) -> Vec<Node> {
    sections::sidebar_layout(
        data,
        &SidebarTheme {
            accent: ACCENT,
            secondary: SECONDARY,
            name_color: ACCENT,
            avatar_width: Some(70.0),
            skills: SkillsMode::Bars,
        },
    )
}

pub fn background() -> PageBackground {
    PageBackground {
        color: SIDEBAR_FILL.to_string(),
        width: 208.0,
    }
}
