// src/templates/creative.rs
//! Purple sidebar template with a prominent avatar. Same content partition
//! as the other sidebar layouts, bolder palette.

use crate::doctree::{Node, PageBackground};
use crate::templates::sections::{self, SidebarTheme, SkillsMode};
use crate::templates::SECONDARY;
use crate::types::ResumeDocument;

pub const ACCENT: &str = "#7c3aed";
pub const SIDEBAR_FILL: &str = "#f1ecfb";

pub fn build(data: &ResumeDocument) -> Vec<Node> {
    sections::sidebar_layout(
        data,
        &SidebarTheme {
            accent: ACCENT,
            secondary: SECONDARY,
            name_color: ACCENT,
            avatar_width: Some(80.0),
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
