// src/templates/classic.rs
//! Single-column baseline template. Centered identity header, then every
//! section at full width in the conventional order. This is also the
//! fallback for unknown template ids.

use crate::doctree::{Alignment, Node, TextNode};
use crate::templates::sections::{self, FULL_RULE};
use crate::templates::SECONDARY;
use crate::types::ResumeDocument;

pub const ACCENT: &str = "#2b6cb0";

pub fn build(data: &ResumeDocument) -> Vec<Node> {
    let mut content = Vec::new();

    let name = data.contact.full_name();
    if !name.is_empty() {
        content.push(
            TextNode::new(name)
                .size(22.0)
                .bold()
                .color(ACCENT)
                .alignment(Alignment::Center)
                .node(),
        );
    }
    if let Some(title) = data.contact.professional_title.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        content.push(
            TextNode::new(title)
                .size(11.0)
                .color(SECONDARY)
                .alignment(Alignment::Center)
                .margin([0.0, 2.0, 0.0, 0.0])
                .node(),
        );
    }
    content.extend(sections::contact_line(&data.contact, SECONDARY));

    content.extend(sections::summary_section(data, ACCENT, FULL_RULE));
    content.extend(sections::experience_section(data, ACCENT, SECONDARY, FULL_RULE));
    content.extend(sections::education_section(data, ACCENT, SECONDARY, FULL_RULE));
    content.extend(sections::projects_section(data, ACCENT, SECONDARY, FULL_RULE));
    content.extend(sections::skills_section(
        data,
        ACCENT,
        SECONDARY,
        FULL_RULE,
        sections::SkillsMode::Plain,
    ));
    content.extend(sections::certifications_section(data, ACCENT, SECONDARY, FULL_RULE));
    content.extend(sections::achievements_section(data, ACCENT, SECONDARY, FULL_RULE));
    content.extend(sections::custom_sections(data, ACCENT, SECONDARY, FULL_RULE));

    content
}
