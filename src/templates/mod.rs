// src/templates/mod.rs
//! Template definition functions: pure mappings from a resume document to
//! a document tree. Content handling is shared through `sections`; a
//! template contributes only arrangement and palette. Derived templates
//! (minimalist, executive, monochrome-tech) are transforms over their base
//! template's output so field handling cannot drift between variants.

pub mod classic;
pub mod creative;
pub mod modern;
pub mod palette;
pub mod sections;
pub mod visual_impact;

use crate::doctree::Node;
use crate::types::ResumeDocument;
use palette::{emphasize_rules, with_palette};

/// Muted color shared by every template for meta text (dates, locations,
/// issuers).
pub const SECONDARY: &str = "#6b7280";

// Accents and sidebar fills of the palette-derived variants.
pub const MINIMALIST_ACCENT: &str = "#4a4a4a";
pub const EXECUTIVE_ACCENT: &str = "#1a2e45";
pub const EXECUTIVE_FILL: &str = "#e9edf2";
pub const MONOCHROME_ACCENT: &str = "#111111";
pub const MONOCHROME_SECONDARY: &str = "#555555";
pub const MONOCHROME_FILL: &str = "#efefef";

/// Classic recolored to understated gray headers.
pub fn minimalist(data: &ResumeDocument) -> Vec<Node> {
    with_palette(classic::build(data), &[(classic::ACCENT, MINIMALIST_ACCENT)])
}

/// Modern recolored to navy with an emphasized header rule.
pub fn executive(data: &ResumeDocument) -> Vec<Node> {
    let recolored = with_palette(modern::build(data), &[(modern::ACCENT, EXECUTIVE_ACCENT)]);
    emphasize_rules(recolored, 2.25)
}

/// Creative with the palette collapsed to blacks and grays.
pub fn monochrome_tech(data: &ResumeDocument) -> Vec<Node> {
    with_palette(
        creative::build(data),
        &[
            (creative::ACCENT, MONOCHROME_ACCENT),
            (SECONDARY, MONOCHROME_SECONDARY),
        ],
    )
}
