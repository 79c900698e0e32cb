// src/renderer.rs
//! Template dispatch and assembly of the layout engine's input.
//!
//! The entry point takes a template id and a resume document, selects the
//! matching template function (unknown ids silently fall back to the
//! default) and wraps the produced tree with the global page, font and
//! style configuration. The returned handle serializes to the bytes the
//! external layout engine consumes; the renderer itself performs no data
//! validation beyond the root-object check in `ResumeDocument::from_value`.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::config::RenderConfig;
use crate::doctree::{DocDefinition, PageBackground, StyleProps};
use crate::templates::{self, classic, creative, modern, palette, visual_impact};
use crate::types::ResumeDocument;

// ===== Template identifiers =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    Classic,
    Modern,
    Minimalist,
    Creative,
    Executive,
    MonochromeTech,
    VisualImpact,
}

impl TemplateId {
    pub const ALL: [TemplateId; 7] = [
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Minimalist,
        TemplateId::Creative,
        TemplateId::Executive,
        TemplateId::MonochromeTech,
        TemplateId::VisualImpact,
    ];

    /// Resolve a template id, falling back to the default for anything
    /// unknown. A bad id is not an error: the export must still succeed.
    pub fn parse(raw: &str) -> TemplateId {
        match raw.trim().to_lowercase().as_str() {
            "classic" => TemplateId::Classic,
            "modern" => TemplateId::Modern,
            "minimalist" => TemplateId::Minimalist,
            "creative" => TemplateId::Creative,
            "executive" => TemplateId::Executive,
            "monochrome-tech" => TemplateId::MonochromeTech,
            "visual-impact" => TemplateId::VisualImpact,
            other => {
                debug!("Unknown template id '{}', falling back to classic", other);
                TemplateId::Classic
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Minimalist => "minimalist",
            TemplateId::Creative => "creative",
            TemplateId::Executive => "executive",
            TemplateId::MonochromeTech => "monochrome-tech",
            TemplateId::VisualImpact => "visual-impact",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateId::Classic => "Single-column baseline layout",
            TemplateId::Modern => "Teal sidebar layout",
            TemplateId::Minimalist => "Classic with understated gray headers",
            TemplateId::Creative => "Purple sidebar layout with prominent avatar",
            TemplateId::Executive => "Modern in navy with emphasized header rules",
            TemplateId::MonochromeTech => "Creative collapsed to blacks and grays",
            TemplateId::VisualImpact => "Sidebar layout with skill proficiency bars",
        }
    }

    /// Effective accent color of the template after derivation; the hook
    /// for the user-config accent override.
    fn accent(&self) -> &'static str {
        match self {
            TemplateId::Classic => classic::ACCENT,
            TemplateId::Modern => modern::ACCENT,
            TemplateId::Minimalist => templates::MINIMALIST_ACCENT,
            TemplateId::Creative => creative::ACCENT,
            TemplateId::Executive => templates::EXECUTIVE_ACCENT,
            TemplateId::MonochromeTech => templates::MONOCHROME_ACCENT,
            TemplateId::VisualImpact => visual_impact::ACCENT,
        }
    }

    fn secondary(&self) -> &'static str {
        match self {
            TemplateId::MonochromeTech => templates::MONOCHROME_SECONDARY,
            _ => templates::SECONDARY,
        }
    }

    fn background(&self) -> Option<PageBackground> {
        match self {
            TemplateId::Classic | TemplateId::Minimalist => None,
            TemplateId::Modern => Some(modern::background()),
            TemplateId::Creative => Some(creative::background()),
            TemplateId::VisualImpact => Some(visual_impact::background()),
            TemplateId::Executive => Some(PageBackground {
                color: templates::EXECUTIVE_FILL.to_string(),
                width: 208.0,
            }),
            TemplateId::MonochromeTech => Some(PageBackground {
                color: templates::MONOCHROME_FILL.to_string(),
                width: 208.0,
            }),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry for template listing surfaces.
#[derive(Debug, Clone)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub description: &'static str,
}

/// List every available template.
pub fn catalog() -> Vec<TemplateInfo> {
    TemplateId::ALL
        .iter()
        .map(|t| TemplateInfo {
            id: t.as_str(),
            description: t.description(),
        })
        .collect()
}

// ===== Renderer =====

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a typed resume with the selected template. Infallible: the
    /// helpers absorb every per-field anomaly before it can surface here.
    pub fn render(&self, template: TemplateId, data: &ResumeDocument) -> RenderedDocument {
        let mut content = match template {
            TemplateId::Classic => classic::build(data),
            TemplateId::Modern => modern::build(data),
            TemplateId::Minimalist => templates::minimalist(data),
            TemplateId::Creative => creative::build(data),
            TemplateId::Executive => templates::executive(data),
            TemplateId::MonochromeTech => templates::monochrome_tech(data),
            TemplateId::VisualImpact => visual_impact::build(data),
        };

        // User styling overrides are one more palette substitution.
        if let Some(accent) = &self.config.accent_color {
            content = palette::with_palette(content, &[(template.accent(), accent.as_str())]);
        }
        if let Some(secondary) = &self.config.secondary_color {
            content = palette::with_palette(content, &[(template.secondary(), secondary.as_str())]);
        }

        let definition = DocDefinition {
            content,
            styles: self.styles(),
            default_style: StyleProps {
                font: Some(self.config.font_family.clone()),
                font_size: Some(self.config.base_font_size),
                line_height: Some(1.15),
                ..StyleProps::default()
            },
            page_margins: self.config.page_margins,
            background: template.background(),
        };

        RenderedDocument {
            template,
            definition,
        }
    }

    /// Render untyped JSON as produced by the editor. Errors only when the
    /// root value is not an object.
    pub fn render_value(&self, template_id: &str, value: &Value) -> Result<RenderedDocument> {
        let data = ResumeDocument::from_value(value)?;
        Ok(self.render(TemplateId::parse(template_id), &data))
    }

    fn styles(&self) -> BTreeMap<String, StyleProps> {
        let mut styles = BTreeMap::new();
        styles.insert(
            "sectionHeader".to_string(),
            StyleProps {
                font_size: Some(11.0),
                bold: Some(true),
                ..StyleProps::default()
            },
        );
        styles
    }
}

/// Handle over a finished render: the document definition plus the bytes
/// the external layout engine takes as input.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    template: TemplateId,
    definition: DocDefinition,
}

impl RenderedDocument {
    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn definition(&self) -> &DocDefinition {
        &self.definition
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.definition)
            .context("Failed to serialize document definition")
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.to_json()?.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctree::collect_text;
    use serde_json::json;

    fn renderer() -> Renderer {
        Renderer::new(RenderConfig::default())
    }

    fn sample_resume() -> ResumeDocument {
        ResumeDocument::from_value(&json!({
            "contact": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "professionalTitle": "Software Engineer",
                "email": "ada@example.com",
                "address": {"city": "London", "country": "UK"},
                "socialLinks": [{"platform": "GitHub", "url": "https://github.com/ada"}]
            },
            "summary": "Engineer with a decade of experience.",
            "workExperience": [{
                "jobTitle": "Staff Engineer",
                "company": "Analytical Engines Ltd",
                "startDate": "2020-01-15",
                "isCurrent": true,
                "description": ["Shipped the difference engine", "Led a team of five"]
            }],
            "education": [{
                "institution": "University of London",
                "degree": "BSc",
                "fieldOfStudy": "Mathematics",
                "startDate": "2010-09-01",
                "endDate": "2013-06-30",
                "gpa": {"value": "3.9", "type": "GPA"}
            }],
            "projects": [{
                "name": "Notes on the Engine",
                "technologiesUsed": ["Rust"],
                "links": [{"name": "Source", "url": "https://example.com/src"}],
                "startDate": "2021-03-01"
            }],
            "skills": [
                {"category": "Languages", "items": ["Rust", "Python"]},
                {"category": "Tools", "items": [{"value": "Git", "level": 9}, {"value": "Docker", "level": 6}]}
            ],
            "certifications": [{
                "name": "Cloud Architect",
                "issuingOrganization": "Example Org",
                "issueDate": "2022-05-01",
                "credentialUrl": "https://example.com/cred"
            }],
            "achievements": [{"title": "Best Paper", "date": "2023-01-01"}],
            "customSections": [{
                "sectionTitle": "Volunteering",
                "items": [{"title": "Mentor", "startDate": "2019-01-01"}]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_every_template_renders_empty_document() {
        let empty = ResumeDocument::default();
        for template in TemplateId::ALL {
            let rendered = renderer().render(template, &empty);
            assert!(rendered.to_bytes().is_ok(), "template {}", template);
        }
    }

    #[test]
    fn test_empty_sections_emit_no_headers() {
        let empty = ResumeDocument::default();
        for template in TemplateId::ALL {
            let rendered = renderer().render(template, &empty);
            let texts = collect_text(&rendered.definition().content);
            for header in ["EXPERIENCE", "EDUCATION", "PROJECTS", "SKILLS", "SUMMARY"] {
                assert!(
                    !texts.iter().any(|t| t == header),
                    "template {} rendered header {} for empty data",
                    template,
                    header
                );
            }
        }
    }

    #[test]
    fn test_populated_sections_emit_headers() {
        let rendered = renderer().render(TemplateId::Classic, &sample_resume());
        let texts = collect_text(&rendered.definition().content);
        for header in [
            "SUMMARY",
            "EXPERIENCE",
            "EDUCATION",
            "PROJECTS",
            "SKILLS",
            "CERTIFICATIONS",
            "ACHIEVEMENTS",
            "VOLUNTEERING",
        ] {
            assert!(texts.iter().any(|t| t == header), "missing {}", header);
        }
        assert!(texts.iter().any(|t| t == "Jan 2020 - Present"));
    }

    #[test]
    fn test_unknown_template_falls_back_to_classic() {
        let data = sample_resume();
        let fallback = renderer().render_value("does-not-exist", &serde_json::to_value(&data).unwrap()).unwrap();
        assert_eq!(fallback.template(), TemplateId::Classic);
        let classic = renderer().render(TemplateId::Classic, &data);
        assert_eq!(fallback.definition(), classic.definition());
    }

    #[test]
    fn test_derived_templates_preserve_content_and_order() {
        let data = sample_resume();
        let pairs = [
            (TemplateId::Minimalist, TemplateId::Classic),
            (TemplateId::Executive, TemplateId::Modern),
            (TemplateId::MonochromeTech, TemplateId::Creative),
        ];
        for (derived, base) in pairs {
            let derived_texts = collect_text(&renderer().render(derived, &data).definition().content);
            let base_texts = collect_text(&renderer().render(base, &data).definition().content);
            assert_eq!(derived_texts, base_texts, "{} vs {}", derived, base);
        }
    }

    #[test]
    fn test_minimalist_differs_from_classic_only_in_style() {
        let data = sample_resume();
        let classic = renderer().render(TemplateId::Classic, &data);
        let minimalist = renderer().render(TemplateId::Minimalist, &data);
        assert_ne!(classic.definition(), minimalist.definition());
        let wire = minimalist.to_json().unwrap();
        assert!(!wire.contains(classic::ACCENT));
    }

    #[test]
    fn test_render_is_deterministic() {
        let data = sample_resume();
        for template in TemplateId::ALL {
            let first = renderer().render(template, &data);
            let second = renderer().render(template, &data);
            assert_eq!(first.definition(), second.definition());
        }
    }

    #[test]
    fn test_render_value_rejects_non_object_root() {
        assert!(renderer().render_value("classic", &json!("nope")).is_err());
        assert!(renderer().render_value("classic", &json!(null)).is_err());
    }

    #[test]
    fn test_visual_impact_bars_follow_first_item_heuristic() {
        let data = sample_resume();
        let wire = renderer().render(TemplateId::VisualImpact, &data).to_json().unwrap();
        // The leveled "Tools" category renders bars; plain "Languages" stays text.
        assert!(wire.contains("\"rect\""));
        assert!(wire.contains("Rust, Python"));

        let plain_only = ResumeDocument::from_value(&json!({
            "skills": [{"category": "Languages", "items": ["Rust", "Python"]}]
        }))
        .unwrap();
        let wire = renderer().render(TemplateId::VisualImpact, &plain_only).to_json().unwrap();
        assert!(!wire.contains("\"rect\""));
    }

    #[test]
    fn test_skill_bar_level_is_clamped() {
        let data = ResumeDocument::from_value(&json!({
            "skills": [{"category": "Tools", "items": [{"value": "Git", "level": 25}]}]
        }))
        .unwrap();
        let wire = renderer().render(TemplateId::VisualImpact, &data).to_json().unwrap();
        // A level above 10 fills exactly the full track width, never more.
        assert!(wire.contains("\"w\": 130.0"));
        assert!(!wire.contains("325"));
    }

    #[test]
    fn test_accent_override_recolors_template() {
        let config = RenderConfig::default().with_accent_color("#ff0000");
        let rendered = Renderer::new(config).render(TemplateId::Classic, &sample_resume());
        let wire = rendered.to_json().unwrap();
        assert!(wire.contains("#ff0000"));
        assert!(!wire.contains(classic::ACCENT));
    }

    #[test]
    fn test_template_catalog_lists_all_ids() {
        let ids: Vec<&str> = catalog().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![
                "classic",
                "modern",
                "minimalist",
                "creative",
                "executive",
                "monochrome-tech",
                "visual-impact"
            ]
        );
    }
}
