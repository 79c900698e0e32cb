// src/templates/sections.rs
//! Section builders shared by every template. A builder returns an empty
//! vec when its section has nothing to show, so a template never emits a
//! header without a body. Templates only decide arrangement and palette.

use crate::doctree::{Alignment, CanvasNode, ColumnsNode, ImageNode, Node, Primitive, StackNode, TextNode, Width};
use crate::helpers::{description_list, format_date, format_date_range, links_line, map_skill_items, section_header};
use crate::types::{Contact, LinkRef, ResumeDocument, SkillCategory, SkillItem};

/// Usable width between the page margins.
pub const FULL_RULE: f32 = 515.0;
/// Header rule width inside the sidebar column.
pub const SIDEBAR_RULE: f32 = 150.0;
/// Header rule width in the main column of a sidebar layout.
pub const MAIN_RULE: f32 = 320.0;

const BAR_WIDTH: f32 = 130.0;
const BAR_TRACK: &str = "#e5e7eb";

/// How a template renders skill items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillsMode {
    Plain,
    /// Proficiency bars when a category carries numeric levels, falling
    /// back to plain text otherwise (visual-impact family).
    Bars,
}

/// Palette and arrangement knobs for the shared sidebar layout.
pub struct SidebarTheme {
    pub accent: &'static str,
    pub secondary: &'static str,
    pub name_color: &'static str,
    pub avatar_width: Option<f32>,
    pub skills: SkillsMode,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn joined(parts: &[Option<&str>], separator: &str) -> String {
    parts
        .iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Entry heading: bold title on the left, date range on the right.
fn entry_heading(title: &str, range: &str, secondary: &str) -> Node {
    let mut columns = vec![TextNode::new(title).bold().size(10.5).width(Width::Star).node()];
    if !range.is_empty() {
        columns.push(
            TextNode::new(range)
                .size(9.0)
                .color(secondary)
                .alignment(Alignment::Right)
                .width(Width::Auto)
                .node(),
        );
    }
    Node::Columns(ColumnsNode {
        columns,
        column_gap: Some(8.0),
        margin: Some([0.0, 4.0, 0.0, 0.0]),
    })
}

// ===== Identity and contact =====

pub fn identity_block(contact: &Contact, name_color: &str, secondary: &str, avatar_width: Option<f32>) -> Vec<Node> {
    let mut nodes = Vec::new();

    if let (Some(width), Some(url)) = (avatar_width, non_empty(&contact.avatar.url)) {
        nodes.push(Node::Image(ImageNode {
            image: url.to_string(),
            width: Some(width),
            margin: Some([0.0, 0.0, 0.0, 6.0]),
        }));
    }

    let name = contact.full_name();
    if !name.is_empty() {
        nodes.push(TextNode::new(name).size(20.0).bold().color(name_color).node());
    }
    if let Some(title) = non_empty(&contact.professional_title) {
        nodes.push(
            TextNode::new(title)
                .size(10.5)
                .color(secondary)
                .margin([0.0, 2.0, 0.0, 0.0])
                .node(),
        );
    }
    nodes
}

/// Sidebar contact block: one small line per contact method plus social
/// links.
pub fn contact_block(contact: &Contact, accent: &str, secondary: &str) -> Vec<Node> {
    let mut lines = Vec::new();
    for value in [
        non_empty(&contact.email),
        non_empty(&contact.phone),
        non_empty(&contact.website),
    ]
    .into_iter()
    .flatten()
    {
        lines.push(TextNode::new(value).size(8.5).margin([0.0, 1.0, 0.0, 1.0]).node());
    }
    let address = contact.address.display();
    if !address.is_empty() {
        lines.push(TextNode::new(address).size(8.5).margin([0.0, 1.0, 0.0, 1.0]).node());
    }
    for link in &contact.social_links {
        if let Some(url) = non_empty(&link.url) {
            let label = non_empty(&link.platform).unwrap_or("Link");
            lines.push(
                TextNode::new(label)
                    .link(url)
                    .color(secondary)
                    .size(8.5)
                    .margin([0.0, 1.0, 0.0, 1.0])
                    .node(),
            );
        }
    }

    if lines.is_empty() {
        return Vec::new();
    }
    let mut nodes = vec![section_header(Some("Contact"), accent, SIDEBAR_RULE)];
    nodes.extend(lines);
    nodes
}

/// Single-line contact strip for single-column layouts.
pub fn contact_line(contact: &Contact, secondary: &str) -> Vec<Node> {
    let address = contact.address.display();
    let line = joined(
        &[
            non_empty(&contact.email),
            non_empty(&contact.phone),
            non_empty(&contact.website),
            if address.is_empty() { None } else { Some(address.as_str()) },
        ],
        "  |  ",
    );

    let mut nodes = Vec::new();
    if !line.is_empty() {
        nodes.push(
            TextNode::new(line)
                .size(9.0)
                .color(secondary)
                .alignment(Alignment::Center)
                .margin([0.0, 4.0, 0.0, 0.0])
                .node(),
        );
    }
    let socials: Vec<LinkRef> = contact
        .social_links
        .iter()
        .map(|s| LinkRef {
            name: s.platform.clone(),
            url: s.url.clone(),
        })
        .collect();
    if let Some(links) = links_line(&socials, secondary) {
        nodes.push(links);
    }
    nodes
}

// ===== Narrative sections =====

pub fn summary_section(data: &ResumeDocument, accent: &str, rule_width: f32) -> Vec<Node> {
    let Some(text) = non_empty(&data.summary) else {
        return Vec::new();
    };
    vec![
        section_header(Some("Summary"), accent, rule_width),
        TextNode::new(text).size(9.5).margin([0.0, 0.0, 0.0, 4.0]).node(),
    ]
}

pub fn experience_section(data: &ResumeDocument, accent: &str, secondary: &str, rule_width: f32) -> Vec<Node> {
    if data.work_experience.is_empty() {
        return Vec::new();
    }

    let mut nodes = vec![section_header(Some("Experience"), accent, rule_width)];
    for exp in &data.work_experience {
        let mut entry = Vec::new();
        let title = joined(&[non_empty(&exp.job_title)], "");
        if !title.is_empty() || !format_date_range(exp).is_empty() {
            entry.push(entry_heading(&title, &format_date_range(exp), secondary));
        }
        let company = joined(&[non_empty(&exp.company), non_empty(&exp.location)], ", ");
        if !company.is_empty() {
            entry.push(TextNode::new(company).size(9.5).italics().color(secondary).node());
        }
        if let Some(bullets) = description_list(&exp.description) {
            entry.push(bullets);
        }
        if !entry.is_empty() {
            nodes.push(Node::Stack(StackNode {
                stack: entry,
                margin: Some([0.0, 0.0, 0.0, 6.0]),
                width: None,
            }));
        }
    }
    nodes
}

pub fn education_section(data: &ResumeDocument, accent: &str, secondary: &str, rule_width: f32) -> Vec<Node> {
    if data.education.is_empty() {
        return Vec::new();
    }

    let mut nodes = vec![section_header(Some("Education"), accent, rule_width)];
    for edu in &data.education {
        let mut entry = Vec::new();
        let institution = joined(&[non_empty(&edu.institution)], "");
        if !institution.is_empty() || !format_date_range(edu).is_empty() {
            entry.push(entry_heading(&institution, &format_date_range(edu), secondary));
        }
        let degree = joined(&[non_empty(&edu.degree), non_empty(&edu.field_of_study)], ", ");
        if !degree.is_empty() {
            entry.push(TextNode::new(degree).size(9.5).node());
        }
        if let Some(gpa) = &edu.gpa {
            let line = gpa.display();
            if !line.is_empty() {
                entry.push(TextNode::new(line).size(8.5).color(secondary).node());
            }
        }
        if let Some(description) = non_empty(&edu.description) {
            entry.push(TextNode::new(description).size(9.0).margin([0.0, 2.0, 0.0, 0.0]).node());
        }
        if !entry.is_empty() {
            nodes.push(Node::Stack(StackNode {
                stack: entry,
                margin: Some([0.0, 0.0, 0.0, 6.0]),
                width: None,
            }));
        }
    }
    nodes
}

pub fn projects_section(data: &ResumeDocument, accent: &str, secondary: &str, rule_width: f32) -> Vec<Node> {
    if data.projects.is_empty() {
        return Vec::new();
    }

    let mut nodes = vec![section_header(Some("Projects"), accent, rule_width)];
    for project in &data.projects {
        let mut entry = Vec::new();
        let name = joined(&[non_empty(&project.name)], "");
        if !name.is_empty() || !format_date_range(project).is_empty() {
            entry.push(entry_heading(&name, &format_date_range(project), secondary));
        }
        let technologies = project
            .technologies_used
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if !technologies.is_empty() {
            entry.push(
                TextNode::new(format!("Technologies: {}", technologies))
                    .size(8.5)
                    .italics()
                    .color(secondary)
                    .node(),
            );
        }
        if let Some(description) = non_empty(&project.description) {
            entry.push(TextNode::new(description).size(9.5).margin([0.0, 2.0, 0.0, 0.0]).node());
        }
        if let Some(links) = links_line(&project.links, accent) {
            entry.push(links);
        }
        if !entry.is_empty() {
            nodes.push(Node::Stack(StackNode {
                stack: entry,
                margin: Some([0.0, 0.0, 0.0, 6.0]),
                width: None,
            }));
        }
    }
    nodes
}

pub fn certifications_section(data: &ResumeDocument, accent: &str, secondary: &str, rule_width: f32) -> Vec<Node> {
    if data.certifications.is_empty() {
        return Vec::new();
    }

    let mut nodes = vec![section_header(Some("Certifications"), accent, rule_width)];
    for cert in &data.certifications {
        let mut entry = Vec::new();
        if let Some(name) = non_empty(&cert.name) {
            entry.push(TextNode::new(name).bold().size(10.0).margin([0.0, 4.0, 0.0, 0.0]).node());
        }
        if let Some(org) = non_empty(&cert.issuing_organization) {
            entry.push(TextNode::new(org).size(9.0).italics().color(secondary).node());
        }
        let issued = format_date(cert.issue_date.as_deref());
        let expires = format_date(cert.expiration_date.as_deref());
        let dates = match (issued.is_empty(), expires.is_empty()) {
            (false, false) => format!("Issued {}  ·  Expires {}", issued, expires),
            (false, true) => format!("Issued {}", issued),
            (true, false) => format!("Expires {}", expires),
            (true, true) => String::new(),
        };
        if !dates.is_empty() {
            entry.push(TextNode::new(dates).size(8.5).color(secondary).node());
        }
        if let Some(id) = non_empty(&cert.credential_id) {
            entry.push(TextNode::new(format!("Credential ID: {}", id)).size(8.5).color(secondary).node());
        }
        if let Some(url) = non_empty(&cert.credential_url) {
            entry.push(TextNode::new("View credential").link(url).color(accent).size(8.5).node());
        }
        if !entry.is_empty() {
            nodes.push(Node::Stack(StackNode {
                stack: entry,
                margin: Some([0.0, 0.0, 0.0, 4.0]),
                width: None,
            }));
        }
    }
    nodes
}

pub fn achievements_section(data: &ResumeDocument, accent: &str, secondary: &str, rule_width: f32) -> Vec<Node> {
    if data.achievements.is_empty() {
        return Vec::new();
    }

    let mut nodes = vec![section_header(Some("Achievements"), accent, rule_width)];
    for achievement in &data.achievements {
        let mut entry = Vec::new();
        let title = joined(&[non_empty(&achievement.title)], "");
        let date = format_date(achievement.date.as_deref());
        if !title.is_empty() || !date.is_empty() {
            entry.push(entry_heading(&title, &date, secondary));
        }
        if let Some(issuer) = non_empty(&achievement.issuer) {
            entry.push(TextNode::new(issuer).size(9.0).italics().color(secondary).node());
        }
        if let Some(description) = non_empty(&achievement.description) {
            entry.push(TextNode::new(description).size(9.0).margin([0.0, 2.0, 0.0, 0.0]).node());
        }
        if let Some(url) = non_empty(&achievement.url) {
            entry.push(TextNode::new("Link").link(url).color(accent).size(8.5).node());
        }
        if !entry.is_empty() {
            nodes.push(Node::Stack(StackNode {
                stack: entry,
                margin: Some([0.0, 0.0, 0.0, 5.0]),
                width: None,
            }));
        }
    }
    nodes
}

pub fn custom_sections(data: &ResumeDocument, accent: &str, secondary: &str, rule_width: f32) -> Vec<Node> {
    let mut nodes = Vec::new();
    for section in &data.custom_sections {
        if section.items.is_empty() {
            continue;
        }
        nodes.push(section_header(section.section_title.as_deref(), accent, rule_width));
        for item in &section.items {
            let mut entry = Vec::new();
            let title = joined(&[non_empty(&item.title)], "");
            if !title.is_empty() || !format_date_range(item).is_empty() {
                entry.push(entry_heading(&title, &format_date_range(item), secondary));
            }
            if let Some(sub) = non_empty(&item.sub_title) {
                entry.push(TextNode::new(sub).size(9.0).italics().color(secondary).node());
            }
            if let Some(description) = non_empty(&item.description) {
                entry.push(TextNode::new(description).size(9.0).margin([0.0, 2.0, 0.0, 0.0]).node());
            }
            if let Some(links) = links_line(&item.links, accent) {
                entry.push(links);
            }
            if !entry.is_empty() {
                nodes.push(Node::Stack(StackNode {
                    stack: entry,
                    margin: Some([0.0, 0.0, 0.0, 5.0]),
                    width: None,
                }));
            }
        }
    }
    nodes
}

// ===== Skills =====

pub fn skills_section(data: &ResumeDocument, accent: &str, secondary: &str, rule_width: f32, mode: SkillsMode) -> Vec<Node> {
    if data.skills.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    for category in &data.skills {
        let block = match mode {
            SkillsMode::Bars if bar_mode(category) => skill_bars(category, accent, secondary),
            _ => skill_lines(category, secondary),
        };
        blocks.extend(block);
    }

    if blocks.is_empty() {
        return Vec::new();
    }
    let mut nodes = vec![section_header(Some("Skills"), accent, rule_width)];
    nodes.extend(blocks);
    nodes
}

// Bars are chosen per category by inspecting only the first item. The
// form layer never mixes shapes within one category, so a per-item check
// would only change visual output for data nothing produces.
fn bar_mode(category: &SkillCategory) -> bool {
    category.items.first().and_then(SkillItem::level).is_some()
}

fn skill_lines(category: &SkillCategory, secondary: &str) -> Vec<Node> {
    let items = map_skill_items(&category.items);
    let name = category.category.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let mut nodes = Vec::new();
    if items.is_empty() && name.is_none() {
        return nodes;
    }
    if let Some(name) = name {
        nodes.push(TextNode::new(name).bold().size(9.0).margin([0.0, 3.0, 0.0, 1.0]).node());
    }
    if !items.is_empty() {
        nodes.push(
            TextNode::new(items.join(", "))
                .size(8.5)
                .color(secondary)
                .margin([0.0, 0.0, 0.0, 2.0])
                .node(),
        );
    }
    nodes
}

fn skill_bars(category: &SkillCategory, accent: &str, secondary: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    if let Some(name) = category.category.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        nodes.push(TextNode::new(name).bold().size(9.0).margin([0.0, 3.0, 0.0, 1.0]).node());
    }

    for item in &category.items {
        let (label, level) = match item {
            SkillItem::Leveled { value: Some(v), level } if !v.trim().is_empty() => {
                (v.trim(), level.unwrap_or(0.0))
            }
            SkillItem::Plain(s) if !s.trim().is_empty() => {
                nodes.push(TextNode::new(s.trim()).size(8.5).color(secondary).node());
                continue;
            }
            _ => continue,
        };
        let filled = (level.clamp(0.0, 10.0) / 10.0) as f32 * BAR_WIDTH;
        nodes.push(TextNode::new(label).size(8.5).margin([0.0, 1.0, 0.0, 1.0]).node());
        nodes.push(Node::Canvas(CanvasNode {
            canvas: vec![
                Primitive::Rect {
                    x: 0.0,
                    y: 0.0,
                    w: BAR_WIDTH,
                    h: 4.0,
                    color: BAR_TRACK.to_string(),
                },
                Primitive::Rect {
                    x: 0.0,
                    y: 0.0,
                    w: filled,
                    h: 4.0,
                    color: accent.to_string(),
                },
            ],
            margin: Some([0.0, 0.0, 0.0, 3.0]),
        }));
    }
    nodes
}

// ===== Sidebar layout =====

/// Two-column arrangement shared by the sidebar templates: identity,
/// contact methods, skills and education stay in the narrow column where
/// they scan quickly; narrative content takes the wide column.
pub fn sidebar_layout(data: &ResumeDocument, theme: &SidebarTheme) -> Vec<Node> {
    let mut sidebar = identity_block(&data.contact, theme.name_color, theme.secondary, theme.avatar_width);
    sidebar.extend(contact_block(&data.contact, theme.accent, theme.secondary));
    sidebar.extend(skills_section(data, theme.accent, theme.secondary, SIDEBAR_RULE, theme.skills));
    sidebar.extend(education_section(data, theme.accent, theme.secondary, SIDEBAR_RULE));

    let mut main = summary_section(data, theme.accent, MAIN_RULE);
    main.extend(experience_section(data, theme.accent, theme.secondary, MAIN_RULE));
    main.extend(projects_section(data, theme.accent, theme.secondary, MAIN_RULE));
    main.extend(certifications_section(data, theme.accent, theme.secondary, MAIN_RULE));
    main.extend(achievements_section(data, theme.accent, theme.secondary, MAIN_RULE));
    main.extend(custom_sections(data, theme.accent, theme.secondary, MAIN_RULE));

    vec![Node::Columns(ColumnsNode {
        columns: vec![
            Node::Stack(StackNode {
                stack: sidebar,
                margin: None,
                width: Some(Width::Fixed(160.0)),
            }),
            Node::Stack(StackNode {
                stack: main,
                margin: None,
                width: Some(Width::Star),
            }),
        ],
        column_gap: Some(18.0),
        margin: None,
    })]
}
