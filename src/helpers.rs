// src/helpers.rs
//! Shared formatting helpers reused by every template.
//!
//! All of these are total: malformed or missing input degrades to an empty
//! string, an empty list or `None`, never an error. A document generation
//! pipeline failing mid-render is a worse outcome than a silently skipped
//! section, so "degrade to omission" is the governing contract here.

use chrono::NaiveDate;
use serde_json::Value;

use crate::doctree::{ListNode, Node, TextNode, Width};
use crate::types::{Dated, LinkRef, SkillItem};

/// Short month-year display ("Jan 2023") for an ISO date, year-month, or
/// ISO datetime string. Empty string for anything unparsable.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let date_part = raw.split('T').next().unwrap_or(raw);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    // Year-month without a day component
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", date_part), "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    String::new()
}

/// Date range display with the three-way branch shared by every section:
/// empty without a start date, "start - Present" when the entry is marked
/// current (this wins over any end date), "start - end" when an end date
/// parses, bare "start" otherwise.
pub fn format_date_range(item: &impl Dated) -> String {
    let start = format_date(item.start_date());
    if start.is_empty() {
        return String::new();
    }
    if item.is_current() {
        return format!("{} - Present", start);
    }
    let end = format_date(item.end_date());
    if end.is_empty() {
        start
    } else {
        format!("{} - {}", start, end)
    }
}

/// Bulleted list from the raw bullet entries, keeping only non-empty
/// strings. `None` when nothing remains — an empty bullet list is never
/// rendered.
pub fn description_list(items: &[Value]) -> Option<Node> {
    let bullets: Vec<Node> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| TextNode::new(s).margin([0.0, 0.0, 0.0, 2.0]).node())
        .collect();

    if bullets.is_empty() {
        return None;
    }
    Some(Node::List(ListNode {
        ul: bullets,
        margin: Some([8.0, 2.0, 0.0, 4.0]),
    }))
}

/// Row of clickable link labels. Entries without a url are dropped, a
/// missing name falls back to "Link", and `None` is returned when nothing
/// is left to show.
pub fn links_line(links: &[LinkRef], color: &str) -> Option<Node> {
    let nodes: Vec<Node> = links
        .iter()
        .filter_map(|link| {
            let url = link.url.as_deref()?.trim();
            if url.is_empty() {
                return None;
            }
            let label = link
                .name
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or("Link");
            Some(
                TextNode::new(label)
                    .link(url)
                    .color(color)
                    .size(9.0)
                    .width(Width::Auto)
                    .node(),
            )
        })
        .collect();

    if nodes.is_empty() {
        return None;
    }
    Some(Node::columns(nodes, 8.0))
}

/// Normalize the dual-shape skills array into display strings. This is the
/// only place that matches on the `SkillItem` tag; blank and unknown
/// entries are dropped.
pub fn map_skill_items(items: &[SkillItem]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| match item {
            SkillItem::Plain(s) => Some(s.trim()),
            SkillItem::Leveled { value, .. } => value.as_deref().map(str::trim),
            SkillItem::Unknown(_) => None,
        })
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Upper-cased section title with a rule beneath it. An empty title falls
/// back to a generic label rather than rendering blank.
pub fn section_header(title: Option<&str>, accent: &str, rule_width: f32) -> Node {
    let label = title
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Section");

    Node::stack(vec![
        TextNode::new(label.to_uppercase())
            .style("sectionHeader")
            .color(accent)
            .margin([0.0, 10.0, 0.0, 0.0])
            .node(),
        Node::rule(rule_width, 1.0, accent),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctree::collect_text;
    use crate::types::WorkExperience;
    use serde_json::json;

    fn range(start: Option<&str>, end: Option<&str>, current: Option<bool>) -> WorkExperience {
        WorkExperience {
            start_date: start.map(String::from),
            end_date: end.map(String::from),
            is_current: current,
            ..WorkExperience::default()
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2023-01-15")), "Jan 2023");
        assert_eq!(format_date(Some("2023-06")), "Jun 2023");
        assert_eq!(format_date(Some("2020-01-15T00:00:00.000Z")), "Jan 2020");
        assert_eq!(format_date(Some("garbage")), "");
        assert_eq!(format_date(Some("")), "");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn test_date_range_current_wins_over_end_date() {
        let item = range(Some("2020-01-15"), Some("2021-01-01"), Some(true));
        assert_eq!(format_date_range(&item), "Jan 2020 - Present");
    }

    #[test]
    fn test_date_range_with_end_date() {
        let item = range(Some("2020-01-15"), Some("2021-06-01"), None);
        assert_eq!(format_date_range(&item), "Jan 2020 - Jun 2021");
    }

    #[test]
    fn test_date_range_start_only() {
        let item = range(Some("2020-01-15"), None, None);
        assert_eq!(format_date_range(&item), "Jan 2020");
    }

    #[test]
    fn test_date_range_empty_without_start() {
        let item = range(None, Some("2021-06-01"), Some(true));
        assert_eq!(format_date_range(&item), "");
    }

    #[test]
    fn test_description_list_filters_non_strings() {
        let items = vec![json!(""), json!(null), json!("Did X"), json!(42)];
        let node = description_list(&items).unwrap();
        let mut texts = Vec::new();
        node.collect_text(&mut texts);
        assert_eq!(texts, vec!["Did X"]);
    }

    #[test]
    fn test_description_list_empty_is_none() {
        assert!(description_list(&[]).is_none());
        assert!(description_list(&[json!(null), json!("")]).is_none());
    }

    #[test]
    fn test_links_line_defaults_label() {
        let links = vec![
            LinkRef {
                name: None,
                url: Some("https://example.com".into()),
            },
            LinkRef {
                name: Some("GitHub".into()),
                url: Some("https://github.com/x".into()),
            },
            LinkRef {
                name: Some("dead".into()),
                url: None,
            },
        ];
        let node = links_line(&links, "#333333").unwrap();
        let mut texts = Vec::new();
        node.collect_text(&mut texts);
        assert_eq!(texts, vec!["Link", "GitHub"]);
    }

    #[test]
    fn test_links_line_empty_is_none() {
        assert!(links_line(&[], "#333333").is_none());
        let no_urls = vec![LinkRef {
            name: Some("x".into()),
            url: Some("  ".into()),
        }];
        assert!(links_line(&no_urls, "#333333").is_none());
    }

    #[test]
    fn test_map_skill_items_dual_shape() {
        let items: Vec<SkillItem> = serde_json::from_value(json!([
            "React",
            {"value": "Node.js", "level": 8},
            null,
            "",
            {"level": 3}
        ]))
        .unwrap();
        assert_eq!(map_skill_items(&items), vec!["React", "Node.js"]);
    }

    #[test]
    fn test_section_header_fallback_label() {
        let header = section_header(Some("Experience"), "#111111", 200.0);
        let blank = section_header(Some("   "), "#111111", 200.0);
        assert_eq!(collect_text(&[header]), vec!["EXPERIENCE"]);
        assert_eq!(collect_text(&[blank]), vec!["SECTION"]);
    }
}
