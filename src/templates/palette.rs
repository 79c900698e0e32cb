// src/templates/palette.rs
//! Tree transforms deriving template variants from a base template's
//! output. Both walks are generic over the tree shape, so derived variants
//! cannot diverge from their base in content or section ordering.

use crate::doctree::{Node, Primitive};

/// Rewrite every color-valued style attribute in the tree according to the
/// substitution map. Colors not named in the map pass through unchanged.
pub fn with_palette(mut nodes: Vec<Node>, map: &[(&str, &str)]) -> Vec<Node> {
    for node in &mut nodes {
        node.visit_colors(&mut |color| {
            if let Some((_, to)) = map.iter().find(|(from, _)| from.eq_ignore_ascii_case(color)) {
                *color = to.to_string();
            }
        });
    }
    nodes
}

/// Widen every rule stroke in the tree to at least the given width.
pub fn emphasize_rules(mut nodes: Vec<Node>, stroke: f32) -> Vec<Node> {
    for node in &mut nodes {
        node.visit_primitives(&mut |primitive| {
            if let Primitive::Line { line_width, .. } = primitive {
                *line_width = line_width.max(stroke);
            }
        });
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctree::{collect_text, TextNode};

    #[test]
    fn test_with_palette_rewrites_only_mapped_colors() {
        let nodes = vec![
            TextNode::new("a").color("#111111").node(),
            TextNode::new("b").color("#222222").node(),
        ];
        let recolored = with_palette(nodes, &[("#111111", "#999999")]);
        let wire = serde_json::to_string(&recolored).unwrap();
        assert!(wire.contains("#999999"));
        assert!(wire.contains("#222222"));
        assert!(!wire.contains("#111111"));
    }

    #[test]
    fn test_with_palette_preserves_content() {
        let nodes = vec![Node::stack(vec![
            TextNode::new("kept").color("#111111").node(),
            Node::rule(100.0, 1.0, "#111111"),
        ])];
        let before = collect_text(&nodes);
        let recolored = with_palette(nodes, &[("#111111", "#000000")]);
        assert_eq!(before, collect_text(&recolored));
    }

    #[test]
    fn test_emphasize_rules_widens_strokes() {
        let nodes = vec![Node::rule(100.0, 1.0, "#111111")];
        let mut emphasized = emphasize_rules(nodes, 2.5);
        let mut widths = Vec::new();
        for node in &mut emphasized {
            node.visit_primitives(&mut |p| {
                if let Primitive::Line { line_width, .. } = p {
                    widths.push(*line_width);
                }
            });
        }
        assert_eq!(widths, vec![2.5]);
    }
}
