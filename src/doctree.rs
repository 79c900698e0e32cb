// src/doctree.rs
//! Engine-agnostic document tree handed to the external layout engine.
//!
//! Nodes serialize (camelCase) to the engine's wire contract: a `content`
//! array of styled blocks, columns and lists, a `styles` dictionary, page
//! margins as a 4-tuple and an optional declarative page background used
//! for sidebar shading. The tree is transient: built in one pass per
//! render and discarded once the bytes are produced.

use serde::Serialize;
use std::collections::BTreeMap;

// ===== Nodes =====

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Text(TextNode),
    Stack(StackNode),
    Columns(ColumnsNode),
    List(ListNode),
    Canvas(CanvasNode),
    Image(ImageNode),
}

/// Column or node width understood by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Width {
    Fixed(f32),
    Auto,
    Star,
}

impl Serialize for Width {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Width::Fixed(w) => serializer.serialize_f32(*w),
            Width::Auto => serializer.serialize_str("auto"),
            Width::Star => serializer.serialize_str("*"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<[f32; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackNode {
    pub stack: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<[f32; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnsNode {
    pub columns: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<[f32; 4]>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNode {
    pub ul: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<[f32; 4]>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasNode {
    pub canvas: Vec<Primitive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<[f32; 4]>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<[f32; 4]>,
}

/// Vector primitives for section rules and skill bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Primitive {
    #[serde(rename = "line", rename_all = "camelCase")]
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        line_width: f32,
        line_color: String,
    },
    #[serde(rename = "rect", rename_all = "camelCase")]
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
}

// ===== Construction helpers =====

impl Node {
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(TextNode {
            text: text.into(),
            ..TextNode::default()
        })
    }

    pub fn stack(children: Vec<Node>) -> Node {
        Node::Stack(StackNode {
            stack: children,
            ..StackNode::default()
        })
    }

    pub fn columns(children: Vec<Node>, gap: f32) -> Node {
        Node::Columns(ColumnsNode {
            columns: children,
            column_gap: Some(gap),
            margin: None,
        })
    }

    pub fn rule(width: f32, stroke: f32, color: &str) -> Node {
        Node::Canvas(CanvasNode {
            canvas: vec![Primitive::Line {
                x1: 0.0,
                y1: 0.0,
                x2: width,
                y2: 0.0,
                line_width: stroke,
                line_color: color.to_string(),
            }],
            margin: Some([0.0, 2.0, 0.0, 6.0]),
        })
    }
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> TextNode {
        TextNode {
            text: text.into(),
            ..TextNode::default()
        }
    }

    pub fn style(mut self, name: &str) -> TextNode {
        self.style = Some(name.to_string());
        self
    }

    pub fn size(mut self, size: f32) -> TextNode {
        self.font_size = Some(size);
        self
    }

    pub fn bold(mut self) -> TextNode {
        self.bold = Some(true);
        self
    }

    pub fn italics(mut self) -> TextNode {
        self.italics = Some(true);
        self
    }

    pub fn color(mut self, color: &str) -> TextNode {
        self.color = Some(color.to_string());
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> TextNode {
        self.alignment = Some(alignment);
        self
    }

    pub fn margin(mut self, margin: [f32; 4]) -> TextNode {
        self.margin = Some(margin);
        self
    }

    pub fn link(mut self, url: &str) -> TextNode {
        self.link = Some(url.to_string());
        self.decoration = Some("underline".to_string());
        self
    }

    pub fn width(mut self, width: Width) -> TextNode {
        self.width = Some(width);
        self
    }

    pub fn node(self) -> Node {
        Node::Text(self)
    }
}

// ===== Wire envelope =====

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<[f32; 4]>,
}

/// Declarative stand-in for the engine's page background callback: a solid
/// fill behind the sidebar column, repeated on every page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBackground {
    pub color: String,
    pub width: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocDefinition {
    pub content: Vec<Node>,
    pub styles: BTreeMap<String, StyleProps>,
    pub default_style: StyleProps,
    pub page_margins: [f32; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<PageBackground>,
}

// ===== Tree walks =====

impl Node {
    /// Visit every color-valued style attribute in the subtree, including
    /// canvas primitives. Used by the palette derivation transform.
    pub fn visit_colors(&mut self, f: &mut impl FnMut(&mut String)) {
        match self {
            Node::Text(t) => {
                if let Some(color) = t.color.as_mut() {
                    f(color);
                }
            }
            Node::Stack(s) => {
                for child in &mut s.stack {
                    child.visit_colors(f);
                }
            }
            Node::Columns(c) => {
                for child in &mut c.columns {
                    child.visit_colors(f);
                }
            }
            Node::List(l) => {
                for child in &mut l.ul {
                    child.visit_colors(f);
                }
            }
            Node::Canvas(c) => {
                for primitive in &mut c.canvas {
                    match primitive {
                        Primitive::Line { line_color, .. } => f(line_color),
                        Primitive::Rect { color, .. } => f(color),
                    }
                }
            }
            Node::Image(_) => {}
        }
    }

    /// Visit every canvas primitive in the subtree.
    pub fn visit_primitives(&mut self, f: &mut impl FnMut(&mut Primitive)) {
        match self {
            Node::Stack(s) => {
                for child in &mut s.stack {
                    child.visit_primitives(f);
                }
            }
            Node::Columns(c) => {
                for child in &mut c.columns {
                    child.visit_primitives(f);
                }
            }
            Node::List(l) => {
                for child in &mut l.ul {
                    child.visit_primitives(f);
                }
            }
            Node::Canvas(c) => {
                for primitive in &mut c.canvas {
                    f(primitive);
                }
            }
            Node::Text(_) | Node::Image(_) => {}
        }
    }

    /// Collect the text content of the subtree in document order.
    pub fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Node::Text(t) => out.push(t.text.clone()),
            Node::Stack(s) => {
                for child in &s.stack {
                    child.collect_text(out);
                }
            }
            Node::Columns(c) => {
                for child in &c.columns {
                    child.collect_text(out);
                }
            }
            Node::List(l) => {
                for child in &l.ul {
                    child.collect_text(out);
                }
            }
            Node::Canvas(_) | Node::Image(_) => {}
        }
    }
}

/// Text content of a whole tree in document order. Useful for asserting
/// that layout transforms leave content untouched.
pub fn collect_text(nodes: &[Node]) -> Vec<String> {
    let mut out = Vec::new();
    for node in nodes {
        node.collect_text(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_node_wire_shape() {
        let node = TextNode::new("Hello").size(10.0).color("#333333").node();
        let wire = serde_json::to_value(&node).unwrap();
        assert_eq!(
            wire,
            json!({"text": "Hello", "fontSize": 10.0, "color": "#333333"})
        );
    }

    #[test]
    fn test_width_serialization() {
        assert_eq!(serde_json::to_value(Width::Star).unwrap(), json!("*"));
        assert_eq!(serde_json::to_value(Width::Auto).unwrap(), json!("auto"));
        assert_eq!(serde_json::to_value(Width::Fixed(160.0)).unwrap(), json!(160.0));
    }

    #[test]
    fn test_visit_colors_reaches_nested_canvas() {
        let mut node = Node::stack(vec![
            TextNode::new("a").color("#111111").node(),
            Node::rule(100.0, 1.0, "#111111"),
        ]);

        let mut seen = 0;
        node.visit_colors(&mut |color| {
            seen += 1;
            *color = "#222222".to_string();
        });
        assert_eq!(seen, 2);

        let wire = serde_json::to_string(&node).unwrap();
        assert!(!wire.contains("#111111"));
    }

    #[test]
    fn test_collect_text_order() {
        let tree = vec![Node::columns(
            vec![
                Node::stack(vec![Node::text("left")]),
                Node::stack(vec![Node::text("right")]),
            ],
            10.0,
        )];
        assert_eq!(collect_text(&tree), vec!["left", "right"]);
    }
}
