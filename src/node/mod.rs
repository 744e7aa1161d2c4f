use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod path;
mod text;

pub use path::{DRAW_GLOW, DRAW_STROKE, DRAW_STROKE_WIDTH, DRAW_TENSION, PathNode};
pub use text::{TextInit, TextNode};

/// Opaque identifier of a node within a scene. Assigned once at
/// creation and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Generate a fresh unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trailing slice of the id for compact display labels: the last
    /// `n` bytes, extended backwards when the cut would land inside a
    /// multi-byte character. Ids from storage can hold any string.
    pub fn tail(&self, n: usize) -> &str {
        let mut start = self.0.len().saturating_sub(n);
        while !self.0.is_char_boundary(start) {
            start -= 1;
        }
        &self.0[start..]
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Per-node glow parameters. Consumed by rendering only; always read
/// and written as one value, never field by field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glow {
    pub enabled: bool,
    pub blur: f64,
    pub intensity: f64,
}

/// One visual element of a scene.
///
/// Serialized with a `"type"` discriminator (`"text"` / `"path"`), the
/// same shape scenes are persisted in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Text(TextNode),
    Path(PathNode),
}

impl Node {
    pub fn id(&self) -> &NodeId {
        match self {
            Node::Text(t) => &t.id,
            Node::Path(p) => &p.id,
        }
    }

    /// Position in scene space.
    pub fn position(&self) -> (f64, f64) {
        match self {
            Node::Text(t) => (t.x, t.y),
            Node::Path(p) => (p.x, p.y),
        }
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f64 {
        match self {
            Node::Text(t) => t.rotation,
            Node::Path(p) => p.rotation,
        }
    }

    pub fn scale(&self) -> (f64, f64) {
        match self {
            Node::Text(t) => (t.scale_x, t.scale_y),
            Node::Path(p) => (p.scale_x, p.scale_y),
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            Node::Text(t) => t.opacity,
            Node::Path(p) => p.opacity,
        }
    }

    pub fn stroke(&self) -> &str {
        match self {
            Node::Text(t) => &t.stroke,
            Node::Path(p) => &p.stroke,
        }
    }

    pub fn stroke_width(&self) -> f64 {
        match self {
            Node::Text(t) => t.stroke_width,
            Node::Path(p) => p.stroke_width,
        }
    }

    pub fn glow(&self) -> Glow {
        match self {
            Node::Text(t) => t.glow,
            Node::Path(p) => p.glow,
        }
    }

    pub fn fill(&self) -> Option<&str> {
        match self {
            Node::Text(t) => t.fill.as_deref(),
            Node::Path(p) => p.fill.as_deref(),
        }
    }

    /// Display label used by the layer list.
    pub fn title(&self) -> String {
        match self {
            Node::Text(t) => {
                let mut chars = t.text.chars();
                let short: String = chars.by_ref().take(10).collect();
                if short.is_empty() {
                    "Text".to_owned()
                } else if chars.next().is_some() {
                    format!("{short}...")
                } else {
                    short
                }
            }
            Node::Path(p) => format!("Path #{}", p.id.tail(4)),
        }
    }

    /// Apply one update message. Returns false when the patch targets
    /// fields of the other node kind, in which case nothing changes.
    /// A patch can never change the node's kind.
    pub fn apply(&mut self, patch: NodePatch) -> bool {
        match patch {
            NodePatch::Position { x, y } => match self {
                Node::Text(t) => {
                    t.x = x;
                    t.y = y;
                }
                Node::Path(p) => {
                    p.x = x;
                    p.y = y;
                }
            },
            NodePatch::Rotation(degrees) => match self {
                Node::Text(t) => t.rotation = degrees,
                Node::Path(p) => p.rotation = degrees,
            },
            NodePatch::Scale { x, y } => match self {
                Node::Text(t) => {
                    t.scale_x = x;
                    t.scale_y = y;
                }
                Node::Path(p) => {
                    p.scale_x = x;
                    p.scale_y = y;
                }
            },
            NodePatch::Opacity(value) => match self {
                Node::Text(t) => t.opacity = value,
                Node::Path(p) => p.opacity = value,
            },
            NodePatch::Stroke(color) => match self {
                Node::Text(t) => t.stroke = color,
                Node::Path(p) => p.stroke = color,
            },
            NodePatch::StrokeWidth(width) => match self {
                Node::Text(t) => t.stroke_width = width,
                Node::Path(p) => p.stroke_width = width,
            },
            NodePatch::Fill(fill) => match self {
                Node::Text(t) => t.fill = fill,
                Node::Path(p) => p.fill = fill,
            },
            NodePatch::Glow(glow) => match self {
                Node::Text(t) => t.glow = glow,
                Node::Path(p) => p.glow = glow,
            },
            NodePatch::Text(value) => {
                let Node::Text(t) = self else { return false };
                t.text = value;
            }
            NodePatch::FontSize(size) => {
                let Node::Text(t) = self else { return false };
                t.font_size = size;
            }
            NodePatch::FontFamily(family) => {
                let Node::Text(t) = self else { return false };
                t.font_family = Some(family);
            }
            NodePatch::Points(points) => {
                let Node::Path(p) = self else { return false };
                p.points = points;
            }
            NodePatch::Tension(value) => {
                let Node::Path(p) = self else { return false };
                p.tension = value;
            }
            NodePatch::Closed(value) => {
                let Node::Path(p) = self else { return false };
                p.closed = value;
            }
        }
        true
    }
}

/// Update message for a single node, one variant per logical field
/// group. `Glow` replaces the whole glow value so a nested merge can
/// never half-overwrite it; `Text`..`FontFamily` apply to text nodes
/// only, `Points`..`Closed` to path nodes only.
#[derive(Debug, Clone, PartialEq)]
pub enum NodePatch {
    Position { x: f64, y: f64 },
    Rotation(f64),
    Scale { x: f64, y: f64 },
    Opacity(f64),
    Stroke(String),
    StrokeWidth(f64),
    Fill(Option<String>),
    Glow(Glow),
    Text(String),
    FontSize(f64),
    FontFamily(String),
    Points(Vec<f64>),
    Tension(f64),
    Closed(bool),
}

pub(crate) fn default_scale() -> f64 {
    1.0
}

pub(crate) fn default_opacity() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_node(text: &str) -> Node {
        Node::Text(TextNode {
            id: NodeId::from("t1"),
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            stroke: "#00F0FF".to_owned(),
            stroke_width: 8.0,
            glow: Glow { enabled: true, blur: 30.0, intensity: 0.8 },
            fill: None,
            text: text.to_owned(),
            font_size: 80.0,
            font_family: None,
        })
    }

    #[test]
    fn title_keeps_short_text() {
        assert_eq!(text_node("NEON").title(), "NEON");
        assert_eq!(text_node("0123456789").title(), "0123456789");
        assert_eq!(text_node("").title(), "Text");
    }

    #[test]
    fn title_truncates_long_text_with_an_ellipsis() {
        assert_eq!(text_node("OPEN ALL NIGHT").title(), "OPEN ALL N...");
    }

    #[test]
    fn tail_never_splits_a_character() {
        assert_eq!(NodeId::from("abcdef").tail(4), "cdef");
        // The 4-byte cut of "héllo" lands inside the two-byte é.
        assert_eq!(NodeId::from("héllo").tail(4), "éllo");
        assert_eq!(NodeId::from("ab").tail(4), "ab");
    }
}
