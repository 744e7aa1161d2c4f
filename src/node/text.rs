use serde::{Deserialize, Serialize};

use super::{Glow, NodeId, default_opacity, default_scale};

/// Styled text element. `(x, y)` is the top-left anchor in scene
/// space; `font_family` falls back to a system default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub glow: Glow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    pub text: String,
    pub font_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

/// Construction parameters for new text nodes. `Default` carries the
/// standard neon look; override individual fields with struct-update
/// syntax. There is no id field, the store always assigns a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct TextInit {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub opacity: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub glow: Glow,
    pub fill: Option<String>,
    pub font_size: f64,
    pub font_family: Option<String>,
}

impl Default for TextInit {
    fn default() -> Self {
        Self {
            text: "NEON".to_owned(),
            x: 300.0,
            y: 200.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            stroke: "#00F0FF".to_owned(),
            stroke_width: 8.0,
            glow: Glow { enabled: true, blur: 30.0, intensity: 0.8 },
            fill: Some("#001014".to_owned()),
            font_size: 80.0,
            font_family: Some("Arial".to_owned()),
        }
    }
}

impl TextInit {
    pub(crate) fn into_node(self, id: NodeId) -> TextNode {
        TextNode {
            id,
            x: self.x,
            y: self.y,
            rotation: self.rotation,
            scale_x: self.scale_x,
            scale_y: self.scale_y,
            opacity: self.opacity,
            stroke: self.stroke,
            stroke_width: self.stroke_width,
            glow: self.glow,
            fill: self.fill,
            text: self.text,
            font_size: self.font_size,
            font_family: self.font_family,
        }
    }
}
