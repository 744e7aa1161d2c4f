use serde::{Deserialize, Serialize};

use super::{Glow, NodeId, default_opacity, default_scale};

/// Styling applied to freshly drawn paths and to the live preview of
/// an in-progress draw.
pub const DRAW_STROKE: &str = "#FF00FF";
pub const DRAW_STROKE_WIDTH: f64 = 6.0;
pub const DRAW_GLOW: Glow = Glow { enabled: true, blur: 25.0, intensity: 0.7 };
pub const DRAW_TENSION: f64 = 0.3;

/// Freehand path element. `points` alternate x,y in scene space,
/// relative to the node's `(x, y)` origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathNode {
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
    pub points: Vec<f64>,
    #[serde(default)]
    pub tension: f64,
    #[serde(default)]
    pub closed: bool,
}

impl PathNode {
    /// A path committed from a drawing session, with the standard
    /// drawn-path styling. Points are already in scene space, so the
    /// node origin stays at (0, 0).
    pub(crate) fn drawn(id: NodeId, points: Vec<f64>) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            stroke: DRAW_STROKE.to_owned(),
            stroke_width: DRAW_STROKE_WIDTH,
            glow: DRAW_GLOW,
            fill: None,
            points,
            tension: DRAW_TENSION,
            closed: false,
        }
    }
}
